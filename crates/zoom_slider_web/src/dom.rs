//! `web-sys` backed [`WidgetDocument`] adapter.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, HtmlInputElement};
use zoom_slider::{ClickHandler, CommitHandler, ElementKind, SliderError, WidgetDocument};

#[derive(Debug, Clone)]
/// Browser document adapter.
///
/// Registered event listeners are leaked for the page lifetime; the widget has no teardown.
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    /// Wraps an existing document.
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Resolves the document of the current browser window.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::Host`] outside a browser context.
    pub fn from_window() -> Result<Self, SliderError> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(SliderError::Host(
                "browser document is only available when compiled for wasm32".to_string(),
            ))
        }

        #[cfg(target_arch = "wasm32")]
        {
            let window =
                web_sys::window().ok_or_else(|| SliderError::Host("window unavailable".into()))?;
            let document = window
                .document()
                .ok_or_else(|| SliderError::Host("document unavailable".into()))?;
            Ok(Self::new(document))
        }
    }
}

fn input_value(element: &Element) -> String {
    element
        .dyn_ref::<HtmlInputElement>()
        .map(HtmlInputElement::value)
        .unwrap_or_default()
}

fn listen(
    element: &Element,
    event: &str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
) -> Result<(), String> {
    element
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err: JsValue| format!("failed to register `{event}` listener: {err:?}"))?;
    closure.forget();
    Ok(())
}

impl WidgetDocument for WebDocument {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn create_element(&self, kind: ElementKind) -> Result<Element, String> {
        self.document
            .create_element(kind.tag())
            .map_err(|err| format!("failed to create `{}` element: {err:?}", kind.tag()))
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<(), String> {
        element
            .set_attribute(name, value)
            .map_err(|err| format!("failed to set `{name}`: {err:?}"))
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), String> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|err| format!("failed to append control: {err:?}"))
    }

    fn value(&self, element: &Element) -> String {
        input_value(element)
    }

    fn set_value(&self, element: &Element, value: &str) {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn on_click(&self, element: &Element, mut handler: ClickHandler) -> Result<(), String> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| handler()));
        listen(element, "click", closure)
    }

    fn on_commit(&self, element: &Element, mut handler: CommitHandler) -> Result<(), String> {
        // `change` fires once the user releases the thumb; `input` would fire on every move.
        let input = element.clone();
        let closure = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
            handler(input_value(&input));
        }));
        listen(element, "change", closure)
    }
}

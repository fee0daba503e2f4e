//! Host document contract and an in-memory document adapter.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

/// Handler invoked when a control is clicked.
pub type ClickHandler = Box<dyn FnMut()>;

/// Handler invoked when a control commits a new value, carrying that value as text.
pub type CommitHandler = Box<dyn FnMut(String)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Element kinds the widget creates.
pub enum ElementKind {
    /// Generic block element used for the zoom buttons.
    Div,
    /// Form input used for the range control.
    Input,
}

impl ElementKind {
    /// Returns the tag name used when creating the element.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Input => "input",
        }
    }
}

/// Document operations the widget needs from its host UI environment.
pub trait WidgetDocument {
    /// Host element handle.
    type Element: Clone;

    /// Looks up an element attached to the document by id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Creates a detached element.
    fn create_element(&self, kind: ElementKind) -> Result<Self::Element, String>;

    /// Assigns an attribute.
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str)
        -> Result<(), String>;

    /// Appends `child` as the last child of `parent`.
    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<(), String>;

    /// Reads the live value of an input element.
    fn value(&self, element: &Self::Element) -> String;

    /// Writes the live value of an input element.
    fn set_value(&self, element: &Self::Element, value: &str);

    /// Registers a click handler.
    fn on_click(&self, element: &Self::Element, handler: ClickHandler) -> Result<(), String>;

    /// Registers a value-commit handler (fired when the user finishes adjusting the value).
    fn on_commit(&self, element: &Self::Element, handler: CommitHandler) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Handle to a node owned by a [`MemoryDocument`].
pub struct MemoryElement(usize);

#[derive(Default)]
struct MemoryNode {
    tag: &'static str,
    attributes: BTreeMap<String, String>,
    children: Vec<MemoryElement>,
    value: String,
    value_writes: usize,
    click_handlers: Vec<ClickHandler>,
    commit_handlers: Vec<CommitHandler>,
}

#[derive(Default)]
struct MemoryTree {
    nodes: Vec<MemoryNode>,
    roots: Vec<MemoryElement>,
}

impl MemoryTree {
    fn node(&self, element: MemoryElement) -> Result<&MemoryNode, String> {
        self.nodes
            .get(element.0)
            .ok_or_else(|| format!("unknown element {}", element.0))
    }

    fn node_mut(&mut self, element: MemoryElement) -> Result<&mut MemoryNode, String> {
        self.nodes
            .get_mut(element.0)
            .ok_or_else(|| format!("unknown element {}", element.0))
    }

    fn find_attached(&self, id: &str) -> Option<MemoryElement> {
        let mut stack: Vec<MemoryElement> = self.roots.iter().rev().copied().collect();
        while let Some(element) = stack.pop() {
            let node = self.nodes.get(element.0)?;
            if node.attributes.get("id").map(String::as_str) == Some(id) {
                return Some(element);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }
}

#[derive(Clone, Default)]
/// In-memory document for tests and headless hosts.
///
/// Only elements reachable from a root are visible to [`WidgetDocument::element_by_id`].
pub struct MemoryDocument {
    tree: Rc<RefCell<MemoryTree>>,
}

impl std::fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tree = self.tree.borrow();
        f.debug_struct("MemoryDocument")
            .field("nodes", &tree.nodes.len())
            .field("roots", &tree.roots)
            .finish()
    }
}

impl MemoryDocument {
    /// Creates a document holding a single attached `div` with the given id.
    pub fn with_container(id: &str) -> Self {
        let document = Self::default();
        document.insert_root(ElementKind::Div, id);
        document
    }

    /// Attaches a new root element with the given id and returns its handle.
    pub fn insert_root(&self, kind: ElementKind, id: &str) -> MemoryElement {
        let mut tree = self.tree.borrow_mut();
        let element = MemoryElement(tree.nodes.len());
        let mut node = MemoryNode {
            tag: kind.tag(),
            ..MemoryNode::default()
        };
        node.attributes.insert("id".to_string(), id.to_string());
        tree.nodes.push(node);
        tree.roots.push(element);
        element
    }

    /// Returns the tag name of an element.
    pub fn tag(&self, element: MemoryElement) -> Option<&'static str> {
        self.tree.borrow().node(element).ok().map(|node| node.tag)
    }

    /// Returns an attribute value.
    pub fn attribute(&self, element: MemoryElement, name: &str) -> Option<String> {
        self.tree
            .borrow()
            .node(element)
            .ok()
            .and_then(|node| node.attributes.get(name).cloned())
    }

    /// Returns the children of an element in insertion order.
    pub fn children(&self, element: MemoryElement) -> Vec<MemoryElement> {
        self.tree
            .borrow()
            .node(element)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    /// Returns the ids of an element's children in insertion order.
    pub fn child_ids(&self, element: MemoryElement) -> Vec<String> {
        self.children(element)
            .into_iter()
            .filter_map(|child| self.attribute(child, "id"))
            .collect()
    }

    /// Number of writes through [`WidgetDocument::set_value`] on an element.
    pub fn value_writes(&self, element: MemoryElement) -> usize {
        self.tree
            .borrow()
            .node(element)
            .map(|node| node.value_writes)
            .unwrap_or_default()
    }

    /// Dispatches a click on the attached element with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error when no attached element has that id.
    pub fn click(&self, id: &str) -> Result<(), String> {
        let element = self
            .element_by_id(id)
            .ok_or_else(|| format!("no element with id `{id}`"))?;
        let mut handlers = {
            let mut tree = self.tree.borrow_mut();
            std::mem::take(&mut tree.node_mut(element)?.click_handlers)
        };
        for handler in handlers.iter_mut() {
            handler();
        }
        let mut tree = self.tree.borrow_mut();
        let slot = &mut tree.node_mut(element)?.click_handlers;
        handlers.append(slot);
        *slot = handlers;
        Ok(())
    }

    /// Sets the value of the attached element with `id` as a user would, then dispatches
    /// its commit handlers with that value.
    ///
    /// # Errors
    ///
    /// Returns an error when no attached element has that id.
    pub fn commit(&self, id: &str, value: &str) -> Result<(), String> {
        let element = self
            .element_by_id(id)
            .ok_or_else(|| format!("no element with id `{id}`"))?;
        let mut handlers = {
            let mut tree = self.tree.borrow_mut();
            let node = tree.node_mut(element)?;
            node.value = value.to_string();
            std::mem::take(&mut node.commit_handlers)
        };
        for handler in handlers.iter_mut() {
            handler(value.to_string());
        }
        let mut tree = self.tree.borrow_mut();
        let slot = &mut tree.node_mut(element)?.commit_handlers;
        handlers.append(slot);
        *slot = handlers;
        Ok(())
    }
}

impl WidgetDocument for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.tree.borrow().find_attached(id)
    }

    fn create_element(&self, kind: ElementKind) -> Result<MemoryElement, String> {
        let mut tree = self.tree.borrow_mut();
        let element = MemoryElement(tree.nodes.len());
        tree.nodes.push(MemoryNode {
            tag: kind.tag(),
            ..MemoryNode::default()
        });
        Ok(element)
    }

    fn set_attribute(
        &self,
        element: &MemoryElement,
        name: &str,
        value: &str,
    ) -> Result<(), String> {
        self.tree
            .borrow_mut()
            .node_mut(*element)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn append_child(&self, parent: &MemoryElement, child: &MemoryElement) -> Result<(), String> {
        let mut tree = self.tree.borrow_mut();
        tree.node(*child)?;
        tree.node_mut(*parent)?.children.push(*child);
        Ok(())
    }

    fn value(&self, element: &MemoryElement) -> String {
        self.tree
            .borrow()
            .node(*element)
            .map(|node| node.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&self, element: &MemoryElement, value: &str) {
        if let Ok(node) = self.tree.borrow_mut().node_mut(*element) {
            node.value = value.to_string();
            node.value_writes += 1;
        }
    }

    fn on_click(&self, element: &MemoryElement, handler: ClickHandler) -> Result<(), String> {
        self.tree
            .borrow_mut()
            .node_mut(*element)?
            .click_handlers
            .push(handler);
        Ok(())
    }

    fn on_commit(&self, element: &MemoryElement, handler: CommitHandler) -> Result<(), String> {
        self.tree
            .borrow_mut()
            .node_mut(*element)?
            .commit_handlers
            .push(handler);
        Ok(())
    }
}

//! Map zoom contract and an in-memory map adapter.

use std::{cell::RefCell, rc::Rc};

/// Listener invoked after the map's zoom changes. Carries no payload; listeners re-read
/// [`ZoomMap::zoom`].
pub type ZoomChangedListener = Box<dyn FnMut()>;

/// Zoom surface of an externally-owned map.
pub trait ZoomMap {
    /// Returns the current zoom level.
    fn zoom(&self) -> i32;

    /// Requests a new zoom level. The map may clamp it.
    fn set_zoom(&self, zoom: i32);

    /// Registers a listener for zoom changes from any cause.
    fn subscribe_zoom_changed(&self, listener: ZoomChangedListener) -> Result<(), String>;
}

#[derive(Default)]
struct MemoryMapState {
    zoom: i32,
    bounds: Option<(i32, i32)>,
    set_zoom_calls: usize,
}

#[derive(Clone, Default)]
/// In-memory map used by tests and non-browser hosts.
///
/// Listeners fire only when the stored zoom actually changes, matching how browser map
/// libraries emit `zoom_changed`.
pub struct MemoryZoomMap {
    state: Rc<RefCell<MemoryMapState>>,
    listeners: Rc<RefCell<Vec<ZoomChangedListener>>>,
}

impl std::fmt::Debug for MemoryZoomMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MemoryZoomMap")
            .field("zoom", &state.zoom)
            .field("bounds", &state.bounds)
            .field("set_zoom_calls", &state.set_zoom_calls)
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl MemoryZoomMap {
    /// Creates an unbounded map at `zoom`.
    pub fn new(zoom: i32) -> Self {
        let map = Self::default();
        map.state.borrow_mut().zoom = zoom;
        map
    }

    /// Creates a map that clamps every requested zoom into `[min, max]`.
    pub fn with_bounds(zoom: i32, min: i32, max: i32) -> Self {
        let map = Self::new(zoom.clamp(min, max));
        map.state.borrow_mut().bounds = Some((min, max));
        map
    }

    /// Number of [`ZoomMap::set_zoom`] calls received so far.
    pub fn set_zoom_calls(&self) -> usize {
        self.state.borrow().set_zoom_calls
    }

    /// Number of registered zoom listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Changes the zoom as an outside caller would (user gesture on the map itself, another
    /// control) without counting it as a `set_zoom` call.
    pub fn set_zoom_externally(&self, zoom: i32) {
        self.apply(zoom);
    }

    /// Fires every listener regardless of whether the zoom changed.
    pub fn notify_zoom_changed(&self) {
        // Listeners may subscribe again while running; take them out for the dispatch.
        let mut listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        for listener in listeners.iter_mut() {
            listener();
        }
        let mut slot = self.listeners.borrow_mut();
        listeners.append(&mut slot);
        *slot = listeners;
    }

    fn apply(&self, zoom: i32) {
        let changed = {
            let mut state = self.state.borrow_mut();
            let next = match state.bounds {
                Some((min, max)) => zoom.clamp(min, max),
                None => zoom,
            };
            let changed = state.zoom != next;
            state.zoom = next;
            changed
        };
        if changed {
            self.notify_zoom_changed();
        }
    }
}

impl ZoomMap for MemoryZoomMap {
    fn zoom(&self) -> i32 {
        self.state.borrow().zoom
    }

    fn set_zoom(&self, zoom: i32) {
        self.state.borrow_mut().set_zoom_calls += 1;
        self.apply(zoom);
    }

    fn subscribe_zoom_changed(&self, listener: ZoomChangedListener) -> Result<(), String> {
        self.listeners.borrow_mut().push(listener);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn set_zoom_notifies_only_on_change() {
        let map = MemoryZoomMap::new(4);
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        map.subscribe_zoom_changed(Box::new(move || counter.set(counter.get() + 1)))
            .expect("subscribe");

        map.set_zoom(5);
        map.set_zoom(5);

        assert_eq!(map.zoom(), 5);
        assert_eq!(map.set_zoom_calls(), 2);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn bounded_map_clamps_requests() {
        let map = MemoryZoomMap::with_bounds(21, 0, 21);
        map.set_zoom(22);
        assert_eq!(map.zoom(), 21);
        map.set_zoom(-3);
        assert_eq!(map.zoom(), 0);
    }

    #[test]
    fn external_changes_are_not_counted_as_set_zoom_calls() {
        let map = MemoryZoomMap::new(5);
        map.set_zoom_externally(8);
        assert_eq!(map.zoom(), 8);
        assert_eq!(map.set_zoom_calls(), 0);
    }
}

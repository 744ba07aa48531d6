use std::any::Any;
use std::collections::HashMap;

/// Stores widget state built by lifecycle hooks
///
/// Hooks such as the mini-board initializer parse their element's attributes
/// into a widget and keep it here under the element's identity, so the host
/// can draw it. Values are type-erased; lookups downcast to the requested type
/// and miss on a type mismatch.
#[derive(Default)]
pub struct WidgetStore {
    widgets: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl WidgetStore {
    pub fn new() -> Self {
        Self {
            widgets: HashMap::new(),
        }
    }

    /// Get a widget by identity
    ///
    /// Returns None if nothing is stored there or the stored type differs.
    pub fn get<W: 'static + Send + Sync>(&self, id: &str) -> Option<&W> {
        self.widgets.get(id).and_then(|w| w.downcast_ref())
    }

    pub fn get_mut<W: 'static + Send + Sync>(&mut self, id: &str) -> Option<&mut W> {
        self.widgets.get_mut(id).and_then(|w| w.downcast_mut())
    }

    /// Insert or replace the widget for an identity
    pub fn insert<W: 'static + Send + Sync>(&mut self, id: impl Into<String>, widget: W) {
        self.widgets.insert(id.into(), Box::new(widget));
    }

    /// Remove the widget for an identity
    ///
    /// Used when an element leaves the tree.
    pub fn remove(&mut self, id: &str) -> bool {
        self.widgets.remove(id).is_some()
    }

    /// Keep only the identities accepted by `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.widgets.retain(|id, _| keep(id));
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

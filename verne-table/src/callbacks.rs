//! Event handlers and the registry the table wires them into.
//!
//! The table builds a static element tree; behavior is attached out of
//! band by registering closures against `(element_id, event)` pairs. The
//! application shell resolves a mouse click or key press to an element id
//! via the layout, then looks the handler up here.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

/// Payload delivered to a handler.
#[derive(Debug, Clone, Default)]
pub enum EventData {
    #[default]
    None,
    Change {
        text: String,
    },
}

impl EventData {
    pub fn text(&self) -> Option<&str> {
        match self {
            EventData::Change { text } => Some(text),
            EventData::None => None,
        }
    }
}

pub type Handler = Arc<dyn Fn(&EventData) + Send + Sync>;

/// Handlers the table invokes with the affected record's id.
pub type RecordCallback = Arc<dyn Fn(Uuid) + Send + Sync>;

/// Invoked with the clicked column key.
pub type SortCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Invoked with the requested 1-based page.
pub type PageCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// The row-level actions a table supports.
///
/// View is optional; rows without it simply render no view button. The
/// rest are mandatory because the editing lifecycle needs all of them.
#[derive(Clone)]
pub struct TableCallbacks {
    pub on_view: Option<RecordCallback>,
    pub on_edit: RecordCallback,
    pub on_save: RecordCallback,
    pub on_cancel: RecordCallback,
    pub on_delete: RecordCallback,
}

impl TableCallbacks {
    pub fn new(
        on_edit: RecordCallback,
        on_save: RecordCallback,
        on_cancel: RecordCallback,
        on_delete: RecordCallback,
    ) -> Self {
        Self {
            on_view: None,
            on_edit,
            on_save,
            on_cancel,
            on_delete,
        }
    }

    pub fn with_view(mut self, on_view: RecordCallback) -> Self {
        self.on_view = Some(on_view);
        self
    }
}

impl fmt::Debug for TableCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableCallbacks")
            .field("on_view", &self.on_view.is_some())
            .finish_non_exhaustive()
    }
}

/// Shared map from `(element_id, event)` to handler.
///
/// Cloned freely; all clones share the same underlying map. Rebuilt-from-
/// scratch each frame by clearing before the tree is constructed.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut map) = self.handlers.write() {
            map.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Invoke the handler for an element/event pair, if one exists.
    /// Returns whether a handler ran.
    pub fn dispatch(&self, element_id: &str, event: &str, data: &EventData) -> bool {
        match self.get(element_id, event) {
            Some(handler) => {
                handler(data);
                true
            }
            None => false,
        }
    }

    pub fn clear(&self) {
        if let Ok(mut map) = self.handlers.write() {
            map.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandlerRegistry({} handlers)", self.len())
    }
}

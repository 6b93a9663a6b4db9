//! Global key listener registry.
//!
//! Components that need a key while they are alive (the console's cancel
//! key) register a listener here and must deregister it in their teardown.
//! The event loop consults the registry before any page-level key handling.

use crate::console::SessionId;
use crossterm::event::{KeyCode, KeyEvent};

/// Identifier of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// What a listener asks the event loop to do when its key is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerAction {
    /// Dismiss the console session with the given id.
    DismissConsole(SessionId),
}

#[derive(Debug, Clone)]
struct Listener {
    id: ListenerId,
    key: KeyCode,
    action: ListenerAction,
}

/// Registry of key listeners. The most recently registered match wins.
#[derive(Debug, Default)]
pub struct KeyListeners {
    listeners: Vec<Listener>,
    next_id: u64,
}

impl KeyListeners {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `action` for `key` and returns the listener id.
    pub fn register(&mut self, key: KeyCode, action: ListenerAction) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push(Listener { id, key, action });
        tracing::trace!(?id, ?key, "key listener registered");
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn deregister(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        let removed = self.listeners.len() != before;
        if removed {
            tracing::trace!(?id, "key listener deregistered");
        }
        removed
    }

    /// Returns the action of the newest listener bound to the pressed key.
    pub fn dispatch(&self, key: &KeyEvent) -> Option<ListenerAction> {
        self.listeners
            .iter()
            .rev()
            .find(|l| l.key == key.code)
            .map(|l| l.action)
    }

    /// Returns `true` if the listener is still registered.
    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|l| l.id == id)
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

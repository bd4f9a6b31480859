use log::debug;

use crate::document::{Document, NodeId};
use crate::event::Event;
use crate::node::Display;

/// Tracks which node is currently focused.
///
/// Focus transitions return the `Blur`/`Focus` events they imply so the
/// caller can deliver them to whoever listens (widgets close their
/// popups on blur).
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<NodeId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently focused node.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Programmatically focus a node.
    ///
    /// Returns the implied events: a `Blur` for the previously focused
    /// node (if any), then a `Focus` for the new one. Empty when the
    /// node is already focused.
    pub fn focus(&mut self, target: NodeId) -> Vec<Event> {
        if self.focused == Some(target) {
            return Vec::new();
        }
        let mut events = Vec::new();
        if let Some(old) = self.focused {
            events.push(Event::Blur { target: old });
        }
        self.focused = Some(target);
        events.push(Event::Focus { target });
        debug!("focus -> {target:?}");
        events
    }

    /// Clear focus, returning the `Blur` event if something was focused.
    pub fn blur(&mut self) -> Option<Event> {
        let old = self.focused.take()?;
        debug!("blur {old:?}");
        Some(Event::Blur { target: old })
    }

    /// Focus the next focusable node (Tab navigation), wrapping around.
    pub fn focus_next(&mut self, doc: &Document) -> Vec<Event> {
        let focusable = collect_focusable(doc);
        if focusable.is_empty() {
            return Vec::new();
        }

        let next = match self.focused {
            None => focusable[0],
            Some(current) => match focusable.iter().position(|&id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()],
                None => focusable[0],
            },
        };
        self.focus(next)
    }

    /// Focus the previous focusable node (Shift+Tab), wrapping around.
    pub fn focus_prev(&mut self, doc: &Document) -> Vec<Event> {
        let focusable = collect_focusable(doc);
        if focusable.is_empty() {
            return Vec::new();
        }

        let prev = match self.focused {
            None => focusable[focusable.len() - 1],
            Some(current) => match focusable.iter().position(|&id| id == current) {
                Some(0) | None => focusable[focusable.len() - 1],
                Some(i) => focusable[i - 1],
            },
        };
        self.focus(prev)
    }
}

/// Collect focusable node ids in document order.
///
/// Subtrees removed from layout (`Display::None`) are skipped; a hidden
/// control is not reachable by keyboard.
pub fn collect_focusable(doc: &Document) -> Vec<NodeId> {
    let mut result = Vec::new();
    if let Some(root) = doc.root() {
        collect_focusable_recursive(doc, root, &mut result);
    }
    result
}

fn collect_focusable_recursive(doc: &Document, id: NodeId, result: &mut Vec<NodeId>) {
    let node = doc.node(id);
    if node.display == Display::None {
        return;
    }
    if node.focusable {
        result.push(id);
    }
    for &child in doc.children(id) {
        collect_focusable_recursive(doc, child, result);
    }
}

//! Event handling for the Select widget.

use std::time::Instant;

use docdom::{Document, Event, Key};
use log::debug;

use super::state::{Select, VALUE_DATA_ATTR};

/// Result of offering an event to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl Select {
    /// Offer an input event to the widget.
    ///
    /// All transitions complete synchronously inside this call. `now`
    /// drives type-ahead expiry; pass `Instant::now()` outside tests.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event, now: Instant) -> EventResult {
        match *event {
            Event::Click { target } if target == self.label => {
                self.toggle(doc);
                EventResult::Consumed
            }
            Event::Click { target } if doc.parent(target) == Some(self.list) => {
                let Some(value) = doc.node(target).attr(VALUE_DATA_ATTR).cloned() else {
                    return EventResult::Ignored;
                };
                self.select_value(doc, &value);
                self.close(doc);
                EventResult::Consumed
            }
            Event::Blur { target } if target == self.container => {
                self.close(doc);
                EventResult::Consumed
            }
            Event::Key {
                target,
                key,
                modifiers,
            } if target == Some(self.container) => {
                // Ignore keys with ctrl/alt modifiers
                if modifiers.ctrl || modifiers.alt {
                    return EventResult::Ignored;
                }
                self.on_key(doc, key, now)
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_key(&mut self, doc: &mut Document, key: Key, now: Instant) -> EventResult {
        match key {
            Key::Char(' ') => {
                self.toggle(doc);
                EventResult::Consumed
            }
            Key::Up => {
                // No wraparound: no-op at the first option
                let index = self.selected_index();
                if index > 0 {
                    let value = self.options[index - 1].value.clone();
                    self.select_value(doc, &value);
                }
                EventResult::Consumed
            }
            Key::Down => {
                let index = self.selected_index();
                if index + 1 < self.options.len() {
                    let value = self.options[index + 1].value.clone();
                    self.select_value(doc, &value);
                }
                EventResult::Consumed
            }
            Key::Enter | Key::Escape => {
                self.close(doc);
                EventResult::Consumed
            }
            Key::Char(c) if !c.is_control() => {
                let term = self.search.push(c, now).to_lowercase();
                debug!("Select type-ahead term={term:?}");
                let matched = self
                    .options
                    .iter()
                    .find(|option| option.label.to_lowercase().starts_with(&term))
                    .map(|option| option.value.clone());
                if let Some(value) = matched {
                    self.select_value(doc, &value);
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

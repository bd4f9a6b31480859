//! Type-ahead search buffer.

use std::time::{Duration, Instant};

/// How long the buffer survives after the last keystroke.
pub const SEARCH_TIMEOUT: Duration = Duration::from_millis(500);

/// Per-widget type-ahead buffer.
///
/// Each keystroke reschedules the expiry deadline; a keystroke arriving
/// at or past the deadline starts a fresh term. The deadline is plain
/// data and `now` is supplied by the event layer, so no ambient timer
/// is involved and tests control time directly.
#[derive(Debug, Default)]
pub struct SearchBuffer {
    term: String,
    deadline: Option<Instant>,
}

impl SearchBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a keystroke and return the current term.
    pub fn push(&mut self, c: char, now: Instant) -> &str {
        if self.deadline.is_some_and(|deadline| now >= deadline) {
            self.term.clear();
        }
        self.term.push(c);
        self.deadline = Some(now + SEARCH_TIMEOUT);
        &self.term
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

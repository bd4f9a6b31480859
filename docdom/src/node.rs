use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::document::NodeId;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// How a node participates in visual layout.
///
/// `None` removes the node and its subtree from rendering while keeping
/// it in the document (the node still answers queries and keeps its
/// form state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

/// A single node in a [`Document`](crate::Document).
///
/// Tree structure (parent/children) is owned by the document arena;
/// everything else is plain per-node state mutated in place.
#[derive(Debug, Clone)]
pub struct Node {
    // Identity
    pub id: String,
    pub tag: String,

    // Content
    pub text: String,

    // Styling hooks
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,

    // Visual
    pub display: Display,

    // Interaction
    pub focusable: bool,

    // Scrolling. Each child entry occupies one row; `viewport_rows`
    // caps how many rows are visible at once (None = unconstrained).
    pub scroll_offset: u16,
    pub viewport_rows: Option<u16>,

    // Tree links, managed by Document
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            id: generate_id(tag),
            tag: tag.to_string(),
            text: String::new(),
            classes: Vec::new(),
            attrs: HashMap::new(),
            display: Display::Block,
            focusable: false,
            scroll_offset: 0,
            viewport_rows: None,
            parent: None,
            children: Vec::new(),
        }
    }

    // Text

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    // Class list

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Toggle a class, returning whether it is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    // Attributes

    pub fn attr(&self, name: &str) -> Option<&String> {
        self.attrs.get(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.remove(name);
    }
}

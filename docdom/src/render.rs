use unicode_width::UnicodeWidthChar;

use crate::document::{Document, NodeId};
use crate::node::Display;
use crate::scroll::visible_range;

/// One rendered row of a document subtree.
///
/// Carries the source node's classes so the styling layer can map state
/// classes to whatever emphasis it wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub node: NodeId,
    pub text: String,
    pub classes: Vec<String>,
}

/// Flatten the subtree rooted at `start` into text lines.
///
/// Walks in document order, skipping `Display::None` subtrees and
/// honoring scroll viewports (only visible child rows of a constrained
/// container are emitted). Nodes without text produce no line of their
/// own.
pub fn render_lines(doc: &Document, start: NodeId, max_width: u16) -> Vec<Line> {
    let mut lines = Vec::new();
    render_node(doc, start, max_width, &mut lines);
    lines
}

fn render_node(doc: &Document, id: NodeId, max_width: u16, lines: &mut Vec<Line>) {
    let node = doc.node(id);
    if node.display == Display::None {
        return;
    }

    if !node.text.is_empty() {
        lines.push(Line {
            node: id,
            text: truncate_to_width(&node.text, max_width),
            classes: node.classes.clone(),
        });
    }

    let children = doc.children(id);
    for &child in &children[visible_range(doc, id)] {
        render_node(doc, child, max_width, lines);
    }
}

/// Truncate a string to the given display width (unicode-aware).
fn truncate_to_width(text: &str, max_width: u16) -> String {
    let mut width = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width as usize {
            break;
        }
        width += w;
        out.push(ch);
    }
    out
}

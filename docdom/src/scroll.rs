use std::ops::Range;

use crate::document::{Document, NodeId};

/// Scroll `container` the minimal amount needed to bring `entry` (one
/// of its direct children) into the viewport.
///
/// Entries occupy one row each. No-op when the entry is already
/// visible, when `entry` is not a child of `container`, or when the
/// container has no viewport constraint.
pub fn scroll_into_view(doc: &mut Document, container: NodeId, entry: NodeId) {
    let Some(row) = doc.children(container).iter().position(|&c| c == entry) else {
        return;
    };
    let node = doc.node(container);
    let Some(viewport) = node.viewport_rows else {
        return;
    };
    if viewport == 0 {
        return;
    }

    let row = row as u16;
    let top = node.scroll_offset;
    let new_top = if row < top {
        // Above the viewport: align to top
        row
    } else if row >= top + viewport {
        // Below the viewport: make it the last visible row
        row + 1 - viewport
    } else {
        top
    };

    if new_top != top {
        doc.node_mut(container).scroll_offset = new_top;
    }
}

/// The range of child indices currently inside `container`'s viewport.
pub fn visible_range(doc: &Document, container: NodeId) -> Range<usize> {
    let node = doc.node(container);
    let count = doc.children(container).len();
    match node.viewport_rows {
        None => 0..count,
        Some(rows) => {
            let top = (node.scroll_offset as usize).min(count);
            let bottom = (top + rows as usize).min(count);
            top..bottom
        }
    }
}

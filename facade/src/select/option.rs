//! Option model extracted from a native selection control.

use docdom::{Document, NodeId};

/// Attribute carrying a native option's machine value.
pub(crate) const VALUE_ATTR: &str = "value";
/// Boolean attribute marking the native selection.
pub(crate) const SELECTED_ATTR: &str = "selected";

/// One entry of the widget's option model.
///
/// `source` is a back-reference to the originating native option node,
/// used to write selection state back so form submission still reflects
/// the widget's choice. It is not an ownership relation; the node stays
/// in the document.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
    pub source: NodeId,
}

/// Extract the option model from a native control, in document order.
///
/// Native semantics are made explicit here:
/// - an option without a `value` attribute takes its label as value;
/// - when no option is marked selected, the first one is, and the mark
///   is written back to its native node;
/// - when several are marked (malformed input), the first mark wins and
///   the rest are cleared.
pub(crate) fn extract_options(doc: &mut Document, native: NodeId) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = doc
        .query_by_tag(native, "option")
        .into_iter()
        .map(|source| {
            let node = doc.node(source);
            SelectOption {
                value: node
                    .attr(VALUE_ATTR)
                    .cloned()
                    .unwrap_or_else(|| node.text.clone()),
                label: node.text.clone(),
                selected: node.has_attr(SELECTED_ATTR),
                source,
            }
        })
        .collect();

    let mut seen_selected = false;
    for option in &mut options {
        if option.selected {
            if seen_selected {
                option.selected = false;
                doc.node_mut(option.source).remove_attr(SELECTED_ATTR);
            }
            seen_selected = true;
        }
    }

    if !seen_selected {
        if let Some(first) = options.first_mut() {
            first.selected = true;
            let source = first.source;
            doc.node_mut(source).set_attr(SELECTED_ATTR, "");
        }
    }

    options
}

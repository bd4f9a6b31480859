//! Select widget state and selection synchronization.

use docdom::{scroll_into_view, Display, Document, NodeId};
use log::debug;

use crate::error::AttachError;

use super::option::{extract_options, SelectOption, SELECTED_ATTR};
use super::search::SearchBuffer;

// Class and attribute names shared with external stylesheets. They are
// the wire format between the widget and the styling layer and must not
// change.
pub const CONTAINER_CLASS: &str = "_CS-container";
pub const VALUE_CLASS: &str = "_CS-value";
pub const OPTIONS_CLASS: &str = "_CS-options";
pub const OPTION_CLASS: &str = "_CS-option";
pub const SELECTED_CLASS: &str = "selected";
pub const SHOW_CLASS: &str = "show";
pub const VALUE_DATA_ATTR: &str = "data-value";

/// A custom-rendered replacement for one native selection control.
///
/// The widget owns the option model and the ids of its rendered nodes.
/// Exactly one option is selected at all times; every selection change
/// goes through [`select_value`](Select::select_value), which updates
/// the model, the native control and the rendered subtree in one step.
#[derive(Debug)]
pub struct Select {
    /// The hidden native control (kept in the document for form state)
    pub(super) native: NodeId,
    /// Option model, document order, fixed after construction
    pub(super) options: Vec<SelectOption>,
    /// Rendered subtree
    pub(super) container: NodeId,
    pub(super) label: NodeId,
    pub(super) list: NodeId,
    /// Type-ahead state, independent per instance
    pub(super) search: SearchBuffer,
}

impl Select {
    /// Derive a widget from a native selection control already in the
    /// document.
    ///
    /// Hides the native control from visual layout and inserts the
    /// rendered subtree as its next sibling, so document flow keyed to
    /// the control's position is preserved.
    pub fn attach(doc: &mut Document, native: NodeId) -> Result<Self, AttachError> {
        let options = extract_options(doc, native);
        if options.is_empty() {
            let node = doc.node(native);
            return Err(AttachError::NoOptions {
                tag: node.tag.clone(),
                id: node.id.clone(),
            });
        }

        let container = doc.create_element("div");
        {
            let node = doc.node_mut(container);
            node.add_class(CONTAINER_CLASS);
            node.focusable = true;
        }

        let label = doc.create_element("span");
        doc.node_mut(label).add_class(VALUE_CLASS);
        doc.append_child(container, label);

        let list = doc.create_element("ul");
        doc.node_mut(list).add_class(OPTIONS_CLASS);
        for option in &options {
            let entry = doc.create_element("li");
            let node = doc.node_mut(entry);
            node.add_class(OPTION_CLASS);
            node.set_text(option.label.as_str());
            node.set_attr(VALUE_DATA_ATTR, option.value.as_str());
            if option.selected {
                node.add_class(SELECTED_CLASS);
            }
            doc.append_child(list, entry);
        }
        doc.append_child(container, list);

        let widget = Self {
            native,
            options,
            container,
            label,
            list,
            search: SearchBuffer::new(),
        };

        let selected_label = widget.selected_option().label.clone();
        doc.node_mut(label).set_text(selected_label);

        doc.node_mut(native).display = Display::None;
        doc.insert_after(native, container);

        debug!(
            "Select::attach native={} options={} selected={}",
            doc.node(native).id,
            widget.options.len(),
            widget.selected_option().value
        );
        Ok(widget)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Position of the selected option within the option list.
    ///
    /// # Panics
    ///
    /// Panics if the exactly-one-selected invariant is broken. That is
    /// a programmer error, unreachable through the public API.
    pub fn selected_index(&self) -> usize {
        let mut indices = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.selected)
            .map(|(i, _)| i);
        let first = indices.next();
        assert!(
            indices.next().is_none(),
            "more than one option marked selected"
        );
        match first {
            Some(i) => i,
            None => panic!("no option marked selected"),
        }
    }

    /// The unique selected option.
    ///
    /// # Panics
    ///
    /// Same contract as [`selected_index`](Select::selected_index).
    pub fn selected_option(&self) -> &SelectOption {
        &self.options[self.selected_index()]
    }

    /// The option model, document order.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// The hidden native control.
    pub fn native(&self) -> NodeId {
        self.native
    }

    /// The focusable container of the rendered subtree.
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// The node showing the selected option's label.
    pub fn label(&self) -> NodeId {
        self.label
    }

    /// The rendered option list node.
    pub fn list(&self) -> NodeId {
        self.list
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Move the selection to the option whose value is `value`.
    ///
    /// Clears the current selection and sets the new one in the option
    /// model and on the native option nodes, updates the label text,
    /// moves the `selected` class between rendered entries and scrolls
    /// the new entry into view (minimal scroll). Re-selecting the
    /// current value is performed and idempotent.
    ///
    /// # Panics
    ///
    /// Panics when no option has the given value; that is a caller
    /// contract violation, not a recoverable condition.
    pub fn select_value(&mut self, doc: &mut Document, value: &str) {
        let Some(target) = self.options.iter().position(|option| option.value == value) else {
            panic!("select_value: no option with value {value:?}");
        };
        let current = self.selected_index();

        self.options[current].selected = false;
        doc.node_mut(self.options[current].source)
            .remove_attr(SELECTED_ATTR);
        self.options[target].selected = true;
        doc.node_mut(self.options[target].source)
            .set_attr(SELECTED_ATTR, "");

        doc.node_mut(self.label)
            .set_text(self.options[target].label.clone());

        if let Some(entry) =
            doc.find_by_attr(self.list, VALUE_DATA_ATTR, &self.options[current].value)
        {
            doc.node_mut(entry).remove_class(SELECTED_CLASS);
        }
        if let Some(entry) = doc.find_by_attr(self.list, VALUE_DATA_ATTR, value) {
            doc.node_mut(entry).add_class(SELECTED_CLASS);
            scroll_into_view(doc, self.list, entry);
        }

        debug!(
            "Select::select_value {} -> {}",
            self.options[current].value, value
        );
    }

    // -------------------------------------------------------------------------
    // Open/close state (the `show` marker on the option list)
    // -------------------------------------------------------------------------

    /// Whether the dropdown is open.
    pub fn is_open(&self, doc: &Document) -> bool {
        doc.node(self.list).has_class(SHOW_CLASS)
    }

    /// Open the dropdown. Pure visual toggle, no selection change.
    pub fn open(&self, doc: &mut Document) {
        doc.node_mut(self.list).add_class(SHOW_CLASS);
    }

    /// Close the dropdown.
    pub fn close(&self, doc: &mut Document) {
        doc.node_mut(self.list).remove_class(SHOW_CLASS);
    }

    /// Toggle the dropdown open/closed.
    pub fn toggle(&self, doc: &mut Document) {
        doc.node_mut(self.list).toggle_class(SHOW_CLASS);
    }
}

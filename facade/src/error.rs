//! Widget construction errors.

use thiserror::Error;

/// Errors from [`Select::attach`](crate::Select::attach).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachError {
    /// The native control has no option nodes, so there is nothing to
    /// select. Rejected at construction rather than producing a widget
    /// with no selectable state.
    #[error("native control <{tag}> ({id}) contains no options")]
    NoOptions { tag: String, id: String },
}

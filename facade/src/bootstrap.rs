//! Entry-point glue: one widget per marked native control.
//!
//! This is an explicit factory over a host list rather than an ambient
//! whole-document query; callers decide where the hosts come from
//! ([`find_hosts`] covers the common case).

use docdom::{Document, NodeId};

use crate::error::AttachError;
use crate::select::Select;

/// Attribute marking native controls that should be replaced.
pub const HOST_ATTR: &str = "data-custom-select";

/// Native controls marked for replacement, in document order.
pub fn find_hosts(doc: &Document) -> Vec<NodeId> {
    match doc.root() {
        Some(root) => doc.query_by_attr(root, HOST_ATTR),
        None => Vec::new(),
    }
}

/// Build one widget per host.
pub fn attach_all(doc: &mut Document, hosts: &[NodeId]) -> Result<Vec<Select>, AttachError> {
    hosts
        .iter()
        .map(|&host| Select::attach(doc, host))
        .collect()
}

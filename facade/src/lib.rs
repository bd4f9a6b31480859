//! A styleable stand-in for native dropdown controls.
//!
//! Given a native single-selection control in a [`docdom::Document`],
//! [`Select::attach`] hides it, inserts a custom-rendered subtree in
//! its place in document flow, and keeps both representations in
//! lock-step on every selection change. Keyboard interaction (arrow
//! navigation, type-ahead search, open/close) is handled through
//! [`Select::handle_event`].

pub mod bootstrap;
pub mod error;
pub mod select;

pub use bootstrap::{attach_all, find_hosts, HOST_ATTR};
pub use error::AttachError;
pub use select::{EventResult, Select, SelectOption};

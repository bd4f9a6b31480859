//! Select widget - custom-rendered replacement for a native dropdown.

pub mod events;
pub mod option;
pub mod search;
mod state;

pub use events::EventResult;
pub use option::SelectOption;
pub use search::{SearchBuffer, SEARCH_TIMEOUT};
pub use state::{
    Select, CONTAINER_CLASS, OPTIONS_CLASS, OPTION_CLASS, SELECTED_CLASS, SHOW_CLASS, VALUE_CLASS,
    VALUE_DATA_ATTR,
};

pub mod document;
pub mod event;
pub mod focus;
pub mod node;
pub mod render;
pub mod scroll;

pub use document::{Document, NodeId};
pub use event::{Event, Key, Modifiers};
pub use focus::{collect_focusable, FocusState};
pub use node::{Display, Node};
pub use render::{render_lines, Line};
pub use scroll::{scroll_into_view, visible_range};

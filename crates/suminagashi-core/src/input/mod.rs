//! Input events.
//!
//! Public API is platform-agnostic: the embedding host translates pointer
//! clicks, resize notifications, or the synthetic drop ticker into these
//! events. Malformed events are rejected by validation before they can touch
//! registry or buffer state.

mod types;

pub use types::{DropEvent, EventError, InputEvent};

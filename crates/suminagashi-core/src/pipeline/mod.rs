//! Update/render pipeline.
//!
//! Responsibilities:
//! - own the double-buffered vertex pools and the parity flip that publishes
//!   an update to the renderer
//! - sequence deform → triangulate → publish per drop event, FIFO
//! - expose the consumer-side contract (`FrameView`, `Present`)
//!
//! Rendering runs every frame; updates run only when events arrive. The two
//! never share a mutable buffer: the renderer reads whichever pool the parity
//! bit marks active while updates write the other one.

mod frame;
mod present;
mod scheduler;

pub use frame::FrameView;
pub use present::{Present, PresentControl};
pub use scheduler::{Pipeline, PipelineConfig, PipelineState};

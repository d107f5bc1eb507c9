//! Suminagashi core crate.
//!
//! This crate owns the geometry and scheduling kernel of a paint-marbling
//! renderer: deformable polygon "drops", ear-clipping triangulation, and the
//! double-buffered producer/consumer handoff an external renderer draws from.
//! It produces vertex/index/color buffers; it never touches a GPU device.

pub mod coords;
pub mod drops;
pub mod geom;
pub mod input;
pub mod pipeline;
pub mod time;

pub mod logging;

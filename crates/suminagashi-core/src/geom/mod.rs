//! Geometry kernel.
//!
//! Responsibilities:
//! - ear-clipping triangulation of one simple CCW polygon into a fixed-size
//!   index window
//! - the radial "drop" deformation applied to the whole vertex pool
//!
//! Both are pure over slices; neither knows about slots, buffers, or parity.

mod deform;
mod triangulate;

pub use deform::DropDeform;
pub use triangulate::{TriangulateError, Triangulator};

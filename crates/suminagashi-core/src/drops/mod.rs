//! Drop storage and slot lifecycle.
//!
//! Responsibilities:
//! - flat positional storage for a fixed number of fixed-size polygons
//! - ring-buffer slot allocation with per-slot color and age metadata
//! - the O(1) depth key the renderer uses to occlude older drops
//!
//! No geometry runs here; deformation and triangulation live in `geom`.

mod registry;
mod store;

pub use registry::DropRegistry;
pub use store::{PolygonStore, Vertex};

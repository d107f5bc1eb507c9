//! Coordinate and color types shared across the kernel.
//!
//! Canonical space:
//! - Normalized device coordinates, conceptually `[-1, 1]` (not enforced;
//!   deformation pushes points outward without clamping)
//! - Origin center
//! - +X right, +Y up

mod aspect;
mod color;
mod vec2;

pub use aspect::Aspect;
pub use color::ColorRgba;
pub use vec2::Vec2;

use crate::coords::{Aspect, ColorRgba};
use crate::drops::Vertex;

/// Read-only view of the published buffers for one rendered frame.
///
/// Everything the external renderer needs: the active vertex pool, the index
/// buffer (stable size, contents rewritten per update), the per-slot color
/// table, and the cursor for the age-based depth key.
///
/// Holding a `FrameView` borrows the pipeline shared, so no update can run
/// while the renderer reads it.
#[derive(Debug, Copy, Clone)]
pub struct FrameView<'a> {
    /// Flat vertex pool, grouped contiguously by slot.
    pub vertices: &'a [Vertex],
    /// `3·(N-2)` u32 per slot; values are absolute vertex-buffer offsets.
    pub indices: &'a [u32],
    /// One color per slot, indexed by slot.
    pub colors: &'a [ColorRgba],
    /// Next slot to allocate; with the capacity this yields each slot's age.
    pub cursor: usize,
    /// Cosmetic aspect correction from the last `Resize`.
    pub aspect: Aspect,
}

impl FrameView<'_> {
    /// Vertex buffer bytes, ready for upload.
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices)
    }

    /// Index buffer bytes, ready for upload.
    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.indices)
    }
}

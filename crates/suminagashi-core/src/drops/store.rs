use bytemuck::{Pod, Zeroable};
use core::ops::Range;

use crate::coords::Vec2;

/// One vertex as the external renderer sees it (8 bytes):
///
///  offset 0  pos  [f32; 2]
///
/// The vertex buffer is a flat array of these, grouped contiguously by slot.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
}

impl Vertex {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { pos: [x, y] }
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.pos[0], self.pos[1])
    }
}

impl From<Vec2> for Vertex {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Flat vertex pool for `capacity` polygons of `verts_per_drop` vertices each.
///
/// Pure layout: slot window math, resting-shape reset, whole-pool copy, and
/// the byte view the renderer uploads. Both dimensions are fixed at
/// construction and never change, so window offsets and the total byte length
/// are stable for the life of the store.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonStore {
    verts: Vec<Vertex>,
    capacity: usize,
    verts_per_drop: usize,
}

impl PolygonStore {
    /// Creates a zeroed pool.
    ///
    /// All vertices start at the origin; slots hold degenerate polygons until
    /// their first allocation writes a resting shape.
    pub fn new(capacity: usize, verts_per_drop: usize) -> Self {
        Self {
            verts: vec![Vertex::default(); capacity * verts_per_drop],
            capacity,
            verts_per_drop,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn verts_per_drop(&self) -> usize {
        self.verts_per_drop
    }

    /// Index range of one slot's vertex window.
    #[inline]
    pub fn slot_window(&self, slot: usize) -> Range<usize> {
        debug_assert!(slot < self.capacity, "slot {slot} out of range");
        let start = slot * self.verts_per_drop;
        start..start + self.verts_per_drop
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.verts
    }

    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.verts
    }

    #[inline]
    pub fn slot_vertices(&self, slot: usize) -> &[Vertex] {
        &self.verts[self.slot_window(slot)]
    }

    /// Resets one slot to the resting shape: a regular N-gon of the given
    /// center and radius, counter-clockwise winding.
    pub fn write_resting(&mut self, slot: usize, center: Vec2, radius: f32) {
        let window = self.slot_window(slot);
        let n = self.verts_per_drop as f32;
        for (i, v) in self.verts[window].iter_mut().enumerate() {
            let angle = i as f32 * (core::f32::consts::TAU / n);
            *v = Vertex::new(
                angle.cos() * radius + center.x,
                angle.sin() * radius + center.y,
            );
        }
    }

    /// Overwrites this pool's contents from another of identical dimensions.
    pub fn copy_from(&mut self, other: &PolygonStore) {
        debug_assert_eq!(self.capacity, other.capacity);
        debug_assert_eq!(self.verts_per_drop, other.verts_per_drop);
        self.verts.copy_from_slice(&other.verts);
    }

    /// Raw bytes of the vertex buffer (2×f32 little-endian per vertex on
    /// every platform this targets), ready for upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.verts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn slot_windows_are_contiguous() {
        let store = PolygonStore::new(4, 20);
        assert_eq!(store.slot_window(0), 0..20);
        assert_eq!(store.slot_window(3), 60..80);
        assert_eq!(store.vertices().len(), 80);
    }

    #[test]
    fn byte_view_is_two_f32_per_vertex() {
        let store = PolygonStore::new(4, 20);
        assert_eq!(store.as_bytes().len(), 4 * 20 * 2 * 4);
    }

    // ── resting shape ─────────────────────────────────────────────────────

    #[test]
    fn resting_shape_lies_on_the_circle() {
        let mut store = PolygonStore::new(2, 8);
        store.write_resting(1, Vec2::new(0.5, -0.25), 0.3);
        for v in store.slot_vertices(1) {
            let d = (v.to_vec2() - Vec2::new(0.5, -0.25)).length();
            assert!((d - 0.3).abs() < 1e-6);
        }
        // Slot 0 untouched.
        assert!(store.slot_vertices(0).iter().all(|v| v.pos == [0.0, 0.0]));
    }

    #[test]
    fn resting_shape_winds_counter_clockwise() {
        let mut store = PolygonStore::new(1, 8);
        store.write_resting(0, Vec2::zero(), 0.25);
        let verts = store.slot_vertices(0);
        // Shoelace sum is positive for CCW in y-up coordinates.
        let mut doubled_area = 0.0f32;
        for i in 0..verts.len() {
            let a = verts[i].to_vec2();
            let b = verts[(i + 1) % verts.len()].to_vec2();
            doubled_area += a.x * b.y - b.x * a.y;
        }
        assert!(doubled_area > 0.0);
    }
}

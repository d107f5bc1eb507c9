use crate::coords::Vec2;
use crate::drops::Vertex;

/// Squared-distance floor for vertices sitting exactly on the drop center.
/// Keeps the division finite; the displaced point lands on the circle of
/// radius ≈ r regardless of the (undefined) direction.
const MIN_DIST_SQ: f32 = 1e-12;

/// One radial "drop" deformation: the push of ink away from a newly placed
/// drop at `center` with radius `radius`.
///
/// Every vertex `v` with displacement `d = v - center` and `s = |d|²` maps to
///
/// ```text
/// v' = center + d · sqrt(1 + r²/s)
/// ```
///
/// so its new distance from the center is `sqrt(old² + r²)`: near points are
/// pushed hard, far points barely move, and winding order is preserved.
///
/// This is a single discrete map, not a time-stepped simulation. Applying a
/// sequence of drops composes the maps in event order; the composition is
/// neither commutative nor idempotent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DropDeform {
    pub center: Vec2,
    pub radius: f32,
}

impl DropDeform {
    #[inline]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Applies the map to every vertex, reading `src` and writing `dst`.
    ///
    /// `src` must be the pre-update snapshot: all per-vertex maps share the
    /// same parameters and must observe the same initial state, so the
    /// transform never reads what it has already written.
    pub fn apply(&self, src: &[Vertex], dst: &mut [Vertex]) {
        debug_assert_eq!(src.len(), dst.len(), "snapshot and destination diverge");
        let r_sq = self.radius * self.radius;
        for (s, d) in src.iter().zip(dst.iter_mut()) {
            let disp = s.to_vec2() - self.center;
            let dist_sq = disp.length_squared().max(MIN_DIST_SQ);
            let scale = (1.0 + r_sq / dist_sq).sqrt();
            *d = Vertex::from(self.center + disp * scale);
        }
    }
}

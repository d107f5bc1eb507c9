use core::fmt;

use crate::drops::Vertex;

/// Triangulation failure.
///
/// Non-fatal by contract: the caller keeps the slot's previous triangulation
/// and surfaces the failure as a diagnostic.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TriangulateError {
    /// Fewer than 3 vertices; no triangle exists.
    TooFewVertices { count: usize },
    /// The scan exceeded its `(n-2)²` step budget without clearing the
    /// polygon. Near-collinear or non-simple input.
    IterationBudget { steps: usize },
}

impl fmt::Display for TriangulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { count } => {
                write!(f, "polygon has {count} vertices, need at least 3")
            }
            Self::IterationBudget { steps } => {
                write!(f, "ear scan gave up after {steps} steps")
            }
        }
    }
}

impl std::error::Error for TriangulateError {}

/// Ear-clipping triangulator for simple, counter-clockwise polygons.
///
/// Holds per-call scratch (the doubly linked list as prev/next index arrays,
/// plus a staging index buffer) so repeated calls allocate nothing once
/// warmed. One instance serves any polygon size.
///
/// Output goes through staging and is copied into the caller's window only on
/// success, so a failed call never leaves the window half-rewritten.
#[derive(Debug, Default)]
pub struct Triangulator {
    prev: Vec<u32>,
    next: Vec<u32>,
    staged: Vec<u32>,
}

impl Triangulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangulates `verts` into exactly `3·(n-2)` indices in `out`, each
    /// offset by `base` (the polygon's first index in the global vertex
    /// buffer).
    ///
    /// `verts` must be a simple polygon in counter-clockwise order; the scan
    /// budget turns violations into an error instead of a hang.
    ///
    /// # Panics
    /// If `out` is not exactly `3·(n-2)` entries; the window size is part of
    /// the call contract, not a recoverable condition.
    pub fn triangulate(
        &mut self,
        verts: &[Vertex],
        base: u32,
        out: &mut [u32],
    ) -> Result<(), TriangulateError> {
        let n = verts.len();
        if n < 3 {
            return Err(TriangulateError::TooFewVertices { count: n });
        }
        assert_eq!(out.len(), 3 * (n - 2), "index window size mismatch");

        // Doubly linked list over local vertex indices.
        self.prev.clear();
        self.next.clear();
        self.prev.extend((0..n).map(|i| (if i > 0 { i - 1 } else { n - 1 }) as u32));
        self.next.extend((0..n).map(|i| (if i < n - 1 { i + 1 } else { 0 }) as u32));
        self.staged.clear();

        let budget = (n - 2) * (n - 2);
        let mut remaining = n;
        let mut curr = 0u32;
        let mut steps = 0usize;

        while remaining > 2 {
            if steps >= budget {
                return Err(TriangulateError::IterationBudget { steps });
            }
            steps += 1;

            let a = self.prev[curr as usize];
            let c = self.next[curr as usize];
            if self.is_ear(verts, curr) {
                self.staged.push(a + base);
                self.staged.push(curr + base);
                self.staged.push(c + base);

                // Unlink the ear tip and resume the scan at its successor.
                self.next[a as usize] = c;
                self.prev[c as usize] = a;
                remaining -= 1;
                curr = c;
            } else {
                curr = c;
            }
        }

        out.copy_from_slice(&self.staged);
        Ok(())
    }

    /// An ear is a convex corner whose triangle contains no other
    /// still-linked vertex.
    fn is_ear(&self, verts: &[Vertex], ear: u32) -> bool {
        let a = self.prev[ear as usize];
        let c = self.next[ear as usize];

        let [ax, ay] = verts[a as usize].pos;
        let [bx, by] = verts[ear as usize].pos;
        let [cx, cy] = verts[c as usize].pos;

        // Convexity under the CCW convention: signed area must be negative.
        // Zero rejects collinear corners as ears.
        if area(ax, ay, bx, by, cx, cy) >= 0.0 {
            return false;
        }

        // Walk the remaining linked vertices. Only a reflex vertex inside the
        // candidate triangle blocks the ear; the containment test counts the
        // boundary as inside, which is why convex vertices must be exempt.
        let mut p = self.next[c as usize];
        while p != a {
            let [px, py] = verts[p as usize].pos;
            let [ppx, ppy] = verts[self.prev[p as usize] as usize].pos;
            let [npx, npy] = verts[self.next[p as usize] as usize].pos;
            if in_triangle(ax, ay, bx, by, cx, cy, px, py)
                && area(ppx, ppy, px, py, npx, npy) >= 0.0
            {
                return false;
            }
            p = self.next[p as usize];
        }
        true
    }
}

/// Signed-area test for corner (a, b, c); negative means convex for
/// counter-clockwise input.
#[inline]
fn area(ax: f32, ay: f32, bx: f32, by: f32, cx: f32, cy: f32) -> f32 {
    (by - ay) * (cx - bx) - (bx - ax) * (cy - by)
}

/// Boundary-inclusive point-in-triangle test for (p) against (a, b, c).
#[inline]
#[allow(clippy::too_many_arguments)]
fn in_triangle(
    ax: f32,
    ay: f32,
    bx: f32,
    by: f32,
    cx: f32,
    cy: f32,
    px: f32,
    py: f32,
) -> bool {
    (cx - px) * (ay - py) - (ax - px) * (cy - py) >= 0.0
        && (ax - px) * (by - py) - (bx - px) * (ay - py) >= 0.0
        && (bx - px) * (cy - py) - (cx - px) * (by - py) >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::drops::PolygonStore;

    fn poly(points: &[(f32, f32)]) -> Vec<Vertex> {
        points.iter().map(|&(x, y)| Vertex::new(x, y)).collect()
    }

    /// Shoelace area of a closed polygon (positive for CCW).
    fn polygon_area(verts: &[Vertex]) -> f32 {
        let mut doubled = 0.0f32;
        for i in 0..verts.len() {
            let [ax, ay] = verts[i].pos;
            let [bx, by] = verts[(i + 1) % verts.len()].pos;
            doubled += ax * by - bx * ay;
        }
        doubled * 0.5
    }

    fn triangle_area(verts: &[Vertex], i: u32, j: u32, k: u32) -> f32 {
        let [ax, ay] = verts[i as usize].pos;
        let [bx, by] = verts[j as usize].pos;
        let [cx, cy] = verts[k as usize].pos;
        0.5 * ((bx - ax) * (cy - ay) - (cx - ax) * (by - ay))
    }

    fn assert_tiles(verts: &[Vertex], indices: &[u32]) {
        assert_eq!(indices.len(), 3 * (verts.len() - 2));
        let mut total = 0.0f32;
        for tri in indices.chunks_exact(3) {
            let a = triangle_area(verts, tri[0], tri[1], tri[2]);
            // Every emitted triangle keeps the input winding.
            assert!(a > 0.0, "degenerate or flipped triangle {tri:?}");
            total += a;
        }
        let expected = polygon_area(verts);
        assert!(
            (total - expected).abs() < 1e-4 * expected.abs().max(1.0),
            "triangles cover {total}, polygon area {expected}"
        );
    }

    // ── basics ────────────────────────────────────────────────────────────

    #[test]
    fn triangle_passes_through() {
        let verts = poly(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let mut out = [0u32; 3];
        Triangulator::new().triangulate(&verts, 0, &mut out).unwrap();
        let mut sorted = out;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2]);
    }

    #[test]
    fn square_yields_two_triangles() {
        let verts = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let mut out = [0u32; 6];
        Triangulator::new().triangulate(&verts, 0, &mut out).unwrap();
        assert_tiles(&verts, &out);
    }

    #[test]
    fn regular_octagon_tiles_exactly() {
        let mut store = PolygonStore::new(1, 8);
        store.write_resting(0, Vec2::zero(), 0.25);
        let verts = store.slot_vertices(0).to_vec();
        let mut out = [0u32; 18];
        Triangulator::new().triangulate(&verts, 0, &mut out).unwrap();
        assert_tiles(&verts, &out);
    }

    #[test]
    fn twenty_gon_tiles_exactly() {
        let mut store = PolygonStore::new(1, 20);
        store.write_resting(0, Vec2::new(0.3, -0.1), 0.4);
        let verts = store.slot_vertices(0).to_vec();
        let mut out = vec![0u32; 3 * 18];
        Triangulator::new().triangulate(&verts, 0, &mut out).unwrap();
        assert_tiles(&verts, &out);
    }

    // ── concave input ─────────────────────────────────────────────────────

    #[test]
    fn concave_arrowhead() {
        // Reflex vertex at (2, 1).
        let verts = poly(&[(0.0, 0.0), (2.0, 1.0), (4.0, 0.0), (2.0, 3.0)]);
        let mut out = [0u32; 6];
        Triangulator::new().triangulate(&verts, 0, &mut out).unwrap();
        assert_tiles(&verts, &out);
    }

    #[test]
    fn concave_l_shape() {
        let verts = poly(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ]);
        let mut out = [0u32; 12];
        Triangulator::new().triangulate(&verts, 0, &mut out).unwrap();
        assert_tiles(&verts, &out);
    }

    // ── base offset ───────────────────────────────────────────────────────

    #[test]
    fn base_offset_applies_to_every_index() {
        let verts = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let mut out = [0u32; 6];
        Triangulator::new().triangulate(&verts, 40, &mut out).unwrap();
        assert!(out.iter().all(|&i| (40..44).contains(&i)));
    }

    // ── failure semantics ─────────────────────────────────────────────────

    #[test]
    fn collinear_input_exhausts_the_budget() {
        let verts = poly(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let mut out = [0u32; 6];
        let err = Triangulator::new().triangulate(&verts, 0, &mut out).unwrap_err();
        assert!(matches!(err, TriangulateError::IterationBudget { .. }));
    }

    #[test]
    fn failure_leaves_the_output_window_untouched() {
        let verts = poly(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let mut out = [7u32; 6];
        let mut tri = Triangulator::new();
        assert!(tri.triangulate(&verts, 0, &mut out).is_err());
        assert_eq!(out, [7u32; 6]);
    }

    #[test]
    #[should_panic(expected = "index window size mismatch")]
    fn wrong_window_size_panics() {
        let verts = poly(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let mut out = [0u32; 4];
        let _ = Triangulator::new().triangulate(&verts, 0, &mut out);
    }

    #[test]
    fn too_few_vertices_is_rejected() {
        let verts = poly(&[(0.0, 0.0), (1.0, 0.0)]);
        let mut out = [];
        let err = Triangulator::new().triangulate(&verts, 0, &mut out).unwrap_err();
        assert_eq!(err, TriangulateError::TooFewVertices { count: 2 });
    }

    // ── scratch reuse ─────────────────────────────────────────────────────

    #[test]
    fn one_instance_serves_mixed_sizes() {
        let mut tri = Triangulator::new();
        let square = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let mut out4 = [0u32; 6];
        tri.triangulate(&square, 0, &mut out4).unwrap();

        let mut store = PolygonStore::new(1, 12);
        store.write_resting(0, Vec2::zero(), 1.0);
        let verts = store.slot_vertices(0).to_vec();
        let mut out12 = vec![0u32; 30];
        tri.triangulate(&verts, 0, &mut out12).unwrap();
        assert_tiles(&verts, &out12);

        tri.triangulate(&square, 0, &mut out4).unwrap();
        assert_tiles(&square, &out4);
    }
}

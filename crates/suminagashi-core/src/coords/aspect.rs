/// Aspect-ratio correction pair reported by `Resize` events.
///
/// Purely cosmetic: the renderer scales clip-space positions by it so drops
/// stay circular on non-square surfaces. It never feeds back into vertex
/// positions or triangulation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aspect {
    pub x: f32,
    pub y: f32,
}

impl Aspect {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Square surface; the identity correction.
    #[inline]
    pub const fn square() -> Self {
        Self::new(1.0, 1.0)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x > 0.0 && self.y > 0.0 && self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Aspect {
    fn default() -> Self {
        Self::square()
    }
}

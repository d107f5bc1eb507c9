use core::fmt;

use rand::Rng;

use crate::coords::{Aspect, ColorRgba, Vec2};

/// Why an event was rejected.
///
/// Rejection happens before allocation; registry and buffers are untouched.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EventError {
    /// Radius must be positive and finite.
    InvalidRadius(f32),
    /// Center must be finite and inside the accepted `[-1, 1]` domain.
    CenterOutOfDomain(Vec2),
    /// Color channels must be finite.
    NonFiniteColor,
    /// Aspect components must be positive and finite.
    InvalidAspect(Aspect),
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius(r) => write!(f, "drop radius {r} is not positive and finite"),
            Self::CenterOutOfDomain(c) => {
                write!(f, "drop center ({}, {}) is outside [-1, 1]", c.x, c.y)
            }
            Self::NonFiniteColor => write!(f, "drop color has non-finite channels"),
            Self::InvalidAspect(a) => write!(f, "aspect ({}, {}) is not valid", a.x, a.y),
        }
    }
}

impl std::error::Error for EventError {}

/// One "place drop" request: where the ink lands, how hard it pushes, and
/// what color the new drop gets.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DropEvent {
    /// Center in normalized device coordinates.
    pub center: Vec2,
    /// Resting radius; also sets the strength of the radial push.
    pub radius: f32,
    /// Color recorded at allocation, constant for the slot's lifetime.
    pub color: ColorRgba,
}

impl DropEvent {
    #[inline]
    pub const fn new(center: Vec2, radius: f32, color: ColorRgba) -> Self {
        Self { center, radius, color }
    }

    /// Checks the event against the accepted input domain.
    pub fn validate(&self) -> Result<(), EventError> {
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(EventError::InvalidRadius(self.radius));
        }
        if !self.center.is_finite()
            || self.center.x.abs() > 1.0
            || self.center.y.abs() > 1.0
        {
            return Err(EventError::CenterOutOfDomain(self.center));
        }
        if !self.color.is_finite() {
            return Err(EventError::NonFiniteColor);
        }
        Ok(())
    }

    /// Builds a synthetic drop: a random opaque color somewhere inside the
    /// canvas, kept away from the very edge so the resting shape stays
    /// mostly visible.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            center: Vec2::new(rng.random_range(-0.8..=0.8), rng.random_range(-0.8..=0.8)),
            radius: rng.random_range(0.05..=0.25),
            color: ColorRgba::new(
                rng.random_range(0.0..=1.0),
                rng.random_range(0.0..=1.0),
                rng.random_range(0.0..=1.0),
                1.0,
            ),
        }
    }
}

/// Platform-agnostic input events accepted by the pipeline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    /// Place a new drop; queues an update pass.
    PlaceDrop(DropEvent),
    /// Surface aspect changed; cosmetic, forwarded to rendering only.
    Resize(Aspect),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ok_event() -> DropEvent {
        DropEvent::new(Vec2::new(0.5, 0.5), 0.15, ColorRgba::new(1.0, 0.0, 0.0, 1.0))
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn well_formed_event_passes() {
        assert_eq!(ok_event().validate(), Ok(()));
    }

    #[test]
    fn zero_and_negative_radius_are_rejected() {
        for r in [0.0, -0.1, f32::NAN, f32::INFINITY] {
            let ev = DropEvent { radius: r, ..ok_event() };
            assert!(matches!(ev.validate(), Err(EventError::InvalidRadius(_))));
        }
    }

    #[test]
    fn out_of_domain_center_is_rejected() {
        for c in [Vec2::new(1.5, 0.0), Vec2::new(0.0, -1.01), Vec2::new(f32::NAN, 0.0)] {
            let ev = DropEvent { center: c, ..ok_event() };
            assert!(matches!(ev.validate(), Err(EventError::CenterOutOfDomain(_))));
        }
    }

    #[test]
    fn domain_boundary_is_accepted() {
        let ev = DropEvent { center: Vec2::new(1.0, -1.0), ..ok_event() };
        assert_eq!(ev.validate(), Ok(()));
    }

    // ── synthetic drops ───────────────────────────────────────────────────

    #[test]
    fn random_events_always_validate() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..256 {
            assert_eq!(DropEvent::random(&mut rng).validate(), Ok(()));
        }
    }
}

use crate::coords::{ColorRgba, Vec2};

use super::PolygonStore;

/// Slot lifecycle over the fixed drop capacity.
///
/// Allocation is a ring: `allocate` always hands out the cursor slot and
/// advances it mod capacity. There is no free operation; a slot is implicitly
/// reclaimed when the cursor wraps back to it, discarding its accumulated
/// deformation.
///
/// Depth ordering comes from `age`: 0 is the most recently placed drop and
/// must end up on top. The key is arithmetic on the cursor, so no sort pass
/// is ever needed.
#[derive(Debug, Clone)]
pub struct DropRegistry {
    colors: Vec<ColorRgba>,
    live: Vec<bool>,
    cursor: usize,
    capacity: usize,
}

impl DropRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            colors: vec![ColorRgba::transparent(); capacity],
            live: vec![false; capacity],
            cursor: 0,
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Next slot to be handed out.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Per-slot colors, indexed by slot.
    #[inline]
    pub fn colors(&self) -> &[ColorRgba] {
        &self.colors
    }

    /// Claims the cursor slot: resets its polygon in `store` to the resting
    /// shape at `center`/`radius` (deformation is applied afterwards by the
    /// scheduler), records `color`, and advances the cursor.
    pub fn allocate(
        &mut self,
        store: &mut PolygonStore,
        center: Vec2,
        radius: f32,
        color: ColorRgba,
    ) -> usize {
        debug_assert_eq!(store.capacity(), self.capacity);
        let slot = self.cursor;
        store.write_resting(slot, center, radius);
        self.colors[slot] = color;
        self.live[slot] = true;
        self.cursor = (self.cursor + 1) % self.capacity;
        slot
    }

    /// Whether `slot` has held a drop at least once. Dead slots have no
    /// polygon yet and are skipped by triangulation.
    #[inline]
    pub fn is_live(&self, slot: usize) -> bool {
        self.live[slot]
    }

    /// Recency rank of `slot`: 0 for the most recently placed drop,
    /// `capacity - 1` for the next to be overwritten.
    #[inline]
    pub fn age(&self, slot: usize) -> usize {
        debug_assert!(slot < self.capacity, "slot {slot} out of range");
        (self.cursor + self.capacity - 1 - slot) % self.capacity
    }

    /// Slots in paint order, oldest first, so the renderer can draw
    /// back-to-front without sorting.
    pub fn slots_back_to_front(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.capacity).map(|i| (self.cursor + i) % self.capacity)
    }
}

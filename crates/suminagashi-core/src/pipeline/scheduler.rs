use anyhow::Result;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::coords::Aspect;
use crate::drops::{DropRegistry, PolygonStore};
use crate::geom::{DropDeform, Triangulator};
use crate::input::{DropEvent, EventError, InputEvent};

use super::{FrameView, Present, PresentControl};

/// Pipeline dimensions, fixed for the pipeline's lifetime.
#[derive(Debug, Copy, Clone)]
pub struct PipelineConfig {
    /// Number of drop slots in the ring.
    pub capacity: usize,
    /// Vertices per drop polygon (N); identical for every slot.
    pub verts_per_drop: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            capacity: 16,
            verts_per_drop: 20,
        }
    }
}

/// Observable scheduler state.
///
/// In this synchronous kernel `Updating` and `Published` live only inside
/// [`Pipeline::pump`]; callers outside an update always observe `Idle`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PipelineState {
    /// No update in progress.
    Idle,
    /// Deform + triangulate running against the staging pool.
    Updating,
    /// Parity flipped; the former staging pool is now active.
    Published,
}

/// The update/render scheduler.
///
/// Owns two equally sized vertex pools. A single parity bit selects which is
/// active (read by the renderer) versus staging (written by the next update);
/// the flip is the publish edge. The parity load in [`frame`](Self::frame) is
/// `Acquire` and the flip in [`pump`](Self::pump) is `AcqRel`, which is the
/// producer-before-consumer ordering the handoff contract requires when the
/// two roles run on different execution contexts. Within one context the
/// borrow checker already forbids reading a frame mid-update.
///
/// Drop events are queued FIFO and drained by `pump` in one staging pass:
/// consecutive events coalesce, but each event's deformation reads the
/// previous event's output, so vertex positions are identical to sequential
/// application and events are never reordered.
pub struct Pipeline {
    buffers: [PolygonStore; 2],
    /// false → `buffers[0]` active, true → `buffers[1]` active.
    parity: AtomicBool,
    /// `capacity · 3·(N-2)` entries; size fixed, contents rewritten per update.
    indices: Vec<u32>,
    /// Pre-deform snapshot source for each event's transform.
    scratch: PolygonStore,
    tri: Triangulator,
    registry: DropRegistry,
    queue: VecDeque<DropEvent>,
    state: PipelineState,
    aspect: Aspect,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        anyhow::ensure!(config.capacity > 0, "drop capacity must be non-zero");
        anyhow::ensure!(
            config.verts_per_drop >= 3,
            "drop polygons need at least 3 vertices"
        );
        let pool_len = config
            .capacity
            .checked_mul(config.verts_per_drop)
            .filter(|&len| len <= u32::MAX as usize);
        anyhow::ensure!(
            pool_len.is_some(),
            "vertex pool does not fit 32-bit indices"
        );

        let (c, n) = (config.capacity, config.verts_per_drop);
        Ok(Self {
            buffers: [PolygonStore::new(c, n), PolygonStore::new(c, n)],
            parity: AtomicBool::new(false),
            indices: vec![0u32; c * 3 * (n - 2)],
            scratch: PolygonStore::new(c, n),
            tri: Triangulator::new(),
            registry: DropRegistry::new(c),
            queue: VecDeque::new(),
            state: PipelineState::Idle,
            aspect: Aspect::square(),
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffers[0].capacity()
    }

    #[inline]
    pub fn verts_per_drop(&self) -> usize {
        self.buffers[0].verts_per_drop()
    }

    #[inline]
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Queued events not yet applied.
    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn registry(&self) -> &DropRegistry {
        &self.registry
    }

    /// Routes a platform-agnostic input event.
    pub fn handle(&mut self, event: InputEvent) -> Result<(), EventError> {
        match event {
            InputEvent::PlaceDrop(ev) => self.submit(ev),
            InputEvent::Resize(aspect) => self.resize(aspect),
        }
    }

    /// Validates and enqueues a drop event.
    ///
    /// Rejected events leave every piece of state untouched; accepted events
    /// are applied by the next [`pump`](Self::pump), strictly in arrival
    /// order.
    pub fn submit(&mut self, event: DropEvent) -> Result<(), EventError> {
        event.validate()?;
        self.queue.push_back(event);
        log::debug!(
            "queued drop at ({}, {}) r={} ({} pending)",
            event.center.x,
            event.center.y,
            event.radius,
            self.queue.len()
        );
        Ok(())
    }

    /// Stores the cosmetic aspect correction. Vertex positions and
    /// triangulation are unaffected.
    pub fn resize(&mut self, aspect: Aspect) -> Result<(), EventError> {
        if !aspect.is_valid() {
            return Err(EventError::InvalidAspect(aspect));
        }
        self.aspect = aspect;
        Ok(())
    }

    /// Runs one update pass if any events are queued.
    ///
    /// Drains the queue FIFO: for each event, allocate the cursor slot (its
    /// resting shape lands in staging), then deform the whole pool from a
    /// snapshot into staging. Afterwards every live slot is retriangulated
    /// and the parity flips exactly once. Returns whether a publish happened.
    ///
    /// A slot whose triangulation exceeds its budget keeps its previous
    /// index window and the failure is logged; the buffers stay consistent.
    pub fn pump(&mut self) -> bool {
        if self.queue.is_empty() {
            return false;
        }
        self.state = PipelineState::Updating;
        log::debug!("update pass: {} event(s)", self.queue.len());

        let active_is_b = self.parity.load(Ordering::Relaxed);
        let (lo, hi) = self.buffers.split_at_mut(1);
        let (active, staging) = if active_is_b {
            (&hi[0], &mut lo[0])
        } else {
            (&lo[0], &mut hi[0])
        };

        // The update is a function of the active snapshot; the active pool
        // itself is never written while the renderer may read it.
        staging.copy_from(active);

        while let Some(ev) = self.queue.pop_front() {
            let slot = self
                .registry
                .allocate(staging, ev.center, ev.radius, ev.color);
            self.scratch.copy_from(staging);
            DropDeform::new(ev.center, ev.radius)
                .apply(self.scratch.vertices(), staging.vertices_mut());
            log::debug!("drop placed in slot {slot}");
        }

        let stride = 3 * (staging.verts_per_drop() - 2);
        for slot in 0..staging.capacity() {
            if !self.registry.is_live(slot) {
                continue;
            }
            let window = staging.slot_window(slot);
            let base = window.start as u32;
            let out = &mut self.indices[slot * stride..(slot + 1) * stride];
            if let Err(err) = self.tri.triangulate(&staging.vertices()[window], base, out) {
                log::warn!("slot {slot}: {err}; keeping previous triangulation");
            }
        }

        self.state = PipelineState::Published;
        self.parity.fetch_xor(true, Ordering::AcqRel);
        self.state = PipelineState::Idle;
        true
    }

    /// View of the published buffers for the current frame.
    pub fn frame(&self) -> FrameView<'_> {
        // Pairs with the AcqRel flip in `pump`.
        let active = &self.buffers[usize::from(self.parity.load(Ordering::Acquire))];
        FrameView {
            vertices: active.vertices(),
            indices: &self.indices,
            colors: self.registry.colors(),
            cursor: self.registry.cursor(),
            aspect: self.aspect,
        }
    }

    /// Drives one presentation of the current frame.
    pub fn render_frame<P: Present>(&self, renderer: &mut P) -> PresentControl {
        renderer.present(&self.frame())
    }
}

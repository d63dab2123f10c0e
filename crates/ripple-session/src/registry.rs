//! Session storage and lifecycle management.
//!
//! The [`SequenceRegistry`] is the central store for in-flight progressive
//! fills. It is the exclusive owner of every [`FillSequence`]; callers only
//! ever hold a [`SequenceId`]. Identifiers are issued from an atomic
//! counter starting at 1 and are never reused, so concurrent `prepare`
//! calls always receive distinct ids.
//!
//! Locking is two-level: a map lock held only for insert/lookup/remove,
//! plus one lock per sequence that serializes `advance` and `release` on
//! the same session. Calls on different sessions proceed in parallel. A
//! `release` that races an in-flight `advance` removes the map entry
//! immediately; the session itself is freed when the `advance` drops its
//! guard, because the `Arc` keeps it alive until then.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use ripple_fill::{discover_layers, Canvas, Color, Discovery, Point};

use crate::error::SessionError;
use crate::progress::ProgressReport;
use crate::sequence::FillSequence;

/// Opaque identifier for a registered fill sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceId(pub u64);

/// Outcome of preparing a progressive fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepareOutcome {
    /// A session was registered under this identifier.
    Created(SequenceId),
    /// The seed color already matches the target within tolerance. No
    /// session was created; there is nothing to animate.
    AlreadyFilled,
}

/// Concurrent store of in-flight progressive fills.
#[derive(Debug)]
pub struct SequenceRegistry {
    sequences: Mutex<HashMap<u64, Arc<Mutex<FillSequence>>>>,
    next_id: AtomicU64,
}

impl Default for SequenceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceRegistry {
    pub fn new() -> Self {
        Self {
            sequences: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of live sequences.
    pub fn len(&self) -> usize {
        lock(&self.sequences).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.sequences).is_empty()
    }

    pub fn contains(&self, id: SequenceId) -> bool {
        lock(&self.sequences).contains_key(&id.0)
    }

    /// Discover the fill region around `seed` and register it as a session.
    ///
    /// The canvas is only read; painting is deferred to [`advance`]. The
    /// seed must come from [`Canvas::seed`], and `fill_argb` uses the host
    /// packed-ARGB convention.
    ///
    /// [`advance`]: SequenceRegistry::advance
    pub fn prepare(
        &self,
        canvas: &Canvas,
        seed: Point,
        fill_argb: u32,
        tolerance: u8,
    ) -> PrepareOutcome {
        let layers = match discover_layers(canvas, seed, fill_argb, tolerance) {
            Discovery::AlreadyFilled => return PrepareOutcome::AlreadyFilled,
            Discovery::Layers(layers) => layers,
        };

        let sequence = FillSequence::new(
            layers,
            Color::from_argb(fill_argb),
            canvas.width(),
            canvas.height(),
        );
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        log::debug!(
            "registered fill sequence {id}: {} layers, {} pixels",
            sequence.total_layers(),
            sequence.total_pixels()
        );
        lock(&self.sequences).insert(id, Arc::new(Mutex::new(sequence)));
        PrepareOutcome::Created(SequenceId(id))
    }

    /// Paint up to `layer_count` further rings of a session onto `canvas`.
    ///
    /// The count is clamped to the remaining rings, and zero is a valid
    /// no-op that still returns a report. The canvas must have the
    /// dimensions the session was prepared against.
    pub fn advance(
        &self,
        id: SequenceId,
        canvas: &mut Canvas,
        layer_count: usize,
    ) -> Result<ProgressReport, SessionError> {
        // Clone the Arc out so the map lock is not held while painting.
        let session = lock(&self.sequences)
            .get(&id.0)
            .cloned()
            .ok_or(SessionError::SequenceNotFound(id))?;
        let mut sequence = lock(&session);

        if sequence.width() != canvas.width() || sequence.height() != canvas.height() {
            return Err(SessionError::DimensionMismatch {
                expected_width: sequence.width(),
                expected_height: sequence.height(),
                actual_width: canvas.width(),
                actual_height: canvas.height(),
            });
        }

        let painted = sequence.apply_next(canvas, layer_count);
        Ok(sequence.report(painted))
    }

    /// Remove and dispose a session. Releasing an unknown or already
    /// released identifier is a silent no-op, so disposal is always safe
    /// to call defensively.
    pub fn release(&self, id: SequenceId) {
        if lock(&self.sequences).remove(&id.0).is_some() {
            log::debug!("released fill sequence {}", id.0);
        }
    }
}

/// Lock a mutex, riding through poisoning. A poisoned guard only means
/// another caller panicked mid-step; the structural invariants of the map
/// and sequences do not depend on completing a step.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

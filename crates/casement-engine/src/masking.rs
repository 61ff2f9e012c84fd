//! Temporary roof removal over window-affected cells.
//!
//! The host's lighting pass treats roofed cells as dark. For the duration
//! of one pass, [`RoofMaskingSession`] clears the roof over every cell a
//! window lets light into and puts the original roof back afterwards.
//!
//! The session is a two-state machine (`Idle` and `Masking`). The snapshot
//! taken at [`begin`](RoofMaskingSession::begin) must be restored by a
//! matching [`end`](RoofMaskingSession::end) on the same map, or the host's
//! roof layer is left corrupted. [`MaskGuard`] makes the restore
//! unconditional.

use crate::registry::WindowRegistry;
use casement_core::{Cell, MapInstanceId, MaskingError, RoofId, RoofWriter};
use indexmap::IndexMap;
use std::ops::{Deref, DerefMut};

/// Where a [`RoofMaskingSession`] is in its pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No pass in progress; roof data is untouched.
    #[default]
    Idle,
    /// Roofs over window cells are hidden on `map`.
    Masking {
        /// Map the pass was started on.
        map: MapInstanceId,
    },
}

/// Drives masking passes for one host.
///
/// Remembers which map it last served. Beginning a pass on a different
/// map, or after [`invalidate`](Self::invalidate), rebinds the window
/// registry so every affected-cell set is recomputed for that map.
#[derive(Debug, Default)]
pub struct RoofMaskingSession {
    state: SessionState,
    bound: Option<MapInstanceId>,
    stale: bool,
    snapshot: IndexMap<Cell, Option<RoofId>>,
}

impl RoofMaskingSession {
    /// A fresh, idle session bound to no map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a rebind on the next [`begin`](Self::begin).
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// `true` while a pass is in progress.
    pub fn is_masking(&self) -> bool {
        matches!(self.state, SessionState::Masking { .. })
    }

    /// Map the session last served.
    pub fn bound_map(&self) -> Option<MapInstanceId> {
        self.bound
    }

    /// Number of cells currently held in the snapshot.
    pub fn held(&self) -> usize {
        self.snapshot.len()
    }

    /// Hide the roof over every window-affected cell of `map`.
    ///
    /// Returns the number of cells masked.
    pub fn begin<M: RoofWriter + ?Sized>(
        &mut self,
        map: &mut M,
        registry: &mut WindowRegistry,
    ) -> Result<usize, MaskingError> {
        if self.is_masking() {
            let err = MaskingError::AlreadyMasking {
                held: self.snapshot.len(),
            };
            log::error!("roof masking: {err}");
            return Err(err);
        }

        let id = map.map_id();
        if self.stale || self.bound != Some(id) {
            log::debug!("roof masking session rebinding to map {id}");
            if self.stale {
                registry.mark_all_dirty();
            }
            registry.bind_map(id);
            self.bound = Some(id);
            self.stale = false;
        }

        let cells = registry.window_cells(&*map);
        for cell in cells {
            let roof = map.roof_at(cell);
            self.snapshot.entry(cell).or_insert(roof);
            map.set_roof(cell, None);
        }
        self.state = SessionState::Masking { map: id };
        Ok(self.snapshot.len())
    }

    /// Restore every roof hidden by the matching [`begin`](Self::begin).
    ///
    /// Returns the number of cells restored. On a map mismatch nothing is
    /// written and the pass stays open.
    pub fn end<M: RoofWriter + ?Sized>(&mut self, map: &mut M) -> Result<usize, MaskingError> {
        let expected = match self.state {
            SessionState::Masking { map } => map,
            SessionState::Idle => {
                let err = MaskingError::NotMasking;
                log::error!("roof masking: {err}");
                return Err(err);
            }
        };
        let actual = map.map_id();
        if actual != expected {
            let err = MaskingError::MapMismatch { expected, actual };
            log::error!("roof masking: {err}");
            return Err(err);
        }

        let restored = self.snapshot.len();
        for (cell, roof) in self.snapshot.drain(..) {
            map.set_roof(cell, roof);
        }
        self.state = SessionState::Idle;
        Ok(restored)
    }

    /// Begin a pass and return a guard that ends it when dropped.
    pub fn mask<'s, 'm, M: RoofWriter + ?Sized>(
        &'s mut self,
        map: &'m mut M,
        registry: &mut WindowRegistry,
    ) -> Result<MaskGuard<'s, 'm, M>, MaskingError> {
        self.begin(map, registry)?;
        Ok(MaskGuard {
            session: self,
            map,
            finished: false,
        })
    }

    /// Run `f` on `map` with window roofs hidden, restoring them afterwards.
    pub fn with_masked<M, R, F>(
        &mut self,
        map: &mut M,
        registry: &mut WindowRegistry,
        f: F,
    ) -> Result<R, MaskingError>
    where
        M: RoofWriter + ?Sized,
        F: FnOnce(&mut M) -> R,
    {
        let mut guard = self.mask(map, registry)?;
        let out = f(&mut *guard);
        guard.finish()?;
        Ok(out)
    }
}

impl Drop for RoofMaskingSession {
    fn drop(&mut self) {
        if let SessionState::Masking { map } = self.state {
            log::error!(
                "roof masking session dropped mid-pass on map {map}: {} roofs not restored",
                self.snapshot.len()
            );
        }
    }
}

/// An open masking pass. Derefs to the map; ends the pass on drop.
pub struct MaskGuard<'s, 'm, M: RoofWriter + ?Sized> {
    session: &'s mut RoofMaskingSession,
    map: &'m mut M,
    finished: bool,
}

impl<M: RoofWriter + ?Sized> MaskGuard<'_, '_, M> {
    /// End the pass now, surfacing any error instead of only logging it.
    pub fn finish(mut self) -> Result<usize, MaskingError> {
        self.finished = true;
        self.session.end(&mut *self.map)
    }

    /// Number of cells the pass is holding.
    pub fn held(&self) -> usize {
        self.session.held()
    }
}

impl<M: RoofWriter + ?Sized> Deref for MaskGuard<'_, '_, M> {
    type Target = M;

    fn deref(&self) -> &M {
        self.map
    }
}

impl<M: RoofWriter + ?Sized> DerefMut for MaskGuard<'_, '_, M> {
    fn deref_mut(&mut self) -> &mut M {
        self.map
    }
}

impl<M: RoofWriter + ?Sized> Drop for MaskGuard<'_, '_, M> {
    fn drop(&mut self) {
        if !self.finished {
            // Errors are already logged by `end`.
            let _ = self.session.end(&mut *self.map);
        }
    }
}

//! The host-facing hook surface.
//!
//! [`WindowVisibility`] owns a [`WindowRegistry`] and a
//! [`RoofMaskingSession`] and exposes one method per host event. Hook
//! methods never fail on stale host state: an event about a window the
//! registry does not know is logged and ignored. Masking hooks surface
//! their errors, since an unbalanced pass corrupts roof data.

use crate::masking::{MaskGuard, RoofMaskingSession};
use crate::propagate::propagate;
use crate::registry::WindowRegistry;
use casement_core::{
    Cell, ConfigError, GridQuery, MaskingError, RegionQuery, RoofWriter, WindowId,
};
use casement_sight::VisibilityConfig;
use casement_space::Placement;

/// Window visibility for one host.
#[derive(Debug, Default)]
pub struct WindowVisibility {
    registry: WindowRegistry,
    session: RoofMaskingSession,
}

impl WindowVisibility {
    /// Create with validated tuning.
    pub fn new(config: VisibilityConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            registry: WindowRegistry::new(config)?,
            session: RoofMaskingSession::new(),
        })
    }

    /// The window registry.
    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// Mutable access to the window registry.
    pub fn registry_mut(&mut self) -> &mut WindowRegistry {
        &mut self.registry
    }

    /// The masking session.
    pub fn session(&self) -> &RoofMaskingSession {
        &self.session
    }

    // ── Window events ───────────────────────────────────────────

    /// A window was built, moved, rotated or resized.
    pub fn on_window_placed_or_moved<G: GridQuery + ?Sized>(
        &mut self,
        grid: &G,
        id: WindowId,
        placement: Placement,
    ) {
        let result = if self.registry.contains(id) {
            self.registry.move_window(grid, id, placement)
        } else {
            self.registry.place(grid, id, placement, false)
        };
        if let Err(e) = result {
            log::warn!("window {id} not placed: {e}");
        }
    }

    /// A window was deconstructed or destroyed.
    pub fn on_window_removed(&mut self, id: WindowId) {
        if let Err(e) = self.registry.remove(id) {
            log::warn!("ignoring removal: {e}");
        }
    }

    /// A window was opened or closed.
    pub fn on_window_toggled(&mut self, id: WindowId, open: bool) {
        if let Err(e) = self.registry.set_open(id, open) {
            log::warn!("ignoring toggle: {e}");
        }
    }

    /// A roof or structure changed at `cell`. Returns how many windows were
    /// marked for recompute.
    pub fn on_cell_roof_changed<R: RegionQuery + ?Sized>(&mut self, regions: &R, cell: Cell) -> usize {
        propagate(regions, &mut self.registry, cell)
    }

    // ── Masking ─────────────────────────────────────────────────

    /// Hide roofs over window cells before a lighting pass.
    pub fn begin_masking_pass<M: RoofWriter + ?Sized>(
        &mut self,
        map: &mut M,
    ) -> Result<usize, MaskingError> {
        self.session.begin(map, &mut self.registry)
    }

    /// Restore roofs after a lighting pass.
    pub fn end_masking_pass<M: RoofWriter + ?Sized>(
        &mut self,
        map: &mut M,
    ) -> Result<usize, MaskingError> {
        self.session.end(map)
    }

    /// Begin a guarded pass; roofs are restored when the guard drops.
    pub fn masked_pass<'s, 'm, M: RoofWriter + ?Sized>(
        &'s mut self,
        map: &'m mut M,
    ) -> Result<MaskGuard<'s, 'm, M>, MaskingError> {
        self.session.mask(map, &mut self.registry)
    }

    /// Drop every cached result; the next pass recomputes from scratch.
    ///
    /// Call on map load or when the host swaps maps under the same
    /// identity.
    pub fn invalidate(&mut self) {
        self.session.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casement_core::{RegionId, RoofId, Rot4, Size};
    use casement_test_utils::MockMap;

    fn single(x: i32, z: i32) -> Placement {
        Placement::new(Cell::new(x, z), Rot4::East, Size::ONE)
    }

    #[test]
    fn placing_twice_moves() {
        let map = MockMap::open(20, 20);
        let mut vis = WindowVisibility::default();
        vis.on_window_placed_or_moved(&map, WindowId(1), single(5, 5));
        vis.on_window_placed_or_moved(&map, WindowId(1), single(8, 8));
        assert_eq!(vis.registry().len(), 1);
        assert_eq!(
            vis.registry().get(WindowId(1)).unwrap().geometry().placement.position,
            Cell::new(8, 8)
        );
    }

    #[test]
    fn unknown_window_events_are_ignored() {
        let mut vis = WindowVisibility::default();
        vis.on_window_removed(WindowId(4));
        vis.on_window_toggled(WindowId(4), true);
        assert!(vis.registry().is_empty());
    }

    #[test]
    fn degenerate_placement_is_ignored() {
        let map = MockMap::open(20, 20);
        let mut vis = WindowVisibility::default();
        let placement = Placement::new(Cell::new(5, 5), Rot4::North, Size::new(1, 0));
        vis.on_window_placed_or_moved(&map, WindowId(1), placement);
        assert!(vis.registry().is_empty());
    }

    #[test]
    fn roof_change_marks_nearby_windows() {
        let mut map = MockMap::open(20, 20);
        map.add_region(RegionId(1), false);
        map.add_region(RegionId(2), true);
        map.link(RegionId(1), RegionId(2));
        map.put_window(RegionId(2), WindowId(1));
        map.assign_region(Cell::new(2, 2), RegionId(1));

        let mut vis = WindowVisibility::default();
        vis.on_window_placed_or_moved(&map, WindowId(1), single(5, 5));
        vis.registry_mut().refresh(&map);
        assert_eq!(vis.on_cell_roof_changed(&map, Cell::new(2, 2)), 1);
        assert_eq!(vis.registry().dirty_count(), 1);
    }

    #[test]
    fn masking_pass_round_trip() {
        let mut map = MockMap::open(20, 20);
        let mut vis = WindowVisibility::default();
        vis.on_window_placed_or_moved(&map, WindowId(1), single(5, 5));
        vis.registry_mut().refresh(&map);
        map.roof_rect(Cell::new(0, 0), Cell::new(19, 19), RoofId(1));

        assert_eq!(vis.begin_masking_pass(&mut map), Ok(18));
        assert!(vis.session().is_masking());
        assert_eq!(vis.end_masking_pass(&mut map), Ok(18));
        assert!(map.cells().all(|c| map.is_roofed(c)));

        {
            let guard = vis.masked_pass(&mut map).unwrap();
            assert!(!guard.is_roofed(Cell::new(4, 5)));
        }
        assert!(map.is_roofed(Cell::new(4, 5)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = VisibilityConfig {
            lookahead_depth: 1000,
            ..Default::default()
        };
        assert!(WindowVisibility::new(cfg).is_err());
    }
}

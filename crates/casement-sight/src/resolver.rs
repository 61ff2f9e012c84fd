//! Window obfuscation: the cells visually connected through a window.
//!
//! For each cell of a window's footprint the resolver scans forward and
//! backward along the window's sight axis. Both sides are trimmed to the
//! shorter of the two reaches, so a window never sees further out one side
//! than the other. Cells at the physical ends of the window then bleed one
//! cell sideways wherever that lateral cell is clear.

use crate::config::VisibilityConfig;
use crate::scanner::{is_clear, scan_into, Direction};
use casement_core::{Cell, GridQuery, Rot4};
use casement_space::{locate_endpoints, Endpoints, Placement};
use indexmap::{IndexMap, IndexSet};

/// A window's placement together with its cached endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowGeometry {
    /// Position, rotation and size.
    pub placement: Placement,
    /// Cells just past each end of the footprint.
    pub endpoints: Endpoints,
}

impl WindowGeometry {
    /// Build the geometry for `placement`, locating its endpoints on `grid`.
    pub fn locate<G: GridQuery + ?Sized>(grid: &G, placement: Placement) -> Self {
        let endpoints = locate_endpoints(
            grid,
            placement.position,
            placement.rotation,
            placement.size,
        );
        Self {
            placement,
            endpoints,
        }
    }
}

/// Computes window obfuscation sets, reusing one scratch clearance map.
///
/// The scratch map is cleared after every footprint cell, so nothing
/// carries over between calls.
#[derive(Debug, Default)]
pub struct ObfuscationResolver {
    config: VisibilityConfig,
    cleared: IndexMap<Cell, u32>,
}

impl ObfuscationResolver {
    /// Create a resolver with the given tuning.
    pub fn new(config: VisibilityConfig) -> Self {
        Self {
            config,
            cleared: IndexMap::new(),
        }
    }

    /// The tuning in use.
    pub fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    /// Resolve the affected-cell set of one window.
    ///
    /// Footprint cells are visited in row-major order; the walk stops at
    /// the first footprint cell outside the map. A degenerate footprint is
    /// a caller bug and yields an empty set in release builds.
    pub fn resolve<G: GridQuery + ?Sized>(
        &mut self,
        grid: &G,
        window: &WindowGeometry,
    ) -> IndexSet<Cell> {
        let Placement { rotation, size, .. } = window.placement;
        debug_assert!(!size.is_degenerate(), "degenerate window footprint {size:?}");
        let mut out = IndexSet::new();
        if size.is_degenerate() {
            return out;
        }

        let max_distance = self.config.max_distance(size);
        let large = size.max_dim() > 1;
        let right = rotation.lateral_right();
        let left = rotation.lateral_left();
        let rect = window.placement.occupied_rect();
        // An endpoint inside the footprint is the map-edge fallback and
        // marks no end.
        let start = Some(window.endpoints.start).filter(|c| !rect.contains(*c));
        let end = Some(window.endpoints.end).filter(|c| !rect.contains(*c));

        for cell in rect.cells() {
            if !grid.in_bounds(cell) {
                break;
            }
            let bleed_right = !large || Some(cell + right) == start;
            let bleed_left = !large || Some(cell + left) == end;
            self.ghost(grid, cell, rotation, max_distance, bleed_right, bleed_left, &mut out);
        }
        log::trace!(
            "window at {} ({:?}) resolved to {} cells",
            window.placement.position,
            rotation,
            out.len()
        );
        out
    }

    /// Cleared and bled cells for a single footprint cell.
    #[allow(clippy::too_many_arguments)]
    fn ghost<G: GridQuery + ?Sized>(
        &mut self,
        grid: &G,
        origin: Cell,
        rot: Rot4,
        max_distance: u32,
        bleed_right: bool,
        bleed_left: bool,
        out: &mut IndexSet<Cell>,
    ) {
        let axis = rot.sight_axis();
        self.cleared.clear();
        let forward = scan_into(grid, origin, axis, Direction::Forward, max_distance, &mut self.cleared);
        let backward = scan_into(grid, origin, axis, Direction::Backward, max_distance, &mut self.cleared);

        let obstructed = forward.min(backward);
        self.cleared.retain(|_, dist| *dist <= obstructed);
        out.extend(self.cleared.keys().copied());

        let sides = [
            (bleed_right, rot.lateral_right()),
            (bleed_left, rot.lateral_left()),
        ];
        for (eligible, step) in sides {
            if !eligible {
                continue;
            }
            for &cell in self.cleared.keys() {
                let edge = cell + step;
                if is_clear(grid, edge) {
                    out.insert(edge);
                }
            }
        }
        self.cleared.clear();
    }
}

/// Resolve one window with a throwaway resolver.
pub fn resolve<G: GridQuery + ?Sized>(
    grid: &G,
    window: &WindowGeometry,
    config: &VisibilityConfig,
) -> IndexSet<Cell> {
    ObfuscationResolver::new(config.clone()).resolve(grid, window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use casement_core::{RoofId, Size};
    use casement_test_utils::MockMap;

    fn config(depth: u32) -> VisibilityConfig {
        VisibilityConfig {
            lookahead_depth: depth,
            ..Default::default()
        }
    }

    fn window(map: &MockMap, x: i32, z: i32, rot: Rot4, size: Size) -> WindowGeometry {
        WindowGeometry::locate(map, Placement::new(Cell::new(x, z), rot, size))
    }

    fn on_line(cells: &IndexSet<Cell>, z: i32) -> Vec<Cell> {
        let mut v: Vec<Cell> = cells.iter().copied().filter(|c| c.z == z).collect();
        v.sort();
        v
    }

    // ── Single-cell windows ─────────────────────────────────────

    #[test]
    fn east_window_in_open_map_sees_four_each_way() {
        // lookahead 3 => max distance 0 + 1 + 3 = 4.
        let map = MockMap::open(20, 20);
        let w = window(&map, 5, 5, Rot4::East, Size::ONE);
        let cells = resolve(&map, &w, &config(3));

        let core = on_line(&cells, 5);
        let expected: Vec<Cell> = (1..=9).filter(|&x| x != 5).map(|x| Cell::new(x, 5)).collect();
        assert_eq!(core, expected);

        // Every cleared cell bleeds north and south.
        assert_eq!(cells.len(), 8 + 16);
        assert!(cells.contains(&Cell::new(9, 6)));
        assert!(cells.contains(&Cell::new(1, 4)));
    }

    #[test]
    fn wall_two_east_limits_both_sides_to_one() {
        let mut map = MockMap::open(20, 20);
        map.set_wall(Cell::new(7, 5));
        let w = window(&map, 5, 5, Rot4::East, Size::ONE);
        let cells = resolve(&map, &w, &config(3));

        assert_eq!(on_line(&cells, 5), vec![Cell::new(4, 5), Cell::new(6, 5)]);
        // Two cleared cells, each bleeding both ways.
        assert_eq!(cells.len(), 6);
    }

    #[test]
    fn roofed_neighbour_blocks_everything() {
        let mut map = MockMap::open(20, 20);
        map.set_roof_at(Cell::new(5, 6), Some(RoofId(1)));
        let w = window(&map, 5, 5, Rot4::North, Size::ONE);
        assert!(resolve(&map, &w, &config(2)).is_empty());
    }

    #[test]
    fn bleed_skips_blocked_lateral_cells() {
        let mut map = MockMap::open(20, 20);
        map.set_wall(Cell::new(6, 6));
        let w = window(&map, 5, 5, Rot4::East, Size::ONE);
        let cells = resolve(&map, &w, &config(0));
        // Max distance 1: cleared (4,5) and (6,5); (6,6) is a wall.
        assert!(cells.contains(&Cell::new(6, 4)));
        assert!(!cells.contains(&Cell::new(6, 6)));
        assert_eq!(cells.len(), 2 + 3);
    }

    #[test]
    fn window_on_west_edge_sees_nothing() {
        let map = MockMap::open(20, 20);
        let w = window(&map, 0, 5, Rot4::West, Size::ONE);
        // Backward reach is zero at x = 0, so the forward side is trimmed too.
        assert!(resolve(&map, &w, &config(2)).is_empty());
    }

    // ── Multi-cell windows ──────────────────────────────────────

    #[test]
    fn three_wide_window_bleeds_only_at_its_ends() {
        let map = MockMap::open(20, 20);
        let w = window(&map, 10, 10, Rot4::North, Size::new(3, 1));
        let cells = resolve(&map, &w, &config(2));
        // Max distance 3/2 + 1 + 2 = 4; footprint x = 9..=11 looking along z.
        for x in 9..=11 {
            for dz in 1..=4 {
                assert!(cells.contains(&Cell::new(x, 10 + dz)));
                assert!(cells.contains(&Cell::new(x, 10 - dz)));
            }
        }
        // Bleed columns just outside the ends.
        assert!(cells.contains(&Cell::new(12, 12)));
        assert!(cells.contains(&Cell::new(8, 8)));
        // Nothing two columns out.
        assert!(!cells.iter().any(|c| c.x == 7 || c.x == 13));
        assert_eq!(cells.len(), 3 * 8 + 2 * 8);
    }

    #[test]
    fn window_at_map_edge_never_bleeds_into_its_own_columns() {
        let mut map = MockMap::open(20, 20);
        map.set_wall(Cell::new(18, 11));
        // Footprint x = 17..=19 touches the east edge; start falls back.
        let w = window(&map, 18, 10, Rot4::North, Size::new(3, 1));
        assert_eq!(w.endpoints.start, Cell::new(18, 10));
        assert_eq!(w.endpoints.end, Cell::new(16, 10));

        let cells = resolve(&map, &w, &config(2));
        // The wall leaves the center column with zero reach.
        assert!(!cells.iter().any(|c| c.x == 18));
        // Outer columns still see, and only the west end bleeds.
        assert!(cells.contains(&Cell::new(17, 14)));
        assert!(cells.contains(&Cell::new(19, 6)));
        assert!(cells.contains(&Cell::new(16, 13)));
        assert!(cells.iter().all(|c| matches!(c.x, 16 | 17 | 19)));
        assert_eq!(cells.len(), 8 + 8 + 8);
    }

    #[test]
    fn degenerate_footprint_is_empty_in_release() {
        if cfg!(debug_assertions) {
            return;
        }
        let map = MockMap::open(20, 20);
        let w = window(&map, 5, 5, Rot4::North, Size::new(0, 1));
        assert!(resolve(&map, &w, &config(2)).is_empty());
    }

    #[test]
    fn resolver_is_reusable() {
        let mut map = MockMap::open(20, 20);
        let mut r = ObfuscationResolver::new(config(2));
        let w = window(&map, 5, 5, Rot4::East, Size::ONE);
        let first = r.resolve(&map, &w);
        map.set_wall(Cell::new(6, 5));
        let second = r.resolve(&map, &w);
        assert!(!first.is_empty());
        assert!(second.is_empty());
        assert_eq!(r.resolve(&MockMap::open(20, 20), &w), first);
    }
}

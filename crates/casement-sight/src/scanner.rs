//! Directional clearance scanning.
//!
//! A scan starts next to an origin cell and steps outward along one axis,
//! recording each cell that passes [`is_clear`] with its step distance.
//! It stops at the first cell that fails. The number of cells recorded is
//! the scan's reach.

use casement_core::{Axis, Cell, GridQuery};
use indexmap::IndexMap;

/// Which way along an axis a scan walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Increasing coordinate (north or east).
    Forward,
    /// Decreasing coordinate (south or west), clamped at 0.
    Backward,
}

/// Result of one directional scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clearance {
    /// Cleared cells and their step distance from the origin, in walk order.
    pub cells: IndexMap<Cell, u32>,
    /// Consecutive cleared cells from the origin.
    pub reach: u32,
}

/// `true` if sight passes through `cell`: in bounds, see-through, unroofed.
#[inline]
pub fn is_clear<G: GridQuery + ?Sized>(grid: &G, cell: Cell) -> bool {
    grid.in_bounds(cell) && grid.is_see_through(cell) && !grid.is_roofed(cell)
}

/// Scan up to `max_distance` cells from `origin`.
///
/// A zero `max_distance` yields an empty clearance.
pub fn scan<G: GridQuery + ?Sized>(
    grid: &G,
    origin: Cell,
    axis: Axis,
    direction: Direction,
    max_distance: u32,
) -> Clearance {
    let mut cells = IndexMap::new();
    let reach = scan_into(grid, origin, axis, direction, max_distance, &mut cells);
    Clearance { cells, reach }
}

/// Scan into a caller-owned map, returning the reach.
///
/// Entries are appended to `out`; existing entries are left alone. The
/// backward walk clamps at coordinate 0 and ends as soon as clamping would
/// revisit the previous cell, so no cell is counted twice.
pub fn scan_into<G: GridQuery + ?Sized>(
    grid: &G,
    origin: Cell,
    axis: Axis,
    direction: Direction,
    max_distance: u32,
    out: &mut IndexMap<Cell, u32>,
) -> u32 {
    let base = origin.along(axis);
    let mut prev = origin;
    let mut reach = 0;
    for step in 1..=max_distance {
        let offset = step as i32;
        let candidate = match direction {
            Direction::Forward => origin.with_along(axis, base + offset),
            Direction::Backward => origin.with_along(axis, (base - offset).max(0)),
        };
        if candidate == prev || !is_clear(grid, candidate) {
            break;
        }
        out.insert(candidate, step);
        reach += 1;
        prev = candidate;
    }
    reach
}

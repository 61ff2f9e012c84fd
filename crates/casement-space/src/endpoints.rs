//! Window endpoint location.
//!
//! A window's two endpoints are the cells just past each physical end of
//! its footprint along the long axis. The obfuscation resolver compares
//! footprint cells against them to decide which cells sit at an end of
//! the window and may bleed sideways.

use crate::footprint::cells_adjacent_along_edge;
use casement_core::{Cell, GridQuery, LinkDirection, Rot4, Size};

/// The two logical ends of a window along its long axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Endpoints {
    /// Past the "right" end: north for horizontal rotations, east otherwise.
    pub start: Cell,
    /// Past the "left" end: south for horizontal rotations, west otherwise.
    pub end: Cell,
}

/// Which end to locate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum End {
    Start,
    End,
}

/// Locate both endpoints of a window anchored at `center`.
///
/// Each endpoint is the first in-bounds cell adjacent along the
/// corresponding footprint edge, with the footprint shifted one step
/// perpendicular to the long axis so the first ring cell lines up with the
/// window itself. If the edge has no in-bounds cell (the window touches the
/// map edge), the endpoint falls back to `center`.
///
/// # Examples
///
/// ```
/// use casement_core::{Cell, Rot4, Size};
/// use casement_space::locate_endpoints;
/// use casement_test_utils::MockMap;
///
/// let map = MockMap::open(20, 20);
/// let ends = locate_endpoints(&map, Cell::new(5, 5), Rot4::North, Size::new(3, 1));
/// assert_eq!(ends.start, Cell::new(7, 5));
/// assert_eq!(ends.end, Cell::new(3, 5));
/// ```
pub fn locate_endpoints<G: GridQuery + ?Sized>(
    grid: &G,
    center: Cell,
    rot: Rot4,
    size: Size,
) -> Endpoints {
    Endpoints {
        start: find_end(grid, center, rot, size, End::Start),
        end: find_end(grid, center, rot, size, End::End),
    }
}

fn find_end<G: GridQuery + ?Sized>(
    grid: &G,
    center: Cell,
    rot: Rot4,
    size: Size,
    which: End,
) -> Cell {
    let (dir, shift) = if rot.is_horizontal() {
        let dir = match which {
            End::Start => LinkDirection::Up,
            End::End => LinkDirection::Down,
        };
        (dir, Cell::EAST)
    } else {
        let dir = match which {
            End::Start => LinkDirection::Right,
            End::End => LinkDirection::Left,
        };
        (dir, Cell::NORTH)
    };
    cells_adjacent_along_edge(center + shift, rot, size, dir)
        .find(|&c| grid.in_bounds(c))
        .unwrap_or(center)
}

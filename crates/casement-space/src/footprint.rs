//! Occupied rectangles and edge adjacency for rotated footprints.

use casement_core::{Cell, LinkDirection, Rot4, Size};

/// Where and how an object sits on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// The object's anchor cell.
    pub position: Cell,
    /// Facing.
    pub rotation: Rot4,
    /// Unrotated footprint size.
    pub size: Size,
}

impl Placement {
    /// Construct a placement.
    pub fn new(position: Cell, rotation: Rot4, size: Size) -> Self {
        Self {
            position,
            rotation,
            size,
        }
    }

    /// The cells this placement occupies.
    pub fn occupied_rect(&self) -> CellRect {
        occupied_rect(self.position, self.rotation, self.size)
    }
}

/// An axis-aligned, inclusive rectangle of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRect {
    /// Lowest x in the rectangle.
    pub min_x: i32,
    /// Lowest z in the rectangle.
    pub min_z: i32,
    /// Number of columns.
    pub width: i32,
    /// Number of rows.
    pub height: i32,
}

impl CellRect {
    /// Highest x in the rectangle.
    pub fn max_x(&self) -> i32 {
        self.min_x + self.width - 1
    }

    /// Highest z in the rectangle.
    pub fn max_z(&self) -> i32 {
        self.min_z + self.height - 1
    }

    /// Number of cells covered.
    pub fn area(&self) -> usize {
        if self.width <= 0 || self.height <= 0 {
            return 0;
        }
        (self.width as usize) * (self.height as usize)
    }

    /// `true` if `cell` lies inside the rectangle.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min_x
            && cell.x <= self.max_x()
            && cell.z >= self.min_z
            && cell.z <= self.max_z()
    }

    /// The rectangle grown by `dx` columns and `dz` rows on every side.
    pub fn expanded(&self, dx: i32, dz: i32) -> CellRect {
        CellRect {
            min_x: self.min_x - dx,
            min_z: self.min_z - dz,
            width: self.width + 2 * dx,
            height: self.height + 2 * dz,
        }
    }

    /// `true` if the two rectangles share at least one cell.
    pub fn intersects(&self, other: &CellRect) -> bool {
        self.area() > 0
            && other.area() > 0
            && self.min_x <= other.max_x()
            && other.min_x <= self.max_x()
            && self.min_z <= other.max_z()
            && other.min_z <= self.max_z()
    }

    /// Cells in row-major order: z outer, x inner, both ascending.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (min_x, max_x) = (self.min_x, self.max_x());
        (self.min_z..=self.max_z()).flat_map(move |z| (min_x..=max_x).map(move |x| Cell::new(x, z)))
    }
}

/// Shift an object's anchor and swap its size so that even-sized
/// footprints stay on the same cells when rotated.
///
/// Single-cell footprints are returned unchanged.
pub fn adjust_for_rotation(center: Cell, size: Size, rot: Rot4) -> (Cell, Size) {
    if size.is_single_cell() {
        return (center, size);
    }
    let size = size.rotated(rot);
    let mut center = center;
    match rot {
        Rot4::North => {}
        Rot4::East => {
            if size.z % 2 == 0 {
                center.z -= 1;
            }
        }
        Rot4::South => {
            if size.x % 2 == 0 {
                center.x -= 1;
            }
            if size.z % 2 == 0 {
                center.z -= 1;
            }
        }
        Rot4::West => {
            if size.x % 2 == 0 {
                center.x -= 1;
            }
        }
    }
    (center, size)
}

/// The rectangle occupied by an object anchored at `center`.
pub fn occupied_rect(center: Cell, rot: Rot4, size: Size) -> CellRect {
    let (center, size) = adjust_for_rotation(center, size, rot);
    CellRect {
        min_x: center.x - (size.x - 1) / 2,
        min_z: center.z - (size.z - 1) / 2,
        width: size.x,
        height: size.z,
    }
}

/// Cells of the one-cell ring around a footprint on the `dir` side.
///
/// Corners are included. Cells are yielded in ascending order along the
/// edge (ascending x for `Up`/`Down`, ascending z for `Left`/`Right`).
/// Bounds are not checked.
pub fn cells_adjacent_along_edge(
    center: Cell,
    rot: Rot4,
    size: Size,
    dir: LinkDirection,
) -> impl Iterator<Item = Cell> {
    let rect = occupied_rect(center, rot, size);
    let min_x = rect.min_x - 1;
    let min_z = rect.min_z - 1;
    let max_x = rect.max_x() + 1;
    let max_z = rect.max_z() + 1;
    let (fixed, lo, hi) = match dir {
        LinkDirection::Up => (max_z, min_x, max_x),
        LinkDirection::Down => (min_z, min_x, max_x),
        LinkDirection::Left => (min_x, min_z, max_z),
        LinkDirection::Right => (max_x, min_z, max_z),
    };
    (lo..=hi).map(move |v| match dir {
        LinkDirection::Up | LinkDirection::Down => Cell::new(v, fixed),
        LinkDirection::Left | LinkDirection::Right => Cell::new(fixed, v),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect_cells(center: Cell, rot: Rot4, size: Size) -> Vec<Cell> {
        occupied_rect(center, rot, size).cells().collect()
    }

    // ── Occupied rectangles ─────────────────────────────────────

    #[test]
    fn single_cell_occupies_its_center() {
        for rot in Rot4::ALL {
            assert_eq!(rect_cells(Cell::new(5, 5), rot, Size::ONE), vec![Cell::new(5, 5)]);
        }
    }

    #[test]
    fn three_wide_north_spans_x() {
        let cells = rect_cells(Cell::new(5, 5), Rot4::North, Size::new(3, 1));
        assert_eq!(
            cells,
            vec![Cell::new(4, 5), Cell::new(5, 5), Cell::new(6, 5)]
        );
    }

    #[test]
    fn three_wide_east_spans_z() {
        let cells = rect_cells(Cell::new(5, 5), Rot4::East, Size::new(3, 1));
        assert_eq!(
            cells,
            vec![Cell::new(5, 4), Cell::new(5, 5), Cell::new(5, 6)]
        );
    }

    #[test]
    fn two_wide_keeps_cells_under_rotation() {
        // North and South cover the same two cells; so do East and West.
        let north = rect_cells(Cell::new(5, 5), Rot4::North, Size::new(2, 1));
        let south = rect_cells(Cell::new(5, 5), Rot4::South, Size::new(2, 1));
        assert_eq!(north, vec![Cell::new(5, 5), Cell::new(6, 5)]);
        assert_eq!(south, vec![Cell::new(4, 5), Cell::new(5, 5)]);

        let east = rect_cells(Cell::new(5, 5), Rot4::East, Size::new(2, 1));
        let west = rect_cells(Cell::new(5, 5), Rot4::West, Size::new(2, 1));
        assert_eq!(east, vec![Cell::new(5, 4), Cell::new(5, 5)]);
        assert_eq!(west, vec![Cell::new(5, 5), Cell::new(5, 6)]);
    }

    #[test]
    fn rect_contains_and_area() {
        let r = occupied_rect(Cell::new(0, 0), Rot4::North, Size::new(3, 3));
        assert_eq!(r.area(), 9);
        assert!(r.contains(Cell::new(-1, -1)));
        assert!(r.contains(Cell::new(1, 1)));
        assert!(!r.contains(Cell::new(2, 0)));
    }

    #[test]
    fn expanded_rects_intersect() {
        let a = occupied_rect(Cell::new(0, 0), Rot4::North, Size::ONE);
        let b = occupied_rect(Cell::new(3, 0), Rot4::North, Size::ONE);
        assert!(!a.intersects(&b));
        assert!(!a.expanded(2, 0).intersects(&b));
        assert!(a.expanded(3, 0).intersects(&b));
        assert!(!a.expanded(0, 5).intersects(&b));
        assert_eq!(a.expanded(1, 2).area(), 3 * 5);
    }

    // ── Edge adjacency ──────────────────────────────────────────

    #[test]
    fn up_edge_of_single_cell_includes_corners() {
        let cells: Vec<Cell> =
            cells_adjacent_along_edge(Cell::new(5, 5), Rot4::North, Size::ONE, LinkDirection::Up)
                .collect();
        assert_eq!(
            cells,
            vec![Cell::new(4, 6), Cell::new(5, 6), Cell::new(6, 6)]
        );
    }

    #[test]
    fn right_edge_ascends_in_z() {
        let cells: Vec<Cell> = cells_adjacent_along_edge(
            Cell::new(5, 5),
            Rot4::North,
            Size::new(3, 1),
            LinkDirection::Right,
        )
        .collect();
        assert_eq!(
            cells,
            vec![Cell::new(7, 4), Cell::new(7, 5), Cell::new(7, 6)]
        );
    }

    proptest! {
        #[test]
        fn rect_area_matches_size(
            x in -50i32..50, z in -50i32..50,
            w in 1i32..6, d in 1i32..6, r in 0u8..4,
        ) {
            let rect = occupied_rect(Cell::new(x, z), Rot4::from_int(r), Size::new(w, d));
            prop_assert_eq!(rect.area(), (w * d) as usize);
            prop_assert_eq!(rect.cells().count(), (w * d) as usize);
        }

        #[test]
        fn edge_cells_lie_outside_the_rect(
            w in 1i32..6, d in 1i32..6, r in 0u8..4, dir in 0usize..4,
        ) {
            let dirs = [LinkDirection::Up, LinkDirection::Down, LinkDirection::Left, LinkDirection::Right];
            let rot = Rot4::from_int(r);
            let size = Size::new(w, d);
            let rect = occupied_rect(Cell::new(10, 10), rot, size);
            for c in cells_adjacent_along_edge(Cell::new(10, 10), rot, size, dirs[dir]) {
                prop_assert!(!rect.contains(c));
            }
        }
    }
}

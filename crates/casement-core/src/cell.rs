//! Grid vocabulary: cells, rotations, footprint sizes and link directions.

use std::fmt;
use std::ops::{Add, Sub};

/// An integer coordinate in map space.
///
/// `x` grows eastward and `z` grows northward. The host's vertical axis
/// is irrelevant to visibility and is not represented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// East-west coordinate.
    pub x: i32,
    /// North-south coordinate.
    pub z: i32,
}

impl Cell {
    /// One step north (+z).
    pub const NORTH: Cell = Cell { x: 0, z: 1 };
    /// One step south (-z).
    pub const SOUTH: Cell = Cell { x: 0, z: -1 };
    /// One step east (+x).
    pub const EAST: Cell = Cell { x: 1, z: 0 };
    /// One step west (-x).
    pub const WEST: Cell = Cell { x: -1, z: 0 };

    /// Construct a cell from its coordinates.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The coordinate along `axis`.
    pub fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Z => self.z,
        }
    }

    /// A copy of this cell with the coordinate along `axis` replaced.
    pub fn with_along(self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::X => Self { x: value, ..self },
            Axis::Z => Self { z: value, ..self },
        }
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for Cell {
    type Output = Cell;

    fn sub(self, rhs: Cell) -> Cell {
        Cell::new(self.x - rhs.x, self.z - rhs.z)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// One of the two map axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// East-west.
    X,
    /// North-south.
    Z,
}

impl Axis {
    /// The other axis.
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }
}

/// Orientation of a placed object, one of four quarter turns.
///
/// A window's rotation says which way it faces. `East` and `West` windows
/// sit in a north-south wall and are looked through along the x axis;
/// `North` and `South` windows are looked through along z.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rot4 {
    /// Facing +z.
    #[default]
    North,
    /// Facing +x.
    East,
    /// Facing -z.
    South,
    /// Facing -x.
    West,
}

impl Rot4 {
    /// All four rotations in clockwise order starting at north.
    pub const ALL: [Rot4; 4] = [Rot4::North, Rot4::East, Rot4::South, Rot4::West];

    /// Clockwise quarter turns from north (0..=3).
    pub fn as_int(self) -> u8 {
        match self {
            Rot4::North => 0,
            Rot4::East => 1,
            Rot4::South => 2,
            Rot4::West => 3,
        }
    }

    /// Inverse of [`as_int`](Self::as_int); wraps modulo 4.
    pub fn from_int(v: u8) -> Self {
        Self::ALL[(v % 4) as usize]
    }

    /// `true` for `East` and `West`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Rot4::East | Rot4::West)
    }

    /// The axis a window with this rotation is looked through along.
    pub fn sight_axis(self) -> Axis {
        if self.is_horizontal() {
            Axis::X
        } else {
            Axis::Z
        }
    }

    /// Unit step toward the window's "right" lateral side.
    ///
    /// North for horizontal rotations, east otherwise.
    pub fn lateral_right(self) -> Cell {
        if self.is_horizontal() {
            Cell::NORTH
        } else {
            Cell::EAST
        }
    }

    /// Unit step toward the window's "left" lateral side.
    ///
    /// South for horizontal rotations, west otherwise.
    pub fn lateral_left(self) -> Cell {
        if self.is_horizontal() {
            Cell::SOUTH
        } else {
            Cell::WEST
        }
    }
}

/// Footprint dimensions of a placed object in its unrotated frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width along x when facing north.
    pub x: i32,
    /// Depth along z when facing north.
    pub z: i32,
}

impl Size {
    /// A single-cell footprint.
    pub const ONE: Size = Size { x: 1, z: 1 };

    /// Construct a size.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// `true` when either dimension is zero or negative.
    pub fn is_degenerate(self) -> bool {
        self.x <= 0 || self.z <= 0
    }

    /// `true` for a 1×1 footprint.
    pub fn is_single_cell(self) -> bool {
        self.x == 1 && self.z == 1
    }

    /// The larger of the two dimensions.
    pub fn max_dim(self) -> i32 {
        self.x.max(self.z)
    }

    /// The size as laid out on the map under `rot` (dimensions swap for
    /// horizontal rotations).
    pub fn rotated(self, rot: Rot4) -> Size {
        if rot.is_horizontal() {
            Size::new(self.z, self.x)
        } else {
            self
        }
    }
}

/// A side of a footprint rectangle, in map terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkDirection {
    /// The +z side.
    Up,
    /// The -z side.
    Down,
    /// The -x side.
    Left,
    /// The +x side.
    Right,
}

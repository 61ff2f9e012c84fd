//! Capability traits the host map implements.
//!
//! The visibility core never owns map data. Everything it needs from the
//! host goes through these three traits, split by access pattern:
//! read-only cell queries ([`GridQuery`]), roof mutation for the masking
//! pass ([`RoofWriter`]), and region connectivity for dirty propagation
//! ([`RegionQuery`]).

use crate::cell::Cell;
use crate::id::{MapInstanceId, RegionId, RoofId, WindowId};
use smallvec::SmallVec;

/// Read-only access to per-cell map state.
pub trait GridQuery {
    /// Identity of the map instance behind this view.
    ///
    /// Caches compare this against the identity they were built for and
    /// rebuild on mismatch.
    fn map_id(&self) -> MapInstanceId;

    /// `true` if `cell` lies inside the map.
    fn in_bounds(&self, cell: Cell) -> bool;

    /// `true` if the structure or terrain at `cell` does not block sight.
    ///
    /// Only called for in-bounds cells.
    fn is_see_through(&self, cell: Cell) -> bool;

    /// The roof over `cell`, or `None` if it is open to the sky.
    ///
    /// Only called for in-bounds cells.
    fn roof_at(&self, cell: Cell) -> Option<RoofId>;

    /// `true` if `cell` has any roof.
    fn is_roofed(&self, cell: Cell) -> bool {
        self.roof_at(cell).is_some()
    }
}

/// Mutable access to the roof layer, used only by the masking pass.
pub trait RoofWriter: GridQuery {
    /// Overwrite the roof over `cell`. `None` removes it.
    fn set_roof(&mut self, cell: Cell, roof: Option<RoofId>);
}

/// Region connectivity of the host map.
pub trait RegionQuery {
    /// The region containing `cell`, if the cell belongs to a valid one.
    fn region_at(&self, cell: Cell) -> Option<RegionId>;

    /// Regions sharing a link with `region`, in host order.
    fn linked_regions(&self, region: RegionId) -> SmallVec<[RegionId; 8]>;

    /// `true` if `region` is a doorway (a door or window gap).
    fn is_doorway(&self, region: RegionId) -> bool;

    /// Windows whose footprint lies in `region`.
    fn windows_in(&self, region: RegionId) -> SmallVec<[WindowId; 2]>;
}

impl<G: GridQuery + ?Sized> GridQuery for &G {
    fn map_id(&self) -> MapInstanceId {
        (**self).map_id()
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        (**self).in_bounds(cell)
    }

    fn is_see_through(&self, cell: Cell) -> bool {
        (**self).is_see_through(cell)
    }

    fn roof_at(&self, cell: Cell) -> Option<RoofId> {
        (**self).roof_at(cell)
    }

    fn is_roofed(&self, cell: Cell) -> bool {
        (**self).is_roofed(cell)
    }
}

impl<G: GridQuery + ?Sized> GridQuery for &mut G {
    fn map_id(&self) -> MapInstanceId {
        (**self).map_id()
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        (**self).in_bounds(cell)
    }

    fn is_see_through(&self, cell: Cell) -> bool {
        (**self).is_see_through(cell)
    }

    fn roof_at(&self, cell: Cell) -> Option<RoofId> {
        (**self).roof_at(cell)
    }

    fn is_roofed(&self, cell: Cell) -> bool {
        (**self).is_roofed(cell)
    }
}

impl<G: RoofWriter + ?Sized> RoofWriter for &mut G {
    fn set_roof(&mut self, cell: Cell, roof: Option<RoofId>) {
        (**self).set_roof(cell, roof)
    }
}

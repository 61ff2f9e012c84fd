//! Seeing over open windows.
//!
//! The host reports a window's cell as blocking sight, like any other
//! building. An open window must not block sight, so scans go through
//! [`SeeOverWindows`], which overrides the host's answer for the cells of
//! open windows.

use casement_core::{Cell, GridQuery, MapInstanceId, RoofId};
use indexmap::IndexSet;

/// A [`GridQuery`] view that treats open-window cells as see-through.
#[derive(Clone, Copy, Debug)]
pub struct SeeOverWindows<'a, G: ?Sized> {
    inner: &'a G,
    open_cells: &'a IndexSet<Cell>,
}

impl<'a, G: GridQuery + ?Sized> SeeOverWindows<'a, G> {
    /// Wrap `inner`, overriding sight for every cell in `open_cells`.
    pub fn new(inner: &'a G, open_cells: &'a IndexSet<Cell>) -> Self {
        Self { inner, open_cells }
    }
}

impl<G: GridQuery + ?Sized> GridQuery for SeeOverWindows<'_, G> {
    fn map_id(&self) -> MapInstanceId {
        self.inner.map_id()
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        self.inner.in_bounds(cell)
    }

    fn is_see_through(&self, cell: Cell) -> bool {
        self.open_cells.contains(&cell) || self.inner.is_see_through(cell)
    }

    fn roof_at(&self, cell: Cell) -> Option<RoofId> {
        self.inner.roof_at(cell)
    }

    fn is_roofed(&self, cell: Cell) -> bool {
        self.inner.is_roofed(cell)
    }
}

//! Test utilities and mock types for Casement development.
//!
//! Provides [`MockMap`], an in-memory host map implementing every
//! capability trait ([`GridQuery`], [`RoofWriter`], [`RegionQuery`]), so
//! the visibility core can be exercised without a game engine.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use casement_core::{
    Cell, GridQuery, MapInstanceId, RegionId, RegionQuery, RoofId, RoofWriter, WindowId,
};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Connectivity record for one mock region.
#[derive(Clone, Debug, Default)]
pub struct MockRegion {
    pub doorway: bool,
    pub links: SmallVec<[RegionId; 8]>,
    pub windows: SmallVec<[WindowId; 2]>,
}

/// In-memory host map.
///
/// Backed by flat row-major vectors (`index = z * width + x`) for walls,
/// roofs and region membership, plus a region table. Every instance gets
/// its own [`MapInstanceId`]; clones keep it.
#[derive(Clone, Debug)]
pub struct MockMap {
    width: i32,
    height: i32,
    id: MapInstanceId,
    walls: Vec<bool>,
    roofs: Vec<Option<RoofId>>,
    cell_regions: Vec<Option<RegionId>>,
    regions: IndexMap<RegionId, MockRegion>,
    roof_writes: usize,
}

impl MockMap {
    /// A `width × height` map with no walls, no roofs and no regions.
    pub fn open(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "mock map must be non-empty");
        let n = (width as usize) * (height as usize);
        Self {
            width,
            height,
            id: MapInstanceId::next(),
            walls: vec![false; n],
            roofs: vec![None; n],
            cell_regions: vec![None; n],
            regions: IndexMap::new(),
            roof_writes: 0,
        }
    }

    /// A map fully covered by `roof`.
    pub fn roofed(width: i32, height: i32, roof: RoofId) -> Self {
        let mut map = Self::open(width, height);
        map.roofs.fill(Some(roof));
        map
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Every cell of the map in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let w = self.width;
        (0..self.height).flat_map(move |z| (0..w).map(move |x| Cell::new(x, z)))
    }

    fn index(&self, cell: Cell) -> usize {
        debug_assert!(self.in_bounds(cell), "cell {cell} outside mock map");
        (cell.z as usize) * (self.width as usize) + (cell.x as usize)
    }

    // ── Cell state ──────────────────────────────────────────────

    /// Place a sight-blocking structure on `cell`.
    pub fn set_wall(&mut self, cell: Cell) {
        let i = self.index(cell);
        self.walls[i] = true;
    }

    /// Remove the structure on `cell`.
    pub fn clear_wall(&mut self, cell: Cell) {
        let i = self.index(cell);
        self.walls[i] = false;
    }

    /// Set the roof over `cell` without counting it as a host write.
    pub fn set_roof_at(&mut self, cell: Cell, roof: Option<RoofId>) {
        let i = self.index(cell);
        self.roofs[i] = roof;
    }

    /// Roof every cell of the inclusive rectangle `[min, max]`.
    pub fn roof_rect(&mut self, min: Cell, max: Cell, roof: RoofId) {
        for z in min.z..=max.z {
            for x in min.x..=max.x {
                self.set_roof_at(Cell::new(x, z), Some(roof));
            }
        }
    }

    /// The full roof layer, row-major.
    pub fn roof_layer(&self) -> &[Option<RoofId>] {
        &self.roofs
    }

    /// Number of [`RoofWriter::set_roof`] calls so far.
    pub fn roof_writes(&self) -> usize {
        self.roof_writes
    }

    // ── Regions ─────────────────────────────────────────────────

    /// Register a region. Re-adding an existing ID resets it.
    pub fn add_region(&mut self, id: RegionId, doorway: bool) {
        self.regions.insert(
            id,
            MockRegion {
                doorway,
                ..Default::default()
            },
        );
    }

    /// Assign `cell` to `region`.
    pub fn assign_region(&mut self, cell: Cell, region: RegionId) {
        let i = self.index(cell);
        self.cell_regions[i] = Some(region);
    }

    /// Link two regions in both directions.
    pub fn link(&mut self, a: RegionId, b: RegionId) {
        if let Some(r) = self.regions.get_mut(&a) {
            if !r.links.contains(&b) {
                r.links.push(b);
            }
        }
        if let Some(r) = self.regions.get_mut(&b) {
            if !r.links.contains(&a) {
                r.links.push(a);
            }
        }
    }

    /// Record that `window` sits in `region`.
    pub fn put_window(&mut self, region: RegionId, window: WindowId) {
        if let Some(r) = self.regions.get_mut(&region) {
            r.windows.push(window);
        }
    }
}

impl GridQuery for MockMap {
    fn map_id(&self) -> MapInstanceId {
        self.id
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.z >= 0 && cell.x < self.width && cell.z < self.height
    }

    fn is_see_through(&self, cell: Cell) -> bool {
        !self.walls[self.index(cell)]
    }

    fn roof_at(&self, cell: Cell) -> Option<RoofId> {
        self.roofs[self.index(cell)]
    }
}

impl RoofWriter for MockMap {
    fn set_roof(&mut self, cell: Cell, roof: Option<RoofId>) {
        self.roof_writes += 1;
        self.set_roof_at(cell, roof);
    }
}

impl RegionQuery for MockMap {
    fn region_at(&self, cell: Cell) -> Option<RegionId> {
        if !self.in_bounds(cell) {
            return None;
        }
        self.cell_regions[self.index(cell)]
    }

    fn linked_regions(&self, region: RegionId) -> SmallVec<[RegionId; 8]> {
        self.regions
            .get(&region)
            .map(|r| r.links.clone())
            .unwrap_or_default()
    }

    fn is_doorway(&self, region: RegionId) -> bool {
        self.regions.get(&region).is_some_and(|r| r.doorway)
    }

    fn windows_in(&self, region: RegionId) -> SmallVec<[WindowId; 2]> {
        self.regions
            .get(&region)
            .map(|r| r.windows.clone())
            .unwrap_or_default()
    }
}

//! The core's record of every placed window.
//!
//! [`WindowRegistry`] holds one [`Window`] per host window: its geometry,
//! open state, dirty flag and last computed affected-cell set. Sets are
//! recomputed lazily, on first access after the window was marked dirty or
//! after the registry started serving a different map.

use casement_core::{
    Cell, ConfigError, GridQuery, MapInstanceId, RegistryError, WindowId,
};
use casement_sight::{ObfuscationResolver, SeeOverWindows, VisibilityConfig, WindowGeometry};
use casement_space::{CellRect, Placement};
use indexmap::{IndexMap, IndexSet};

/// One registered window.
#[derive(Clone, Debug)]
pub struct Window {
    id: WindowId,
    geometry: WindowGeometry,
    located_for: MapInstanceId,
    open: bool,
    needs_update: bool,
    cells: IndexSet<Cell>,
    computed_for: Option<MapInstanceId>,
}

impl Window {
    fn new(id: WindowId, geometry: WindowGeometry, located_for: MapInstanceId, open: bool) -> Self {
        Self {
            id,
            geometry,
            located_for,
            open,
            needs_update: true,
            cells: IndexSet::new(),
            computed_for: None,
        }
    }

    /// Host identifier.
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Placement and cached endpoints.
    ///
    /// Endpoints depend on map bounds; they are located again whenever the
    /// window is recomputed against a map other than the one they were
    /// located on.
    pub fn geometry(&self) -> &WindowGeometry {
        &self.geometry
    }

    /// `true` if the window is switched open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// `true` if the affected-cell set must be recomputed before use.
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// The last computed affected-cell set. May be stale; use
    /// [`WindowRegistry::affected_cells`] for a fresh one.
    pub fn cached_cells(&self) -> &IndexSet<Cell> {
        &self.cells
    }

    fn is_stale_for(&self, map: MapInstanceId) -> bool {
        self.needs_update || self.computed_for != Some(map)
    }
}

/// Registry of windows on one map.
#[derive(Debug)]
pub struct WindowRegistry {
    resolver: ObfuscationResolver,
    windows: IndexMap<WindowId, Window>,
    open_cells: IndexSet<Cell>,
    map: Option<MapInstanceId>,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self {
            resolver: ObfuscationResolver::new(VisibilityConfig::default()),
            windows: IndexMap::new(),
            open_cells: IndexSet::new(),
            map: None,
        }
    }
}

impl WindowRegistry {
    /// Create an empty registry with validated tuning.
    pub fn new(config: VisibilityConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            resolver: ObfuscationResolver::new(config),
            ..Default::default()
        })
    }

    /// The tuning in use.
    pub fn config(&self) -> &VisibilityConfig {
        self.resolver.config()
    }

    /// Number of registered windows.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// `true` if no windows are registered.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Look up a window.
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    /// `true` if `id` is registered.
    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    /// Registered windows in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// The map the cached sets were last computed against.
    pub fn bound_map(&self) -> Option<MapInstanceId> {
        self.map
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Register a window, locating its endpoints on `grid`.
    ///
    /// Re-placing an existing ID behaves like [`move_window`](Self::move_window)
    /// and keeps its open state.
    pub fn place<G: GridQuery + ?Sized>(
        &mut self,
        grid: &G,
        id: WindowId,
        placement: Placement,
        open: bool,
    ) -> Result<(), RegistryError> {
        if self.windows.contains_key(&id) {
            self.move_window(grid, id, placement)?;
            return self.set_open(id, open).map(|_| ());
        }
        check_footprint(id, placement)?;
        let geometry = WindowGeometry::locate(grid, placement);
        self.windows
            .insert(id, Window::new(id, geometry, grid.map_id(), open));
        if open {
            self.rebuild_open_cells();
        }
        self.invalidate_around(placement.occupied_rect());
        Ok(())
    }

    /// Relocate, rotate or resize a window. Endpoints are located again
    /// and every window that could see the old or new footprint is marked
    /// dirty.
    pub fn move_window<G: GridQuery + ?Sized>(
        &mut self,
        grid: &G,
        id: WindowId,
        placement: Placement,
    ) -> Result<(), RegistryError> {
        check_footprint(id, placement)?;
        let window = self
            .windows
            .get_mut(&id)
            .ok_or(RegistryError::UnknownWindow { id })?;
        let old = window.geometry.placement.occupied_rect();
        window.geometry = WindowGeometry::locate(grid, placement);
        window.located_for = grid.map_id();
        window.needs_update = true;
        let open = window.open;
        if open {
            self.rebuild_open_cells();
        }
        self.invalidate_around(old);
        self.invalidate_around(placement.occupied_rect());
        Ok(())
    }

    /// Unregister a window, returning its last record.
    pub fn remove(&mut self, id: WindowId) -> Result<Window, RegistryError> {
        let window = self
            .windows
            .shift_remove(&id)
            .ok_or(RegistryError::UnknownWindow { id })?;
        if window.open {
            self.rebuild_open_cells();
        }
        self.invalidate_around(window.geometry.placement.occupied_rect());
        Ok(window)
    }

    /// Open or close a window. Returns `true` if the state changed.
    ///
    /// An open window no longer blocks sight, so every window that could
    /// see its footprint is marked dirty along with the window itself.
    pub fn set_open(&mut self, id: WindowId, open: bool) -> Result<bool, RegistryError> {
        let window = self
            .windows
            .get_mut(&id)
            .ok_or(RegistryError::UnknownWindow { id })?;
        if window.open == open {
            return Ok(false);
        }
        window.open = open;
        window.needs_update = true;
        let rect = window.geometry.placement.occupied_rect();
        self.rebuild_open_cells();
        self.invalidate_around(rect);
        Ok(true)
    }

    // ── Dirty tracking ──────────────────────────────────────────

    /// Force a recompute of `id` on next access.
    pub fn mark_dirty(&mut self, id: WindowId) -> Result<(), RegistryError> {
        self.windows
            .get_mut(&id)
            .map(|w| w.needs_update = true)
            .ok_or(RegistryError::UnknownWindow { id })
    }

    /// Force a recompute of every window on next access.
    pub fn mark_all_dirty(&mut self) {
        for w in self.windows.values_mut() {
            w.needs_update = true;
        }
    }

    /// Point the registry at `map`. Switching maps invalidates every
    /// cached set.
    pub fn bind_map(&mut self, map: MapInstanceId) {
        if self.map != Some(map) {
            self.map = Some(map);
            self.mark_all_dirty();
        }
    }

    /// Number of windows currently marked dirty.
    pub fn dirty_count(&self) -> usize {
        self.windows.values().filter(|w| w.needs_update).count()
    }

    // ── Queries ─────────────────────────────────────────────────

    /// The affected-cell set of `id`, recomputed first if stale.
    pub fn affected_cells<G: GridQuery + ?Sized>(
        &mut self,
        grid: &G,
        id: WindowId,
    ) -> Result<&IndexSet<Cell>, RegistryError> {
        if !self.windows.contains_key(&id) {
            return Err(RegistryError::UnknownWindow { id });
        }
        self.bind_map(grid.map_id());
        self.refresh_one(grid, id);
        Ok(&self.windows[&id].cells)
    }

    /// Union of every window's affected cells, recomputing stale entries.
    ///
    /// Cells shared by several windows appear once.
    pub fn window_cells<G: GridQuery + ?Sized>(&mut self, grid: &G) -> IndexSet<Cell> {
        self.refresh(grid);
        let mut out = IndexSet::new();
        for w in self.windows.values() {
            out.extend(w.cells.iter().copied());
        }
        out
    }

    /// Recompute every stale window against `grid`. Returns how many
    /// were recomputed.
    pub fn refresh<G: GridQuery + ?Sized>(&mut self, grid: &G) -> usize {
        self.bind_map(grid.map_id());
        let ids: Vec<WindowId> = self.windows.keys().copied().collect();
        ids.into_iter().filter(|&id| self.refresh_one(grid, id)).count()
    }

    /// Cover fill percent of `id`: the configured base value while closed,
    /// zero while open.
    pub fn cover_fill_percent(&self, id: WindowId) -> Result<f32, RegistryError> {
        let window = self
            .windows
            .get(&id)
            .ok_or(RegistryError::UnknownWindow { id })?;
        Ok(if window.open {
            0.0
        } else {
            self.config().base_fill_percent
        })
    }

    // ── Internals ───────────────────────────────────────────────

    fn refresh_one<G: GridQuery + ?Sized>(&mut self, grid: &G, id: WindowId) -> bool {
        let map = grid.map_id();
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        if !window.is_stale_for(map) {
            return false;
        }
        if window.located_for != map {
            window.geometry = WindowGeometry::locate(grid, window.geometry.placement);
            window.located_for = map;
        }
        let view = SeeOverWindows::new(grid, &self.open_cells);
        window.cells = self.resolver.resolve(&view, &window.geometry);
        window.needs_update = false;
        window.computed_for = Some(map);
        log::trace!("window {id} recomputed: {} cells", window.cells.len());
        true
    }

    fn rebuild_open_cells(&mut self) {
        self.open_cells.clear();
        for w in self.windows.values().filter(|w| w.open) {
            self.open_cells
                .extend(w.geometry.placement.occupied_rect().cells());
        }
    }

    /// Mark every window whose sight could touch `rect` dirty.
    fn invalidate_around(&mut self, rect: CellRect) {
        let config = self.resolver.config().clone();
        for w in self.windows.values_mut() {
            if influence_rect(&w.geometry, &config).intersects(&rect) {
                w.needs_update = true;
            }
        }
    }
}

fn check_footprint(id: WindowId, placement: Placement) -> Result<(), RegistryError> {
    if placement.size.is_degenerate() {
        return Err(RegistryError::DegenerateFootprint {
            id,
            x: placement.size.x,
            z: placement.size.z,
        });
    }
    Ok(())
}

/// Every cell a window's scans and bleed can possibly touch.
fn influence_rect(geometry: &WindowGeometry, config: &VisibilityConfig) -> CellRect {
    let placement = &geometry.placement;
    let reach = config.max_distance(placement.size) as i32;
    let rect = placement.occupied_rect();
    if placement.rotation.is_horizontal() {
        rect.expanded(reach, 1)
    } else {
        rect.expanded(1, reach)
    }
}

//! Dirty propagation through the host's region graph.
//!
//! When a cell changes (a roof is built or removed, a wall goes up) the
//! windows whose sight might pass through it must recompute. Windows sit in
//! doorway regions, so the walk looks for doorways linked to the changed
//! cell's region, and one level further through ordinary rooms.

use crate::registry::WindowRegistry;
use casement_core::{Cell, RegionId, RegionQuery, WindowId};
use indexmap::IndexSet;

/// Levels of the region graph examined from the initial region.
pub const SEARCH_DEPTH: u32 = 2;

/// Collect the windows in doorway regions near `initial`.
///
/// Regions linked to `initial` are examined; doorways contribute every
/// window they hold, other regions are examined one level deeper and no
/// further. `ignore`, if given, is skipped at every level.
pub fn find_affected_windows<R: RegionQuery + ?Sized>(
    regions: &R,
    initial: RegionId,
    ignore: Option<RegionId>,
) -> IndexSet<WindowId> {
    let mut found = IndexSet::new();
    collect(regions, initial, ignore, SEARCH_DEPTH, &mut found);
    found
}

fn collect<R: RegionQuery + ?Sized>(
    regions: &R,
    from: RegionId,
    ignore: Option<RegionId>,
    depth: u32,
    found: &mut IndexSet<WindowId>,
) {
    if depth == 0 {
        return;
    }
    for linked in regions.linked_regions(from) {
        if Some(linked) == ignore {
            continue;
        }
        if regions.is_doorway(linked) {
            found.extend(regions.windows_in(linked));
        } else {
            collect(regions, linked, ignore, depth - 1, found);
        }
    }
}

/// Mark every window near `cell` dirty. Returns how many were marked.
///
/// A cell outside any region is a no-op. Windows the host reports but the
/// registry does not know are skipped.
pub fn propagate<R: RegionQuery + ?Sized>(
    regions: &R,
    registry: &mut WindowRegistry,
    cell: Cell,
) -> usize {
    let Some(initial) = regions.region_at(cell) else {
        return 0;
    };
    let affected = find_affected_windows(regions, initial, None);
    let marked = affected
        .iter()
        .filter(|&&id| registry.mark_dirty(id).is_ok())
        .count();
    log::debug!(
        "change at {cell} in region {initial}: {marked} of {} windows marked",
        affected.len()
    );
    marked
}

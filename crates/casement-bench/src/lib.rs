//! Benchmark profiles for Casement.
//!
//! Builds deterministic colony-like maps for benchmarking:
//!
//! - [`reference_profile`]: 100x100 map with a walled compound and 64 windows
//! - [`stress_profile`]: 250x250 map with 400 windows
//!
//! Walls, roofs and window spots come from a seeded ChaCha8 stream, so the
//! same seed always yields the same map.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use casement_core::{Cell, RoofId, Rot4, Size, WindowId};
use casement_engine::WindowVisibility;
use casement_space::Placement;
use casement_test_utils::MockMap;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A generated map with its window placements.
pub struct Profile {
    /// The host map.
    pub map: MockMap,
    /// Window placements, in id order starting at 0.
    pub windows: Vec<Placement>,
}

impl Profile {
    /// Register every window with a fresh [`WindowVisibility`].
    pub fn visibility(&self) -> WindowVisibility {
        let mut vis = WindowVisibility::default();
        for (i, &placement) in self.windows.iter().enumerate() {
            vis.on_window_placed_or_moved(&self.map, WindowId(i as u32), placement);
        }
        vis
    }
}

/// 100x100 map, 64 windows.
pub fn reference_profile(seed: u64) -> Profile {
    build_profile(100, 64, seed)
}

/// 250x250 map, 400 windows.
pub fn stress_profile(seed: u64) -> Profile {
    build_profile(250, 400, seed)
}

/// Generate a square map of `side` cells with `n_windows` windows.
///
/// Roughly 30% of cells are roofed, 8% are walls; windows are placed on
/// random wall cells away from the map edge with random rotations and
/// widths of 1 to 3.
pub fn build_profile(side: i32, n_windows: usize, seed: u64) -> Profile {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut map = MockMap::open(side, side);
    let cells: Vec<Cell> = map.cells().collect();
    for &cell in &cells {
        match rng.next_u32() % 100 {
            0..=7 => map.set_wall(cell),
            8..=37 => map.set_roof_at(cell, Some(RoofId(1 + (rng.next_u32() % 3) as u16))),
            _ => {}
        }
    }

    let span = (map.width().min(map.height()) - 8).max(1) as u32;
    let mut windows = Vec::with_capacity(n_windows);
    for _ in 0..n_windows {
        let x = 4 + (rng.next_u32() % span) as i32;
        let z = 4 + (rng.next_u32() % span) as i32;
        let rot = Rot4::from_int((rng.next_u32() % 4) as u8);
        let width = 1 + (rng.next_u32() % 3) as i32;
        let position = Cell::new(x, z);
        map.set_wall(position);
        windows.push(Placement::new(position, rot, Size::new(width, 1)));
    }
    Profile { map, windows }
}

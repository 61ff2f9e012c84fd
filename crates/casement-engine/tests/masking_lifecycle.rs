//! Integration test: many masking passes over a changing map.
//!
//! Simulates a run of render frames. Between frames the host builds roofs,
//! opens and moves windows and reports the changes through the hooks.
//! After every pass the roof layer must match what the host wrote, and the
//! session must hold nothing.

use casement_core::{Cell, GridQuery, MaskingError, RegionId, RoofId, Rot4, Size, WindowId};
use casement_engine::WindowVisibility;
use casement_sight::VisibilityConfig;
use casement_space::Placement;
use casement_test_utils::MockMap;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn house() -> MockMap {
    let mut map = MockMap::open(24, 24);
    // A north-south wall at x = 12 with two window gaps.
    for z in 4..20 {
        map.set_wall(Cell::new(12, z));
    }
    map.add_region(RegionId(1), false);
    map.add_region(RegionId(2), true);
    map.add_region(RegionId(3), true);
    map.link(RegionId(1), RegionId(2));
    map.link(RegionId(1), RegionId(3));
    map.put_window(RegionId(2), WindowId(1));
    map.put_window(RegionId(3), WindowId(2));
    for z in 0..24 {
        for x in 0..12 {
            map.assign_region(Cell::new(x, z), RegionId(1));
        }
    }
    map
}

fn window(z: i32) -> Placement {
    Placement::new(Cell::new(12, z), Rot4::East, Size::ONE)
}

#[test]
fn roofs_survive_a_run_of_frames() {
    init_logging();
    let mut map = house();
    let mut vis = WindowVisibility::new(VisibilityConfig::default()).unwrap();
    vis.on_window_placed_or_moved(&map, WindowId(1), window(8));
    vis.on_window_placed_or_moved(&map, WindowId(2), window(14));

    for frame in 0..40 {
        match frame {
            5 => {
                map.roof_rect(Cell::new(0, 0), Cell::new(11, 23), RoofId(1));
                vis.on_cell_roof_changed(&map, Cell::new(3, 3));
            }
            10 => vis.on_window_toggled(WindowId(1), true),
            15 => vis.on_window_placed_or_moved(&map, WindowId(2), window(16)),
            20 => {
                map.roof_rect(Cell::new(13, 0), Cell::new(23, 23), RoofId(2));
                vis.on_cell_roof_changed(&map, Cell::new(3, 3));
            }
            25 => vis.on_window_removed(WindowId(1)),
            _ => {}
        }

        let expected = map.roof_layer().to_vec();
        let masked = vis.begin_masking_pass(&mut map).unwrap();
        let restored = vis.end_masking_pass(&mut map).unwrap();
        assert_eq!(masked, restored, "frame {frame}");
        assert_eq!(map.roof_layer(), expected.as_slice(), "frame {frame}");
        assert_eq!(vis.session().held(), 0);
    }
}

#[test]
fn unbalanced_hooks_surface_errors() {
    init_logging();
    let mut map = house();
    let mut vis = WindowVisibility::default();
    vis.on_window_placed_or_moved(&map, WindowId(1), window(8));

    assert_eq!(vis.end_masking_pass(&mut map), Err(MaskingError::NotMasking));
    let held = vis.begin_masking_pass(&mut map).unwrap();
    assert_eq!(
        vis.begin_masking_pass(&mut map),
        Err(MaskingError::AlreadyMasking { held })
    );

    let mut other = house();
    assert_eq!(
        vis.end_masking_pass(&mut other),
        Err(MaskingError::MapMismatch {
            expected: map.map_id(),
            actual: other.map_id(),
        })
    );
    assert_eq!(vis.end_masking_pass(&mut map), Ok(held));
}

#[test]
fn guarded_pass_restores_after_a_panic() {
    init_logging();
    let mut map = house();
    map.roof_rect(Cell::new(0, 0), Cell::new(23, 23), RoofId(5));
    let mut vis = WindowVisibility::default();
    vis.on_window_placed_or_moved(&map, WindowId(1), window(8));
    vis.invalidate();
    let expected = map.roof_layer().to_vec();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _guard = vis.masked_pass(&mut map).unwrap();
        panic!("lighting pass failed");
    }));
    assert!(result.is_err());
    assert_eq!(map.roof_layer(), expected.as_slice());
    assert!(!vis.session().is_masking());
}

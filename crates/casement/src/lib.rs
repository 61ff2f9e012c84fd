//! Casement: window visibility and roof masking for tile-based colony maps.
//!
//! Windows in a wall let light into roofed rooms. Casement works out which
//! cells each window visually connects, and hides the roof over those cells
//! while the host computes lighting, restoring it afterwards.
//!
//! This is the facade crate that re-exports the public API of every
//! Casement sub-crate.
//!
//! # Quick start
//!
//! ```rust
//! use casement::prelude::*;
//! use casement_test_utils::MockMap;
//!
//! let mut map = MockMap::open(20, 20);
//! let mut vis = WindowVisibility::new(VisibilityConfig::default()).unwrap();
//!
//! let placement = Placement::new(Cell::new(5, 5), Rot4::East, Size::ONE);
//! vis.on_window_placed_or_moved(&map, WindowId(1), placement);
//!
//! // Roof the whole map after the window's sight was computed.
//! let cells = vis.registry_mut().window_cells(&map);
//! map.roof_rect(Cell::new(0, 0), Cell::new(19, 19), RoofId(1));
//!
//! {
//!     let lit = vis.masked_pass(&mut map).unwrap();
//!     assert!(cells.iter().all(|c| !lit.is_roofed(*c)));
//! }
//! assert!(cells.iter().all(|c| map.is_roofed(*c)));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `casement-core` | Cells, rotations, IDs, errors, host traits |
//! | [`space`] | `casement-space` | Footprints, edge adjacency, endpoints |
//! | [`sight`] | `casement-sight` | Clearance scans, obfuscation resolver, config |
//! | [`engine`] | `casement-engine` | Registry, propagation, masking, hooks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits and IDs (`casement-core`).
///
/// The host implements [`types::GridQuery`], [`types::RoofWriter`] and
/// [`types::RegionQuery`] for its map.
pub use casement_core as types;

/// Footprint geometry (`casement-space`).
pub use casement_space as space;

/// Sight scanning and the obfuscation resolver (`casement-sight`).
///
/// [`sight::resolve`] is the pure per-window computation; everything else
/// builds on it.
pub use casement_sight as sight;

/// Runtime state (`casement-engine`).
///
/// [`engine::WindowVisibility`] is the entry point for hosts.
pub use casement_engine as engine;

/// Common imports for typical Casement usage.
///
/// ```rust
/// use casement::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use casement_core::{
        Cell, GridQuery, MapInstanceId, RegionId, RegionQuery, RoofId, RoofWriter, Rot4, Size,
        WindowId,
    };

    // Errors
    pub use casement_core::{ConfigError, MaskingError, RegistryError};

    // Geometry
    pub use casement_space::Placement;

    // Sight
    pub use casement_sight::{VisibilityConfig, WindowGeometry};

    // Engine
    pub use casement_engine::{MaskGuard, RoofMaskingSession, WindowRegistry, WindowVisibility};
}

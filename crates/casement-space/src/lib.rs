//! Footprint geometry for placed objects on a Casement grid.
//!
//! Everything here is pure arithmetic over [`Cell`](casement_core::Cell)
//! coordinates. Map bounds only enter through the endpoint locator, which
//! takes a [`GridQuery`](casement_core::GridQuery) to decide its fallback.
//!
//! - [`footprint`]: rotation adjustment, [`CellRect`], occupied rectangles
//!   and the cells adjacent along one edge of a footprint.
//! - [`endpoints`]: the two logical ends of a (possibly multi-cell) window.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod endpoints;
pub mod footprint;

pub use endpoints::{locate_endpoints, Endpoints};
pub use footprint::{
    adjust_for_rotation, cells_adjacent_along_edge, occupied_rect, CellRect, Placement,
};

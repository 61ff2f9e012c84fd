//! Line-of-sight through windows on a Casement grid.
//!
//! The [`scanner`] walks outward from a cell along one axis and reports how
//! far sight reaches. The [`resolver`] runs it forward and backward from
//! every footprint cell of a window, trims both sides to the shorter
//! reach, and widens the result sideways at the window's ends. The cells
//! it returns are the ones the lighting pass treats as open sky.
//!
//! Scans see through open windows via the [`SeeOverWindows`] adapter.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod resolver;
pub mod scanner;
pub mod see_over;

pub use config::VisibilityConfig;
pub use resolver::{resolve, ObfuscationResolver, WindowGeometry};
pub use scanner::{is_clear, scan, Clearance, Direction};
pub use see_over::SeeOverWindows;

//! Core types and traits for Casement window visibility.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid vocabulary ([`Cell`], [`Rot4`], [`Size`]), strongly-typed
//! identifiers, the error enums of every subsystem, and the capability
//! traits a host map implements so the visibility core can query it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod traits;

pub use cell::{Axis, Cell, LinkDirection, Rot4, Size};
pub use error::{ConfigError, MaskingError, RegistryError};
pub use id::{MapInstanceId, RegionId, RoofId, WindowId};
pub use traits::{GridQuery, RegionQuery, RoofWriter};

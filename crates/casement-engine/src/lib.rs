//! Runtime side of Casement window visibility.
//!
//! - [`WindowRegistry`]: the core's mirror of every placed window, with
//!   dirty flags and lazily recomputed affected-cell sets.
//! - [`propagate`](propagate::propagate): marks windows dirty when a cell
//!   near them changes, walking the host's region graph two levels deep.
//! - [`RoofMaskingSession`]: hides roofs over window-affected cells for the
//!   duration of one lighting pass and restores them afterwards.
//! - [`WindowVisibility`]: bundles the above behind the hook points the
//!   host calls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod hooks;
pub mod masking;
pub mod propagate;
pub mod registry;

pub use hooks::WindowVisibility;
pub use masking::{MaskGuard, RoofMaskingSession, SessionState};
pub use propagate::{find_affected_windows, propagate};
pub use registry::{Window, WindowRegistry};

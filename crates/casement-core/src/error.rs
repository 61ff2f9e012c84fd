//! Error types for the Casement visibility core.
//!
//! Organized by subsystem: window registry, roof masking, and
//! configuration. Expected edge conditions (out-of-bounds cells, zero
//! reach, cells with no region) are never errors; they produce empty
//! results or no-ops.

use crate::id::{MapInstanceId, WindowId};
use std::error::Error;
use std::fmt;

/// Errors from window registry operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// No window with this ID is registered.
    UnknownWindow {
        /// The ID that was looked up.
        id: WindowId,
    },
    /// A window footprint has a zero or negative dimension.
    DegenerateFootprint {
        /// The offending window.
        id: WindowId,
        /// Footprint width.
        x: i32,
        /// Footprint depth.
        z: i32,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWindow { id } => write!(f, "unknown window {id}"),
            Self::DegenerateFootprint { id, x, z } => {
                write!(f, "window {id} has degenerate footprint {x}x{z}")
            }
        }
    }
}

impl Error for RegistryError {}

/// Errors from an unbalanced roof-masking pass.
///
/// Every variant is a programming error in the caller: the pass was not
/// paired correctly, so roof data may be left corrupted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaskingError {
    /// `begin` was called while a pass was already in progress.
    AlreadyMasking {
        /// Number of cells currently held in the snapshot.
        held: usize,
    },
    /// `end` was called with no pass in progress.
    NotMasking,
    /// `end` was called against a different map than `begin`.
    MapMismatch {
        /// Map the pass was started on.
        expected: MapInstanceId,
        /// Map passed to `end`.
        actual: MapInstanceId,
    },
}

impl fmt::Display for MaskingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyMasking { held } => {
                write!(f, "masking pass already in progress ({held} cells held)")
            }
            Self::NotMasking => write!(f, "no masking pass in progress"),
            Self::MapMismatch { expected, actual } => {
                write!(f, "masking pass started on map {expected}, ended on map {actual}")
            }
        }
    }
}

impl Error for MaskingError {}

/// Errors detected while validating visibility configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `base_fill_percent` is NaN, infinite, or outside `[0, 1]`.
    InvalidFillPercent {
        /// The invalid value.
        value: f32,
    },
    /// `lookahead_depth` exceeds the supported maximum.
    LookaheadTooDeep {
        /// The configured depth.
        value: u32,
        /// The maximum allowed depth.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFillPercent { value } => {
                write!(f, "base_fill_percent must be finite and in [0, 1], got {value}")
            }
            Self::LookaheadTooDeep { value, max } => {
                write!(f, "lookahead_depth {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for ConfigError {}

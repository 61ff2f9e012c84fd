//! Strongly-typed identifiers for host objects.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a window registered with the visibility core.
///
/// Assigned by the host when the window is placed. The same ID must be
/// reported by [`RegionQuery::windows_in`](crate::RegionQuery::windows_in)
/// for the doorway region the window sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for WindowId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a spatial region of the host map.
///
/// Regions are the host's connectivity partition: rooms, outdoor areas,
/// and the one-cell doorway regions that sit in doors and windows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RegionId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a kind of roof (thin, thick rock, ...).
///
/// "No roof" is expressed as `Option::<RoofId>::None`, never as a
/// sentinel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoofId(pub u16);

impl fmt::Display for RoofId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for RoofId {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// Counter for unique [`MapInstanceId`] allocation.
static MAP_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a host map.
///
/// Allocated from a monotonic atomic counter via [`MapInstanceId::next`].
/// Two distinct maps always have different IDs, so caches keyed on a map
/// identity never confuse a freshly loaded map with one that was dropped
/// at the same address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapInstanceId(u64);

impl MapInstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(MAP_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for MapInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

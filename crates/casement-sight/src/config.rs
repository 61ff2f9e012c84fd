//! Visibility tuning constants.

use casement_core::{ConfigError, Size};

/// Extra cells scanned past the minimum reach implied by footprint size.
pub const DEFAULT_LOOKAHEAD_DEPTH: u32 = 2;

/// Fraction of cover a closed window provides.
pub const DEFAULT_BASE_FILL_PERCENT: f32 = 0.65;

/// Tuning for window visibility.
///
/// Both values are visual-design constants. The defaults reproduce the
/// shipped look; change them deliberately.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityConfig {
    /// Cells scanned beyond `max(size) / 2 + 1` on each side. Default: 2.
    pub lookahead_depth: u32,
    /// Fill percent reported for closed windows in cover calculations.
    /// Default: 0.65.
    pub base_fill_percent: f32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            lookahead_depth: DEFAULT_LOOKAHEAD_DEPTH,
            base_fill_percent: DEFAULT_BASE_FILL_PERCENT,
        }
    }
}

impl VisibilityConfig {
    /// Upper bound on `lookahead_depth`.
    pub const MAX_LOOKAHEAD_DEPTH: u32 = 64;

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookahead_depth > Self::MAX_LOOKAHEAD_DEPTH {
            return Err(ConfigError::LookaheadTooDeep {
                value: self.lookahead_depth,
                max: Self::MAX_LOOKAHEAD_DEPTH,
            });
        }
        if !self.base_fill_percent.is_finite()
            || !(0.0..=1.0).contains(&self.base_fill_percent)
        {
            return Err(ConfigError::InvalidFillPercent {
                value: self.base_fill_percent,
            });
        }
        Ok(())
    }

    /// Scan depth for a window of the given footprint.
    ///
    /// `max(size.x, size.z) / 2 + 1 + lookahead_depth`.
    pub fn max_distance(&self, size: Size) -> u32 {
        let base = (size.max_dim().max(0) / 2 + 1) as u32;
        base + self.lookahead_depth
    }
}

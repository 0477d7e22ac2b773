//! Per-pile configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Configuration applied to a pile when it is opened.
///
/// The single recognized option caps how many cartons are stacked per tower
/// regardless of how many would fit by height. Disc media use a cap of one
/// so each disc lies in its own tower instead of stacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PileOptions {
    /// Maximum number of cartons stacked vertically per tower.
    /// `None` derives the cap from the shelf height.
    pub max_tower_count: Option<usize>,
}

impl PileOptions {
    /// Creates options with no tower cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of cartons per tower.
    pub fn with_max_tower_count(mut self, count: usize) -> Self {
        self.max_tower_count = Some(count);
        self
    }

    /// Checks that a configured tower cap is at least one.
    pub fn validate(&self) -> Result<()> {
        if self.max_tower_count == Some(0) {
            return Err(Error::InvalidOptions(
                "max_tower_count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

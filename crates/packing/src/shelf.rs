//! Shelf bounds.

use shelfpack_core::{Dimensions, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fixed rectangular volume cartons are packed into.
///
/// A shelf is supplied once when a packer is constructed and never changes
/// for that packer's lifetime; laying out a different shelf means building
/// a fresh packer. Piles receive their own copy of the bounds, so nothing
/// downstream can mutate them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shelf {
    dimensions: Dimensions,
}

impl Shelf {
    /// Creates a shelf from its width, height and depth.
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            dimensions: Dimensions::new(width, height, depth),
        }
    }

    /// Returns the bounds.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Returns the width (pile-to-pile axis).
    pub fn width(&self) -> f64 {
        self.dimensions.width()
    }

    /// Returns the height (tower axis).
    pub fn height(&self) -> f64 {
        self.dimensions.height()
    }

    /// Returns the depth (tower-to-tower axis).
    pub fn depth(&self) -> f64 {
        self.dimensions.depth()
    }

    /// Returns the enclosed volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }

    /// Returns true when a carton of the given extents fits within the
    /// shelf on every axis. Equality counts as fitting.
    pub fn admits(&self, carton: &Dimensions) -> bool {
        carton.fits_within(&self.dimensions)
    }

    /// Checks that every extent is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        if !self.dimensions.is_valid() {
            return Err(Error::InvalidShelf(
                "all shelf extents must be positive and finite".into(),
            ));
        }
        Ok(())
    }
}

//! Axis-aligned carton extents.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width, height and depth of an axis-aligned box, in whatever length unit
/// the surrounding application uses consistently.
///
/// `x` is width, `y` is height, `z` is depth. No unit conversion happens
/// here; callers convert before constructing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    extents: Vector3<f64>,
}

impl Dimensions {
    /// Creates new extents from width, height and depth.
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            extents: Vector3::new(width, height, depth),
        }
    }

    /// Returns the width (x extent).
    pub fn width(&self) -> f64 {
        self.extents.x
    }

    /// Returns the height (y extent).
    pub fn height(&self) -> f64 {
        self.extents.y
    }

    /// Returns the depth (z extent).
    pub fn depth(&self) -> f64 {
        self.extents.z
    }

    /// Returns the extents as a vector.
    pub fn as_vector(&self) -> &Vector3<f64> {
        &self.extents
    }

    /// Returns the enclosed volume.
    pub fn volume(&self) -> f64 {
        self.extents.x * self.extents.y * self.extents.z
    }

    /// Returns true when every extent is finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.extents.iter().all(|c| c.is_finite() && *c > 0.0)
    }

    /// Returns true when these extents fit within `outer` on every axis.
    /// Equality counts as fitting.
    pub fn fits_within(&self, outer: &Dimensions) -> bool {
        self.extents.x <= outer.extents.x
            && self.extents.y <= outer.extents.y
            && self.extents.z <= outer.extents.z
    }
}

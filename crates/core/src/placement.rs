//! Placed-carton identity and coordinates.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Dimensions;

/// Identity of a placed carton.
///
/// Ids are sequential within one packer and exist so a consumer drawing the
/// layout can tell which cartons it has already rendered; the packing logic
/// never reads them. Independent packers restart numbering from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CartonId(u64);

impl CartonId {
    /// Creates an id from its raw sequence number.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw sequence number.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CartonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A carton together with its computed center-origin position.
///
/// This is the (carton, position) pair yielded by the packer's enumeration,
/// self-contained so a renderer can draw the carton without consulting the
/// packer again.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Identity of the placed carton.
    pub id: CartonId,

    /// Carton type name.
    pub name: String,

    /// Carton extents.
    pub dimensions: Dimensions,

    /// Center of the carton, relative to the shelf's geometric center.
    pub position: Vector3<f64>,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(
        id: CartonId,
        name: impl Into<String>,
        dimensions: Dimensions,
        position: Vector3<f64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            dimensions,
            position,
        }
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Returns the z coordinate.
    pub fn z(&self) -> f64 {
        self.position.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_ordering() {
        assert!(CartonId::new(0) < CartonId::new(1));
        assert_eq!(CartonId::new(7).raw(), 7);
        assert_eq!(CartonId::new(7).to_string(), "#7");
    }

    #[test]
    fn test_placement_accessors() {
        let placement = Placement::new(
            CartonId::new(0),
            "Paige 15",
            Dimensions::new(20.0, 10.0, 25.0),
            Vector3::new(-40.0, -10.0, -12.5),
        );

        assert_eq!(placement.x(), -40.0);
        assert_eq!(placement.y(), -10.0);
        assert_eq!(placement.z(), -12.5);
        assert_eq!(placement.name, "Paige 15");
    }
}

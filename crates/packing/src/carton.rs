//! Carton types.

use shelfpack_core::{CartonId, Dimensions, Error, PileOptions, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A carton template: the caller-facing description of one box type.
///
/// Cartons sharing a name are assumed to share a width and pile together.
/// Height and depth are read per carton by the stacking arithmetic, so they
/// may in principle vary within a type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CartonSpec {
    name: String,
    dimensions: Dimensions,
    pile: PileOptions,
}

impl CartonSpec {
    /// Creates a template with the given type name and extents.
    pub fn new(name: impl Into<String>, width: f64, height: f64, depth: f64) -> Self {
        Self {
            name: name.into(),
            dimensions: Dimensions::new(width, height, depth),
            pile: PileOptions::default(),
        }
    }

    /// Sets the options applied when this template opens a new pile.
    pub fn with_pile_options(mut self, options: PileOptions) -> Self {
        self.pile = options;
        self
    }

    /// Caps the number of cartons stacked per tower.
    pub fn with_max_tower_count(mut self, count: usize) -> Self {
        self.pile.max_tower_count = Some(count);
        self
    }

    /// Returns the type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the extents.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Returns the pile options.
    pub fn pile_options(&self) -> &PileOptions {
        &self.pile
    }

    /// Checks the template for a usable name, extents and options.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::InvalidCarton("name must not be empty".into()));
        }
        if !self.dimensions.is_valid() {
            return Err(Error::InvalidCarton(format!(
                "all extents for '{}' must be positive and finite",
                self.name
            )));
        }
        self.pile.validate()
    }
}

/// A placed carton instance, owned by the pile that holds it.
///
/// Immutable once created. The id exists for consumers tracking which
/// cartons they have already drawn; the packing logic never reads it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Carton {
    id: CartonId,
    name: String,
    dimensions: Dimensions,
}

impl Carton {
    pub(crate) fn new(id: CartonId, spec: &CartonSpec) -> Self {
        Self {
            id,
            name: spec.name().to_string(),
            dimensions: *spec.dimensions(),
        }
    }

    /// Returns the carton's identity.
    pub fn id(&self) -> CartonId {
        self.id
    }

    /// Returns the type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the extents.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builder() {
        let spec = CartonSpec::new("CD", 10.0, 124.0, 141.0).with_max_tower_count(1);

        assert_eq!(spec.name(), "CD");
        assert_eq!(spec.dimensions().width(), 10.0);
        assert_eq!(spec.pile_options().max_tower_count, Some(1));
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let spec = CartonSpec::new("", 10.0, 10.0, 10.0);
        assert!(matches!(spec.validate(), Err(Error::InvalidCarton(_))));
    }

    #[test]
    fn test_bad_extents_rejected() {
        let spec = CartonSpec::new("Flat Box", 10.0, -3.0, 10.0);
        assert!(matches!(spec.validate(), Err(Error::InvalidCarton(_))));

        let spec = CartonSpec::new("Flat Box", 0.0, 3.0, 10.0);
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_zero_tower_cap_rejected() {
        let spec = CartonSpec::new("CD", 10.0, 124.0, 141.0).with_max_tower_count(0);
        assert!(matches!(spec.validate(), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_carton_copies_spec() {
        let spec = CartonSpec::new("Paige 15", 20.0, 10.0, 25.0);
        let carton = Carton::new(CartonId::new(3), &spec);

        assert_eq!(carton.id(), CartonId::new(3));
        assert_eq!(carton.name(), "Paige 15");
        assert_eq!(carton.dimensions(), spec.dimensions());
    }
}

//! Homogeneous pile of cartons occupying one slot on the shelf.

use shelfpack_core::{Dimensions, PileOptions};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::carton::{Carton, CartonSpec};
use crate::shelf::Shelf;

/// An ordered group of same-named cartons, stacked into one or more
/// vertical towers within one horizontal slot on the shelf.
///
/// A pile is created around its first carton and is therefore never empty.
/// Type homogeneity is enforced at insertion through [`Pile::will_fit`],
/// not by construction. The slot width is the width of the first carton;
/// all cartons of one name are assumed to share it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pile {
    shelf: Shelf,
    options: PileOptions,
    cartons: Vec<Carton>,
}

impl Pile {
    pub(crate) fn new(shelf: Shelf, options: PileOptions, first: Carton) -> Self {
        Self {
            shelf,
            options,
            cartons: vec![first],
        }
    }

    fn first(&self) -> &Dimensions {
        self.cartons[0].dimensions()
    }

    /// Returns the width of the slot this pile occupies.
    pub fn width(&self) -> f64 {
        self.first().width()
    }

    /// Returns the pile's type name.
    pub fn name(&self) -> &str {
        self.cartons[0].name()
    }

    /// Returns how many cartons one tower holds: the configured cap when
    /// set, otherwise how many whole cartons fit within the shelf height.
    pub fn boxes_per_tower(&self) -> usize {
        match self.options.max_tower_count {
            Some(cap) => cap,
            None => (self.shelf.height() / self.first().height()).floor() as usize,
        }
    }

    /// Returns the pile's total capacity: whole towers deep times cartons
    /// per tower. Partial towers are never counted.
    pub fn max_box_count(&self) -> usize {
        let towers = (self.shelf.depth() / self.first().depth()).floor() as usize;
        self.boxes_per_tower() * towers
    }

    /// Returns true when a carton of the given template belongs in this
    /// pile: same type name and remaining capacity.
    pub fn will_fit(&self, spec: &CartonSpec) -> bool {
        if self.name() != spec.name() {
            return false;
        }
        self.cartons.len() < self.max_box_count()
    }

    // Capacity policy lives in `will_fit`; this append is unconditional
    // and stays crate-private so the check cannot be skipped by callers.
    pub(crate) fn push(&mut self, carton: Carton) {
        self.cartons.push(carton);
    }

    /// Returns the summed height of all cartons in the pile.
    pub fn height(&self) -> f64 {
        self.cartons.iter().map(|c| c.dimensions().height()).sum()
    }

    /// Returns the cartons in stacking order.
    pub fn cartons(&self) -> &[Carton] {
        &self.cartons
    }

    /// Returns the number of cartons held.
    pub fn len(&self) -> usize {
        self.cartons.len()
    }

    /// Returns true when the pile holds no cartons.
    pub fn is_empty(&self) -> bool {
        self.cartons.is_empty()
    }

    /// Returns the options this pile was opened with.
    pub fn options(&self) -> &PileOptions {
        &self.options
    }
}

//! The shelf packer: first-fit pile assignment and coordinate derivation.

use log::debug;
use nalgebra::Vector3;
use shelfpack_core::{CartonId, Error, PackReport, Placement, Result};

use crate::carton::{Carton, CartonSpec};
use crate::pile::Pile;
use crate::shelf::Shelf;

/// Greedy packer assigning cartons to piles on one shelf.
///
/// Piles are kept in insertion order, left to right along the shelf width.
/// A packer is bound to one shelf for its whole lifetime; to lay out a
/// different shelf, construct a fresh packer.
///
/// # Examples
///
/// ```
/// use shelfpack_packing::{CartonSpec, Shelf, ShelfPacker};
///
/// let mut packer = ShelfPacker::new(Shelf::new(100.0, 30.0, 50.0))?;
/// packer.add_box(&CartonSpec::new("Paige 15", 20.0, 10.0, 25.0))?;
///
/// packer.each(|carton, position| {
///     println!("{} at {:?}", carton.name(), position);
/// });
/// # Ok::<(), shelfpack_packing::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    shelf: Shelf,
    piles: Vec<Pile>,
    next_id: u64,
}

impl ShelfPacker {
    /// Creates a packer for the given shelf.
    ///
    /// Fails when the shelf bounds are degenerate.
    pub fn new(shelf: Shelf) -> Result<Self> {
        shelf.validate()?;
        Ok(Self {
            shelf,
            piles: Vec::new(),
            next_id: 0,
        })
    }

    /// Returns the shelf this packer fills.
    pub fn shelf(&self) -> &Shelf {
        &self.shelf
    }

    /// Returns the piles in placement order, left to right.
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// Returns the number of cartons placed so far.
    pub fn carton_count(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// Returns true when nothing has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Returns the shelf width consumed by the current piles.
    pub fn used_width(&self) -> f64 {
        self.piles.iter().map(Pile::width).sum()
    }

    /// Returns total carton volume over shelf volume.
    pub fn utilization(&self) -> f64 {
        let placed: f64 = self
            .piles
            .iter()
            .flat_map(|pile| pile.cartons())
            .map(|carton| carton.dimensions().volume())
            .sum();
        placed / self.shelf.volume()
    }

    /// Places one carton described by the template and returns its id.
    ///
    /// The carton goes into the first existing pile that accepts it; when
    /// none does, a new pile is opened at the right-hand end, provided the
    /// combined pile widths stay within the shelf width.
    ///
    /// # Errors
    ///
    /// - [`Error::TooLargeForShelf`] when any raw extent strictly exceeds
    ///   the shelf's corresponding extent. Equality is accepted.
    /// - [`Error::OutOfShelfSpace`] when a new pile would overflow the
    ///   remaining width.
    ///
    /// Both refusals leave the packer unchanged, and further insertions
    /// remain possible.
    pub fn add_box(&mut self, spec: &CartonSpec) -> Result<CartonId> {
        spec.validate()?;

        if !self.shelf.admits(spec.dimensions()) {
            return Err(Error::TooLargeForShelf {
                name: spec.name().to_string(),
            });
        }

        // First fit: the earliest compatible pile wins, even when a later
        // pile has more room.
        if let Some(index) = self.piles.iter().position(|pile| pile.will_fit(spec)) {
            let carton = self.mint(spec);
            let id = carton.id();
            self.piles[index].push(carton);
            debug!("added '{}' to pile {}", spec.name(), index);
            return Ok(id);
        }

        if self.used_width() + spec.dimensions().width() > self.shelf.width() {
            return Err(Error::OutOfShelfSpace {
                name: spec.name().to_string(),
            });
        }

        let carton = self.mint(spec);
        let id = carton.id();
        debug!("opened pile {} for '{}'", self.piles.len(), spec.name());
        self.piles
            .push(Pile::new(self.shelf, *spec.pile_options(), carton));
        Ok(id)
    }

    // Ids advance only on successful placement, so a refused call leaves
    // no observable trace.
    fn mint(&mut self, spec: &CartonSpec) -> Carton {
        let id = CartonId::new(self.next_id);
        self.next_id += 1;
        Carton::new(id, spec)
    }

    /// Visits every placed carton with its center-origin position, piles
    /// in placement order and cartons within a pile in stacking order.
    ///
    /// Positions are derived from the current layout on every call, so
    /// calling this twice without an intervening insertion yields identical
    /// pairs in identical order. The layout is dense: towers grow bottom-up
    /// and fill back-to-front, with adjacent piles flush against each other.
    pub fn each<F>(&self, mut visit: F)
    where
        F: FnMut(&Carton, Vector3<f64>),
    {
        let mut x = 0.0;
        for pile in &self.piles {
            let per_tower = pile.boxes_per_tower() as f64;
            let mut y = 0.0;
            let mut z = 0.0;
            for carton in pile.cartons() {
                let dims = carton.dimensions();
                // One tower's vertical budget: the shelf height, or less
                // when a tower cap is in force.
                let budget = self.shelf.height().min(per_tower * dims.height());
                if y + dims.height() > budget {
                    // Start the next tower behind the current one. Depth
                    // cannot overflow here; pile capacity already counts
                    // whole towers only.
                    y = 0.0;
                    z += dims.depth();
                }
                // Translate from corner origin to the shelf's center.
                let position = Vector3::new(
                    x - self.shelf.width() / 2.0 + dims.width() / 2.0,
                    y - self.shelf.height() / 2.0 + dims.height() / 2.0,
                    z - self.shelf.depth() / 2.0 + dims.depth() / 2.0,
                );
                visit(carton, position);
                y += dims.height();
            }
            x += pile.width();
        }
    }

    /// Returns the enumeration materialized as a placement list.
    pub fn placements(&self) -> Vec<Placement> {
        let mut placements = Vec::with_capacity(self.carton_count());
        self.each(|carton, position| {
            placements.push(Placement::new(
                carton.id(),
                carton.name(),
                *carton.dimensions(),
                position,
            ));
        });
        placements
    }

    /// Returns an occupancy snapshot of the current layout.
    pub fn report(&self) -> PackReport {
        let used_width = self.used_width();
        PackReport {
            carton_count: self.carton_count(),
            pile_count: self.piles.len(),
            used_width,
            remaining_width: self.shelf.width() - used_width,
            utilization: self.utilization(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn packer() -> ShelfPacker {
        ShelfPacker::new(Shelf::new(100.0, 30.0, 50.0)).unwrap()
    }

    #[test]
    fn test_degenerate_shelf_rejected() {
        assert!(ShelfPacker::new(Shelf::new(0.0, 30.0, 50.0)).is_err());
    }

    #[test]
    fn test_first_carton_opens_pile() {
        let mut packer = packer();
        let spec = CartonSpec::new("A", 20.0, 10.0, 25.0);

        let id = packer.add_box(&spec).unwrap();
        assert_eq!(id, CartonId::new(0));
        assert_eq!(packer.piles().len(), 1);
        assert_eq!(packer.carton_count(), 1);
        assert!(!packer.is_empty());
    }

    #[test]
    fn test_same_type_joins_existing_pile() {
        let mut packer = packer();
        let spec = CartonSpec::new("A", 20.0, 10.0, 25.0);

        packer.add_box(&spec).unwrap();
        packer.add_box(&spec).unwrap();

        assert_eq!(packer.piles().len(), 1);
        assert_eq!(packer.piles()[0].len(), 2);
    }

    #[test]
    fn test_other_type_opens_second_pile() {
        let mut packer = packer();
        packer.add_box(&CartonSpec::new("A", 20.0, 10.0, 25.0)).unwrap();
        packer.add_box(&CartonSpec::new("B", 30.0, 10.0, 25.0)).unwrap();

        assert_eq!(packer.piles().len(), 2);
        assert_eq!(packer.used_width(), 50.0);
    }

    #[test]
    fn test_oversize_carton_refused_without_state_change() {
        let mut packer = packer();

        let too_tall = CartonSpec::new("Tall", 20.0, 31.0, 25.0);
        assert!(matches!(
            packer.add_box(&too_tall),
            Err(Error::TooLargeForShelf { name }) if name == "Tall"
        ));
        assert!(packer.is_empty());

        // The packer stays usable afterwards.
        packer.add_box(&CartonSpec::new("A", 20.0, 10.0, 25.0)).unwrap();
        assert_eq!(packer.carton_count(), 1);
    }

    #[test]
    fn test_exact_shelf_size_accepted() {
        let mut packer = packer();
        let snug = CartonSpec::new("Snug", 100.0, 30.0, 50.0);

        assert!(packer.add_box(&snug).is_ok());
        assert_eq!(packer.carton_count(), 1);
    }

    #[test]
    fn test_ids_are_sequential_and_skip_refusals() {
        let mut packer = packer();
        let spec = CartonSpec::new("A", 20.0, 10.0, 25.0);

        let first = packer.add_box(&spec).unwrap();
        let _ = packer.add_box(&CartonSpec::new("Tall", 20.0, 31.0, 25.0));
        let second = packer.add_box(&spec).unwrap();

        assert_eq!(first.raw(), 0);
        assert_eq!(second.raw(), 1);
    }

    #[test]
    fn test_utilization_of_single_carton() {
        let mut packer = packer();
        packer.add_box(&CartonSpec::new("A", 20.0, 10.0, 25.0)).unwrap();

        // 5000 / 150000
        assert_relative_eq!(packer.utilization(), 1.0 / 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_report_matches_layout() {
        let mut packer = packer();
        let spec = CartonSpec::new("A", 20.0, 10.0, 25.0);
        for _ in 0..7 {
            packer.add_box(&spec).unwrap();
        }

        let report = packer.report();
        assert_eq!(report.carton_count, 7);
        assert_eq!(report.pile_count, 2);
        assert_eq!(report.used_width, 40.0);
        assert_eq!(report.remaining_width, 60.0);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_each_visits_in_insertion_order() {
        let mut packer = packer();
        let a = CartonSpec::new("A", 20.0, 10.0, 25.0);
        let b = CartonSpec::new("B", 30.0, 10.0, 25.0);

        packer.add_box(&a).unwrap();
        packer.add_box(&b).unwrap();
        packer.add_box(&a).unwrap();

        let mut names = Vec::new();
        packer.each(|carton, _| names.push(carton.name().to_string()));

        // Pile order first, stacking order within a pile.
        assert_eq!(names, vec!["A", "A", "B"]);
    }
}

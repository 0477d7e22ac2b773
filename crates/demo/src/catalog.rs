//! Static carton and shelf catalog.
//!
//! The catalog mirrors an archival storeroom: record cartons are listed in
//! inches and converted to whole millimeters here, so the packer itself
//! stays unit-agnostic.

use shelfpack::{CartonSpec, Shelf};

/// Converts inches to whole millimeters, truncating downward.
pub fn mm(inches: f64) -> f64 {
    (inches * 25.4).floor()
}

/// The standard carton templates. Disc media lie flat, one per tower.
pub fn standard_catalog() -> Vec<CartonSpec> {
    vec![
        CartonSpec::new("Paige 15", mm(12.0), mm(10.0), mm(15.0)),
        CartonSpec::new("Archival Legal", mm(5.0), mm(10.25), mm(15.25)),
        CartonSpec::new("Archive Half Legal", mm(2.5), mm(10.25), mm(15.25)),
        CartonSpec::new("Flat Box", mm(15.0), mm(3.0), mm(18.5)),
        CartonSpec::new("CD", mm(0.4), mm(4.92), mm(5.59)).with_max_tower_count(1),
        CartonSpec::new("DVD", mm(0.55), mm(7.6), mm(5.4)).with_max_tower_count(1),
    ]
}

/// The default storeroom shelf: two 1003 mm bays wide, three 266 mm tiers
/// tall, 500 mm deep.
pub fn default_shelf() -> Shelf {
    Shelf::new(1003.0 * 2.0, 266.0 * 3.0, 500.0)
}

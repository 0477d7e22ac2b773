//! # Shelfpack
//!
//! Greedy shelf-filling engine for rectangular cartons.
//!
//! Same-typed cartons are grouped into vertical towers and depth-wise
//! piles, each pile occupying one slot along the shelf width; the packer
//! derives center-origin 3D coordinates for every placed carton, ready for
//! a renderer that draws the shelf centered at the origin.
//!
//! ## Quick Start
//!
//! ```rust
//! use shelfpack::{CartonSpec, Shelf, ShelfPacker};
//!
//! let mut packer = ShelfPacker::new(Shelf::new(100.0, 30.0, 50.0))?;
//! packer.add_box(&CartonSpec::new("Paige 15", 20.0, 10.0, 25.0))?;
//!
//! for placement in packer.placements() {
//!     println!("{} at {:?}", placement.name, placement.position);
//! }
//! # Ok::<(), shelfpack::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

/// Core leaf types.
pub use shelfpack_core as core;

/// Packing algorithm.
pub use shelfpack_packing as packing;

// Re-export commonly used types at root level
pub use shelfpack_core::{
    CartonId, Dimensions, Error, PackReport, PileOptions, Placement, Result,
};
pub use shelfpack_packing::{Carton, CartonSpec, Pile, Shelf, ShelfPacker};

//! # Shelfpack Packing
//!
//! Greedy shelf-filling for the shelfpack engine.
//!
//! Cartons of the same type stack into vertical towers within depth-wise
//! piles, where each pile occupies one horizontal slot along the shelf
//! width. The packer assigns cartons to piles with a first-fit policy and
//! derives center-origin 3D coordinates for every carton on demand.

pub mod carton;
pub mod packer;
pub mod pile;
pub mod shelf;

// Re-exports
pub use carton::{Carton, CartonSpec};
pub use packer::ShelfPacker;
pub use pile::Pile;
pub use shelf::Shelf;
pub use shelfpack_core::{
    CartonId, Dimensions, Error, PackReport, PileOptions, Placement, Result,
};

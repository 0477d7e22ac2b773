//! # Shelfpack Core
//!
//! Shared types for the shelfpack shelf-filling engine.
//!
//! This crate provides the leaf types consumed by the packing crate and by
//! host applications:
//!
//! - [`Dimensions`] - axis-aligned carton extents (width / height / depth)
//! - [`PileOptions`] - per-pile configuration
//! - [`CartonId`], [`Placement`] - placed-carton identity and coordinates
//! - [`PackReport`] - derived occupancy summary
//! - [`Error`], [`Result`] - error handling
//!
//! ## Axis convention
//!
//! `x` runs along the shelf width (pile to pile), `y` along the height
//! (within a tower) and `z` along the depth (tower to tower).
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod dimensions;
pub mod error;
pub mod options;
pub mod placement;
pub mod report;

// Re-exports
pub use dimensions::Dimensions;
pub use error::{Error, Result};
pub use options::PileOptions;
pub use placement::{CartonId, Placement};
pub use report::PackReport;

/// Vector type used for carton extents and positions.
pub use nalgebra::Vector3;

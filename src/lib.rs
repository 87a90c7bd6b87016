//! A library that generates labeled clusters of points, to test and teach
//! clustering and classification algorithms.
//!
//! # Crate Layout
//!
//! Datasets are described by a [`Clusters`] value, whose public fields are the
//! generation options, and produced by [`Clusters::generate`].  The random
//! number generator is given by the caller, so that seeding it makes
//! generation reproducible.
//!
//! Generation outputs a [`Dataset`]: a matrix with one point per row and a
//! column of cluster indices, whose rows are paired with the points.
//!
//! # Cluster shapes
//!
//! - [Points][Shape::Point]: clusters are scattered around single points,
//!   optionally mirrored across the origin for two-cluster datasets.
//! - [Lines][Shape::Linear] and [curves][Shape::Curve]: clusters are scattered
//!   along curves given as [parametric functions][Parametric], such as
//!   [segments][Segment] and [circles][Circle].
//!
//! # Example
//!
//! ```rust
//! # fn main() -> Result<(), nuage::Error> {
//! use rand::SeedableRng as _;
//!
//! let mut clusters: nuage::Clusters = "center_count=2,datapoints=100,opposite=true".parse()?;
//! clusters.distance = 3.0;
//!
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let (data, labels) = clusters.generate(&mut rng)?.into_parts();
//!
//! assert_eq!(data.shape(), (200, 2));
//! assert_eq!(labels.len(), 200);
//! # Ok(())
//! # }
//! ```

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    rust_2018_idioms
)]

mod broadcast;
mod clusters;
mod dataset;
mod error;
mod normalize;
mod options;
mod parametric;
mod shape;

pub use crate::broadcast::OneOrMany;
pub use crate::clusters::Clusters;
pub use crate::dataset::Dataset;
pub use crate::error::Error;
pub use crate::normalize::normalize_rows_mut;
pub use crate::normalize::normalized_rows;
pub use crate::options::OPTION_NAMES;
pub use crate::parametric::Circle;
pub use crate::parametric::Components;
pub use crate::parametric::Parametric;
pub use crate::parametric::Segment;
pub use crate::shape::Shape;

pub use nalgebra;
pub use rand;

pub type Point2D = nalgebra::Vector2<f64>;

//! Point sets over n-dimensional coordinate spaces.
//!
//! A [`Sampling`] is a possibly implicit set of points exposing membership
//! tests and stateful traversal through a [`SamplingIterator`]. Leaf samplings
//! are explicit point lists ([`SamplingGeneral`]), integer lattices and real
//! grids in Cartesian, polar, cylindrical or spherical layouts. Combinators
//! (difference, union, complement, conditional) compose other samplings lazily
//! and never materialize their result.
//!
//! Traversal writes into a caller-owned point:
//!
//! ```ignore
//! let mut iter = sampling.iterator();
//! let mut point = IntegerIndex::new(sampling.num_dimensions());
//! while iter.has_next() {
//!     iter.next(&mut point)?;
//! }
//! ```
//!
//! [`Points`] adapts a traversal into a standard `Iterator` of owned points.

pub mod bounds;
pub mod combinators;
pub mod general;
pub mod grid;
pub mod point;
pub mod sampling;


pub use bounds::{Bounds, Extents};
pub use combinators::{
    SamplingComplement, SamplingConditional, SamplingDifference, SamplingUnion,
};
pub use general::SamplingGeneral;
pub use grid::{
    RealGridOptions, SamplingCartesianIntegerGrid, SamplingCartesianRealGrid,
    SamplingCylindricalRealGrid, SamplingPolarRealGrid, SamplingSphericalRealGrid,
};
pub use point::{Component, Coordinate, IntegerIndex, Point, RealIndex};
pub use sampling::{Points, Sampling, SamplingIterator, SamplingRef};

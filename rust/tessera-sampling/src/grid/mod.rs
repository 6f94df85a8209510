//! Lattice and grid samplings.

use tessera_common::{Result, verify_arg};

pub mod integer;
pub mod radial;
pub mod real;

pub use integer::SamplingCartesianIntegerGrid;
pub use radial::{SamplingCylindricalRealGrid, SamplingPolarRealGrid, SamplingSphericalRealGrid};
pub use real::SamplingCartesianRealGrid;

/// Options shared by the eagerly enumerated real-valued grids.
#[derive(Debug, Clone, PartialEq)]
pub struct RealGridOptions {
    tolerance: f64,
}

impl RealGridOptions {
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;

    pub fn new() -> RealGridOptions {
        RealGridOptions {
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }

    /// Per-component distance within which `contains` treats a query point as a grid
    /// point.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn get_tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn validate(&self) -> Result<()> {
        verify_arg!(tolerance, self.tolerance >= 0.0 && self.tolerance.is_finite());
        Ok(())
    }
}

impl Default for RealGridOptions {
    fn default() -> Self {
        RealGridOptions::new()
    }
}

/// Forwards the `Sampling` contract of a grid to its enumerated point list.
macro_rules! delegate_to_points {
    ($($grid:ty),*) => {
        $(
            impl $crate::sampling::Sampling<$crate::point::RealIndex> for $grid {
                fn num_dimensions(&self) -> usize {
                    $crate::sampling::Sampling::num_dimensions(&self.points)
                }

                fn contains(&self, point: &$crate::point::RealIndex) -> bool {
                    $crate::sampling::Sampling::contains(&self.points, point)
                }

                fn iterator(
                    &self,
                ) -> Box<dyn $crate::sampling::SamplingIterator<$crate::point::RealIndex> + '_> {
                    $crate::sampling::Sampling::iterator(&self.points)
                }
            }
        )*
    };
}

pub(crate) use delegate_to_points;

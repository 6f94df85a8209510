use tessera_common::{Result, error::Error};

use crate::{
    point::IntegerIndex,
    sampling::{Sampling, SamplingIterator},
};

/// Every integer point of the axis-aligned box `[min, max]`, both corners
/// included.
///
/// Traversal is an odometer over the box: the lowest dimension advances
/// first and carries into the next one on passing `max`.
#[derive(Debug, Clone)]
pub struct SamplingCartesianIntegerGrid {
    min: IntegerIndex,
    max: IntegerIndex,
}

impl SamplingCartesianIntegerGrid {
    /// # Errors
    ///
    /// Fails with `InvalidRange` when the corners have different or zero arity,
    /// when `min` exceeds `max` in some dimension, or when a minimum is
    /// `i64::MIN` (traversal starts one step before `min`).
    pub fn new(min: IntegerIndex, max: IntegerIndex) -> Result<SamplingCartesianIntegerGrid> {
        if min.num_dimensions() != max.num_dimensions() {
            return Err(Error::invalid_range(
                "max",
                format!(
                    "corner arity mismatch: {} vs {}",
                    min.num_dimensions(),
                    max.num_dimensions()
                ),
            ));
        }
        if min.num_dimensions() == 0 {
            return Err(Error::invalid_range("min", "grid needs at least one dimension"));
        }
        for (dim, (&lo, &hi)) in min.as_slice().iter().zip(max.as_slice()).enumerate() {
            if lo == i64::MIN {
                return Err(Error::invalid_range(
                    "min",
                    format!("minimum of dimension {dim} is i64::MIN"),
                ));
            }
            if lo > hi {
                return Err(Error::invalid_range(
                    "max",
                    format!("dimension {dim}: min {lo} exceeds max {hi}"),
                ));
            }
        }
        Ok(SamplingCartesianIntegerGrid { min, max })
    }

    pub fn min(&self) -> &IntegerIndex {
        &self.min
    }

    pub fn max(&self) -> &IntegerIndex {
        &self.max
    }

    /// Number of points in the box, or `None` if it does not fit in a `u64`.
    pub fn point_count(&self) -> Option<u64> {
        self.min
            .as_slice()
            .iter()
            .zip(self.max.as_slice())
            .try_fold(1u64, |acc, (&lo, &hi)| {
                let extent = u64::try_from(i128::from(hi) - i128::from(lo) + 1).ok()?;
                acc.checked_mul(extent)
            })
    }
}

impl Sampling<IntegerIndex> for SamplingCartesianIntegerGrid {
    fn num_dimensions(&self) -> usize {
        self.min.num_dimensions()
    }

    fn contains(&self, point: &IntegerIndex) -> bool {
        point.num_dimensions() == self.num_dimensions()
            && point
                .as_slice()
                .iter()
                .zip(self.min.as_slice().iter().zip(self.max.as_slice()))
                .all(|(&c, (&lo, &hi))| lo <= c && c <= hi)
    }

    fn iterator(&self) -> Box<dyn SamplingIterator<IntegerIndex> + '_> {
        Box::new(OdometerIterator {
            grid: self,
            index: before_start(&self.min),
        })
    }
}

fn before_start(min: &IntegerIndex) -> IntegerIndex {
    let mut index = min.clone();
    index[0] -= 1;
    index
}

struct OdometerIterator<'a> {
    grid: &'a SamplingCartesianIntegerGrid,
    index: IntegerIndex,
}

impl SamplingIterator<IntegerIndex> for OdometerIterator<'_> {
    fn has_next(&mut self) -> bool {
        self.index != self.grid.max
    }

    fn next(&mut self, out: &mut IntegerIndex) -> Result<()> {
        if !self.has_next() {
            return Err(Error::illegal_state("lattice traversal exhausted"));
        }
        let index = self.index.as_mut_slice();
        for (dim, c) in index.iter_mut().enumerate() {
            if *c < self.grid.max[dim] {
                *c += 1;
                break;
            }
            *c = self.grid.min[dim];
        }
        out.clone_from(&self.index);
        Ok(())
    }

    fn reset(&mut self) {
        self.index = before_start(&self.grid.min);
    }
}

use tessera_common::{Result, error::Error};

use crate::{
    grid::SamplingCartesianIntegerGrid,
    point::{Coordinate, IntegerIndex},
    sampling::Sampling,
};

/// Axis-aligned bounding box of a sampling's points.
#[derive(Debug, Clone, PartialEq)]
pub struct Extents<T> {
    min: T,
    max: T,
}

impl<T> Extents<T> {
    pub fn min(&self) -> &T {
        &self.min
    }

    pub fn max(&self) -> &T {
        &self.max
    }

    pub fn into_parts(self) -> (T, T) {
        (self.min, self.max)
    }
}

impl Extents<IntegerIndex> {
    /// The lattice of every integer point within the extents.
    pub fn into_grid(self) -> Result<SamplingCartesianIntegerGrid> {
        SamplingCartesianIntegerGrid::new(self.min, self.max)
    }
}

/// Bounding-box computation over samplings.
pub struct Bounds;

impl Bounds {
    /// Streams every point of `sampling` once, accumulating componentwise
    /// minima and maxima.
    ///
    /// Fails with `InvalidRange` when the sampling has no points.
    pub fn find<T, S>(sampling: &S) -> Result<Extents<T>>
    where
        T: Coordinate,
        S: Sampling<T> + ?Sized,
    {
        let dims = sampling.num_dimensions();
        let mut min = T::with_dimensions(dims);
        let mut max = T::with_dimensions(dims);
        min.set_max();
        max.set_min();

        let mut point = T::with_dimensions(dims);
        let mut count = 0u64;
        let mut iter = sampling.iterator();
        while iter.has_next() {
            iter.next(&mut point)?;
            min.update_min(&point);
            max.update_max(&point);
            count += 1;
        }
        if count == 0 {
            return Err(Error::invalid_range("sampling", "sampling has no points"));
        }
        log::debug!("bounds of {count} points: {min:?}..{max:?}");
        Ok(Extents { min, max })
    }
}

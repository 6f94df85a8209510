use std::sync::Arc;

use tessera_common::Result;

use super::SamplingDifference;
use crate::{
    bounds::Bounds,
    point::IntegerIndex,
    sampling::{Sampling, SamplingIterator, SamplingRef},
};

/// The lattice points of a sampling's bounding box that are not in the
/// sampling.
///
/// The box is found once at construction with [`Bounds::find`]; membership
/// and traversal are those of the difference between the box and the
/// sampling.
pub struct SamplingComplement {
    difference: SamplingDifference<IntegerIndex>,
}

impl SamplingComplement {
    /// Fails with `InvalidRange` when the sampling has no points.
    pub fn new(sampling: SamplingRef<IntegerIndex>) -> Result<Self> {
        let extents = Bounds::find(sampling.as_ref())?;
        log::debug!(
            "complement bounding box {:?}..{:?}",
            extents.min(),
            extents.max()
        );
        let bounding_box = Arc::new(extents.into_grid()?);
        Ok(SamplingComplement {
            difference: SamplingDifference::new(bounding_box, sampling)?,
        })
    }
}

impl Sampling<IntegerIndex> for SamplingComplement {
    fn num_dimensions(&self) -> usize {
        self.difference.num_dimensions()
    }

    fn contains(&self, point: &IntegerIndex) -> bool {
        self.difference.contains(point)
    }

    fn iterator(&self) -> Box<dyn SamplingIterator<IntegerIndex> + '_> {
        self.difference.iterator()
    }
}

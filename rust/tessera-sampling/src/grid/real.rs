use tessera_common::{Result, error::Error};

use super::{RealGridOptions, delegate_to_points};
use crate::{general::SamplingGeneral, point::RealIndex};

/// A regular real-valued grid over the box `[min, max]`.
///
/// Dimension `d` is split into `counts[d] - 1` equal steps, so both corners
/// are grid points. All points are enumerated at construction into a
/// [`SamplingGeneral`], which answers containment within the configured
/// tolerance.
#[derive(Debug, Clone)]
pub struct SamplingCartesianRealGrid {
    min: RealIndex,
    max: RealIndex,
    counts: Vec<u64>,
    points: SamplingGeneral<RealIndex>,
}

impl SamplingCartesianRealGrid {
    pub fn new(min: RealIndex, max: RealIndex, counts: &[u64]) -> Result<SamplingCartesianRealGrid> {
        Self::with_options(min, max, counts, &RealGridOptions::default())
    }

    /// # Errors
    ///
    /// Fails with `InvalidRange` on an arity mismatch, a non-finite or
    /// inverted corner, a zero count, a single-point dimension whose corners
    /// differ, or a total point count that does not fit in memory.
    pub fn with_options(
        min: RealIndex,
        max: RealIndex,
        counts: &[u64],
        options: &RealGridOptions,
    ) -> Result<SamplingCartesianRealGrid> {
        options.validate()?;
        let dims = min.num_dimensions();
        if dims == 0 || max.num_dimensions() != dims || counts.len() != dims {
            return Err(Error::invalid_range(
                "counts",
                format!(
                    "min, max and counts must share a nonzero arity ({}, {}, {})",
                    dims,
                    max.num_dimensions(),
                    counts.len()
                ),
            ));
        }
        for dim in 0..dims {
            let (lo, hi, count) = (min[dim], max[dim], counts[dim]);
            if !lo.is_finite() || !hi.is_finite() || lo > hi {
                return Err(Error::invalid_range(
                    "max",
                    format!("dimension {dim}: bad interval [{lo}, {hi}]"),
                ));
            }
            if count == 0 || (count == 1 && lo != hi) {
                return Err(Error::invalid_range(
                    "counts",
                    format!("dimension {dim}: {count} points cannot span [{lo}, {hi}]"),
                ));
            }
        }
        let total = counts
            .iter()
            .try_fold(1u64, |acc, &c| acc.checked_mul(c))
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| Error::invalid_range("counts", "point count overflows"))?;

        let mut points = SamplingGeneral::with_tolerance(dims, options.get_tolerance())?;
        let mut steps = vec![0u64; dims];
        let mut point = RealIndex::new(dims);
        for _ in 0..total {
            for dim in 0..dims {
                point[dim] = grid_coordinate(min[dim], max[dim], steps[dim], counts[dim]);
            }
            points.add(&point)?;
            for (step, &count) in steps.iter_mut().zip(counts) {
                *step += 1;
                if *step < count {
                    break;
                }
                *step = 0;
            }
        }
        log::debug!("enumerated real grid {min:?}..{max:?}: {total} points");
        Ok(SamplingCartesianRealGrid {
            min,
            max,
            counts: counts.to_vec(),
            points,
        })
    }

    pub fn min(&self) -> &RealIndex {
        &self.min
    }

    pub fn max(&self) -> &RealIndex {
        &self.max
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The `step`-th of `count` evenly spaced values from `lo` to `hi`; the last
/// one is `hi` exactly.
fn grid_coordinate(lo: f64, hi: f64, step: u64, count: u64) -> f64 {
    if step + 1 == count {
        hi
    } else {
        lo + (hi - lo) * (step as f64) / ((count - 1) as f64)
    }
}

delegate_to_points!(SamplingCartesianRealGrid);

use tessera_common::{Result, error::Error, verify_arg};

use crate::{
    point::Coordinate,
    sampling::{Sampling, SamplingIterator},
};

/// An explicit list of points.
///
/// Membership is a linear scan comparing components within `tolerance`, so
/// real points computed through floating point arithmetic still match their
/// intended grid positions. Integer points compare exactly.
#[derive(Debug, Clone)]
pub struct SamplingGeneral<T> {
    num_dimensions: usize,
    tolerance: f64,
    points: Vec<T>,
}

impl<T: Coordinate> SamplingGeneral<T> {
    /// An empty sampling with exact containment.
    pub fn new(num_dimensions: usize) -> SamplingGeneral<T> {
        SamplingGeneral {
            num_dimensions,
            tolerance: 0.0,
            points: Vec::new(),
        }
    }

    /// An empty sampling matching points within `tolerance` per component.
    pub fn with_tolerance(num_dimensions: usize, tolerance: f64) -> Result<SamplingGeneral<T>> {
        verify_arg!(tolerance, tolerance >= 0.0 && tolerance.is_finite());
        Ok(SamplingGeneral {
            num_dimensions,
            tolerance,
            points: Vec::new(),
        })
    }

    /// Appends a copy of `point`. Fails with `InvalidRange` on an arity mismatch.
    pub fn add(&mut self, point: &T) -> Result<()> {
        if point.num_dimensions() != self.num_dimensions {
            return Err(Error::invalid_range(
                "point",
                format!(
                    "point has {} dimensions, sampling has {}",
                    point.num_dimensions(),
                    self.num_dimensions
                ),
            ));
        }
        self.points.push(point.clone());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn points(&self) -> &[T] {
        &self.points
    }
}

impl<T: Coordinate> Sampling<T> for SamplingGeneral<T> {
    fn num_dimensions(&self) -> usize {
        self.num_dimensions
    }

    fn contains(&self, point: &T) -> bool {
        point.num_dimensions() == self.num_dimensions
            && self
                .points
                .iter()
                .any(|p| p.approx_eq(point, self.tolerance))
    }

    fn iterator(&self) -> Box<dyn SamplingIterator<T> + '_> {
        Box::new(GeneralIterator {
            points: &self.points,
            pos: 0,
        })
    }
}

struct GeneralIterator<'a, T> {
    points: &'a [T],
    pos: usize,
}

impl<T: Coordinate> SamplingIterator<T> for GeneralIterator<'_, T> {
    fn has_next(&mut self) -> bool {
        self.pos < self.points.len()
    }

    fn next(&mut self, out: &mut T) -> Result<()> {
        let point = self
            .points
            .get(self.pos)
            .ok_or_else(|| Error::illegal_state("point list exhausted"))?;
        out.clone_from(point);
        self.pos += 1;
        Ok(())
    }

    fn reset(&mut self) {
        self.pos = 0;
    }
}

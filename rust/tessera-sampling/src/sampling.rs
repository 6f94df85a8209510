use std::sync::Arc;

use tessera_common::Result;

use crate::point::Coordinate;

/// Shared handle to a sampling used as a combinator operand.
pub type SamplingRef<T> = Arc<dyn Sampling<T>>;

/// A set of points over a `num_dimensions()`-dimensional coordinate space.
pub trait Sampling<T>: Send + Sync {
    fn num_dimensions(&self) -> usize;

    /// Whether `point` belongs to the set. Points of a different arity never do.
    fn contains(&self, point: &T) -> bool;

    /// Starts a fresh traversal.
    fn iterator(&self) -> Box<dyn SamplingIterator<T> + '_>;
}

/// Stateful, resettable, single-threaded traversal over a sampling.
pub trait SamplingIterator<T> {
    /// Whether another point remains. Repeated calls without `next` return the
    /// same answer.
    fn has_next(&mut self) -> bool;

    /// Writes the next point into `out`.
    ///
    /// Fails with `IllegalState` when the traversal is exhausted.
    fn next(&mut self, out: &mut T) -> Result<()>;

    /// Rewinds to the start of a fresh traversal.
    fn reset(&mut self);
}

/// Adapts a sampling traversal into an `Iterator` yielding owned points.
pub struct Points<'a, T> {
    iter: Box<dyn SamplingIterator<T> + 'a>,
    template: T,
}

impl<'a, T: Coordinate> Points<'a, T> {
    pub fn new<S: Sampling<T> + ?Sized>(sampling: &'a S) -> Points<'a, T> {
        Points {
            iter: sampling.iterator(),
            template: T::with_dimensions(sampling.num_dimensions()),
        }
    }
}

impl<T: Coordinate> Iterator for Points<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if !self.iter.has_next() {
            return None;
        }
        let mut point = self.template.clone();
        self.iter.next(&mut point).ok()?;
        Some(point)
    }
}

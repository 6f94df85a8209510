use tessera_common::Predicate;

use super::Lookahead;
use crate::{
    point::Coordinate,
    sampling::{Sampling, SamplingIterator, SamplingRef},
};

/// Points of a sampling that satisfy a predicate.
pub struct SamplingConditional<T> {
    predicate: Predicate<T>,
    sampling: SamplingRef<T>,
}

impl<T: Coordinate> SamplingConditional<T> {
    pub fn new(predicate: Predicate<T>, sampling: SamplingRef<T>) -> Self {
        SamplingConditional {
            predicate,
            sampling,
        }
    }
}

impl<T: Coordinate> Sampling<T> for SamplingConditional<T> {
    fn num_dimensions(&self) -> usize {
        self.sampling.num_dimensions()
    }

    fn contains(&self, point: &T) -> bool {
        (self.predicate)(point) && self.sampling.contains(point)
    }

    fn iterator(&self) -> Box<dyn SamplingIterator<T> + '_> {
        let predicate = self.predicate.as_ref();
        Box::new(Lookahead::new(
            self.sampling.iterator(),
            self.num_dimensions(),
            predicate,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use itertools::Itertools;

    use super::*;
    use crate::{IntegerIndex, SamplingCartesianIntegerGrid, sampling::Points};

    #[test]
    fn test_diagonal_of_box() {
        let grid: SamplingRef<IntegerIndex> = Arc::new(
            SamplingCartesianIntegerGrid::new([0, 0].into(), [3, 3].into()).unwrap(),
        );
        let diagonal =
            SamplingConditional::new(Arc::new(|p: &IntegerIndex| p[0] == p[1]), grid);
        assert_eq!(
            Points::new(&diagonal).map(|p| p[0]).collect_vec(),
            vec![0, 1, 2, 3]
        );
        assert!(diagonal.contains(&IntegerIndex::from([2, 2])));
        assert!(!diagonal.contains(&IntegerIndex::from([2, 1])));
        assert!(!diagonal.contains(&IntegerIndex::from([4, 4])));
    }

    #[test]
    fn test_rejecting_everything() {
        let grid: SamplingRef<IntegerIndex> = Arc::new(
            SamplingCartesianIntegerGrid::new([0].into(), [9].into()).unwrap(),
        );
        let none = SamplingConditional::new(Arc::new(|_: &IntegerIndex| false), grid);
        let mut iter = none.iterator();
        assert!(!iter.has_next());
        let mut p = IntegerIndex::new(1);
        assert!(iter.next(&mut p).unwrap_err().is_illegal_state());
    }
}

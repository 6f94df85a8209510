use tessera_common::Result;

use super::{Lookahead, verify_same_arity};
use crate::{
    point::Coordinate,
    sampling::{Sampling, SamplingIterator, SamplingRef},
};

/// Points of `left` that are not in `right`.
pub struct SamplingDifference<T> {
    left: SamplingRef<T>,
    right: SamplingRef<T>,
}

impl<T: Coordinate> SamplingDifference<T> {
    /// Fails with `InvalidRange` if the operands differ in arity.
    pub fn new(left: SamplingRef<T>, right: SamplingRef<T>) -> Result<Self> {
        verify_same_arity(left.num_dimensions(), right.num_dimensions())?;
        Ok(SamplingDifference { left, right })
    }
}

impl<T: Coordinate> Sampling<T> for SamplingDifference<T> {
    fn num_dimensions(&self) -> usize {
        self.left.num_dimensions()
    }

    fn contains(&self, point: &T) -> bool {
        self.left.contains(point) && !self.right.contains(point)
    }

    fn iterator(&self) -> Box<dyn SamplingIterator<T> + '_> {
        let right = self.right.as_ref();
        Box::new(Lookahead::new(
            self.left.iterator(),
            self.num_dimensions(),
            move |p: &T| !right.contains(p),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use itertools::Itertools;

    use super::*;
    use crate::{IntegerIndex, SamplingCartesianIntegerGrid, SamplingGeneral, sampling::Points};

    fn grid(min: [i64; 2], max: [i64; 2]) -> SamplingRef<IntegerIndex> {
        Arc::new(SamplingCartesianIntegerGrid::new(min.into(), max.into()).unwrap())
    }

    #[test]
    fn test_difference_of_boxes() {
        let diff = SamplingDifference::new(grid([0, 0], [2, 1]), grid([1, 0], [5, 5])).unwrap();
        let points = Points::new(&diff).collect_vec();
        assert_eq!(
            points,
            vec![IntegerIndex::from([0, 0]), IntegerIndex::from([0, 1])]
        );
        assert!(diff.contains(&IntegerIndex::from([0, 1])));
        assert!(!diff.contains(&IntegerIndex::from([1, 1])));
        assert!(!diff.contains(&IntegerIndex::from([3, 3])));
    }

    #[test]
    fn test_lookahead_protocol() {
        let diff = SamplingDifference::new(grid([0, 0], [3, 0]), grid([0, 0], [2, 0])).unwrap();
        let mut iter = diff.iterator();
        let mut p = IntegerIndex::new(2);
        assert!(iter.next(&mut p).unwrap_err().is_illegal_state());
        assert!(iter.has_next());
        assert!(iter.has_next());
        iter.next(&mut p).unwrap();
        assert_eq!(p, IntegerIndex::from([3, 0]));
        assert!(!iter.has_next());
        assert!(iter.next(&mut p).unwrap_err().is_illegal_state());
        iter.reset();
        assert!(iter.has_next());
    }

    #[test]
    fn test_empty_difference_and_arity_check() {
        let everything = grid([0, 0], [1, 1]);
        let diff = SamplingDifference::new(everything.clone(), everything.clone()).unwrap();
        assert!(!diff.iterator().has_next());

        let line: SamplingRef<IntegerIndex> = Arc::new(SamplingGeneral::new(1));
        assert!(
            SamplingDifference::new(everything, line)
                .err()
                .unwrap()
                .is_invalid_range()
        );
    }
}

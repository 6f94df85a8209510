use tessera_common::{Result, error::Error};

use super::{Lookahead, verify_same_arity};
use crate::{
    point::Coordinate,
    sampling::{Sampling, SamplingIterator, SamplingRef},
};

/// Points in `left` or `right`.
///
/// Traversal visits all of `left`, then the points of `right` not already
/// in `left`, so no point is emitted twice by the union itself.
pub struct SamplingUnion<T> {
    left: SamplingRef<T>,
    right: SamplingRef<T>,
}

impl<T: Coordinate> SamplingUnion<T> {
    /// Fails with `InvalidRange` if the operands differ in arity.
    pub fn new(left: SamplingRef<T>, right: SamplingRef<T>) -> Result<Self> {
        verify_same_arity(left.num_dimensions(), right.num_dimensions())?;
        Ok(SamplingUnion { left, right })
    }
}

impl<T: Coordinate> Sampling<T> for SamplingUnion<T> {
    fn num_dimensions(&self) -> usize {
        self.left.num_dimensions()
    }

    fn contains(&self, point: &T) -> bool {
        self.left.contains(point) || self.right.contains(point)
    }

    fn iterator(&self) -> Box<dyn SamplingIterator<T> + '_> {
        let left = self.left.as_ref();
        Box::new(UnionIterator {
            left: Lookahead::new(left.iterator(), self.num_dimensions(), |_: &T| true),
            right: Lookahead::new(self.right.iterator(), self.num_dimensions(), move |p: &T| {
                !left.contains(p)
            }),
        })
    }
}

struct UnionIterator<L, R> {
    left: L,
    right: R,
}

impl<T, L, R> SamplingIterator<T> for UnionIterator<L, R>
where
    L: SamplingIterator<T>,
    R: SamplingIterator<T>,
{
    fn has_next(&mut self) -> bool {
        self.left.has_next() || self.right.has_next()
    }

    fn next(&mut self, out: &mut T) -> Result<()> {
        if self.left.next(out).is_ok() {
            return Ok(());
        }
        self.right
            .next(out)
            .map_err(|_| Error::illegal_state("next() without a successful has_next()"))
    }

    fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
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
    fn test_overlapping_boxes() {
        let union = SamplingUnion::new(grid([0, 0], [1, 1]), grid([1, 1], [2, 2])).unwrap();
        let points = Points::new(&union).collect_vec();
        assert_eq!(points.len(), 4 + 9 - 1);
        assert!(points.iter().tuple_combinations().all(|(a, b)| a != b));
        assert!(points.iter().all(|p| union.contains(p)));
        assert_eq!(points[4], IntegerIndex::from([2, 1]));
    }

    #[test]
    fn test_right_points_already_in_left_are_skipped() {
        let mut scattered = SamplingGeneral::new(2);
        for p in [[0, 0], [5, 5], [1, 0], [6, 5]] {
            scattered.add(&IntegerIndex::from(p)).unwrap();
        }
        let union = SamplingUnion::new(grid([0, 0], [1, 0]), Arc::new(scattered)).unwrap();
        assert_eq!(
            Points::new(&union).collect_vec(),
            vec![
                IntegerIndex::from([0, 0]),
                IntegerIndex::from([1, 0]),
                IntegerIndex::from([5, 5]),
                IntegerIndex::from([6, 5]),
            ]
        );
    }

    #[test]
    fn test_next_requires_has_next() {
        let union = SamplingUnion::new(grid([0, 0], [0, 0]), grid([0, 0], [0, 0])).unwrap();
        let mut iter = union.iterator();
        let mut p = IntegerIndex::new(2);
        assert!(iter.next(&mut p).unwrap_err().is_illegal_state());
        assert!(iter.has_next());
        iter.next(&mut p).unwrap();
        assert!(!iter.has_next());
        assert!(iter.next(&mut p).unwrap_err().is_illegal_state());
    }
}

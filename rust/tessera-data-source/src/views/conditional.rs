use std::sync::Arc;

use tessera_common::{Algebra, Predicate, Result, error::Error, result::check_index};

use crate::data_source::{DataSourceRef, IndexedDataSource, Ownership, StorageConstruction};

/// The elements of a base source satisfying a predicate.
///
/// The view is a snapshot taken at construction: the base is scanned once and
/// the positions of matching elements are recorded. Later changes made to the
/// base through other handles neither add nor remove members, and `size()`
/// stays frozen. Writes through this view must themselves satisfy the
/// predicate.
pub struct ConditionalDataSource<U> {
    base: DataSourceRef<U>,
    predicate: Predicate<U>,
    positions: Arc<Vec<u64>>,
}

impl<U: Send + Sync + 'static> ConditionalDataSource<U> {
    /// Scans `base` with a scratch element constructed by `algebra`.
    pub fn new<A>(algebra: &A, predicate: Predicate<U>, base: DataSourceRef<U>) -> Result<Self>
    where
        A: Algebra<Element = U>,
    {
        let mut scratch = algebra.construct();
        let mut positions = Vec::new();
        for i in 0..base.size() {
            base.get(i, &mut scratch)?;
            if predicate(&scratch) {
                positions.push(i);
            }
        }
        log::debug!(
            "conditional view selected {} of {} elements",
            positions.len(),
            base.size()
        );
        Ok(ConditionalDataSource {
            base,
            predicate,
            positions: Arc::new(positions),
        })
    }

    /// Positions in the base of the selected elements, in ascending order.
    pub fn positions(&self) -> &[u64] {
        &self.positions
    }

    #[inline]
    fn physical(&self, index: u64) -> Result<u64> {
        check_index(index, self.positions.len() as u64)?;
        Ok(self.positions[index as usize])
    }
}

impl<U: Send + Sync + 'static> IndexedDataSource<U> for ConditionalDataSource<U> {
    fn get(&self, index: u64, out: &mut U) -> Result<()> {
        self.base.get(self.physical(index)?, out)
    }

    fn set(&self, index: u64, value: &U) -> Result<()> {
        let position = self.physical(index)?;
        if !(self.predicate)(value) {
            return Err(Error::constraint_violation(format!(
                "value written at {index} does not satisfy the view's predicate"
            )));
        }
        self.base.set(position, value)
    }

    fn size(&self) -> u64 {
        self.positions.len() as u64
    }

    fn duplicate(&self) -> DataSourceRef<U> {
        Arc::new(ConditionalDataSource {
            base: self.base.clone(),
            predicate: self.predicate.clone(),
            positions: self.positions.clone(),
        })
    }

    fn storage_type(&self) -> StorageConstruction {
        self.base.storage_type()
    }

    fn access_with_one_thread(&self) -> bool {
        self.base.access_with_one_thread()
    }

    fn ownership(&self) -> Ownership {
        self.base.ownership()
    }
}

#[cfg(test)]
mod tests {
    use tessera_common::algebra::Int32Algebra;

    use super::*;
    use crate::{ops, storage::ArrayDataSource};

    fn is_even() -> Predicate<i32> {
        Arc::new(|v: &i32| v % 2 == 0)
    }

    fn base() -> DataSourceRef<i32> {
        Arc::new(ArrayDataSource::from_slice(
            Arc::new(Int32Algebra::new()),
            &[1, 2, 3, 4, 5, 6],
        ))
    }

    #[test]
    fn test_selects_matching() {
        let cond = ConditionalDataSource::new(&Int32Algebra::new(), is_even(), base()).unwrap();
        assert_eq!(cond.size(), 3);
        assert_eq!(cond.positions(), &[1, 3, 5]);
        assert_eq!(
            ops::to_vec(&Int32Algebra::new(), &cond).unwrap(),
            vec![2, 4, 6]
        );
    }

    #[test]
    fn test_set_requires_predicate() {
        let b = base();
        let cond = ConditionalDataSource::new(&Int32Algebra::new(), is_even(), b.clone()).unwrap();
        assert!(cond.set(0, &7).unwrap_err().is_constraint_violation());
        cond.set(0, &8).unwrap();
        let mut v = 0;
        b.get(1, &mut v).unwrap();
        assert_eq!(v, 8);
        assert!(cond.set(3, &2).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_snapshot_semantics() {
        let b = base();
        let cond = ConditionalDataSource::new(&Int32Algebra::new(), is_even(), b.clone()).unwrap();
        // Out-of-band writes do not change membership
        b.set(0, &10).unwrap();
        b.set(1, &11).unwrap();
        assert_eq!(cond.size(), 3);
        let mut v = 0;
        cond.get(0, &mut v).unwrap();
        assert_eq!(v, 11);
    }
}

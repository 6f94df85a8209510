use std::sync::{Arc, RwLock};

use tessera_common::{Algebra, Result, result::check_index};

use super::StorageOptions;
use crate::{
    data_source::{
        DataSourceRef, IndexedDataSource, Ownership, StorageConstruction, read_lock, write_lock,
    },
    segmented_vec::SegmentedVec,
};

/// Growable storage whose length may exceed what a single native allocation
/// can address, built on a [`SegmentedVec`].
///
/// This is the only backing that exclusively owns its elements:
/// `duplicate()` performs a full deep copy, re-assigning every element into
/// freshly constructed storage, so the copy and the original never share
/// mutable state.
pub struct BigListDataSource<A: Algebra> {
    algebra: Arc<A>,
    data: RwLock<SegmentedVec<A::Element>>,
}

impl<A: Algebra> BigListDataSource<A> {
    /// Allocates `size` zero-initialized elements using the default options.
    pub fn new(algebra: Arc<A>, size: u64) -> BigListDataSource<A> {
        Self::with_segments(algebra, size, SegmentedVec::<A::Element>::DEFAULT_SEGMENT_SIZE)
    }

    /// Allocates `size` zero-initialized elements laid out according to `options`.
    pub fn with_options(
        algebra: Arc<A>,
        size: u64,
        options: &StorageOptions,
    ) -> Result<BigListDataSource<A>> {
        options.validate()?;
        Ok(Self::with_segments(algebra, size, options.get_segment_size()))
    }

    fn with_segments(algebra: Arc<A>, size: u64, segment_size: usize) -> BigListDataSource<A> {
        let mut data = SegmentedVec::with_segment_size(segment_size);
        data.resize_with(size, || algebra.construct());
        log::debug!(
            "allocated big list: {size} elements in {} segments of {segment_size}",
            data.segments().len()
        );
        BigListDataSource {
            algebra,
            data: RwLock::new(data),
        }
    }

    /// Appends a copy of `value`.
    pub fn push(&self, value: &A::Element) {
        let element = self.algebra.construct_from(value);
        write_lock(&self.data).push(element);
    }

    /// Grows with zero elements or truncates so that `size() == new_len`.
    pub fn resize(&self, new_len: u64) {
        write_lock(&self.data).resize_with(new_len, || self.algebra.construct());
    }

    pub fn segment_size(&self) -> usize {
        read_lock(&self.data).segment_size()
    }

    /// Element-by-element copy into a new, independent big list.
    pub fn deep_copy(&self) -> BigListDataSource<A> {
        let data = read_lock(&self.data);
        let mut copy = SegmentedVec::with_segment_size(data.segment_size());
        for element in data.iter() {
            copy.push(self.algebra.construct_from(element));
        }
        BigListDataSource {
            algebra: self.algebra.clone(),
            data: RwLock::new(copy),
        }
    }
}

impl<A> IndexedDataSource<A::Element> for BigListDataSource<A>
where
    A: Algebra + 'static,
    A::Element: 'static,
{
    fn get(&self, index: u64, out: &mut A::Element) -> Result<()> {
        let data = read_lock(&self.data);
        check_index(index, data.len())?;
        self.algebra.assign(&data[index], out);
        Ok(())
    }

    fn set(&self, index: u64, value: &A::Element) -> Result<()> {
        let mut data = write_lock(&self.data);
        check_index(index, data.len())?;
        self.algebra.assign(value, &mut data[index]);
        Ok(())
    }

    fn size(&self) -> u64 {
        read_lock(&self.data).len()
    }

    fn duplicate(&self) -> DataSourceRef<A::Element> {
        Arc::new(self.deep_copy())
    }

    fn storage_type(&self) -> StorageConstruction {
        StorageConstruction::Array
    }

    fn access_with_one_thread(&self) -> bool {
        false
    }

    fn ownership(&self) -> Ownership {
        Ownership::Owning
    }
}

#[cfg(test)]
mod tests {
    use tessera_common::algebra::{Int64Algebra, StdAlgebra};

    use super::*;

    #[test]
    fn test_spans_segments() {
        let options = StorageOptions::new().segment_size(4);
        let list = BigListDataSource::with_options(Arc::new(Int64Algebra::new()), 10, &options)
            .unwrap();
        assert_eq!(list.size(), 10);
        assert_eq!(list.segment_size(), 4);
        for i in 0..10 {
            list.set(i, &(i as i64 * 10)).unwrap();
        }
        let mut v = 0;
        for i in 0..10 {
            list.get(i, &mut v).unwrap();
            assert_eq!(v, i as i64 * 10);
        }
        assert!(list.get(10, &mut v).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_duplicate_is_deep() {
        let list = BigListDataSource::new(Arc::new(StdAlgebra::<Vec<u8>>::new()), 3);
        list.set(1, &vec![1, 2, 3]).unwrap();

        let dup = list.duplicate();
        assert_eq!(list.ownership(), Ownership::Owning);
        assert_eq!(dup.ownership(), Ownership::Owning);
        assert_eq!(dup.size(), 3);

        dup.set(1, &vec![9]).unwrap();
        let mut v = Vec::new();
        list.get(1, &mut v).unwrap();
        assert_eq!(v, vec![1, 2, 3]);
        dup.get(1, &mut v).unwrap();
        assert_eq!(v, vec![9]);
    }

    #[test]
    fn test_push_and_resize() {
        let list = BigListDataSource::new(Arc::new(Int64Algebra::new()), 0);
        list.push(&5);
        list.push(&6);
        assert_eq!(list.size(), 2);
        list.resize(5);
        let mut v = -1;
        list.get(4, &mut v).unwrap();
        assert_eq!(v, 0);
        list.resize(1);
        assert_eq!(list.size(), 1);
        list.get(0, &mut v).unwrap();
        assert_eq!(v, 5);
    }

    #[test]
    fn test_invalid_options() {
        let options = StorageOptions::new().segment_size(3);
        assert!(
            BigListDataSource::with_options(Arc::new(Int64Algebra::new()), 1, &options)
                .err()
                .unwrap()
                .is_invalid_range()
        );
    }
}

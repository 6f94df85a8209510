use std::sync::{Arc, RwLock};

use tessera_common::{Algebra, Result, error::Error, result::check_index};

use crate::data_source::{
    DataSourceRef, IndexedDataSource, Ownership, StorageConstruction, read_lock, write_lock,
};

/// Fixed-size dense storage.
///
/// Cloning and `duplicate()` produce handles over the same elements.
pub struct ArrayDataSource<A: Algebra> {
    algebra: Arc<A>,
    data: Arc<RwLock<Vec<A::Element>>>,
}

impl<A: Algebra> ArrayDataSource<A> {
    /// Allocates `size` zero-initialized elements.
    pub fn new(algebra: Arc<A>, size: usize) -> ArrayDataSource<A> {
        let data = (0..size).map(|_| algebra.construct()).collect();
        ArrayDataSource::from_vec(algebra, data)
    }

    /// Takes ownership of an existing vector of elements.
    pub fn from_vec(algebra: Arc<A>, data: Vec<A::Element>) -> ArrayDataSource<A> {
        ArrayDataSource {
            algebra,
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Copies the elements of `values` into a new array source.
    pub fn from_slice(algebra: Arc<A>, values: &[A::Element]) -> ArrayDataSource<A> {
        let data = values.iter().map(|v| algebra.construct_from(v)).collect();
        ArrayDataSource::from_vec(algebra, data)
    }

    pub fn algebra(&self) -> &Arc<A> {
        &self.algebra
    }

    /// Returns `true` if both handles address the same elements.
    pub fn shares_storage_with(&self, other: &ArrayDataSource<A>) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl<A: Algebra> Clone for ArrayDataSource<A> {
    fn clone(&self) -> Self {
        ArrayDataSource {
            algebra: self.algebra.clone(),
            data: self.data.clone(),
        }
    }
}

impl<A> IndexedDataSource<A::Element> for ArrayDataSource<A>
where
    A: Algebra + 'static,
    A::Element: 'static,
{
    fn get(&self, index: u64, out: &mut A::Element) -> Result<()> {
        let data = read_lock(&self.data);
        check_index(index, data.len() as u64)?;
        self.algebra.assign(&data[index as usize], out);
        Ok(())
    }

    fn set(&self, index: u64, value: &A::Element) -> Result<()> {
        let mut data = write_lock(&self.data);
        check_index(index, data.len() as u64)?;
        self.algebra.assign(value, &mut data[index as usize]);
        Ok(())
    }

    fn size(&self) -> u64 {
        read_lock(&self.data).len() as u64
    }

    fn duplicate(&self) -> DataSourceRef<A::Element> {
        Arc::new(self.clone())
    }

    fn storage_type(&self) -> StorageConstruction {
        StorageConstruction::Array
    }

    fn access_with_one_thread(&self) -> bool {
        false
    }

    fn ownership(&self) -> Ownership {
        Ownership::Aliasing
    }
}

/// Converts a requested element count into a native allocation length.
pub(crate) fn native_len(size: u64) -> Result<usize> {
    usize::try_from(size).map_err(|_| {
        Error::invalid_range("size", format!("{size} exceeds the native array capacity"))
    })
}

#[cfg(test)]
mod tests {
    use tessera_common::algebra::Int32Algebra;

    use super::*;

    fn array(values: &[i32]) -> ArrayDataSource<Int32Algebra> {
        ArrayDataSource::from_slice(Arc::new(Int32Algebra::new()), values)
    }

    #[test]
    fn test_get_set() {
        let ds = array(&[1, 2, 3]);
        assert_eq!(ds.size(), 3);
        let mut v = 0;
        ds.get(1, &mut v).unwrap();
        assert_eq!(v, 2);
        ds.set(1, &20).unwrap();
        ds.get(1, &mut v).unwrap();
        assert_eq!(v, 20);
    }

    #[test]
    fn test_out_of_bounds() {
        let ds = array(&[1, 2, 3]);
        let mut v = 0;
        assert!(ds.get(3, &mut v).unwrap_err().is_out_of_bounds());
        assert!(ds.set(u64::MAX, &v).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_new_is_zero_filled() {
        let ds = ArrayDataSource::new(Arc::new(Int32Algebra::new()), 4);
        assert_eq!(ds.size(), 4);
        let mut v = -1;
        for i in 0..4 {
            ds.get(i, &mut v).unwrap();
            assert_eq!(v, 0);
        }
    }

    #[test]
    fn test_duplicate_aliases() {
        let ds = array(&[5, 6]);
        let dup = ds.duplicate();
        assert_eq!(ds.ownership(), Ownership::Aliasing);
        dup.set(0, &50).unwrap();
        let mut v = 0;
        ds.get(0, &mut v).unwrap();
        assert_eq!(v, 50);
        assert!(ds.shares_storage_with(&ds.clone()));
    }

    #[test]
    fn test_native_len() {
        assert_eq!(native_len(10).unwrap(), 10);
        if usize::BITS < 64 {
            assert!(native_len(u64::MAX).unwrap_err().is_invalid_range());
        }
    }
}

use std::sync::{Arc, RwLock};

use tessera_common::{Algebra, Result, result::check_index};

use super::array::native_len;
use crate::data_source::{
    DataSourceRef, IndexedDataSource, Ownership, StorageConstruction, read_lock, write_lock,
};

/// Growable dense storage. Like [`ArrayDataSource`](super::ArrayDataSource),
/// clones and duplicates share the same elements.
pub struct ListDataSource<A: Algebra> {
    algebra: Arc<A>,
    data: Arc<RwLock<Vec<A::Element>>>,
}

impl<A: Algebra> ListDataSource<A> {
    pub fn new(algebra: Arc<A>) -> ListDataSource<A> {
        ListDataSource::from_vec(algebra, Vec::new())
    }

    pub fn from_vec(algebra: Arc<A>, data: Vec<A::Element>) -> ListDataSource<A> {
        ListDataSource {
            algebra,
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Appends a copy of `value`.
    pub fn push(&self, value: &A::Element) {
        let element = self.algebra.construct_from(value);
        write_lock(&self.data).push(element);
    }

    /// Grows with zero elements or truncates so that `size() == new_len`.
    pub fn resize(&self, new_len: u64) -> Result<()> {
        let new_len = native_len(new_len)?;
        let mut data = write_lock(&self.data);
        if new_len <= data.len() {
            data.truncate(new_len);
        } else {
            let additional = new_len - data.len();
            data.reserve(additional);
            data.extend((0..additional).map(|_| self.algebra.construct()));
        }
        Ok(())
    }
}

impl<A: Algebra> Clone for ListDataSource<A> {
    fn clone(&self) -> Self {
        ListDataSource {
            algebra: self.algebra.clone(),
            data: self.data.clone(),
        }
    }
}

impl<A> IndexedDataSource<A::Element> for ListDataSource<A>
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

    /// Growth moves indices under concurrent readers.
    fn access_with_one_thread(&self) -> bool {
        true
    }

    fn ownership(&self) -> Ownership {
        Ownership::Aliasing
    }
}

use std::sync::Arc;

use tessera_common::{Result, error::Error, result::check_index};

use crate::data_source::{DataSourceRef, IndexedDataSource, Ownership, StorageConstruction};

/// A contiguous window `[first, first + count)` of another source.
pub struct TrimmedDataSource<U> {
    base: DataSourceRef<U>,
    first: u64,
    count: u64,
}

impl<U: Send + Sync + 'static> TrimmedDataSource<U> {
    pub fn new(base: DataSourceRef<U>, first: u64, count: u64) -> Result<Self> {
        let fits = first
            .checked_add(count)
            .is_some_and(|end| end <= base.size());
        if !fits {
            return Err(Error::invalid_range(
                "count",
                format!("window {first}+{count} exceeds base size {}", base.size()),
            ));
        }
        Ok(TrimmedDataSource { base, first, count })
    }
}

impl<U: Send + Sync + 'static> IndexedDataSource<U> for TrimmedDataSource<U> {
    fn get(&self, index: u64, out: &mut U) -> Result<()> {
        check_index(index, self.count)?;
        self.base.get(self.first + index, out)
    }

    fn set(&self, index: u64, value: &U) -> Result<()> {
        check_index(index, self.count)?;
        self.base.set(self.first + index, value)
    }

    fn size(&self) -> u64 {
        self.count
    }

    fn duplicate(&self) -> DataSourceRef<U> {
        Arc::new(TrimmedDataSource {
            base: self.base.clone(),
            first: self.first,
            count: self.count,
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

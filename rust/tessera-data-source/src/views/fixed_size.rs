use std::sync::Arc;

use tessera_common::Result;

use crate::data_source::{DataSourceRef, IndexedDataSource, Ownership, StorageConstruction};

/// Overrides the size reported by a source; reads and writes go to the
/// wrapped source unchanged. Used to push a source through a length
/// constraint such as a power-of-two transform length.
pub struct FixedSizeDataSource<U> {
    base: DataSourceRef<U>,
    size: u64,
}

impl<U: Send + Sync + 'static> FixedSizeDataSource<U> {
    pub fn new(base: DataSourceRef<U>, size: u64) -> Self {
        FixedSizeDataSource { base, size }
    }
}

impl<U: Send + Sync + 'static> IndexedDataSource<U> for FixedSizeDataSource<U> {
    fn get(&self, index: u64, out: &mut U) -> Result<()> {
        self.base.get(index, out)
    }

    fn set(&self, index: u64, value: &U) -> Result<()> {
        self.base.set(index, value)
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn duplicate(&self) -> DataSourceRef<U> {
        Arc::new(FixedSizeDataSource {
            base: self.base.clone(),
            size: self.size,
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

//! Leaf backings and the options that choose between them.

use std::sync::Arc;

use tessera_common::{Algebra, Result, verify_arg};

use crate::{data_source::DataSourceRef, segmented_vec::SegmentedVec};

pub mod array;
pub mod big_list;
pub mod list;

pub use array::ArrayDataSource;
pub use big_list::BigListDataSource;
pub use list::ListDataSource;

/// Options controlling how [`Storage::allocate`] lays out new storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageOptions {
    segment_size: usize,
    array_threshold: u64,
}

impl StorageOptions {
    /// Largest element count served by a single dense array by default.
    pub const DEFAULT_ARRAY_THRESHOLD: u64 = i32::MAX as u64;

    pub fn new() -> StorageOptions {
        StorageOptions {
            segment_size: SegmentedVec::<()>::DEFAULT_SEGMENT_SIZE,
            array_threshold: Self::DEFAULT_ARRAY_THRESHOLD,
        }
    }

    /// Sets the number of elements per segment of segmented storage.
    /// Must be greater than 1 and a power of two.
    pub fn segment_size(mut self, segment_size: usize) -> Self {
        self.segment_size = segment_size;
        self
    }

    /// Sets the largest size for which dense array storage is allocated.
    pub fn array_threshold(mut self, array_threshold: u64) -> Self {
        self.array_threshold = array_threshold;
        self
    }

    pub fn get_segment_size(&self) -> usize {
        self.segment_size
    }

    pub fn get_array_threshold(&self) -> u64 {
        self.array_threshold
    }

    pub fn validate(&self) -> Result<()> {
        verify_arg!(segment_size, self.segment_size > 1);
        verify_arg!(segment_size, self.segment_size.is_power_of_two());
        Ok(())
    }
}

impl Default for StorageOptions {
    fn default() -> Self {
        StorageOptions::new()
    }
}

/// Storage allocation entry point.
pub struct Storage;

impl Storage {
    /// Allocates `size` zero-initialized elements, as dense array storage when
    /// `size` is within the configured array threshold and as segmented
    /// storage otherwise.
    pub fn allocate<A>(
        algebra: Arc<A>,
        size: u64,
        options: &StorageOptions,
    ) -> Result<DataSourceRef<A::Element>>
    where
        A: Algebra + 'static,
        A::Element: 'static,
    {
        options.validate()?;
        if size <= options.get_array_threshold() {
            let len = array::native_len(size)?;
            log::debug!("allocating {size} elements as array storage");
            Ok(Arc::new(ArrayDataSource::new(algebra, len)))
        } else {
            Ok(Arc::new(BigListDataSource::with_options(
                algebra, size, options,
            )?))
        }
    }
}

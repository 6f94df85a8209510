use std::sync::Arc;

use tessera_common::{Result, error::Error, result::check_index, verify_arg};

use crate::data_source::{DataSourceRef, IndexedDataSource, Ownership, StorageConstruction};

/// A strided window over another source: element `k` is
/// `base[start + k * stride]` for `k` in `[0, count)`.
///
/// The stride may be negative, walking the base backwards. The whole extent is
/// validated at construction, so no access can leave the base's bounds.
pub struct SequencedDataSource<U> {
    base: DataSourceRef<U>,
    start: u64,
    stride: i64,
    count: u64,
}

impl<U: Send + Sync + 'static> SequencedDataSource<U> {
    /// # Errors
    ///
    /// Fails with `InvalidRange` if `stride` is zero, `start` lies outside the
    /// base, or the last element `start + stride * (count - 1)` does.
    pub fn new(base: DataSourceRef<U>, start: u64, stride: i64, count: u64) -> Result<Self> {
        let base_size = base.size();
        verify_arg!(stride, stride != 0);
        verify_arg!(start, start < base_size);
        if count > 0 {
            let last = start as i128 + stride as i128 * (count as i128 - 1);
            if last < 0 || last >= base_size as i128 {
                return Err(Error::invalid_range(
                    "count",
                    format!(
                        "{count} elements from {start} by {stride} leave base of size {base_size}"
                    ),
                ));
            }
        }
        Ok(SequencedDataSource {
            base,
            start,
            stride,
            count,
        })
    }

    /// The whole base in reverse order.
    pub fn reversed(base: DataSourceRef<U>) -> Result<Self> {
        let size = base.size();
        verify_arg!(base, size > 0);
        SequencedDataSource::new(base, size - 1, -1, size)
    }

    #[inline]
    fn physical(&self, index: u64) -> Result<u64> {
        check_index(index, self.count)?;
        Ok((self.start as i128 + index as i128 * self.stride as i128) as u64)
    }
}

impl<U: Send + Sync + 'static> IndexedDataSource<U> for SequencedDataSource<U> {
    fn get(&self, index: u64, out: &mut U) -> Result<()> {
        self.base.get(self.physical(index)?, out)
    }

    fn set(&self, index: u64, value: &U) -> Result<()> {
        self.base.set(self.physical(index)?, value)
    }

    fn size(&self) -> u64 {
        self.count
    }

    fn duplicate(&self) -> DataSourceRef<U> {
        Arc::new(SequencedDataSource {
            base: self.base.clone(),
            start: self.start,
            stride: self.stride,
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

use std::sync::Arc;

use tessera_common::{Result, error::Error, result::check_index};

use crate::data_source::{DataSourceRef, IndexedDataSource, Ownership, StorageConstruction};

/// Two sources joined end to end.
///
/// Indices below the first operand's size route to the first operand, the
/// rest route to `index - first_size` on the second.
///
/// Operand sizes are captured at construction. Growing a list operand
/// afterwards neither extends `size()` nor moves the routing split; shrinking
/// one surfaces as that operand's `IndexOutOfBounds`. Build a new join after
/// resizing an operand.
pub struct ConcatenatedDataSource<U> {
    first: DataSourceRef<U>,
    second: DataSourceRef<U>,
    first_size: u64,
    size: u64,
}

impl<U: Send + Sync + 'static> ConcatenatedDataSource<U> {
    /// Joins `first` and `second`. Fails with `InvalidRange` if the combined size
    /// does not fit in a `u64`.
    pub fn new(first: DataSourceRef<U>, second: DataSourceRef<U>) -> Result<Self> {
        let first_size = first.size();
        let size = first_size.checked_add(second.size()).ok_or_else(|| {
            Error::invalid_range(
                "size",
                format!(
                    "concatenating sizes {first_size} and {} overflows",
                    second.size()
                ),
            )
        })?;
        Ok(ConcatenatedDataSource {
            first,
            second,
            first_size,
            size,
        })
    }

    /// Joins an arbitrary list of sources into a balanced binary tree of
    /// pairwise joins, so that routing an index visits O(log N) joins.
    ///
    /// A single source is returned as is. An empty list fails with `InvalidRange`.
    pub fn optimal_concat(sources: &[DataSourceRef<U>]) -> Result<DataSourceRef<U>> {
        if sources.is_empty() {
            return Err(Error::invalid_range("sources", "!sources.is_empty()"));
        }
        log::debug!(
            "building balanced concatenation of {} sources (depth {})",
            sources.len(),
            usize::BITS - (sources.len() - 1).leading_zeros()
        );
        Self::concat_range(sources)
    }

    fn concat_range(sources: &[DataSourceRef<U>]) -> Result<DataSourceRef<U>> {
        match sources {
            [single] => Ok(single.clone()),
            _ => {
                let mid = sources.len() / 2;
                let left = Self::concat_range(&sources[..mid])?;
                let right = Self::concat_range(&sources[mid..])?;
                Ok(Arc::new(ConcatenatedDataSource::new(left, right)?))
            }
        }
    }

    #[inline]
    fn route(&self, index: u64) -> Result<(&DataSourceRef<U>, u64)> {
        check_index(index, self.size)?;
        if index < self.first_size {
            Ok((&self.first, index))
        } else {
            Ok((&self.second, index - self.first_size))
        }
    }
}

impl<U: Send + Sync + 'static> IndexedDataSource<U> for ConcatenatedDataSource<U> {
    fn get(&self, index: u64, out: &mut U) -> Result<()> {
        let (source, index) = self.route(index)?;
        source.get(index, out)
    }

    fn set(&self, index: u64, value: &U) -> Result<()> {
        let (source, index) = self.route(index)?;
        source.set(index, value)
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn duplicate(&self) -> DataSourceRef<U> {
        Arc::new(ConcatenatedDataSource {
            first: self.first.clone(),
            second: self.second.clone(),
            first_size: self.first_size,
            size: self.size,
        })
    }

    fn storage_type(&self) -> StorageConstruction {
        self.first.storage_type().join(self.second.storage_type())
    }

    fn access_with_one_thread(&self) -> bool {
        self.first.access_with_one_thread() || self.second.access_with_one_thread()
    }

    fn ownership(&self) -> Ownership {
        self.first.ownership().join(self.second.ownership())
    }
}

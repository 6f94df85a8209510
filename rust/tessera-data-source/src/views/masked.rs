use std::sync::Arc;

use tessera_common::{Result, error::Error, result::check_index, verify_arg};

use crate::data_source::{DataSourceRef, IndexedDataSource, Ownership, StorageConstruction};

/// The elements of a base source selected by a boolean mask that repeats
/// cyclically over the base.
///
/// With a mask of `mask_size` bits holding `true_count` set bits, logical
/// index `i` lives in mask cycle `i / true_count` and corresponds to the
/// `(i % true_count) + 1`-th set bit within that cycle.
///
/// The mask is read per access into a call-local bit, so concurrent readers
/// never share transient state.
///
/// The mask length is captured at construction. If the mask is resized
/// afterwards, `size()` reports 0 and every access fails with `IllegalState`.
pub struct MaskedDataSource<U> {
    base: DataSourceRef<U>,
    mask: DataSourceRef<bool>,
    mask_size: u64,
    true_count: u64,
}

impl<U: Send + Sync + 'static> MaskedDataSource<U> {
    /// # Errors
    ///
    /// Fails with `InvalidRange` if the mask is empty, longer than the base,
    /// or has no set bit.
    pub fn new(base: DataSourceRef<U>, mask: DataSourceRef<bool>) -> Result<Self> {
        let mask_size = mask.size();
        verify_arg!(mask, mask_size > 0);
        verify_arg!(mask, mask_size <= base.size());
        let true_count = count_set_bits(mask.as_ref(), mask_size)?;
        verify_arg!(mask, true_count > 0);
        Ok(MaskedDataSource {
            base,
            mask,
            mask_size,
            true_count,
        })
    }

    /// Number of set bits within one mask cycle.
    pub fn true_count(&self) -> u64 {
        self.true_count
    }

    /// Length of one mask cycle, as captured at construction.
    pub fn mask_size(&self) -> u64 {
        self.mask_size
    }

    /// Maps a logical index onto the base.
    pub fn find_position(&self, index: u64) -> Result<u64> {
        let mask_size = self.verify_mask_size()?;
        let full_cycles = index / self.true_count;
        let base_offset = full_cycles * mask_size;
        let target = index % self.true_count;

        let mut bit = false;
        let mut seen = 0;
        for offset in 0..mask_size {
            self.mask.get(offset, &mut bit)?;
            if bit {
                if seen == target {
                    return Ok(base_offset + offset);
                }
                seen += 1;
            }
        }
        Err(Error::illegal_state(format!(
            "mask lost set bits: {seen} of {} found",
            self.true_count
        )))
    }

    fn verify_mask_size(&self) -> Result<u64> {
        let current = self.mask.size();
        if current != self.mask_size {
            return Err(Error::illegal_state(format!(
                "mask resized from {} to {current}",
                self.mask_size
            )));
        }
        Ok(self.mask_size)
    }

    /// Whole mask cycles contribute `true_count` each, the trailing partial
    /// cycle is scanned.
    fn checked_size(&self) -> Result<u64> {
        let mask_size = self.verify_mask_size()?;
        let base_size = self.base.size();
        let whole = (base_size / mask_size) * self.true_count;
        Ok(whole + count_set_bits(self.mask.as_ref(), base_size % mask_size)?)
    }

    fn checked_position(&self, index: u64) -> Result<u64> {
        check_index(index, self.checked_size()?)?;
        self.find_position(index)
    }
}

/// Counts the set bits among the first `limit` mask elements.
fn count_set_bits(mask: &dyn IndexedDataSource<bool>, limit: u64) -> Result<u64> {
    let mut bit = false;
    let mut count = 0;
    for i in 0..limit {
        mask.get(i, &mut bit)?;
        if bit {
            count += 1;
        }
    }
    Ok(count)
}

impl<U: Send + Sync + 'static> IndexedDataSource<U> for MaskedDataSource<U> {
    fn get(&self, index: u64, out: &mut U) -> Result<()> {
        let position = self.checked_position(index)?;
        self.base.get(position, out)
    }

    fn set(&self, index: u64, value: &U) -> Result<()> {
        let position = self.checked_position(index)?;
        self.base.set(position, value)
    }

    /// Recomputed on every call from the current base size. Reports 0 once
    /// the mask can no longer be read; `get` and `set` return the cause.
    fn size(&self) -> u64 {
        match self.checked_size() {
            Ok(size) => size,
            Err(e) => {
                log::warn!("masked source unreadable: {e}");
                0
            }
        }
    }

    fn duplicate(&self) -> DataSourceRef<U> {
        Arc::new(MaskedDataSource {
            base: self.base.clone(),
            mask: self.mask.clone(),
            mask_size: self.mask_size,
            true_count: self.true_count,
        })
    }

    fn storage_type(&self) -> StorageConstruction {
        self.base.storage_type()
    }

    fn access_with_one_thread(&self) -> bool {
        self.base.access_with_one_thread() || self.mask.access_with_one_thread()
    }

    fn ownership(&self) -> Ownership {
        self.base.ownership().join(self.mask.ownership())
    }
}

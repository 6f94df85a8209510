use std::sync::Arc;

use num_traits::ToPrimitive;
use tessera_common::{Algebra, Result, error::Error};

use crate::data_source::{DataSourceRef, IndexedDataSource, Ownership, StorageConstruction};

/// Forwards reads to a base source and rejects every write.
pub struct ReadOnlyDataSource<U> {
    base: DataSourceRef<U>,
}

impl<U: Send + Sync + 'static> ReadOnlyDataSource<U> {
    pub fn new(base: DataSourceRef<U>) -> Self {
        ReadOnlyDataSource { base }
    }
}

impl<U: Send + Sync + 'static> IndexedDataSource<U> for ReadOnlyDataSource<U> {
    fn get(&self, index: u64, out: &mut U) -> Result<()> {
        self.base.get(index, out)
    }

    fn set(&self, _index: u64, _value: &U) -> Result<()> {
        Err(Error::read_only("ReadOnlyDataSource"))
    }

    fn size(&self) -> u64 {
        self.base.size()
    }

    fn duplicate(&self) -> DataSourceRef<U> {
        Arc::new(ReadOnlyDataSource {
            base: self.base.clone(),
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

/// A read-only view presenting numeric elements in the widest native float
/// representation.
///
/// Each read converts through a per-call scratch element. Elements with no
/// `f64` representation fail with `ConstraintViolation`.
pub struct ReadOnlyHighPrecisionDataSource<A: Algebra> {
    algebra: Arc<A>,
    base: DataSourceRef<A::Element>,
}

impl<A> ReadOnlyHighPrecisionDataSource<A>
where
    A: Algebra + 'static,
    A::Element: ToPrimitive + 'static,
{
    pub fn new(algebra: Arc<A>, base: DataSourceRef<A::Element>) -> Self {
        ReadOnlyHighPrecisionDataSource { algebra, base }
    }
}

impl<A> IndexedDataSource<f64> for ReadOnlyHighPrecisionDataSource<A>
where
    A: Algebra + 'static,
    A::Element: ToPrimitive + 'static,
{
    fn get(&self, index: u64, out: &mut f64) -> Result<()> {
        let mut scratch = self.algebra.construct();
        self.base.get(index, &mut scratch)?;
        *out = scratch.to_f64().ok_or_else(|| {
            Error::constraint_violation(format!(
                "element at {index} has no high precision representation"
            ))
        })?;
        Ok(())
    }

    fn set(&self, _index: u64, _value: &f64) -> Result<()> {
        Err(Error::read_only("ReadOnlyHighPrecisionDataSource"))
    }

    fn size(&self) -> u64 {
        self.base.size()
    }

    fn duplicate(&self) -> DataSourceRef<f64> {
        Arc::new(ReadOnlyHighPrecisionDataSource {
            algebra: self.algebra.clone(),
            base: self.base.clone(),
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

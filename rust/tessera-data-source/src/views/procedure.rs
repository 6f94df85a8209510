use std::sync::Arc;

use tessera_common::{Algebra, Result, error::Error, result::check_index};

use crate::data_source::{
    DataSourceRef, IndexedDataSource, Ownership, Procedure, StorageConstruction,
};

/// Size reported by sources defined at every index.
pub const UNBOUNDED_SIZE: u64 = u64::MAX;

/// A pure function of the index, defined everywhere and never writable.
pub struct ProcedureDataSource<U> {
    procedure: Procedure<U>,
}

impl<U: Send + Sync + 'static> ProcedureDataSource<U> {
    pub fn new<F>(procedure: F) -> Self
    where
        F: Fn(u64, &mut U) + Send + Sync + 'static,
    {
        Self::from_procedure(Arc::new(procedure))
    }

    pub fn from_procedure(procedure: Procedure<U>) -> Self {
        ProcedureDataSource { procedure }
    }
}

impl<U: Send + Sync + 'static> IndexedDataSource<U> for ProcedureDataSource<U> {
    fn get(&self, index: u64, out: &mut U) -> Result<()> {
        check_index(index, UNBOUNDED_SIZE)?;
        (self.procedure)(index, out);
        Ok(())
    }

    fn set(&self, _index: u64, _value: &U) -> Result<()> {
        Err(Error::read_only("ProcedureDataSource"))
    }

    fn size(&self) -> u64 {
        UNBOUNDED_SIZE
    }

    fn duplicate(&self) -> DataSourceRef<U> {
        Arc::new(ProcedureDataSource {
            procedure: self.procedure.clone(),
        })
    }

    fn storage_type(&self) -> StorageConstruction {
        StorageConstruction::Virtual
    }

    fn access_with_one_thread(&self) -> bool {
        false
    }

    /// Holds no mutable state, so every duplicate is independent.
    fn ownership(&self) -> Ownership {
        Ownership::Owning
    }
}

/// A finite backing store padded on the right by a procedure.
///
/// Indices within `[0, storage.size())` read and write the storage. Beyond it,
/// reads evaluate the procedure and writes are accepted only when the value
/// equals what the procedure produces there: the procedure is an immutable
/// boundary condition, not a default.
pub struct ProcedurePaddedDataSource<A: Algebra> {
    algebra: Arc<A>,
    storage: DataSourceRef<A::Element>,
    procedure: Procedure<A::Element>,
}

impl<A> ProcedurePaddedDataSource<A>
where
    A: Algebra + 'static,
    A::Element: 'static,
{
    pub fn new<F>(algebra: Arc<A>, storage: DataSourceRef<A::Element>, procedure: F) -> Self
    where
        F: Fn(u64, &mut A::Element) + Send + Sync + 'static,
    {
        ProcedurePaddedDataSource {
            algebra,
            storage,
            procedure: Arc::new(procedure),
        }
    }
}

impl<A> IndexedDataSource<A::Element> for ProcedurePaddedDataSource<A>
where
    A: Algebra + 'static,
    A::Element: 'static,
{
    fn get(&self, index: u64, out: &mut A::Element) -> Result<()> {
        check_index(index, UNBOUNDED_SIZE)?;
        if index < self.storage.size() {
            self.storage.get(index, out)
        } else {
            (self.procedure)(index, out);
            Ok(())
        }
    }

    fn set(&self, index: u64, value: &A::Element) -> Result<()> {
        check_index(index, UNBOUNDED_SIZE)?;
        if index < self.storage.size() {
            return self.storage.set(index, value);
        }
        let mut expected = self.algebra.construct();
        (self.procedure)(index, &mut expected);
        if self.algebra.is_equal(&expected, value) {
            Ok(())
        } else {
            Err(Error::constraint_violation(format!(
                "write at {index} disagrees with the padding procedure"
            )))
        }
    }

    fn size(&self) -> u64 {
        UNBOUNDED_SIZE
    }

    fn duplicate(&self) -> DataSourceRef<A::Element> {
        Arc::new(ProcedurePaddedDataSource {
            algebra: self.algebra.clone(),
            storage: self.storage.clone(),
            procedure: self.procedure.clone(),
        })
    }

    fn storage_type(&self) -> StorageConstruction {
        StorageConstruction::Virtual
    }

    fn access_with_one_thread(&self) -> bool {
        self.storage.access_with_one_thread()
    }

    fn ownership(&self) -> Ownership {
        self.storage.ownership()
    }
}

//! The [`IndexedDataSource`] contract and its classification tags.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tessera_common::Result;

/// Shared handle to a type-erased data source. Views hold their operands
/// through this handle.
pub type DataSourceRef<U> = Arc<dyn IndexedDataSource<U>>;

/// A computed element: writes the value at `index` into the output buffer.
pub type Procedure<U> = Arc<dyn Fn(u64, &mut U) + Send + Sync>;

/// Physical nature of a backing. Advisory only: callers may use it to pick a
/// faster algorithm, but no behavior depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageConstruction {
    /// Dense, directly addressed memory.
    Array,
    /// Storage that only materializes a subset of its slots.
    Sparse,
    /// Elements computed on demand, with no storage behind (some of) them.
    Virtual,
}

impl StorageConstruction {
    /// Classification of a source joining two operands: virtual if either side
    /// is virtual, sparse only when both sides are sparse, dense otherwise.
    pub fn join(self, other: StorageConstruction) -> StorageConstruction {
        use StorageConstruction::*;
        match (self, other) {
            (Virtual, _) | (_, Virtual) => Virtual,
            (Sparse, Sparse) => Sparse,
            _ => Array,
        }
    }
}

/// Who owns the memory behind a source.
///
/// Leaves report what their own `duplicate()` does. Views report the tag of
/// the operand owning the memory underneath, while their own `duplicate()`
/// always shares the operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// The backing memory is shared between handles: writes through either
    /// handle are visible through both.
    Aliasing,
    /// The backing memory belongs to one leaf, whose `duplicate()` returns an
    /// independent deep copy.
    Owning,
}

impl Ownership {
    /// Tag of a view over several operands: `Owning` only when every operand
    /// reports `Owning`.
    pub fn join(self, other: Ownership) -> Ownership {
        match (self, other) {
            (Ownership::Owning, Ownership::Owning) => Ownership::Owning,
            _ => Ownership::Aliasing,
        }
    }
}

/// A 0-based, `u64`-addressed sequence of mutable elements with copy semantics.
///
/// All index checks are eager: an index outside `[0, size())` fails with an
/// `IndexOutOfBounds` error and is never clamped.
///
/// Implementations are `Send + Sync`. Independent `get`/`set` calls on different
/// indices may be issued from different threads when
/// [`access_with_one_thread()`](Self::access_with_one_thread) reports `false`;
/// the flag is advisory and nothing enforces it. Any transient element a
/// source needs while serving a call is allocated per call.
pub trait IndexedDataSource<U>: Send + Sync {
    /// Copies the element at `index` into `out`.
    fn get(&self, index: u64, out: &mut U) -> Result<()>;

    /// Copies `value` into the slot at `index`.
    ///
    /// Fails with `ReadOnly` on immutable or computed sources.
    fn set(&self, index: u64, value: &U) -> Result<()>;

    /// Number of addressable elements.
    fn size(&self) -> u64;

    /// Returns a new source over the same elements.
    ///
    /// Only the segmented big list deep-copies its elements; every other leaf
    /// and every view returns a handle sharing the same storage.
    fn duplicate(&self) -> DataSourceRef<U>;

    fn storage_type(&self) -> StorageConstruction;

    /// Advisory hint that the source should only be accessed from a single
    /// thread at a time.
    fn access_with_one_thread(&self) -> bool;

    fn ownership(&self) -> Ownership;

    /// Returns `true` if the source has no addressable elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Acquires a read guard, recovering the data if a writer panicked: element
/// slots are only ever replaced as a whole.
#[inline]
pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

#[inline]
pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

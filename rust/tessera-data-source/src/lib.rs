//! Composable, 64-bit addressed element storage.
//!
//! The central abstraction is [`IndexedDataSource`]: a 0-based sequence of
//! `size()` mutable elements with copy-in/copy-out access. Elements are never
//! handed out by reference; `get` copies a stored element into a caller-owned
//! buffer and `set` copies a caller-owned value into storage.
//!
//! # Leaf backings
//!
//! - [`ArrayDataSource`]: fixed-size contiguous storage.
//! - [`ListDataSource`]: growable contiguous storage.
//! - [`BigListDataSource`]: growable storage split into uniformly-sized segments,
//!   the only backing that owns its elements exclusively (deep `duplicate()`).
//!
//! # Views
//!
//! Views wrap other sources and never materialize derived data (except for the
//! index table of [`ConditionalDataSource`], which is a snapshot taken at
//! construction):
//!
//! - [`ConcatenatedDataSource`] and [`ConcatenatedDataSource::optimal_concat`]
//! - [`TrimmedDataSource`], [`SequencedDataSource`], [`MaskedDataSource`]
//! - [`ConditionalDataSource`], [`TransformedDataSource`]
//! - [`ReadOnlyDataSource`], [`ReadOnlyHighPrecisionDataSource`]
//! - [`ProcedureDataSource`], [`ProcedurePaddedDataSource`]
//! - [`FftDataSource`], [`FixedSizeDataSource`]

pub mod data_source;
pub mod ops;
pub mod segmented_vec;
pub mod storage;
pub mod views;

#[cfg(test)]
mod tests;

pub use data_source::{
    DataSourceRef, IndexedDataSource, Ownership, Procedure, StorageConstruction,
};
pub use storage::{
    ArrayDataSource, BigListDataSource, ListDataSource, Storage, StorageOptions,
};
pub use views::{
    ConcatenatedDataSource, ConditionalDataSource, Conversion, FftDataSource,
    FixedSizeDataSource, MaskedDataSource, ProcedureDataSource, ProcedurePaddedDataSource,
    ReadOnlyDataSource, ReadOnlyHighPrecisionDataSource, SequencedDataSource,
    TransformedDataSource, TrimmedDataSource,
};

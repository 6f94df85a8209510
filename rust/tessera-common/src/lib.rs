//! Core definitions relied upon by all tessera-* crates: the error taxonomy,
//! argument verification helpers and the element-operations tables.

pub mod algebra;
pub mod error;
pub mod result;

pub use algebra::{Algebra, Predicate};
pub use result::Result;

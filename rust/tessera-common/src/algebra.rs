//! Element-operations tables.
//!
//! Data sources never hand out references to their elements. Instead, every
//! transfer is a copy between a stored slot and a caller-owned buffer, performed
//! by an [`Algebra`] table that travels alongside the data. The table also
//! produces fresh zero-initialized elements used as backing slots and as
//! transient scratch buffers.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Operations table for one element type.
///
/// Implementors are plain policy values: they carry no element state and are
/// shared freely between data sources (typically behind an `Arc`).
pub trait Algebra: Send + Sync {
    type Element: Send + Sync;

    /// Produces a zero-initialized element.
    fn construct(&self) -> Self::Element;

    /// Copies the value of `from` into `to`.
    fn assign(&self, from: &Self::Element, to: &mut Self::Element);

    /// Structural equality of two elements.
    fn is_equal(&self, a: &Self::Element, b: &Self::Element) -> bool;

    /// Produces a new element holding a copy of `value`.
    fn construct_from(&self, value: &Self::Element) -> Self::Element {
        let mut element = self.construct();
        self.assign(value, &mut element);
        element
    }
}

/// The algebra of any `Clone + Default + PartialEq` element: `Default` is the
/// zero element and assignment is `clone_from`.
pub struct StdAlgebra<T>(PhantomData<fn() -> T>);

impl<T> StdAlgebra<T> {
    pub const fn new() -> StdAlgebra<T> {
        StdAlgebra(PhantomData)
    }
}

impl<T> Default for StdAlgebra<T> {
    fn default() -> Self {
        StdAlgebra::new()
    }
}

impl<T> Clone for StdAlgebra<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StdAlgebra<T> {}

impl<T> fmt::Debug for StdAlgebra<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StdAlgebra<{}>", std::any::type_name::<T>())
    }
}

impl<T> Algebra for StdAlgebra<T>
where
    T: Clone + Default + PartialEq + Send + Sync,
{
    type Element = T;

    #[inline]
    fn construct(&self) -> T {
        T::default()
    }

    #[inline]
    fn assign(&self, from: &T, to: &mut T) {
        to.clone_from(from);
    }

    #[inline]
    fn is_equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// A shareable element predicate, consumed by filtering views and samplings.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

pub type BoolAlgebra = StdAlgebra<bool>;
pub type Int8Algebra = StdAlgebra<i8>;
pub type Int16Algebra = StdAlgebra<i16>;
pub type Int32Algebra = StdAlgebra<i32>;
pub type Int64Algebra = StdAlgebra<i64>;
pub type UInt8Algebra = StdAlgebra<u8>;
pub type UInt16Algebra = StdAlgebra<u16>;
pub type UInt32Algebra = StdAlgebra<u32>;
pub type UInt64Algebra = StdAlgebra<u64>;
pub type Float32Algebra = StdAlgebra<f32>;
pub type Float64Algebra = StdAlgebra<f64>;

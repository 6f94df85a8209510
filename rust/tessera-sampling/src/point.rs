//! Coordinate vectors used as sampling points.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use num_traits::{Bounded, Float};
use tinyvec::TinyVec;

/// Scalar component of a coordinate vector.
pub trait Component: Copy + Default + PartialOrd + fmt::Debug + Send + Sync + 'static {
    /// The value no other component compares below; `-inf` for floats.
    fn lowest() -> Self;

    /// The value no other component compares above; `+inf` for floats.
    fn highest() -> Self;

    /// Equality within `tolerance`. Integer components ignore the tolerance.
    fn approx_eq(self, other: Self, tolerance: f64) -> bool;
}

macro_rules! impl_integer_component {
    ($($t:ty),*) => {
        $(
            impl Component for $t {
                #[inline]
                fn lowest() -> Self {
                    <$t as Bounded>::min_value()
                }

                #[inline]
                fn highest() -> Self {
                    <$t as Bounded>::max_value()
                }

                #[inline]
                fn approx_eq(self, other: Self, _tolerance: f64) -> bool {
                    self == other
                }
            }
        )*
    };
}

macro_rules! impl_float_component {
    ($($t:ty),*) => {
        $(
            impl Component for $t {
                #[inline]
                fn lowest() -> Self {
                    <$t as Float>::neg_infinity()
                }

                #[inline]
                fn highest() -> Self {
                    <$t as Float>::infinity()
                }

                #[inline]
                fn approx_eq(self, other: Self, tolerance: f64) -> bool {
                    self == other || ((self - other).abs() as f64) <= tolerance
                }
            }
        )*
    };
}

impl_integer_component!(i32, i64);
impl_float_component!(f32, f64);

/// A fixed-arity vector of coordinate components.
///
/// Points of up to four dimensions are stored inline.
#[derive(Clone, PartialEq, Default)]
pub struct Point<C: Component> {
    coords: TinyVec<[C; 4]>,
}

/// Integer lattice coordinates.
pub type IntegerIndex = Point<i64>;

/// Real-valued coordinates.
pub type RealIndex = Point<f64>;

impl<C: Component> Point<C> {
    /// A point of `num_dimensions` zero components.
    pub fn new(num_dimensions: usize) -> Point<C> {
        let mut coords = TinyVec::new();
        coords.resize(num_dimensions, C::default());
        Point { coords }
    }

    pub fn from_slice(values: &[C]) -> Point<C> {
        Point {
            coords: values.iter().copied().collect(),
        }
    }

    #[inline]
    pub fn num_dimensions(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn get(&self, dim: usize) -> C {
        self.coords[dim]
    }

    #[inline]
    pub fn set(&mut self, dim: usize, value: C) {
        self.coords[dim] = value;
    }

    #[inline]
    pub fn as_slice(&self) -> &[C] {
        &self.coords
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [C] {
        &mut self.coords
    }
}

impl<C: Component> Index<usize> for Point<C> {
    type Output = C;

    #[inline]
    fn index(&self, dim: usize) -> &C {
        &self.coords[dim]
    }
}

impl<C: Component> IndexMut<usize> for Point<C> {
    #[inline]
    fn index_mut(&mut self, dim: usize) -> &mut C {
        &mut self.coords[dim]
    }
}

impl<C: Component> From<&[C]> for Point<C> {
    fn from(values: &[C]) -> Self {
        Point::from_slice(values)
    }
}

impl<C: Component, const N: usize> From<[C; N]> for Point<C> {
    fn from(values: [C; N]) -> Self {
        Point::from_slice(&values)
    }
}

impl<C: Component> fmt::Debug for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Point").field(&self.as_slice()).finish()
    }
}

/// Coordinate types a sampling can range over.
///
/// The min/max capability lets [`Bounds`](crate::Bounds) accumulate extents
/// over any coordinate type in a single pass.
pub trait Coordinate: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// A zero point of the given arity.
    fn with_dimensions(num_dimensions: usize) -> Self;

    fn num_dimensions(&self) -> usize;

    /// Sets every component to the lowest representable value.
    fn set_min(&mut self);

    /// Sets every component to the highest representable value.
    fn set_max(&mut self);

    /// Lowers each component to `other`'s where `other`'s is smaller.
    fn update_min(&mut self, other: &Self);

    /// Raises each component to `other`'s where `other`'s is larger.
    fn update_max(&mut self, other: &Self);

    /// Componentwise equality within `tolerance`.
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool;
}

impl<C: Component> Coordinate for Point<C> {
    fn with_dimensions(num_dimensions: usize) -> Self {
        Point::new(num_dimensions)
    }

    #[inline]
    fn num_dimensions(&self) -> usize {
        self.coords.len()
    }

    fn set_min(&mut self) {
        self.coords.iter_mut().for_each(|c| *c = C::lowest());
    }

    fn set_max(&mut self) {
        self.coords.iter_mut().for_each(|c| *c = C::highest());
    }

    fn update_min(&mut self, other: &Self) {
        debug_assert_eq!(self.num_dimensions(), other.num_dimensions());
        for (c, &o) in self.coords.iter_mut().zip(other.coords.iter()) {
            if o < *c {
                *c = o;
            }
        }
    }

    fn update_max(&mut self, other: &Self) {
        debug_assert_eq!(self.num_dimensions(), other.num_dimensions());
        for (c, &o) in self.coords.iter_mut().zip(other.coords.iter()) {
            if o > *c {
                *c = o;
            }
        }
    }

    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.num_dimensions() == other.num_dimensions()
            && self
                .coords
                .iter()
                .zip(other.coords.iter())
                .all(|(&a, &b)| a.approx_eq(b, tolerance))
    }
}

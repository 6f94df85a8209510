//! Lazy set algebra over samplings.
//!
//! Combinator traversals use a single-slot lookahead: `has_next` advances the
//! underlying traversal until it finds a qualifying point and caches it;
//! `next` hands the cached point out and clears the slot. Calling `next`
//! without a successful `has_next` fails with `IllegalState`.

use tessera_common::{Result, error::Error};

use crate::{point::Coordinate, sampling::SamplingIterator};

pub mod complement;
pub mod conditional;
pub mod difference;
pub mod union;

pub use complement::SamplingComplement;
pub use conditional::SamplingConditional;
pub use difference::SamplingDifference;
pub use union::SamplingUnion;

/// Filters an underlying traversal through `accept`, holding at most one
/// accepted point ahead of the consumer.
pub(crate) struct Lookahead<'a, T, F> {
    inner: Box<dyn SamplingIterator<T> + 'a>,
    accept: F,
    slot: T,
    cached: bool,
}

impl<'a, T, F> Lookahead<'a, T, F>
where
    T: Coordinate,
    F: Fn(&T) -> bool,
{
    pub fn new(inner: Box<dyn SamplingIterator<T> + 'a>, num_dimensions: usize, accept: F) -> Self {
        Lookahead {
            inner,
            accept,
            slot: T::with_dimensions(num_dimensions),
            cached: false,
        }
    }
}

impl<T, F> SamplingIterator<T> for Lookahead<'_, T, F>
where
    T: Coordinate,
    F: Fn(&T) -> bool,
{
    fn has_next(&mut self) -> bool {
        while !self.cached && self.inner.has_next() {
            if self.inner.next(&mut self.slot).is_err() {
                return false;
            }
            self.cached = (self.accept)(&self.slot);
        }
        self.cached
    }

    fn next(&mut self, out: &mut T) -> Result<()> {
        if !self.cached {
            return Err(Error::illegal_state("next() without a successful has_next()"));
        }
        out.clone_from(&self.slot);
        self.cached = false;
        Ok(())
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.cached = false;
    }
}

pub(crate) fn verify_same_arity(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(Error::invalid_range(
            "right",
            format!("operands have {left} and {right} dimensions"),
        ));
    }
    Ok(())
}

use std::sync::Arc;

use tessera_common::{Algebra, Result, error::Error, result::check_index, verify_arg};

use crate::data_source::{DataSourceRef, IndexedDataSource, Ownership, StorageConstruction};

/// Zero-pads a source up to a power-of-two length.
///
/// Reads within the wrapped source pass through; reads in the padded tail
/// produce the algebra's zero element. Writes in the padded tail are
/// accepted and discarded.
pub struct FftDataSource<A: Algebra> {
    algebra: Arc<A>,
    base: DataSourceRef<A::Element>,
    size: u64,
}

impl<A> FftDataSource<A>
where
    A: Algebra + 'static,
    A::Element: 'static,
{
    /// # Errors
    ///
    /// Fails with `InvalidRange` unless `power_of_two_limit` is a power of two
    /// no smaller than the base.
    pub fn new(
        algebra: Arc<A>,
        base: DataSourceRef<A::Element>,
        power_of_two_limit: u64,
    ) -> Result<Self> {
        verify_arg!(power_of_two_limit, power_of_two_limit.is_power_of_two());
        verify_arg!(power_of_two_limit, power_of_two_limit >= base.size());
        Ok(FftDataSource {
            algebra,
            base,
            size: power_of_two_limit,
        })
    }

    /// Pads to the smallest power of two holding the whole base.
    pub fn enclosing(algebra: Arc<A>, base: DataSourceRef<A::Element>) -> Result<Self> {
        let limit = base.size().checked_next_power_of_two().ok_or_else(|| {
            Error::invalid_range("size", format!("no power of two holds {}", base.size()))
        })?;
        Self::new(algebra, base, limit)
    }
}

impl<A> IndexedDataSource<A::Element> for FftDataSource<A>
where
    A: Algebra + 'static,
    A::Element: 'static,
{
    fn get(&self, index: u64, out: &mut A::Element) -> Result<()> {
        check_index(index, self.size)?;
        if index < self.base.size() {
            self.base.get(index, out)
        } else {
            let zero = self.algebra.construct();
            self.algebra.assign(&zero, out);
            Ok(())
        }
    }

    fn set(&self, index: u64, value: &A::Element) -> Result<()> {
        check_index(index, self.size)?;
        if index < self.base.size() {
            self.base.set(index, value)
        } else {
            Ok(())
        }
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn duplicate(&self) -> DataSourceRef<A::Element> {
        Arc::new(FftDataSource {
            algebra: self.algebra.clone(),
            base: self.base.clone(),
            size: self.size,
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

#[cfg(test)]
mod tests {
    use tessera_common::algebra::Float64Algebra;

    use super::*;
    use crate::storage::ArrayDataSource;

    fn base() -> DataSourceRef<f64> {
        Arc::new(ArrayDataSource::from_slice(
            Arc::new(Float64Algebra::new()),
            &[1.0, 2.0, 3.0, 4.0, 5.0],
        ))
    }

    #[test]
    fn test_zero_padding() {
        let fft = FftDataSource::new(Arc::new(Float64Algebra::new()), base(), 8).unwrap();
        assert_eq!(fft.size(), 8);
        let mut x = -1.0;
        for i in 0..5 {
            fft.get(i, &mut x).unwrap();
            assert_eq!(x, (i + 1) as f64);
        }
        for i in 5..8 {
            x = -1.0;
            fft.get(i, &mut x).unwrap();
            assert_eq!(x, 0.0);
        }
        assert!(fft.get(8, &mut x).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_tail_writes_are_discarded() {
        let b = base();
        let fft = FftDataSource::new(Arc::new(Float64Algebra::new()), b.clone(), 8).unwrap();
        fft.set(6, &9.0).unwrap();
        let mut x = -1.0;
        fft.get(6, &mut x).unwrap();
        assert_eq!(x, 0.0);
        assert_eq!(b.size(), 5);

        fft.set(0, &10.0).unwrap();
        b.get(0, &mut x).unwrap();
        assert_eq!(x, 10.0);
        assert!(fft.set(8, &1.0).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_limit_validation() {
        let alg = Arc::new(Float64Algebra::new());
        assert!(FftDataSource::new(alg.clone(), base(), 6).err().unwrap().is_invalid_range());
        assert!(FftDataSource::new(alg.clone(), base(), 4).err().unwrap().is_invalid_range());
        let enclosing = FftDataSource::enclosing(alg, base()).unwrap();
        assert_eq!(enclosing.size(), 8);
    }
}

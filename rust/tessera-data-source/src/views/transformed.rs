use std::sync::Arc;

use tessera_common::{Algebra, Result, error::Error};

use crate::data_source::{DataSourceRef, IndexedDataSource, Ownership, StorageConstruction};

/// Converts a value of one element type into a caller-owned value of another.
pub type Conversion<From, To> = Arc<dyn Fn(&From, &mut To) + Send + Sync>;

/// Presents a source of backing elements `A::Element` as a source of `W`.
///
/// Either direction may be left out: reading without a backing-to-presented
/// conversion, or writing without the reverse one, fails with
/// `MissingTransform`. Every call converts through its own scratch backing
/// element.
pub struct TransformedDataSource<A: Algebra, W> {
    algebra: Arc<A>,
    base: DataSourceRef<A::Element>,
    to_presented: Option<Conversion<A::Element, W>>,
    to_backing: Option<Conversion<W, A::Element>>,
}

impl<A, W> TransformedDataSource<A, W>
where
    A: Algebra + 'static,
    A::Element: 'static,
    W: Send + Sync + 'static,
{
    pub fn new(
        algebra: Arc<A>,
        base: DataSourceRef<A::Element>,
        to_presented: Option<Conversion<A::Element, W>>,
        to_backing: Option<Conversion<W, A::Element>>,
    ) -> Self {
        TransformedDataSource {
            algebra,
            base,
            to_presented,
            to_backing,
        }
    }

    /// A view supporting both reads and writes.
    pub fn bidirectional<F, G>(
        algebra: Arc<A>,
        base: DataSourceRef<A::Element>,
        to_presented: F,
        to_backing: G,
    ) -> Self
    where
        F: Fn(&A::Element, &mut W) + Send + Sync + 'static,
        G: Fn(&W, &mut A::Element) + Send + Sync + 'static,
    {
        Self::new(
            algebra,
            base,
            Some(Arc::new(to_presented)),
            Some(Arc::new(to_backing)),
        )
    }
}

impl<A, W> IndexedDataSource<W> for TransformedDataSource<A, W>
where
    A: Algebra + 'static,
    A::Element: 'static,
    W: Send + Sync + 'static,
{
    fn get(&self, index: u64, out: &mut W) -> Result<()> {
        let convert = self
            .to_presented
            .as_ref()
            .ok_or_else(|| Error::missing_transform("reading (backing -> presented)"))?;
        let mut scratch = self.algebra.construct();
        self.base.get(index, &mut scratch)?;
        convert(&scratch, out);
        Ok(())
    }

    fn set(&self, index: u64, value: &W) -> Result<()> {
        let convert = self
            .to_backing
            .as_ref()
            .ok_or_else(|| Error::missing_transform("writing (presented -> backing)"))?;
        let mut scratch = self.algebra.construct();
        convert(value, &mut scratch);
        self.base.set(index, &scratch)
    }

    fn size(&self) -> u64 {
        self.base.size()
    }

    fn duplicate(&self) -> DataSourceRef<W> {
        Arc::new(TransformedDataSource {
            algebra: self.algebra.clone(),
            base: self.base.clone(),
            to_presented: self.to_presented.clone(),
            to_backing: self.to_backing.clone(),
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
    use tessera_common::algebra::Int32Algebra;

    use super::*;
    use crate::storage::ArrayDataSource;

    fn base() -> DataSourceRef<i32> {
        Arc::new(ArrayDataSource::from_slice(
            Arc::new(Int32Algebra::new()),
            &[1, 2, 3],
        ))
    }

    #[test]
    fn test_bidirectional() {
        let b = base();
        let view = TransformedDataSource::bidirectional(
            Arc::new(Int32Algebra::new()),
            b.clone(),
            |v: &i32, out: &mut String| *out = v.to_string(),
            |s: &String, out: &mut i32| *out = s.parse().unwrap_or_default(),
        );
        assert_eq!(view.size(), 3);
        let mut s = String::new();
        view.get(2, &mut s).unwrap();
        assert_eq!(s, "3");

        view.set(0, &"42".to_string()).unwrap();
        let mut v = 0;
        b.get(0, &mut v).unwrap();
        assert_eq!(v, 42);
        assert!(view.get(3, &mut s).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_missing_directions() {
        let read_only: TransformedDataSource<Int32Algebra, f64> = TransformedDataSource::new(
            Arc::new(Int32Algebra::new()),
            base(),
            Some(Arc::new(|v: &i32, out: &mut f64| *out = *v as f64 / 2.0)),
            None,
        );
        let mut x = 0.0;
        read_only.get(0, &mut x).unwrap();
        assert_eq!(x, 0.5);
        assert!(read_only.set(0, &1.0).unwrap_err().is_missing_transform());

        let write_only: TransformedDataSource<Int32Algebra, f64> = TransformedDataSource::new(
            Arc::new(Int32Algebra::new()),
            base(),
            None,
            Some(Arc::new(|x: &f64, out: &mut i32| *out = *x as i32)),
        );
        assert!(write_only.get(0, &mut x).unwrap_err().is_missing_transform());
        write_only.set(1, &7.9).unwrap();
    }
}

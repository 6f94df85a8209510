use std::sync::Arc;

use tessera_common::algebra::{Int32Algebra, Int64Algebra};

use crate::{
    ArrayDataSource, BigListDataSource, ConditionalDataSource, DataSourceRef, FftDataSource,
    IndexedDataSource, MaskedDataSource, Ownership, ReadOnlyDataSource, SequencedDataSource,
    StorageConstruction, TransformedDataSource, TrimmedDataSource, ops,
};

fn naturals(n: i64) -> DataSourceRef<i64> {
    Arc::new(ArrayDataSource::from_vec(
        Arc::new(Int64Algebra::new()),
        (0..n).collect(),
    ))
}

#[test]
fn test_trimmed_sequenced_masked_stack() {
    let base = naturals(20);
    let trimmed: DataSourceRef<i64> = Arc::new(TrimmedDataSource::new(base.clone(), 4, 12).unwrap());
    let evens: DataSourceRef<i64> =
        Arc::new(SequencedDataSource::new(trimmed, 0, 2, 6).unwrap());
    let mask: DataSourceRef<bool> = Arc::new(ArrayDataSource::from_slice(
        Arc::new(tessera_common::algebra::BoolAlgebra::new()),
        &[true, false, true],
    ));
    let masked = MaskedDataSource::new(evens, mask).unwrap();
    // evens = [4, 6, 8, 10, 12, 14]; the mask keeps positions 0 and 2 of each triple
    assert_eq!(
        ops::to_vec(&Int64Algebra::new(), &masked).unwrap(),
        vec![4, 8, 10, 14]
    );

    masked.set(3, &-1).unwrap();
    let mut v = 0;
    base.get(14, &mut v).unwrap();
    assert_eq!(v, -1);
}

#[test]
fn test_reversed_conditional() {
    let base = naturals(10);
    let reversed: DataSourceRef<i64> = Arc::new(SequencedDataSource::reversed(base).unwrap());
    let odd = ConditionalDataSource::new(
        &Int64Algebra::new(),
        Arc::new(|x: &i64| x % 2 == 1),
        reversed,
    )
    .unwrap();
    assert_eq!(
        ops::to_vec(&Int64Algebra::new(), &odd).unwrap(),
        vec![9, 7, 5, 3, 1]
    );
    assert!(odd.set(0, &4).unwrap_err().is_constraint_violation());
}

#[test]
fn test_transformed_over_fft_padding() {
    let algebra = Arc::new(Int32Algebra::new());
    let base: DataSourceRef<i32> = Arc::new(ArrayDataSource::from_slice(algebra.clone(), &[1, 2, 3]));
    let padded: DataSourceRef<i32> = Arc::new(FftDataSource::enclosing(algebra.clone(), base).unwrap());
    let widened = TransformedDataSource::bidirectional(
        algebra,
        padded,
        |x: &i32, out: &mut i64| *out = i64::from(*x) * 10,
        |x: &i64, out: &mut i32| *out = (*x / 10) as i32,
    );
    assert_eq!(widened.size(), 4);
    assert_eq!(
        ops::to_vec(&Int64Algebra::new(), &widened).unwrap(),
        vec![10, 20, 30, 0]
    );
}

#[test]
fn test_duplicate_through_views_shares_owning_leaves() {
    let leaf: DataSourceRef<i64> =
        Arc::new(BigListDataSource::new(Arc::new(Int64Algebra::new()), 6));
    let view: DataSourceRef<i64> = Arc::new(TrimmedDataSource::new(leaf.clone(), 2, 3).unwrap());
    assert_eq!(view.ownership(), Ownership::Owning);
    assert_eq!(view.storage_type(), StorageConstruction::Array);

    let dup = view.duplicate();
    assert_eq!(dup.ownership(), Ownership::Owning);
    dup.set(0, &42).unwrap();
    let mut v = -1;
    view.get(0, &mut v).unwrap();
    assert_eq!(v, 42);
    leaf.get(2, &mut v).unwrap();
    assert_eq!(v, 42);

    let sealed: DataSourceRef<i64> = Arc::new(ReadOnlyDataSource::new(view.clone()));
    let sealed_dup = sealed.duplicate();
    leaf.set(3, &7).unwrap();
    sealed_dup.get(1, &mut v).unwrap();
    assert_eq!(v, 7);

    // The leaf itself still deep-copies.
    let leaf_copy = leaf.duplicate();
    leaf.set(2, &0).unwrap();
    leaf_copy.get(2, &mut v).unwrap();
    assert_eq!(v, 42);
}

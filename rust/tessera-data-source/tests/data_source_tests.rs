use std::{sync::Arc, thread};

use tessera_common::algebra::{Float64Algebra, Int64Algebra};
use tessera_data_source::{
    ArrayDataSource, ConcatenatedDataSource, DataSourceRef, IndexedDataSource, ProcedureDataSource,
    ProcedurePaddedDataSource, ReadOnlyHighPrecisionDataSource, StorageConstruction,
    TrimmedDataSource, ops, views::UNBOUNDED_SIZE,
};

#[test]
fn test_concurrent_readers_share_array() {
    let algebra = Arc::new(Int64Algebra::new());
    let source: DataSourceRef<i64> =
        Arc::new(ArrayDataSource::from_vec(algebra, (0..1000).collect()));
    let handles = (0..4)
        .map(|t| {
            let source = source.clone();
            thread::spawn(move || {
                let mut sum = 0;
                let mut v = 0;
                for i in (t..1000).step_by(4) {
                    source.get(i, &mut v).unwrap();
                    sum += v;
                }
                sum
            })
        })
        .collect::<Vec<_>>();
    let total: i64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(total, (0..1000).sum::<i64>());
}

#[test]
fn test_concatenating_with_procedure_is_virtual() {
    let algebra = Arc::new(Float64Algebra::new());
    let head: DataSourceRef<f64> = Arc::new(ArrayDataSource::from_slice(algebra, &[0.5, 1.5]));
    let tail: DataSourceRef<f64> = Arc::new(TrimmedDataSource::new(
        Arc::new(ProcedureDataSource::new(|i: u64, out: &mut f64| *out = i as f64)),
        10,
        3,
    )
    .unwrap());
    let joined = ConcatenatedDataSource::new(head, tail).unwrap();
    assert_eq!(joined.storage_type(), StorageConstruction::Virtual);
    assert_eq!(
        ops::to_vec(&Float64Algebra::new(), &joined).unwrap(),
        vec![0.5, 1.5, 10.0, 11.0, 12.0]
    );
    assert!(joined.set(3, &0.0).unwrap_err().is_read_only());
}

#[test]
fn test_padded_boundary_read_as_high_precision() {
    let algebra = Arc::new(Int64Algebra::new());
    let storage: DataSourceRef<i64> = Arc::new(ArrayDataSource::from_slice(algebra.clone(), &[3, 4]));
    let padded: DataSourceRef<i64> = Arc::new(ProcedurePaddedDataSource::new(
        algebra.clone(),
        storage,
        |i: u64, out: &mut i64| *out = -(i as i64),
    ));
    assert_eq!(padded.size(), UNBOUNDED_SIZE);

    let wide = ReadOnlyHighPrecisionDataSource::new(algebra, padded);
    let mut x = 0.0;
    wide.get(1, &mut x).unwrap();
    assert_eq!(x, 4.0);
    wide.get(7, &mut x).unwrap();
    assert_eq!(x, -7.0);
    assert!(wide.set(0, &1.0).unwrap_err().is_read_only());
}

use std::sync::Arc;

use itertools::Itertools;
use tessera_common::algebra::Int32Algebra;

use crate::{ArrayDataSource, ConcatenatedDataSource, DataSourceRef, IndexedDataSource, ops};

fn chunks(sizes: &[usize]) -> (Vec<DataSourceRef<i32>>, Vec<i32>) {
    let algebra = Arc::new(Int32Algebra::new());
    let mut next = 0;
    let mut expected = Vec::new();
    let sources = sizes
        .iter()
        .map(|&n| {
            let values = (next..next + n as i32).collect_vec();
            next += n as i32;
            expected.extend_from_slice(&values);
            Arc::new(ArrayDataSource::from_vec(algebra.clone(), values)) as DataSourceRef<i32>
        })
        .collect_vec();
    (sources, expected)
}

#[test]
fn test_optimal_concat_preserves_order() {
    let mut rng = fastrand::Rng::with_seed(42);
    for count in 1..=17 {
        let sizes = (0..count).map(|_| rng.usize(0..6)).collect_vec();
        let (sources, expected) = chunks(&sizes);
        let joined = ConcatenatedDataSource::optimal_concat(&sources).unwrap();
        assert_eq!(joined.size(), expected.len() as u64, "sizes {sizes:?}");
        assert_eq!(
            ops::to_vec(&Int32Algebra::new(), joined.as_ref()).unwrap(),
            expected,
            "sizes {sizes:?}"
        );
    }
}

#[test]
fn test_optimal_concat_writes_route_to_operands() {
    let (sources, _) = chunks(&[3, 0, 2, 4]);
    let joined = ConcatenatedDataSource::optimal_concat(&sources).unwrap();
    for i in 0..joined.size() {
        joined.set(i, &(100 + i as i32)).unwrap();
    }
    let mut v = 0;
    sources[2].get(1, &mut v).unwrap();
    assert_eq!(v, 104);
    sources[3].get(0, &mut v).unwrap();
    assert_eq!(v, 105);
    assert!(joined.get(9, &mut v).unwrap_err().is_out_of_bounds());
}

#[test]
fn test_nested_concatenation_of_views() {
    let (sources, _) = chunks(&[2, 2]);
    let pair: DataSourceRef<i32> =
        Arc::new(ConcatenatedDataSource::new(sources[0].clone(), sources[1].clone()).unwrap());
    let twice = ConcatenatedDataSource::new(pair.clone(), pair).unwrap();
    assert_eq!(
        ops::to_vec(&Int32Algebra::new(), &twice).unwrap(),
        vec![0, 1, 2, 3, 0, 1, 2, 3]
    );
}

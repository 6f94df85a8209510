use std::sync::Arc;

use itertools::Itertools;
use tessera_sampling::{
    Bounds, Coordinate, IntegerIndex, Points, RealGridOptions, RealIndex, Sampling,
    SamplingCartesianIntegerGrid, SamplingConditional, SamplingPolarRealGrid, SamplingRef,
    SamplingUnion,
};

#[test]
fn test_unit_square_enumeration() {
    let grid = SamplingCartesianIntegerGrid::new([0, 0].into(), [1, 1].into()).unwrap();
    let points = Points::new(&grid).collect_vec();
    assert_eq!(points.len(), 4);
    for expected in [[0, 0], [1, 0], [0, 1], [1, 1]] {
        assert!(points.contains(&IntegerIndex::from(expected)));
    }
    assert!(points.iter().all(|p| grid.contains(p)));
}

#[test]
fn test_bounds_round_trip_for_lattices() {
    let mut rng = fastrand::Rng::with_seed(3);
    for _ in 0..25 {
        let dims = rng.usize(1..5);
        let min = (0..dims).map(|_| rng.i64(-10..10)).collect_vec();
        let max = min.iter().map(|&m| m + rng.i64(0..3)).collect_vec();
        let grid =
            SamplingCartesianIntegerGrid::new(min.as_slice().into(), max.as_slice().into())
                .unwrap();
        let extents = Bounds::find(&grid).unwrap();
        assert_eq!(extents.min().as_slice(), min.as_slice());
        assert_eq!(extents.max().as_slice(), max.as_slice());
        assert_eq!(extents.min().num_dimensions(), dims);
    }
}

#[test]
fn test_polar_union_with_tolerance_override() {
    let options = RealGridOptions::new().tolerance(1e-3);
    let inner: SamplingRef<RealIndex> = Arc::new(
        SamplingPolarRealGrid::with_options(1.0, 2, std::f64::consts::FRAC_PI_2, 4, &options)
            .unwrap(),
    );
    let outer: SamplingRef<RealIndex> = Arc::new(
        SamplingPolarRealGrid::with_options(0.5, 3, std::f64::consts::PI, 2, &options).unwrap(),
    );
    let union = SamplingUnion::new(inner, outer).unwrap();
    // inner: origin plus 4 unit points; outer adds only (+-0.5, 0)
    assert_eq!(Points::new(&union).count(), 5 + 2);
    assert!(union.contains(&RealIndex::from([0.0, 1.0005])));

    let upper = SamplingConditional::new(
        Arc::new(|p: &RealIndex| p[1] > 0.5),
        Arc::new(union) as SamplingRef<RealIndex>,
    );
    let points = Points::new(&upper).collect_vec();
    assert_eq!(points.len(), 1);
    assert!(points[0].approx_eq(&RealIndex::from([0.0, 1.0]), 1e-12));
}

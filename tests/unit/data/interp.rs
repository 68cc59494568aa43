use super::*;

fn sorted_series(points: &[(f64, f64, f64)]) -> EntitySeries {
    let mut s = EntitySeries::new("e".into());
    for (z, x, y) in points {
        s.push(Record::new("e", [("z", *z), ("x", *x), ("y", *y)]));
    }
    s.sort_by_z("z");
    s
}

#[test]
fn step_must_be_positive_and_finite() {
    assert!(LinearInterpolation::new(0.0).is_err());
    assert!(LinearInterpolation::new(-1.0).is_err());
    assert!(LinearInterpolation::new(f64::NAN).is_err());
    assert!(LinearInterpolation::new(1.0).is_ok());
}

#[test]
fn no_interpolation_leaves_series_alone() {
    let mut s = sorted_series(&[(0.0, 0.0, 0.0), (2.0, 2.0, 2.0)]);
    NoInterpolation
        .fill_series(&AxisKeys::default(), &mut s, 0.0, 2.0)
        .unwrap();
    assert_eq!(s.len(), 2);
    assert!(s.record_at("z", 1.0).is_none());
}

#[test]
fn gaps_between_neighbors_are_lerped() {
    let keys = AxisKeys::default();
    let mut s = sorted_series(&[(0.0, 0.0, 10.0), (4.0, 6.0, 4.0)]);
    LinearInterpolation::new(1.0)
        .unwrap()
        .fill_series(&keys, &mut s, 0.0, 4.0)
        .unwrap();
    assert_eq!(s.len(), 5);

    let r1 = s.record_at("z", 1.0).unwrap();
    assert_eq!(r1.x(&keys), Some(1.5));
    assert_eq!(r1.y(&keys), Some(8.5));
    let r2 = s.record_at("z", 2.0).unwrap();
    assert_eq!(r2.x(&keys), Some(3.0));
    assert_eq!(r2.y(&keys), Some(7.0));
    let r3 = s.record_at("z", 3.0).unwrap();
    assert_eq!(r3.x(&keys), Some(4.5));
    assert_eq!(r3.y(&keys), Some(5.5));
}

#[test]
fn short_series_holds_its_edges_over_the_global_range() {
    let keys = AxisKeys::default();
    let mut s = sorted_series(&[(2.0, 5.0, 5.0)]);
    LinearInterpolation::new(1.0)
        .unwrap()
        .fill_series(&keys, &mut s, 0.0, 4.0)
        .unwrap();
    // One observed record, four held copies.
    assert_eq!(s.len(), 5);
    assert_eq!(s.record_at("z", 0.0).unwrap().x(&keys), Some(5.0));
    assert_eq!(s.record_at("z", 4.0).unwrap().x(&keys), Some(5.0));
}

#[test]
fn observed_records_are_never_replaced() {
    let keys = AxisKeys::default();
    let mut s = sorted_series(&[(0.0, 0.0, 0.0), (1.0, 100.0, 100.0), (2.0, 2.0, 2.0)]);
    LinearInterpolation::new(1.0)
        .unwrap()
        .fill_series(&keys, &mut s, 0.0, 2.0)
        .unwrap();
    assert_eq!(s.len(), 3);
    assert_eq!(s.record_at("z", 1.0).unwrap().x(&keys), Some(100.0));
}

#[test]
fn only_fields_present_on_both_neighbors_are_lerped() {
    let keys = AxisKeys::default();
    let mut s = EntitySeries::new("e".into());
    s.push(Record::new("e", [("z", 0.0), ("x", 0.0), ("extra", 7.0)]));
    s.push(Record::new("e", [("z", 2.0), ("x", 4.0)]));
    s.sort_by_z("z");
    LinearInterpolation::new(1.0)
        .unwrap()
        .fill_series(&keys, &mut s, 0.0, 2.0)
        .unwrap();
    let mid = s.record_at("z", 1.0).unwrap();
    assert_eq!(mid.x(&keys), Some(2.0));
    assert_eq!(mid.value("extra"), None);
}

#[test]
fn absurd_step_over_range_is_rejected() {
    let keys = AxisKeys::default();
    let mut s = sorted_series(&[(0.0, 0.0, 0.0)]);
    let err = LinearInterpolation::new(1e-9)
        .unwrap()
        .fill_series(&keys, &mut s, 0.0, 1e3)
        .unwrap_err();
    assert!(err.to_string().contains("exceeds"));
}

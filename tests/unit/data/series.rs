use super::*;

fn series(points: &[(f64, f64)]) -> EntitySeries {
    let mut s = EntitySeries::new("e".into());
    for (z, x) in points {
        s.push(Record::new("e", [("z", *z), ("x", *x)]));
    }
    s
}

#[test]
fn sort_orders_by_z_and_keeps_ties_stable() {
    let mut s = series(&[(3.0, 30.0), (1.0, 10.0), (2.0, 20.0)]);
    s.sort_by_z("z");
    let zs: Vec<f64> = s.records().iter().filter_map(|r| r.value("z")).collect();
    assert_eq!(zs, vec![1.0, 2.0, 3.0]);
    assert_eq!(s.first().unwrap().value("x"), Some(10.0));
    assert_eq!(s.last().unwrap().value("x"), Some(30.0));
}

#[test]
fn records_without_z_sort_last() {
    let mut s = EntitySeries::new("e".into());
    s.push(Record::new("e", [("x", 1.0)]));
    s.push(Record::new("e", [("z", 5.0), ("x", 2.0)]));
    s.push(Record::new("e", [("z", f64::NAN), ("x", 3.0)]));
    s.sort_by_z("z");
    assert_eq!(s.first().unwrap().value("z"), Some(5.0));
    // The NaN and the z-less record both trail the finite one.
    assert!(s.records()[1].value("z").is_none_or(f64::is_nan));
    assert!(s.records()[2].value("z").is_none_or(f64::is_nan));
}

#[test]
fn record_at_matches_exact_z_only() {
    let mut s = series(&[(1.0, 10.0), (2.0, 20.0)]);
    s.sort_by_z("z");
    assert_eq!(s.record_at("z", 2.0).unwrap().value("x"), Some(20.0));
    assert!(s.record_at("z", 1.5).is_none());
    assert!(s.record_at("z", f64::NAN).is_none());
}

#[test]
fn interpolated_insert_lands_in_order_and_refuses_duplicates() {
    let mut s = series(&[(1.0, 10.0), (3.0, 30.0)]);
    s.sort_by_z("z");

    assert!(s.insert_interpolated("z", Record::new("e", [("z", 2.0), ("x", 20.0)])));
    let zs: Vec<f64> = s.records().iter().filter_map(|r| r.value("z")).collect();
    assert_eq!(zs, vec![1.0, 2.0, 3.0]);

    // Same z again: observed data wins, nothing changes.
    assert!(!s.insert_interpolated("z", Record::new("e", [("z", 2.0), ("x", 99.0)])));
    assert_eq!(s.record_at("z", 2.0).unwrap().value("x"), Some(20.0));

    // No z value or NaN z: nothing to place.
    assert!(!s.insert_interpolated("z", Record::new("e", [("x", 1.0)])));
    assert!(!s.insert_interpolated("z", Record::new("e", [("z", f64::NAN)])));
    assert_eq!(s.len(), 3);
}

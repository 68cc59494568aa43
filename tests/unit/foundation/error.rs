use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MotionPlotError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        MotionPlotError::invalid_tick_config("x")
            .to_string()
            .contains("invalid tick config:")
    );
    assert_eq!(
        MotionPlotError::EmptyDataset.to_string(),
        "dataset contains no records"
    );
}

#[test]
fn missing_frame_names_entity_and_index() {
    let err = MotionPlotError::missing_frame("norway", 1955.0);
    assert!(err.is_missing_frame());
    assert!(err.to_string().contains("norway"));
    assert!(err.to_string().contains("1955"));
    assert!(!MotionPlotError::EmptyDataset.is_missing_frame());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MotionPlotError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

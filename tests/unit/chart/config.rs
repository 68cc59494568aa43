use super::*;

#[test]
fn defaults_validate() {
    let config = ChartConfig::default();
    config.validate().unwrap();
    assert_eq!(config.canvas.width, 600);
    assert_eq!(config.canvas.height, 350);
    assert_eq!(config.gutters.x_height, 40.0);
    assert_eq!(config.gutters.y_width, 50.0);
    assert_eq!(config.z_step, 1.0);
    assert_eq!(config.play_interval, Duration::from_millis(500));
    assert_eq!(config.point_radius, 10.0);
    assert_eq!(config.background, Rgb8::new(0xf0, 0xf0, 0xf0));
    assert_eq!(config.titles.x.as_deref(), Some("Horizontal Axis"));
    assert_eq!(config.titles.y.as_deref(), Some("Vertical Axis"));
}

#[test]
fn degenerate_canvas_and_gutters_are_rejected() {
    let mut config = ChartConfig::default();
    config.canvas.width = 0;
    assert!(config.validate().is_err());

    let mut config = ChartConfig::default();
    config.gutters.y_width = -1.0;
    assert!(config.validate().is_err());

    // Gutters may not swallow the whole plot area.
    let mut config = ChartConfig::default();
    config.gutters.y_width = 600.0;
    assert!(config.validate().is_err());

    let mut config = ChartConfig::default();
    config.gutters.x_height = 350.0;
    assert!(config.validate().is_err());
}

#[test]
fn playback_fields_are_validated() {
    let mut config = ChartConfig::default();
    config.z_step = 0.0;
    assert!(config.validate().is_err());

    let mut config = ChartConfig::default();
    config.play_interval = Duration::ZERO;
    assert!(config.validate().is_err());

    let mut config = ChartConfig::default();
    config.point_radius = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn partial_json_fills_remaining_fields_from_defaults() {
    let config: ChartConfig = serde_json::from_value(serde_json::json!({
        "canvas": { "width": 800, "height": 400 },
        "z_step": 2.0
    }))
    .unwrap();
    assert_eq!(config.canvas.width, 800);
    assert_eq!(config.z_step, 2.0);
    // Untouched fields keep their defaults.
    assert_eq!(config.point_radius, 10.0);
    assert_eq!(config.gutters, AxisGutters::default());
    assert_eq!(config.ticks.x.major.frequency, 4.0);
}

#[test]
fn config_round_trips_through_json() {
    let config = ChartConfig {
        titles: AxisTitles {
            x: Some("GDP".into()),
            y: None,
        },
        ..ChartConfig::default()
    };
    let json = serde_json::to_value(&config).unwrap();
    let back: ChartConfig = serde_json::from_value(json).unwrap();
    assert_eq!(back, config);
}

use super::*;

#[test]
fn primary_hues_convert_exactly() {
    // s=1, v=0.8 puts the dominant channel at round(255 * 0.8) = 204.
    assert_eq!(hsv_to_rgb(0.0, 1.0, 0.8), Rgb8::new(204, 0, 0));
    assert_eq!(hsv_to_rgb(120.0, 1.0, 0.8), Rgb8::new(0, 204, 0));
    assert_eq!(hsv_to_rgb(240.0, 1.0, 0.8), Rgb8::new(0, 0, 204));
}

#[test]
fn hue_wraps_past_a_full_turn() {
    assert_eq!(hsv_to_rgb(360.0, 1.0, 0.8), hsv_to_rgb(0.0, 1.0, 0.8));
    assert_eq!(hsv_to_rgb(-120.0, 1.0, 0.8), hsv_to_rgb(240.0, 1.0, 0.8));
}

#[test]
fn zero_saturation_collapses_to_gray() {
    assert_eq!(hsv_to_rgb(0.0, 0.0, 1.0), Rgb8::WHITE);
    assert_eq!(hsv_to_rgb(123.0, 0.0, 0.0), Rgb8::BLACK);
}

#[test]
fn wheel_partitions_the_circle_evenly() {
    let wheel = ColorWheel::default();
    assert!(wheel.generate(0).is_empty());

    let palette = wheel.generate(4);
    assert_eq!(
        palette,
        vec![
            Rgb8::new(204, 0, 0),
            Rgb8::new(102, 204, 0),
            Rgb8::new(0, 204, 204),
            Rgb8::new(102, 0, 204),
        ]
    );
}

#[test]
fn generated_colors_are_pairwise_distinct_for_small_palettes() {
    let palette = ColorWheel::default().generate(12);
    for (i, a) in palette.iter().enumerate() {
        for b in &palette[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// File: crates/axis-core/tests/labels_and_scale.rs
// Purpose: Validate label sequence generation and the value-to-pixel scale.

use axis_core::{normalise, NormaliserOptions, ValueScale};

fn assert_close(got: f64, want: f64) {
    assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
}

#[test]
fn labels_step_from_start_value() {
    let n = normalise(&[0.0, 10.0], &NormaliserOptions::default()).unwrap();

    assert_eq!(n.label_count(), 11);
    let labels = n.value_labels();
    assert_eq!(labels.len(), 11);
    for (i, &label) in labels.iter().enumerate() {
        assert_close(label, (i + 1) as f64);
    }
    assert_close(n.top_value(), 11.0);
}

#[test]
fn labels_cover_negative_axes() {
    let n = normalise(&[-50.0, -10.0], &NormaliserOptions::default()).unwrap();

    // start -50, step 5, range 42 -> 8 labels up to -10.
    assert_eq!(n.label_count(), 8);
    let labels = n.value_labels();
    assert_close(labels[0], -45.0);
    assert_close(*labels.last().unwrap(), -10.0);
}

#[test]
fn fractional_labels_stay_printable() {
    let n = normalise(&[0.0, 1.0], &NormaliserOptions::default()).unwrap();

    // Cumulative stepping is re-rounded to three decimals each time,
    // so no label picks up float drift.
    let labels = n.value_labels();
    assert_eq!(labels.len(), 11);
    for (i, &label) in labels.iter().enumerate() {
        assert_close(label, (i + 1) as f64 * 0.1);
    }
}

#[test]
fn scale_caps_at_top_label_for_zero_start() {
    let n = normalise(&[0.0, 10.0], &NormaliserOptions::default()).unwrap();
    let scale = ValueScale::new(n, 220.0);

    // start_value == 0, so the topmost label (11) spans the full height.
    assert_close(scale.to_px(0.0), 0.0);
    assert_close(scale.to_px(5.5), 110.0);
    assert_close(scale.to_px(11.0), 220.0);
}

#[test]
fn scale_uses_range_for_nonzero_start() {
    let n = normalise(&[-50.0, -10.0], &NormaliserOptions::default()).unwrap();
    let scale = ValueScale::new(n, 420.0);

    // start_value != 0, so the range (42) spans the full height.
    assert_close(scale.to_px(42.0), 420.0);
    assert_close(scale.to_px(21.0), 210.0);
}

#[test]
fn scale_maps_whole_series() {
    let n = normalise(&[0.0, 10.0], &NormaliserOptions::default()).unwrap();
    let scale = ValueScale::new(n, 220.0);

    let px = scale.normalise_data(&[0.0, 2.75, 11.0]);
    assert_eq!(px.len(), 3);
    assert_close(px[0], 0.0);
    assert_close(px[1], 55.0);
    assert_close(px[2], 220.0);
}

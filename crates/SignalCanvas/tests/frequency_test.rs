use glam::Vec2;
use signal_canvas::{BoxedSignal, SignalDisplay, Surface, render::DrawCommand};

fn sine() -> BoxedSignal {
    Box::new(|amp: f32, theta: f32| amp * theta.sin())
}

fn trace_points(surface: &Surface) -> &[Vec2] {
    surface
        .commands()
        .iter()
        .find_map(|cmd| match cmd {
            DrawCommand::Polyline { points, .. } => Some(points.as_slice()),
            _ => None,
        })
        .expect("surface should hold a trace polyline")
}

#[test]
fn test_bucket_count_tracks_the_surface_width() {
    // Frequency surface width 230: round(230 - 10) - 20 = 200 -> buckets 0..=200
    let display = SignalDisplay::new(530.0, sine(), 1.0).unwrap();
    assert_eq!(trace_points(display.frequency_plot()).len(), 201);

    // Width 130 -> 100 -> buckets 0..=100
    let display = SignalDisplay::new(430.0, sine(), 1.0).unwrap();
    assert_eq!(trace_points(display.frequency_plot()).len(), 101);
}

#[test]
fn test_dc_bucket_magnitude_is_exactly_zero() {
    // Bucket 0 probes rate 0, whose sine kernel vanishes identically, so the
    // magnitude is exactly zero for any signal
    let display = SignalDisplay::new(530.0, sine(), 1.0).unwrap();
    let origin = display.frequency_plot().origin();
    assert_eq!(trace_points(display.frequency_plot())[0], Vec2::new(origin.x, origin.y));

    let constant: BoxedSignal = Box::new(|_amp: f32, _theta: f32| 40.0f32);
    let display = SignalDisplay::new(530.0, constant, 1.0).unwrap();
    let origin = display.frequency_plot().origin();
    assert_eq!(trace_points(display.frequency_plot())[0], Vec2::new(origin.x, origin.y));
}

#[test]
fn test_unit_rate_magnitude_matches_the_normalization() {
    // With 200 buckets, bucket 2 probes rate 2 * 100 / 200 = 1.0 exactly.
    // There the probe sum over one turn of amp * sin^2 approaches
    // amp * pi / d_theta, so the plotted magnitude is
    //   (amp * pi / d_theta) / point_count * (origin.y * 0.5)
    // = (150 * 314.159) / 62831.85 * 75 = 56.25
    let display = SignalDisplay::new(530.0, sine(), 1.0).unwrap();
    let origin = display.frequency_plot().origin();
    let bucket = trace_points(display.frequency_plot())[2];

    assert_eq!(bucket.x, origin.x + 2.0);
    let magnitude = origin.y - bucket.y;
    assert!(
        (magnitude - 56.25).abs() < 0.5,
        "unit-rate magnitude {magnitude} deviates from the documented normalization"
    );
}

#[test]
fn test_sine_spectrum_peaks_only_at_the_unit_rate() {
    let display = SignalDisplay::new(530.0, sine(), 1.0).unwrap();
    let origin = display.frequency_plot().origin();
    let buckets = trace_points(display.frequency_plot());

    // Every probe rate off the signal's own rate integrates to (near) zero
    for (s, point) in buckets.iter().enumerate() {
        let magnitude = (origin.y - point.y).abs();
        if s == 2 {
            assert!(magnitude > 50.0);
        } else {
            assert!(
                magnitude < 5.0,
                "bucket {s} holds spurious magnitude {magnitude}"
            );
        }
    }
}

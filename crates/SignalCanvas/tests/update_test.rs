use glam::Vec2;
use signal_canvas::{BoxedSignal, DisplayError, PlotSet, SignalDisplay, Surface, render::DrawCommand};

fn zero() -> BoxedSignal {
    Box::new(|_amp: f32, _theta: f32| 0.0f32)
}

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
fn test_set_speed_repaints_only_the_circular_plot() {
    let mut display = SignalDisplay::new(430.0, sine(), 1.0).unwrap();

    // 1. Snapshot all three display lists
    let time_before = display.time_plot().commands().clone();
    let circular_before = display.circular_plot().commands().clone();
    let frequency_before = display.frequency_plot().commands().clone();

    // 2. Change speed without a refresh
    let repainted = display.set_speed(2.0).unwrap();
    assert_eq!(repainted, PlotSet::CIRCULAR);
    assert_eq!(display.speed(), 2.0);

    // 3. Time and frequency lists are bit-identical; circular was repainted
    assert_eq!(display.time_plot().commands(), &time_before);
    assert_eq!(display.frequency_plot().commands(), &frequency_before);
    assert_ne!(display.circular_plot().commands(), &circular_before);

    // 4. Nothing is stale: the other plots never sample the speed
    assert_eq!(display.stale(), PlotSet::empty());
}

#[test]
fn test_set_signal_defers_every_repaint_to_refresh() {
    let mut display = SignalDisplay::new(430.0, sine(), 1.0).unwrap();

    let time_before = display.time_plot().commands().clone();
    let circular_before = display.circular_plot().commands().clone();
    let frequency_before = display.frequency_plot().commands().clone();

    // 1. Swap the signal: all three plots are invalidated but untouched
    let invalidated = display.set_signal(zero());
    assert_eq!(invalidated, PlotSet::all());
    assert_eq!(display.stale(), PlotSet::all());
    assert_eq!(display.time_plot().commands(), &time_before);
    assert_eq!(display.circular_plot().commands(), &circular_before);
    assert_eq!(display.frequency_plot().commands(), &frequency_before);

    // 2. Refresh: all three now reflect the new signal
    display.refresh().unwrap();
    assert_eq!(display.stale(), PlotSet::empty());
    for point in trace_points(display.time_plot()) {
        assert_eq!(point.y, display.time_plot().origin().y);
    }
    for point in trace_points(display.circular_plot()) {
        assert_eq!(*point, display.circular_plot().origin());
    }
    for point in trace_points(display.frequency_plot()) {
        assert_eq!(point.y, display.frequency_plot().origin().y);
    }
}

#[test]
fn test_set_speed_paints_the_pending_signal() {
    let mut display = SignalDisplay::new(430.0, sine(), 1.0).unwrap();
    let time_before = display.time_plot().commands().clone();

    // set_speed always paints with the current signal, so a pending swap
    // becomes visible on the circular plot alone
    display.set_signal(zero());
    display.set_speed(2.0).unwrap();

    for point in trace_points(display.circular_plot()) {
        assert_eq!(*point, display.circular_plot().origin());
    }
    assert_eq!(display.time_plot().commands(), &time_before);
    assert_eq!(display.stale(), PlotSet::TIME | PlotSet::FREQUENCY);
}

#[test]
fn test_non_finite_speed_is_rejected() {
    let mut display = SignalDisplay::new(430.0, sine(), 1.0).unwrap();
    let circular_before = display.circular_plot().commands().clone();

    let err = display.set_speed(f32::INFINITY).unwrap_err();
    assert!(matches!(err, DisplayError::NonFiniteSpeed { .. }));

    // The multiplier and the painted trace are unchanged
    assert_eq!(display.speed(), 1.0);
    assert_eq!(display.circular_plot().commands(), &circular_before);
}

#[test]
fn test_non_finite_sample_surfaces_an_error() {
    let mut display = SignalDisplay::new(430.0, sine(), 1.0).unwrap();

    display.set_signal(Box::new(|_amp: f32, _theta: f32| f32::NAN));
    let err = display.refresh().unwrap_err();
    match err {
        DisplayError::NonFiniteSample { plot, value, .. } => {
            assert_eq!(plot, signal_canvas::PlotKind::Time);
            assert!(value.is_nan());
        }
        other => panic!("expected NonFiniteSample, got {other:?}"),
    }

    // The failing surface keeps its cleared state plus axes; no partial trace
    let commands = display.time_plot().commands();
    assert_eq!(commands.len(), 2);
    assert!(
        commands
            .iter()
            .all(|cmd| matches!(cmd, DrawCommand::Line { .. }))
    );
}

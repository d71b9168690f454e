use glam::Vec2;
use macroquad::prelude as mq;
use signal_canvas::render::DrawCommand;
use signal_canvas::{BoxedSignal, SignalDisplay, Surface};

const TRACK_WIDTH: f32 = 640.0;
const SPEED_STEP: f32 = 0.5;

fn sine() -> BoxedSignal {
    Box::new(|amp: f32, theta: f32| amp * theta.sin())
}

/// Square wave: odd harmonics 1..9 of the Fourier series.
fn square_partial() -> BoxedSignal {
    Box::new(|amp: f32, theta: f32| {
        let mut sum = 0.0;
        for n in 0..5 {
            let k = (2 * n + 1) as f32;
            sum += (k * theta).sin() / k;
        }
        0.75 * amp * sum * 4.0 / std::f32::consts::PI
    })
}

/// Sawtooth: alternating harmonics 1..6 of the Fourier series.
fn sawtooth_partial() -> BoxedSignal {
    Box::new(|amp: f32, theta: f32| {
        let mut sum = 0.0;
        let mut sign = 1.0;
        for k in 1..=6 {
            sum += sign * (k as f32 * theta).sin() / k as f32;
            sign = -sign;
        }
        0.75 * amp * sum * 2.0 / std::f32::consts::PI
    })
}

fn color(c: glam::Vec4) -> mq::Color {
    mq::Color::new(c.x, c.y, c.z, c.w)
}

/// Rasterizes one surface's display list at the given screen offset.
///
/// Polyline samples are far denser than the pixel grid, so segments shorter
/// than 0.75px are merged before drawing.
fn draw_surface(surface: &Surface, ox: f32, oy: f32) {
    let size = surface.size();
    mq::draw_rectangle(ox, oy, size.x, size.y, mq::Color::new(0.13, 0.13, 0.13, 1.0));

    for cmd in surface.commands() {
        match cmd {
            DrawCommand::Line {
                start,
                end,
                color: c,
                width,
            } => {
                mq::draw_line(
                    ox + start.x,
                    oy + start.y,
                    ox + end.x,
                    oy + end.y,
                    *width,
                    color(*c),
                );
            }
            DrawCommand::Polyline {
                points,
                color: c,
                width,
            } => {
                let mut pen: Option<Vec2> = None;
                for point in points {
                    match pen {
                        None => pen = Some(*point),
                        Some(prev) if prev.distance(*point) >= 0.75 => {
                            mq::draw_line(
                                ox + prev.x,
                                oy + prev.y,
                                ox + point.x,
                                oy + point.y,
                                *width,
                                color(*c),
                            );
                            pen = Some(*point);
                        }
                        Some(_) => {}
                    }
                }
                if let (Some(prev), Some(last)) = (pen, points.last()) {
                    if prev != *last {
                        mq::draw_line(
                            ox + prev.x,
                            oy + prev.y,
                            ox + last.x,
                            oy + last.y,
                            *width,
                            color(*c),
                        );
                    }
                }
            }
        }
    }
}

#[macroquad::main("SignalCanvas Playground")]
async fn main() {
    println!("Initializing SignalDisplay...");
    let mut display = match SignalDisplay::new(TRACK_WIDTH, sine(), 1.0) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to init display: {e}");
            return;
        }
    };
    println!("Display initialized.");

    loop {
        // 1. Input Handling
        if mq::is_key_pressed(mq::KeyCode::Up) {
            match display.set_speed(display.speed() + SPEED_STEP) {
                Ok(repainted) => println!("Speed {} (repainted {:?})", display.speed(), repainted),
                Err(e) => eprintln!("set_speed failed: {e}"),
            }
        }
        if mq::is_key_pressed(mq::KeyCode::Down) {
            match display.set_speed(display.speed() - SPEED_STEP) {
                Ok(repainted) => println!("Speed {} (repainted {:?})", display.speed(), repainted),
                Err(e) => eprintln!("set_speed failed: {e}"),
            }
        }
        if mq::is_key_pressed(mq::KeyCode::Key1) {
            println!("Signal: sine (stale {:?})", display.set_signal(sine()));
        }
        if mq::is_key_pressed(mq::KeyCode::Key2) {
            println!(
                "Signal: square partial sum (stale {:?})",
                display.set_signal(square_partial())
            );
        }
        if mq::is_key_pressed(mq::KeyCode::Key3) {
            println!(
                "Signal: sawtooth partial sum (stale {:?})",
                display.set_signal(sawtooth_partial())
            );
        }
        if mq::is_key_pressed(mq::KeyCode::R) {
            if let Err(e) = display.refresh() {
                eprintln!("refresh failed: {e}");
            }
        }

        // 2. Render
        mq::clear_background(mq::Color::new(0.08, 0.08, 0.08, 1.0));

        draw_surface(display.time_plot(), 20.0, 16.0);
        draw_surface(display.circular_plot(), 20.0, 182.0);
        draw_surface(display.frequency_plot(), 330.0, 182.0);

        mq::draw_text(
            &format!(
                "speed {:.1}   stale {:?}   [1/2/3] signal   [Up/Down] speed   [R] refresh",
                display.speed(),
                display.stale()
            ),
            20.0,
            540.0,
            20.0,
            mq::LIGHTGRAY,
        );

        mq::next_frame().await
    }
}

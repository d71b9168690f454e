use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::config::DisplayConfig;
use crate::error::DisplayError;
use crate::render::DrawCommand;
use crate::signal::Signal;
use crate::surface::{PlotKind, Surface};

/// Pixel offsets on the time axis are read as degrees.
const RAD_DEG_RATIO: f32 = PI / 180.0;

/// High-level renderer for the three plots.
///
/// The `Painter` is responsible for converting the abstract display state
/// (signal, speed, surface geometry) into concrete drawing commands that the
/// host application can render. It handles:
/// - Axes rendering (faint cross through the origin)
/// - Time-domain sampling and trace layout
/// - Circular/phasor sampling with the speed warp
/// - Brute-force frequency probing and magnitude layout
///
/// Each paint clears the surface, records the axes, then records the trace as
/// one polyline. If the signal produces a non-finite sample, the surface is
/// left with axes only and the error is propagated.
pub struct Painter;

impl Painter {
    /// Paints the time-domain plot: amplitude over angular position.
    ///
    /// Samples the signal at fixed pixel step `time_step` from the origin to
    /// the right edge. Sample `i` sits at pixel offset `x = step * i`; the
    /// sampled angle is `x` converted by the degree-to-radian ratio, and the
    /// amplitude reference is the surface's origin height.
    pub fn paint_time(
        surface: &mut Surface,
        signal: &dyn Signal,
        config: &DisplayConfig,
    ) -> Result<(), DisplayError> {
        surface.clear();
        Self::paint_axes(surface, config);

        let dx = config.time_step;
        let i_max = ((surface.size().x - surface.origin().x) / dx).round() as usize;
        let amp_ref = surface.origin().y;

        let mut points = Vec::with_capacity(i_max);
        for i in 0..i_max {
            let x = dx * i as f32;
            let theta = x * RAD_DEG_RATIO;
            let value = signal.eval(amp_ref, theta);
            if !value.is_finite() {
                return Err(DisplayError::NonFiniteSample {
                    plot: PlotKind::Time,
                    theta,
                    value,
                });
            }
            points.push(surface.plot_to_pixel(Vec2::new(x, value)));
        }

        tracing::debug!(points = points.len(), "Painted time plot");
        surface.push(DrawCommand::Polyline {
            points,
            color: config.style.time_trace.color,
            width: config.style.time_trace.width,
        });
        Ok(())
    }

    /// Paints the circular/phasor plot: one full turn of the signal as a
    /// polar trace.
    ///
    /// For each angle `theta` the radius is `signal(amp_ref, theta)` and the
    /// plotted point is `(r * cos(speed * theta), r * sin(speed * theta))`
    /// relative to the origin. The speed multiplier warps the angular
    /// traversal rate independent of the radius function; the sample count
    /// depends only on `circular_step`, never on speed.
    pub fn paint_circular(
        surface: &mut Surface,
        signal: &dyn Signal,
        speed: f32,
        config: &DisplayConfig,
    ) -> Result<(), DisplayError> {
        surface.clear();
        Self::paint_axes(surface, config);

        let d_theta = config.circular_step;
        let steps = (TAU / d_theta).floor() as usize;
        let amp_ref = surface.origin().y;

        let mut points = Vec::with_capacity(steps + 1);
        for k in 0..=steps {
            let theta = k as f32 * d_theta;
            let r = signal.eval(amp_ref, theta);
            if !r.is_finite() {
                return Err(DisplayError::NonFiniteSample {
                    plot: PlotKind::Circular,
                    theta,
                    value: r,
                });
            }
            let warped = speed * theta;
            points.push(surface.plot_to_pixel(Vec2::new(r * warped.cos(), r * warped.sin())));
        }

        tracing::debug!(points = points.len(), speed, "Painted circular plot");
        surface.push(DrawCommand::Polyline {
            points,
            color: config.style.circular_trace.color,
            width: config.style.circular_trace.width,
        });
        Ok(())
    }

    /// Paints the frequency-magnitude plot: a brute-force discrete
    /// approximation of a Fourier sine-transform at a fixed set of probe
    /// rates.
    ///
    /// Bucket `s` (one per pixel column, up to the right margin) probes the
    /// angular rate `s * probe_scale / s_max`; its magnitude is the sum of
    /// `signal(amp_ref, theta) * sin(rate * theta)` over one full turn at
    /// step `frequency_step`, normalized by the nominal turn sample count
    /// with the probe scale folded in, then scaled to half the origin
    /// height. `amp_ref` is the circular surface's origin height, so the
    /// probe integrates the same radius function the circular plot traces.
    pub fn paint_frequency(
        surface: &mut Surface,
        signal: &dyn Signal,
        amp_ref: f32,
        config: &DisplayConfig,
    ) -> Result<(), DisplayError> {
        surface.clear();
        Self::paint_axes(surface, config);

        let d_theta = config.frequency_step;
        let turn_steps = (TAU / d_theta).floor() as usize;
        let point_count = (TAU / d_theta) * config.probe_scale;
        let s_max = (surface.size().x - surface.origin().x).round() - config.frequency_margin;
        let buckets = s_max as usize;

        let mut points = Vec::with_capacity(buckets + 1);
        for s in 0..=buckets {
            let real_speed = s as f32 * config.probe_scale / s_max;
            let mut sum = 0.0f32;
            for k in 0..=turn_steps {
                let theta = k as f32 * d_theta;
                let value = signal.eval(amp_ref, theta);
                if !value.is_finite() {
                    return Err(DisplayError::NonFiniteSample {
                        plot: PlotKind::Frequency,
                        theta,
                        value,
                    });
                }
                sum += value * (real_speed * theta).sin();
            }
            let magnitude = (sum / point_count) * (surface.origin().y * 0.5);
            points.push(surface.plot_to_pixel(Vec2::new(s as f32, magnitude)));
        }

        tracing::debug!(
            buckets = points.len(),
            samples_per_bucket = turn_steps + 1,
            "Painted frequency plot"
        );
        surface.push(DrawCommand::Polyline {
            points,
            color: config.style.frequency_trace.color,
            width: config.style.frequency_trace.width,
        });
        Ok(())
    }

    /// Records the faint axes cross through the surface's origin.
    fn paint_axes(surface: &mut Surface, config: &DisplayConfig) {
        let size = surface.size();
        let origin = surface.origin();
        let style = &config.style;

        surface.push(DrawCommand::Line {
            start: Vec2::new(0.0, origin.y),
            end: Vec2::new(size.x, origin.y),
            color: style.axis_color,
            width: style.axis_width,
        });
        surface.push(DrawCommand::Line {
            start: Vec2::new(origin.x, 0.0),
            end: Vec2::new(origin.x, size.y),
            color: style.axis_color,
            width: style.axis_width,
        });
    }
}

//! # SignalCanvas
//!
//! `signal_canvas` is a headless library relating a time-domain signal, its
//! circular (phasor) representation, and an approximate frequency-domain
//! decomposition. It handles state, sampling, and layout, while delegating
//! rasterization to the host application.
//!
//! ## Core Architecture
//! - **Signal (`src/signal.rs`)**: The caller-supplied evaluation function, the sole extension point.
//! - **Surface (`src/surface.rs`)**: Fixed-size drawing surfaces and coordinate transformation (Plot <-> Pixel).
//! - **Render (`src/render.rs`)**: Outputs a list of `DrawCommand`s for the host to render.
//! - **Painter (`src/painter.rs`)**: The three sampling loops that fill the surfaces.

pub mod config;
pub mod error;
pub mod painter;
pub mod render;
pub mod signal;
pub mod surface;

use glam::Vec2;
use painter::Painter;

// Re-exports for convenience
pub use config::DisplayConfig;
pub use error::DisplayError;
pub use signal::{BoxedSignal, Signal};
pub use surface::{PlotKind, PlotSet, Surface};

/// The main entry point for the library.
///
/// A `SignalDisplay` owns three fixed-size surfaces and keeps them painted
/// from a signal function and a speed multiplier. It is intended to be
/// instantiated once per mount and reused; the host rasterizes each surface's
/// command list whenever it likes.
///
/// Update semantics, as declared by each mutator's `PlotSet`:
/// - `refresh` repaints all three plots and is the only entry point
///   guaranteeing full consistency across them.
/// - `set_speed` repaints the circular plot only; the other two do not sample
///   the speed multiplier and are left untouched.
/// - `set_signal` repaints nothing; all three plots keep their previous
///   commands until the next `refresh`.
pub struct SignalDisplay {
    config: DisplayConfig,
    speed: f32,
    signal: BoxedSignal,
    time: Surface,
    circular: Surface,
    frequency: Surface,
    stale: PlotSet,
}

impl std::fmt::Debug for SignalDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalDisplay")
            .field("config", &self.config)
            .field("speed", &self.speed)
            .field("signal", &"<dyn Signal>")
            .field("time", &self.time)
            .field("circular", &self.circular)
            .field("frequency", &self.frequency)
            .field("stale", &self.stale)
            .finish()
    }
}

impl SignalDisplay {
    /// Creates a display for a mount of the given width with the default
    /// configuration, and paints all three plots.
    pub fn new(track_width: f32, signal: BoxedSignal, speed: f32) -> Result<Self, DisplayError> {
        Self::with_config(track_width, signal, speed, DisplayConfig::default())
    }

    /// Creates a display with an explicit configuration.
    ///
    /// Validates the configuration, the speed, and the mount: the frequency
    /// surface takes the width left of the circular plot and must fit at
    /// least one probe bucket past its margins.
    pub fn with_config(
        track_width: f32,
        signal: BoxedSignal,
        speed: f32,
        config: DisplayConfig,
    ) -> Result<Self, DisplayError> {
        config.validate()?;
        if !speed.is_finite() {
            return Err(DisplayError::NonFiniteSpeed { speed });
        }
        if !track_width.is_finite() || track_width <= 0.0 {
            return Err(DisplayError::InvalidStep {
                name: "track_width",
                value: track_width,
            });
        }

        let frequency_width = track_width - config.circular_size;
        let s_max = (frequency_width - config.origin_margin).round() - config.frequency_margin;
        if s_max < 1.0 {
            return Err(DisplayError::MountTooNarrow {
                track_width,
                min_width: config.circular_size + config.origin_margin + config.frequency_margin + 1.0,
            });
        }

        let time = Surface::new(
            PlotKind::Time,
            Vec2::new(track_width, config.signal_height),
            Vec2::new(config.origin_margin, 0.5 * config.signal_height),
        );
        let circular = Surface::new(
            PlotKind::Circular,
            Vec2::splat(config.circular_size),
            Vec2::splat(0.5 * config.circular_size),
        );
        let frequency = Surface::new(
            PlotKind::Frequency,
            Vec2::new(frequency_width, config.frequency_height),
            Vec2::new(config.origin_margin, 0.5 * config.frequency_height),
        );

        tracing::info!(
            track_width,
            frequency_width,
            speed,
            "Created signal display"
        );

        let mut display = Self {
            config,
            speed,
            signal,
            time,
            circular,
            frequency,
            stale: PlotSet::all(),
        };
        display.refresh()?;
        Ok(display)
    }

    /// Clears and repaints all three plots from the current state.
    pub fn refresh(&mut self) -> Result<(), DisplayError> {
        Painter::paint_time(&mut self.time, self.signal.as_ref(), &self.config)?;
        Painter::paint_circular(&mut self.circular, self.signal.as_ref(), self.speed, &self.config)?;
        let amp_ref = self.circular.origin().y;
        Painter::paint_frequency(&mut self.frequency, self.signal.as_ref(), amp_ref, &self.config)?;
        self.stale = PlotSet::empty();
        Ok(())
    }

    /// Updates the speed multiplier and repaints the circular plot with the
    /// current signal. Returns the set of plots repainted.
    pub fn set_speed(&mut self, speed: f32) -> Result<PlotSet, DisplayError> {
        if !speed.is_finite() {
            return Err(DisplayError::NonFiniteSpeed { speed });
        }
        self.speed = speed;
        Painter::paint_circular(&mut self.circular, self.signal.as_ref(), self.speed, &self.config)?;
        self.stale.remove(PlotSet::CIRCULAR);
        Ok(PlotSet::CIRCULAR)
    }

    /// Replaces the active signal function without repainting. Returns the
    /// set of plots invalidated; the caller must `refresh` for the change to
    /// become visible.
    pub fn set_signal(&mut self, signal: BoxedSignal) -> PlotSet {
        self.signal = signal;
        self.stale = PlotSet::all();
        self.stale
    }

    /// The plots whose inputs changed since they were last painted.
    pub fn stale(&self) -> PlotSet {
        self.stale
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Configuration the display was built with.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The time-domain surface.
    pub fn time_plot(&self) -> &Surface {
        &self.time
    }

    /// The circular/phasor surface.
    pub fn circular_plot(&self) -> &Surface {
        &self.circular
    }

    /// The frequency-magnitude surface.
    pub fn frequency_plot(&self) -> &Surface {
        &self.frequency
    }
}

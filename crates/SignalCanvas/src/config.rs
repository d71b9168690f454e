//! # Configuration
//!
//! This module defines the configuration struct for the display.

use serde::{Deserialize, Serialize};

use crate::error::DisplayError;

/// Configuration parameters for a `SignalDisplay`.
///
/// These settings fix the surface geometry and the sampling resolution of the
/// three plots. They are validated once at construction; surfaces are never
/// resized afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Height of the time-domain surface in pixels. Default: 150.0.
    pub signal_height: f32,
    /// Side length of the square circular surface in pixels. Default: 300.0.
    pub circular_size: f32,
    /// Height of the frequency surface in pixels. Default: 300.0.
    pub frequency_height: f32,
    /// Pixel inset of the time and frequency origins from the left edge.
    /// Default: 10.0.
    pub origin_margin: f32,
    /// Pixels reserved at the right edge of the frequency surface.
    /// Default: 20.0.
    pub frequency_margin: f32,
    /// Pixel step between time-domain samples. Default: 0.01.
    pub time_step: f32,
    /// Angular step of the circular trace in radians. Default: 0.001.
    pub circular_step: f32,
    /// Angular step of the frequency integration in radians. Default: 0.01.
    pub frequency_step: f32,
    /// Angular rate probed by the right-most frequency bucket. Default: 100.0.
    pub probe_scale: f32,
    /// Visual styling configuration.
    #[serde(default)]
    pub style: DisplayStyle,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            signal_height: 150.0,
            circular_size: 300.0,
            frequency_height: 300.0,
            origin_margin: 10.0,
            frequency_margin: 20.0,
            time_step: 0.01,
            circular_step: 0.001,
            frequency_step: 0.01,
            probe_scale: 100.0,
            style: DisplayStyle::default(),
        }
    }
}

impl DisplayConfig {
    /// Rejects non-positive or non-finite steps and dimensions.
    pub fn validate(&self) -> Result<(), DisplayError> {
        let positive = [
            ("signal_height", self.signal_height),
            ("circular_size", self.circular_size),
            ("frequency_height", self.frequency_height),
            ("time_step", self.time_step),
            ("circular_step", self.circular_step),
            ("frequency_step", self.frequency_step),
            ("probe_scale", self.probe_scale),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(DisplayError::InvalidStep { name, value });
            }
        }
        for (name, value) in [
            ("origin_margin", self.origin_margin),
            ("frequency_margin", self.frequency_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DisplayError::InvalidStep { name, value });
            }
        }
        Ok(())
    }
}

/// Visual styling configuration for the display.
///
/// This struct defines the colors and stroke widths used for rendering the
/// plots. It uses `glam::Vec4` for RGBA colors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayStyle {
    /// Color of the axes cross. Default: grey.
    pub axis_color: glam::Vec4,
    /// Stroke width of the axes cross in pixels. Default: 1.0.
    pub axis_width: f32,
    /// Trace style of the time-domain plot.
    #[serde(default = "TraceStyle::wide")]
    pub time_trace: TraceStyle,
    /// Trace style of the circular plot.
    #[serde(default)]
    pub circular_trace: TraceStyle,
    /// Trace style of the frequency plot.
    #[serde(default = "TraceStyle::wide")]
    pub frequency_trace: TraceStyle,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            axis_color: glam::Vec4::new(0.5, 0.5, 0.5, 1.0),
            axis_width: 1.0,
            time_trace: TraceStyle::wide(),
            circular_trace: TraceStyle::default(),
            frequency_trace: TraceStyle::wide(),
        }
    }
}

/// Visual style for a plot trace.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TraceStyle {
    /// Color of the trace. Default: tomato.
    pub color: glam::Vec4,
    /// Width of the trace in pixels.
    pub width: f32,
}

impl Default for TraceStyle {
    fn default() -> Self {
        Self {
            color: glam::Vec4::new(1.0, 0.388, 0.278, 1.0),
            width: 1.0,
        }
    }
}

impl TraceStyle {
    /// The 2px variant used by the time and frequency traces.
    pub fn wide() -> Self {
        Self {
            width: 2.0,
            ..Self::default()
        }
    }
}

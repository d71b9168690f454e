//! # Error Taxonomy
//!
//! Configuration and sampling failures are surfaced as `DisplayError` values
//! instead of silently rendering nothing.

use crate::surface::PlotKind;

/// Errors reported by display construction and repaint operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// The mount the display was built for cannot fit a single frequency
    /// probe bucket next to the circular plot.
    #[error("track width {track_width}px is too narrow; at least {min_width}px is required")]
    MountTooNarrow {
        /// The measured mount width passed at construction.
        track_width: f32,
        /// The smallest mount width this configuration accepts.
        min_width: f32,
    },
    /// A sampling step or surface dimension in the configuration is
    /// non-positive or non-finite.
    #[error("{name} must be positive and finite, got {value}")]
    InvalidStep {
        /// Name of the offending configuration field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// The speed multiplier is NaN or infinite.
    #[error("speed must be finite, got {speed}")]
    NonFiniteSpeed {
        /// The rejected value.
        speed: f32,
    },
    /// The signal function produced a NaN or infinite sample. The failing
    /// surface keeps its cleared state and axes; no partial trace is recorded.
    #[error("signal produced non-finite sample {value} at theta {theta} on the {plot} plot")]
    NonFiniteSample {
        /// The plot being painted when sampling failed.
        plot: PlotKind,
        /// The angle at which the signal was evaluated.
        theta: f32,
        /// The non-finite value the signal returned.
        value: f32,
    },
}

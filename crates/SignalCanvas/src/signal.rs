//! # Signal Model
//!
//! The signal function is the sole extension point of the library. It is
//! supplied by the caller and swappable at any time; the display only defines
//! its required shape.

/// A pure signal evaluated at an angular position.
///
/// `amplitude` is the amplitude reference of the plot being painted (its
/// origin half-height in pixels) and `theta` is the angular position in
/// radians. Implementations must be stateless between calls.
pub trait Signal {
    /// Evaluates the signal at `theta`, scaled against `amplitude`.
    fn eval(&self, amplitude: f32, theta: f32) -> f32;
}

// Plain closures work directly as signals.
impl<F> Signal for F
where
    F: Fn(f32, f32) -> f32,
{
    fn eval(&self, amplitude: f32, theta: f32) -> f32 {
        self(amplitude, theta)
    }
}

/// Owned, dynamically-dispatched signal as stored by the display.
pub type BoxedSignal = Box<dyn Signal>;

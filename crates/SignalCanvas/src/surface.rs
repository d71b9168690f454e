//! # Surface System
//!
//! This module defines the headless drawing surfaces the display paints onto.
//! Each surface has a fixed pixel size and an origin: the pixel-space point
//! corresponding to mathematical zero. It provides utilities to transform
//! between Plot Space (mathematical axes, y-up) and Pixel Space (y-down,
//! top-left anchored).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::render::{DrawCommand, RenderList};

/// Names one of the three plots a display paints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlotKind {
    /// Amplitude over angular position.
    Time,
    /// Phasor trace over one full turn.
    Circular,
    /// Approximate magnitude per probed angular rate.
    Frequency,
}

impl PlotKind {
    /// The singleton `PlotSet` containing this plot.
    pub fn as_set(self) -> PlotSet {
        match self {
            PlotKind::Time => PlotSet::TIME,
            PlotKind::Circular => PlotSet::CIRCULAR,
            PlotKind::Frequency => PlotSet::FREQUENCY,
        }
    }
}

impl std::fmt::Display for PlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotKind::Time => write!(f, "time"),
            PlotKind::Circular => write!(f, "circular"),
            PlotKind::Frequency => write!(f, "frequency"),
        }
    }
}

use bitflags::bitflags;

bitflags! {
    /// Bitflags naming a subset of the three plots.
    ///
    /// Mutators return the set of plots they repainted; `SignalDisplay::stale`
    /// reports the plots whose inputs changed since they were last painted.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PlotSet: u8 {
        /// The time-domain plot.
        const TIME = 1 << 0;
        /// The circular/phasor plot.
        const CIRCULAR = 1 << 1;
        /// The frequency-magnitude plot.
        const FREQUENCY = 1 << 2;
    }
}

// Manual Serialize/Deserialize implementation for bitflags to be friendly
impl Serialize for PlotSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for PlotSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// A fixed-size headless canvas recording draw commands.
///
/// Surfaces are created once at display construction and never resized.
/// The surface serves as the single source of truth for its own coordinate
/// conversions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Surface {
    kind: PlotKind,
    size: Vec2,
    origin: Vec2,
    commands: RenderList,
}

impl Surface {
    /// Creates a new surface of the given size with its origin fixed.
    pub(crate) fn new(kind: PlotKind, size: Vec2, origin: Vec2) -> Self {
        Self {
            kind,
            size,
            origin,
            commands: Vec::new(),
        }
    }

    /// Which plot this surface holds.
    pub fn kind(&self) -> PlotKind {
        self.kind
    }

    /// Pixel size of the surface.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// The pixel-space point corresponding to mathematical zero.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// The display list recorded by the last paint of this surface.
    pub fn commands(&self) -> &RenderList {
        &self.commands
    }

    /// Converts a point from **Plot Space** (origin-relative, y-up) to
    /// **Pixel Space** (top-left anchored, y-down).
    ///
    /// Formula: `Pixel = (Origin.x + Plot.x, Origin.y - Plot.y)`
    pub fn plot_to_pixel(&self, plot_pos: Vec2) -> Vec2 {
        Vec2::new(self.origin.x + plot_pos.x, self.origin.y - plot_pos.y)
    }

    /// Converts a point from **Pixel Space** back to **Plot Space**.
    ///
    /// Formula: `Plot = (Pixel.x - Origin.x, Origin.y - Pixel.y)`
    pub fn pixel_to_plot(&self, pixel_pos: Vec2) -> Vec2 {
        Vec2::new(pixel_pos.x - self.origin.x, self.origin.y - pixel_pos.y)
    }

    /// Empties the display list ahead of a repaint.
    pub(crate) fn clear(&mut self) {
        self.commands.clear();
    }

    /// Records a draw command.
    pub(crate) fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

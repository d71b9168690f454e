//! # Rendering System
//!
//! This module acts as the "Instruction Set Architecture" for the GPU.
//! Instead of drawing directly, each surface records a display list of `DrawCommand`s.
//! The host application (Egui, WGPU, Macroquad, etc.) is responsible for interpreting
//! these commands and drawing pixels.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// A single drawing primitive.
///
/// Coordinates are in **Pixel Space** relative to the surface's top-left corner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A straight line segment.
    Line {
        /// Start point in surface pixels.
        start: Vec2,
        /// End point in surface pixels.
        end: Vec2,
        /// Line color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Line thickness in pixels.
        width: f32,
    },
    /// A connected run of line segments (the sampled trace of a plot).
    Polyline {
        /// Vertices in surface pixels. The first vertex is the pen-down point;
        /// each subsequent vertex extends the trace.
        points: Vec<Vec2>,
        /// Trace color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Trace thickness in pixels.
        width: f32,
    },
}

/// The display list a surface holds between repaints.
pub type RenderList = Vec<DrawCommand>;

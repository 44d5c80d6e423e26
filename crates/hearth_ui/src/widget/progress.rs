//! Progress bar that fills over time.

use super::Component;
use crate::layout::Rect;
use crate::render::{RenderCommand, RenderList};
use crate::style::Color;

/// A bar whose fill advances by `rate` per second until full.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    /// Screen bounds.
    pub bounds: Rect,
    progress: f32,
    /// Fill gained per second.
    pub rate: f32,
    /// Stacking order.
    pub z: f32,
}

impl ProgressBar {
    /// Creates an empty bar.
    #[must_use]
    pub const fn new(bounds: Rect, rate: f32) -> Self {
        Self {
            bounds,
            progress: 0.0,
            rate,
            z: 0.0,
        }
    }

    /// Sets the stacking order.
    #[must_use]
    pub const fn with_z(mut self, z: f32) -> Self {
        self.z = z;
        self
    }

    /// Fill fraction in `[0, 1]`.
    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Sets the fill fraction, clamped to `[0, 1]`.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress.clamp(0.0, 1.0);
    }

    /// Returns true once the bar is full.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

impl Component for ProgressBar {
    fn z_index(&self) -> f32 {
        self.z
    }

    fn update(&mut self, dt: f32) {
        self.set_progress(self.progress + self.rate * dt);
    }

    fn render(&mut self, out: &mut RenderList) {
        out.push(RenderCommand::Rect {
            bounds: self.bounds,
            color: Color::BLACK.with_alpha(0.6),
        });
        if self.progress > 0.0 {
            out.push(RenderCommand::Rect {
                bounds: self.bounds.with_width_fraction(self.progress),
                color: Color::MOSS,
            });
        }
    }
}

//! Static text.

use super::Component;
use crate::render::{RenderCommand, RenderList};
use crate::style::Color;

/// Default label font size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// A line of text. Never consumes input.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    /// Left edge.
    pub x: f32,
    /// Baseline.
    pub y: f32,
    /// Font size in pixels.
    pub font_size: f32,
    /// Text color.
    pub color: Color,
    /// Stacking order.
    pub z: f32,
}

impl Label {
    /// Creates a label at a position.
    #[must_use]
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size: DEFAULT_FONT_SIZE,
            color: Color::PARCHMENT,
            z: 0.0,
        }
    }

    /// Sets the stacking order.
    #[must_use]
    pub fn with_z(mut self, z: f32) -> Self {
        self.z = z;
        self
    }

    /// Sets the text color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Component for Label {
    fn z_index(&self) -> f32 {
        self.z
    }

    fn render(&mut self, out: &mut RenderList) {
        if self.text.is_empty() {
            return;
        }
        out.push(RenderCommand::Text {
            text: self.text.clone(),
            x: self.x,
            y: self.y,
            color: self.color,
            font_size: self.font_size,
        });
    }
}

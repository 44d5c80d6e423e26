//! Filled background panel.

use super::Component;
use crate::layout::Rect;
use crate::render::{RenderCommand, RenderList};
use crate::style::Color;

/// A solid rectangle, usually placed under other widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Screen bounds.
    pub bounds: Rect,
    /// Fill color.
    pub color: Color,
    /// Stacking order.
    pub z: f32,
    /// Optional outline drawn on top of the fill.
    pub border: Option<(Color, f32)>,
}

impl Panel {
    /// Creates a panel with the default background color.
    #[must_use]
    pub const fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            color: Color::SOIL,
            z: 0.0,
            border: None,
        }
    }

    /// Sets the fill color.
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the stacking order.
    #[must_use]
    pub const fn with_z(mut self, z: f32) -> Self {
        self.z = z;
        self
    }

    /// Adds an outline.
    #[must_use]
    pub const fn with_border(mut self, color: Color, width: f32) -> Self {
        self.border = Some((color, width));
        self
    }
}

impl Component for Panel {
    fn z_index(&self) -> f32 {
        self.z
    }

    fn render(&mut self, out: &mut RenderList) {
        out.push(RenderCommand::Rect {
            bounds: self.bounds,
            color: self.color,
        });
        if let Some((color, width)) = self.border {
            out.push(RenderCommand::RectOutline {
                bounds: self.bounds,
                color,
                width,
            });
        }
    }
}

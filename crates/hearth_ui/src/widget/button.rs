//! Clickable button.

use super::Component;
use crate::input::{InputEvent, MouseButton};
use crate::layout::Rect;
use crate::render::{RenderCommand, RenderList};
use crate::style::Color;

/// A rectangle with a caption that counts completed clicks.
///
/// A click is a left press inside the bounds followed by a left release
/// inside the bounds. The press is consumed so widgets underneath never
/// see it; the release is consumed only while this button holds the press.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    /// Screen bounds.
    pub bounds: Rect,
    label: String,
    /// Stacking order.
    pub z: f32,
    clicks: u32,
    pressed: bool,
    hovered: bool,
}

impl Button {
    /// Creates a button.
    #[must_use]
    pub fn new(bounds: Rect, label: impl Into<String>) -> Self {
        Self {
            bounds,
            label: label.into(),
            z: 0.0,
            clicks: 0,
            pressed: false,
            hovered: false,
        }
    }

    /// Sets the stacking order.
    #[must_use]
    pub fn with_z(mut self, z: f32) -> Self {
        self.z = z;
        self
    }

    /// Completed clicks so far.
    #[must_use]
    pub const fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Returns true between a press inside and the matching release.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Returns true while the cursor is over the button.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Caption text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    fn fill(&self) -> Color {
        if self.pressed {
            Color::EMBER
        } else if self.hovered {
            Color::SOIL.lerp(Color::EMBER, 0.35)
        } else {
            Color::SOIL
        }
    }
}

impl Component for Button {
    fn z_index(&self) -> f32 {
        self.z
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::MouseMove { x, y } => {
                self.hovered = self.bounds.contains(x, y);
                false
            }
            InputEvent::MouseDown {
                button: MouseButton::Left,
                x,
                y,
            } => {
                self.pressed = self.bounds.contains(x, y);
                self.pressed
            }
            InputEvent::MouseUp {
                button: MouseButton::Left,
                x,
                y,
            } => {
                if !self.pressed {
                    return false;
                }
                self.pressed = false;
                if self.bounds.contains(x, y) {
                    self.clicks += 1;
                    tracing::debug!(label = %self.label, clicks = self.clicks, "button clicked");
                }
                true
            }
            _ => false,
        }
    }

    fn render(&mut self, out: &mut RenderList) {
        out.push(RenderCommand::Rect {
            bounds: self.bounds,
            color: self.fill(),
        });
        out.push(RenderCommand::RectOutline {
            bounds: self.bounds,
            color: Color::PARCHMENT,
            width: 1.0,
        });
        out.push(RenderCommand::Text {
            text: self.label.clone(),
            x: self.bounds.x + 6.0,
            y: self.bounds.y + self.bounds.height * 0.5,
            color: Color::PARCHMENT,
            font_size: 14.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Button {
        Button::new(Rect::new(10.0, 10.0, 80.0, 20.0), "Build")
    }

    #[test]
    fn test_press_and_release_inside_counts_click() {
        let mut b = button();
        assert!(b.handle_input(&InputEvent::click(20.0, 15.0)));
        assert!(b.is_pressed());
        assert!(b.handle_input(&InputEvent::release(25.0, 15.0)));
        assert_eq!(b.clicks(), 1);
        assert!(!b.is_pressed());
    }

    #[test]
    fn test_release_outside_cancels() {
        let mut b = button();
        b.handle_input(&InputEvent::click(20.0, 15.0));
        assert!(b.handle_input(&InputEvent::release(200.0, 15.0)));
        assert_eq!(b.clicks(), 0);
    }

    #[test]
    fn test_press_outside_is_not_consumed() {
        let mut b = button();
        assert!(!b.handle_input(&InputEvent::click(0.0, 0.0)));
        assert!(!b.handle_input(&InputEvent::release(20.0, 15.0)));
        assert_eq!(b.clicks(), 0);
    }

    #[test]
    fn test_hover_never_consumes() {
        let mut b = button();
        assert!(!b.handle_input(&InputEvent::MouseMove { x: 20.0, y: 15.0 }));
        assert!(b.is_hovered());
        b.handle_input(&InputEvent::MouseMove { x: 0.0, y: 0.0 });
        assert!(!b.is_hovered());
    }

    #[test]
    fn test_right_button_ignored() {
        let mut b = button();
        let event = InputEvent::MouseDown {
            button: MouseButton::Right,
            x: 20.0,
            y: 15.0,
        };
        assert!(!b.handle_input(&event));
        assert!(!b.is_pressed());
    }
}

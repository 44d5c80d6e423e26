//! Closed set of drawable node payloads.

use hearth_ui::{Color, Rect, RenderCommand, RenderList};

/// Full turn in radians.
const TAU: f32 = std::f32::consts::TAU;

/// What a scene node draws.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Shape {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
    /// Filled circle.
    Circle {
        /// Center.
        center: (f32, f32),
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Line segment.
    Line {
        /// Start point.
        from: (f32, f32),
        /// End point.
        to: (f32, f32),
        /// Stroke width.
        width: f32,
        /// Stroke color.
        color: Color,
    },
    /// Text run.
    Text {
        /// Content.
        text: String,
        /// Anchor point.
        position: (f32, f32),
        /// Font size in pixels.
        font_size: f32,
        /// Text color.
        color: Color,
    },
    /// Rotating marker; the only shape with per-frame state.
    Spinner {
        /// Center.
        center: (f32, f32),
        /// Arm length.
        radius: f32,
        /// Current angle in radians, kept in `[0, TAU)`.
        angle: f32,
        /// Radians per second.
        speed: f32,
        /// Arm color.
        color: Color,
    },
    /// Draws nothing; only groups children.
    #[default]
    Group,
}

impl Shape {
    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Rect { .. } => "rect",
            Self::Circle { .. } => "circle",
            Self::Line { .. } => "line",
            Self::Text { .. } => "text",
            Self::Spinner { .. } => "spinner",
            Self::Group => "group",
        }
    }

    /// Advances per-frame state.
    pub fn update(&mut self, dt: f32) {
        if let Self::Spinner { angle, speed, .. } = self {
            *angle = (*angle + *speed * dt).rem_euclid(TAU);
        }
    }

    /// Records this shape's draw commands. Children are not included.
    pub fn render(&self, out: &mut RenderList) {
        match self {
            Self::Rect { bounds, color } => out.push(RenderCommand::Rect {
                bounds: *bounds,
                color: *color,
            }),
            Self::Circle {
                center,
                radius,
                color,
            } => out.push(RenderCommand::Circle {
                x: center.0,
                y: center.1,
                radius: *radius,
                color: *color,
            }),
            Self::Line {
                from,
                to,
                width,
                color,
            } => out.push(RenderCommand::Line {
                from: *from,
                to: *to,
                color: *color,
                width: *width,
            }),
            Self::Text {
                text,
                position,
                font_size,
                color,
            } => out.push(RenderCommand::Text {
                text: text.clone(),
                x: position.0,
                y: position.1,
                color: *color,
                font_size: *font_size,
            }),
            Self::Spinner {
                center,
                radius,
                angle,
                color,
                ..
            } => {
                let (sin, cos) = angle.sin_cos();
                out.push(RenderCommand::Line {
                    from: *center,
                    to: (center.0 + radius * cos, center.1 + radius * sin),
                    color: *color,
                    width: 2.0,
                });
            }
            Self::Group => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_angle_wraps() {
        let mut spinner = Shape::Spinner {
            center: (0.0, 0.0),
            radius: 4.0,
            angle: 0.0,
            speed: TAU,
            color: Color::EMBER,
        };
        spinner.update(1.25);
        let Shape::Spinner { angle, .. } = spinner else {
            panic!("shape changed kind");
        };
        assert!((angle - TAU * 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_group_draws_nothing() {
        let mut out = RenderList::new();
        Shape::Group.render(&mut out);
        assert!(out.is_empty());
    }
}

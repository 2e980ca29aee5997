// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas.
//!
//! The spinner is stateless: its owner keeps the rotation angle and advances
//! it with [`advance`] on every animation tick.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path::Arc, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// Half a turn per second.
const TURNS_PER_SECOND: f32 = 0.5;

const STROKE_WIDTH: f32 = 4.0;

/// Ring with a rotating half-circle arc.
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl Spinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Returns `rotation` advanced by `elapsed`, wrapped to one turn.
#[must_use]
pub fn advance(rotation: f32, elapsed: Duration) -> f32 {
    (rotation + elapsed.as_secs_f32() * TURNS_PER_SECOND * TAU) % TAU
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color {
                    a: 0.25,
                    ..self.color
                }),
        );

        // Starts at twelve o'clock.
        let start = self.rotation - PI / 2.0;
        let arc = Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(start + PI),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_second_is_half_a_turn() {
        let rotation = advance(0.0, Duration::from_secs(1));
        assert!((rotation - PI).abs() < 1e-4);
    }

    #[test]
    fn rotation_wraps_after_a_full_turn() {
        let rotation = advance(3.0 * PI / 2.0, Duration::from_secs(1));
        assert!(rotation < TAU);
        assert!((rotation - PI / 2.0).abs() < 1e-4);
    }

    #[test]
    fn spinner_view_builds_element() {
        let _element: Element<'_, ()> = Spinner::new(Color::WHITE, 0.0).view();
    }
}

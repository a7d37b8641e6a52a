// SPDX-License-Identifier: MPL-2.0
//! Live canvas preview for a catalog entry.
//!
//! Each expanded card renders a small demo shape whose motion approximates
//! the entry's effect. The preview is driven by the app tick: the showcase
//! computes an eased progress fraction and hands it to this widget.

use crate::catalog::MotionKind;
use crate::ui::design_tokens::palette;
use iced::widget::canvas;
use iced::{mouse, Color, Point, Rectangle, Size, Theme, Vector};

/// Canvas program animating one demo shape.
#[derive(Debug, Clone, Copy)]
pub struct Preview {
    pub kind: MotionKind,
    /// Eased progress through the current cycle, `0.0..=1.0`.
    pub progress: f32,
}

impl Preview {
    #[must_use]
    pub fn new(kind: MotionKind, progress: f32) -> Self {
        Self {
            kind,
            progress: progress.clamp(0.0, 1.0),
        }
    }
}

impl<Message> canvas::Program<Message> for Preview {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let base = Size::new(bounds.width * 0.4, bounds.height * 0.4);
        let p = self.progress;

        // Ping-pong fraction for effects that go out and back.
        let swing = 1.0 - (2.0 * p - 1.0).abs();

        let accent = palette::PRIMARY_500;
        let text_color = theme.extended_palette().background.base.text;

        match self.kind {
            MotionKind::Fade => {
                fill_box(&mut frame, center, base, with_alpha(accent, 1.0 - 0.5 * swing));
            }
            MotionKind::Scale | MotionKind::Grow | MotionKind::FadeInScale => {
                let grow = match self.kind {
                    MotionKind::FadeInScale => 0.8 + 0.2 * p,
                    _ => 1.0 + 0.2 * swing,
                };
                let alpha = if self.kind == MotionKind::FadeInScale {
                    p
                } else {
                    1.0
                };
                let size = Size::new(base.width * grow, base.height * grow);
                fill_box(&mut frame, center, size, with_alpha(accent, alpha));
            }
            MotionKind::Pulse => {
                let grow = 1.0 + 0.1 * swing;
                let size = Size::new(base.width * grow, base.height * grow);
                fill_box(&mut frame, center, size, accent);
            }
            MotionKind::SlideLeft => {
                let offset = Point::new(center.x - 20.0 * swing, center.y);
                fill_box(&mut frame, offset, base, accent);
            }
            MotionKind::Shake => {
                // Alternating horizontal jitter.
                let phase = (p * 9.0).floor() as i32;
                let dx = if phase % 2 == 0 { -5.0 } else { 5.0 };
                let dx = if p >= 1.0 || p <= 0.0 { 0.0 } else { dx };
                let offset = Point::new(center.x + dx, center.y);
                fill_box(&mut frame, offset, base, accent);
            }
            MotionKind::Bounce => {
                let lift = 20.0 * swing;
                let offset = Point::new(center.x, center.y - lift);
                fill_box(&mut frame, offset, base, accent);
            }
            MotionKind::Rotate | MotionKind::Spin => {
                frame.translate(Vector::new(center.x, center.y));
                frame.rotate(p * std::f32::consts::TAU);
                fill_box(&mut frame, Point::ORIGIN, base, accent);
            }
            MotionKind::ColorShift | MotionKind::GradientText => {
                let mixed = mix(accent, palette::PRIMARY_800, swing);
                fill_box(&mut frame, center, base, mixed);
            }
            MotionKind::RevealUp => {
                let offset = Point::new(center.x, center.y + 30.0 * (1.0 - p));
                fill_box(&mut frame, offset, base, with_alpha(accent, p));
            }
            MotionKind::RevealLeft => {
                let offset = Point::new(center.x - 60.0 * (1.0 - p), center.y);
                fill_box(&mut frame, offset, base, with_alpha(accent, p));
            }
            MotionKind::RevealRight => {
                let offset = Point::new(center.x + 60.0 * (1.0 - p), center.y);
                fill_box(&mut frame, offset, base, with_alpha(accent, p));
            }
            MotionKind::Float => {
                let offset = Point::new(center.x, center.y - 10.0 * swing);
                fill_box(&mut frame, offset, base, accent);
            }
            MotionKind::Glow => {
                // Halo behind the shape stands in for the box shadow.
                let halo = Size::new(base.width * 1.4, base.height * 1.4);
                fill_box(&mut frame, center, halo, with_alpha(accent, 0.3 * swing));
                fill_box(&mut frame, center, base, accent);
            }
            MotionKind::Ripple => {
                fill_box(&mut frame, center, base, accent);
                let radius = (bounds.width / 2.0) * p;
                let circle = canvas::Path::circle(center, radius);
                frame.fill(&circle, with_alpha(Color::WHITE, 0.5 * (1.0 - p)));
            }
            MotionKind::Typewriter => {
                // Bar growing to full width, like text being typed.
                let width = base.width * 2.0 * p;
                let top_left = Point::new(center.x - base.width, center.y - 6.0);
                let path = canvas::Path::rectangle(top_left, Size::new(width, 12.0));
                frame.fill(&path, text_color);
            }
            MotionKind::LetterSpacing => {
                // Three segments drifting apart.
                let gap = 4.0 * swing;
                let seg = Size::new(base.width / 4.0, 12.0);
                for i in -1..=1 {
                    let x = center.x + (i as f32) * (seg.width + gap) - seg.width / 2.0;
                    let path =
                        canvas::Path::rectangle(Point::new(x, center.y - 6.0), seg);
                    frame.fill(&path, text_color);
                }
            }
            MotionKind::Blur => {
                // Layered translucent copies approximate the blur.
                let spread = 4.0 * swing;
                for offset in [-spread, 0.0, spread] {
                    let at = Point::new(center.x + offset, center.y);
                    fill_box(&mut frame, at, base, with_alpha(accent, 0.4));
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

fn fill_box(frame: &mut canvas::Frame, center: Point, size: Size, color: Color) {
    let top_left = Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0);
    let path = canvas::Path::rectangle(top_left, size);
    frame.fill(&path, color);
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: alpha.clamp(0.0, 1.0),
        ..color
    }
}

fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        let preview = Preview::new(MotionKind::Fade, 3.0);
        assert_eq!(preview.progress, 1.0);
        let preview = Preview::new(MotionKind::Fade, -1.0);
        assert_eq!(preview.progress, 0.0);
    }

    #[test]
    fn mix_interpolates_between_endpoints() {
        let mixed = mix(Color::BLACK, Color::WHITE, 0.5);
        assert!((mixed.r - 0.5).abs() < 1e-6);
        assert_eq!(mix(Color::BLACK, Color::WHITE, 0.0), Color::BLACK);
    }
}

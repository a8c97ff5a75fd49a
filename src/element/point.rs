use egui::Pos2;

use super::Element;
use crate::geometry::{Canvas, in_square};
use crate::renderer::Surface;

/// A dot on the canvas, known in both coordinate spaces.
///
/// Immutable once built; lines keep their own copies of their endpoints.
///
/// Coordinates are `f32` like the rest of egui. Integer positions convert
/// exactly in both directions while `|x| + width / 2` and `|y| + height / 2`
/// stay below 2^24; past that the nearest representable value is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    absolute: Pos2,
    draw: Pos2,
}

/// Text shown next to a hovered point
#[derive(Debug, Clone, PartialEq)]
pub struct PointInfo {
    pub absolute_label: String,
    pub draw_label: String,
}

impl Point {
    pub fn from_absolute(canvas: &Canvas, x: f32, y: f32) -> Self {
        let absolute = Pos2::new(x, y);
        Self {
            absolute,
            draw: canvas.to_draw(absolute),
        }
    }

    pub fn from_draw(canvas: &Canvas, x: f32, y: f32) -> Self {
        let draw = Pos2::new(x, y);
        Self {
            absolute: canvas.to_absolute(draw),
            draw,
        }
    }

    pub fn absolute(&self) -> Pos2 {
        self.absolute
    }

    pub fn draw_coord(&self) -> Pos2 {
        self.draw
    }

    /// Positional info if `cursor` (draw coordinates) falls in the square
    /// hit-box of half-width `radius` around the point.
    pub fn info_at(&self, cursor: Pos2, radius: f32) -> Option<PointInfo> {
        if !in_square(cursor, self.draw, radius) {
            return None;
        }

        Some(PointInfo {
            absolute_label: format!(" Abs x: {:.1}, y: {:.1}", self.absolute.x, self.absolute.y),
            draw_label: format!("Draw x: {:.0}, y: {:.0}", self.draw.x, self.draw.y),
        })
    }
}

impl Element for Point {
    fn element_type(&self) -> &'static str {
        "point"
    }

    fn draw(&self, surface: &Surface<'_>) {
        let config = surface.config();
        surface.circle(self.draw, config.dimensions.point_radius, config.palette.accent);
    }

    fn draw_info(&self, cursor: Pos2, surface: &Surface<'_>) {
        let config = surface.config();
        let radius = config.dimensions.point_radius;
        let Some(info) = self.info_at(cursor, radius) else {
            return;
        };

        let font = config.info_font();
        let color = config.palette.text;
        surface.text(
            Pos2::new(self.draw.x, self.draw.y - 3.0 * radius),
            &info.absolute_label,
            font.clone(),
            color,
        );
        surface.text(
            Pos2::new(self.draw.x, self.draw.y - 1.5 * radius),
            &info.draw_label,
            font,
            color,
        );
    }
}

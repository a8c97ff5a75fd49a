use egui::Pos2;

use super::{Element, Point};
use crate::error::GeometryError;
use crate::renderer::Surface;

/// A segment between exactly two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    points: [Point; 2],
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { points: [start, end] }
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[1]
    }
}

impl TryFrom<&[Point]> for Line {
    type Error = GeometryError;

    fn try_from(points: &[Point]) -> Result<Self, Self::Error> {
        match points {
            [start, end] => Ok(Self::new(*start, *end)),
            _ => Err(GeometryError::InvalidArity {
                found: points.len(),
            }),
        }
    }
}

impl Element for Line {
    fn element_type(&self) -> &'static str {
        "line"
    }

    fn draw(&self, surface: &Surface<'_>) {
        let config = surface.config();
        let [start, end] = &self.points;
        start.draw(surface);
        end.draw(surface);
        surface.segment(
            start.draw_coord(),
            end.draw_coord(),
            config.dimensions.line_thickness,
            config.palette.accent,
        );
    }

    fn draw_info(&self, cursor: Pos2, surface: &Surface<'_>) {
        for point in &self.points {
            point.draw_info(cursor, surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Canvas;

    fn points(n: usize) -> Vec<Point> {
        let canvas = Canvas::new(2000.0, 1200.0);
        (0..n)
            .map(|i| Point::from_absolute(&canvas, i as f32 * 10.0, 0.0))
            .collect()
    }

    #[test]
    fn test_two_points_make_a_line() {
        let pts = points(2);
        let line = Line::try_from(pts.as_slice()).unwrap();
        assert_eq!(line.start(), pts[0]);
        assert_eq!(line.end(), pts[1]);
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        for n in [0, 1, 3, 5] {
            let pts = points(n);
            assert_eq!(
                Line::try_from(pts.as_slice()),
                Err(GeometryError::InvalidArity { found: n })
            );
        }
    }

    #[test]
    fn test_error_message() {
        let err = Line::try_from(points(1).as_slice()).unwrap_err();
        assert_eq!(err.to_string(), "A line needs exactly 2 points, got 1");
    }
}

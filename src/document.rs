use crate::element::{Line, Point};

/// Everything the user has placed so far, in insertion order.
///
/// Append-only for the lifetime of the session.
#[derive(Debug, Default, Clone)]
pub struct Document {
    points: Vec<Point>,
    lines: Vec<Line>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty()
    }
}

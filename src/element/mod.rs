use egui::Pos2;

use crate::renderer::Surface;

mod line;
mod point;

pub use line::Line;
pub use point::{Point, PointInfo};

/// Common trait for everything the canvas can hold
pub trait Element {
    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Draw the element onto the surface
    fn draw(&self, surface: &Surface<'_>);

    /// Draw positional info for any part of the element under the cursor.
    /// Does nothing when the cursor is elsewhere.
    fn draw_info(&self, cursor: Pos2, surface: &Surface<'_>);
}

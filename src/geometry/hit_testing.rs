use egui::{Pos2, Rect, Vec2};

/// Axis-aligned square containment, boundaries inclusive.
pub fn in_square(pos: Pos2, center: Pos2, half_width: f32) -> bool {
    // Rect::contains is inclusive on all four edges
    Rect::from_center_size(center, Vec2::splat(half_width * 2.0)).contains(pos)
}

use egui::Pos2;

/// Fixed-size drawing surface and the transform between its two coordinate spaces.
///
/// * absolute: origin at the canvas center, y grows upward
/// * draw: origin at the top-left corner, y grows downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    width: f32,
    height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Center of the canvas in draw coordinates
    pub fn center(&self) -> Pos2 {
        Pos2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn to_draw(&self, absolute: Pos2) -> Pos2 {
        Pos2::new(self.width / 2.0 + absolute.x, self.height / 2.0 - absolute.y)
    }

    pub fn to_absolute(&self, draw: Pos2) -> Pos2 {
        Pos2::new(draw.x - self.width / 2.0, self.height / 2.0 - draw.y)
    }
}

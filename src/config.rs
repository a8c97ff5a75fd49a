use egui::{Color32, FontId};

use crate::geometry::Canvas;

/// Fixed colors used by every drawing routine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    /// Points, lines and the rubber-band preview
    pub accent: Color32,
    pub text: Color32,
    pub axis: Color32,
}

impl Palette {
    pub const CHAMPAGNE_PINK: Color32 = Color32::from_rgb(241, 221, 207);
    pub const LIGHT_SKY_BLUE: Color32 = Color32::from_rgb(135, 206, 250);
    pub const JET: Color32 = Color32::from_rgb(52, 52, 52);
    pub const DIM_GREY: Color32 = Color32::from_rgb(105, 105, 105);
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Self::CHAMPAGNE_PINK,
            accent: Self::LIGHT_SKY_BLUE,
            text: Self::JET,
            axis: Self::DIM_GREY,
        }
    }
}

/// Sizes in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Radius of a drawn point, also the half-width of its hover hit-box
    pub point_radius: f32,
    pub line_thickness: f32,
    pub axis_thickness: f32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            canvas_width: 2000.0,
            canvas_height: 1200.0,
            point_radius: 15.0,
            line_thickness: 10.0,
            axis_thickness: 3.0,
        }
    }
}

/// Application configuration, built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: String,
    pub palette: Palette,
    pub dimensions: Dimensions,
    pub mode_font_size: f32,
    pub info_font_size: f32,
    pub fps: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Graphic Solver".to_owned(),
            palette: Palette::default(),
            dimensions: Dimensions::default(),
            mode_font_size: 40.0,
            info_font_size: 20.0,
            fps: 60.0,
        }
    }
}

impl Config {
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.dimensions.canvas_width, self.dimensions.canvas_height)
    }

    pub fn mode_font(&self) -> FontId {
        FontId::monospace(self.mode_font_size)
    }

    pub fn info_font(&self) -> FontId {
        FontId::monospace(self.info_font_size)
    }

    /// Delay between two repaints at the configured frame rate
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f32(1.0 / self.fps.max(1.0))
    }

    /// Window options: fixed inner size matching the canvas, not resizable.
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size([self.dimensions.canvas_width, self.dimensions.canvas_height])
                .with_resizable(false),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas_matches_dimensions() {
        let config = Config::default();
        let canvas = config.canvas();
        assert_eq!(canvas.width(), 2000.0);
        assert_eq!(canvas.height(), 1200.0);
    }

    #[test]
    fn test_frame_interval_at_sixty_fps() {
        let config = Config::default();
        let interval = config.frame_interval();
        assert!((interval.as_secs_f32() - 1.0 / 60.0).abs() < 1e-6);
    }
}

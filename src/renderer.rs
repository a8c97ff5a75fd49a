use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Vec2};

use crate::config::Config;
use crate::document::Document;
use crate::element::Element;
use crate::state::EditorState;

/// Thin drawing surface over an egui painter that works in draw coordinates.
///
/// `origin` is the screen position of the canvas' top-left corner, so a draw
/// coordinate `p` lands at `origin + p` on screen.
pub struct Surface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    config: &'a Config,
}

impl<'a> Surface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2, config: &'a Config) -> Self {
        Self { painter, origin, config }
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    pub fn to_screen(&self, draw: Pos2) -> Pos2 {
        self.origin + draw.to_vec2()
    }

    /// Fill the whole canvas with a single color
    pub fn fill(&self, color: Color32) {
        let dims = &self.config.dimensions;
        let rect = Rect::from_min_size(
            self.origin,
            Vec2::new(dims.canvas_width, dims.canvas_height),
        );
        self.painter.rect_filled(rect, 0.0, color);
    }

    pub fn circle(&self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(self.to_screen(center), radius, color);
    }

    pub fn segment(&self, from: Pos2, to: Pos2, thickness: f32, color: Color32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            (thickness, color),
        );
    }

    /// Draw text centered on `center`
    pub fn text(&self, center: Pos2, text: &str, font: FontId, color: Color32) {
        self.painter
            .text(self.to_screen(center), Align2::CENTER_CENTER, text, font, color);
    }
}

/// Immediate-mode renderer: redraws the whole scene every frame.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: Config,
}

impl Renderer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     origin (egui::Pos2): Screen position of the canvas' top-left corner
    ///     document (Document): Points and lines added so far
    ///     state (EditorState): Current mode and pending endpoint
    ///     cursor (Option<Pos2>): Live cursor position in draw coordinates
    pub fn render(
        &self,
        painter: &Painter,
        origin: Pos2,
        document: &Document,
        state: &EditorState,
        cursor: Option<Pos2>,
    ) {
        let surface = Surface::new(painter, origin, &self.config);
        let palette = &self.config.palette;

        surface.fill(palette.background);
        self.draw_axes(&surface);

        if let (Some(pending), Some(cursor)) = (state.pending(), cursor) {
            surface.segment(
                pending.draw_coord(),
                cursor,
                self.config.dimensions.axis_thickness,
                palette.accent,
            );
        }

        for point in document.points() {
            point.draw(&surface);
            if let Some(cursor) = cursor {
                point.draw_info(cursor, &surface);
            }
        }

        for line in document.lines() {
            line.draw(&surface);
            if let Some(cursor) = cursor {
                line.draw_info(cursor, &surface);
            }
        }

        self.draw_mode_label(&surface, state);
    }

    /// Two perpendicular lines through the canvas center
    fn draw_axes(&self, surface: &Surface<'_>) {
        let dims = &self.config.dimensions;
        let color = self.config.palette.axis;
        let center = self.config.canvas().center();

        surface.segment(
            Pos2::new(center.x, 0.0),
            Pos2::new(center.x, dims.canvas_height),
            dims.axis_thickness,
            color,
        );
        surface.segment(
            Pos2::new(0.0, center.y),
            Pos2::new(dims.canvas_width, center.y),
            dims.axis_thickness,
            color,
        );
    }

    fn draw_mode_label(&self, surface: &Surface<'_>, state: &EditorState) {
        let dims = &self.config.dimensions;
        let anchor = Pos2::new(dims.canvas_width - 250.0, dims.canvas_height - 50.0);
        surface.text(
            anchor,
            state.mode().label(),
            self.config.mode_font(),
            self.config.palette.text,
        );
    }
}

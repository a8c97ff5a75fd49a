use egui::PointerButton;

use crate::document::Document;
use crate::element::{Element, Line, Point};
use crate::geometry::Canvas;
use crate::input::InputEvent;

/// What a primary click currently means
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Each click adds a standalone point
    #[default]
    Point,
    /// Clicks are paired into lines
    Line,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Point => Self::Line,
            Self::Line => Self::Point,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Point => "Point Addition Mode",
            Self::Line => "Line Addition Mode",
        }
    }
}

/// Interaction state machine over the mode and the pending line endpoint.
///
/// ```text
///   secondary: toggle mode, drop pending
///
///   Point ── primary ──► append Point
///   Line, no pending ── primary ──► pending = P
///   Line, pending P ── primary ──► append Line(P, Q), pending = none
/// ```
#[derive(Debug, Clone)]
pub struct EditorState {
    mode: Mode,
    pending: Option<Point>,
    running: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            pending: None,
            running: true,
        }
    }
}

impl EditorState {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// First endpoint of a line in progress
    pub fn pending(&self) -> Option<&Point> {
        self.pending.as_ref()
    }

    /// False once the window was asked to close
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.pending = None;
        log::info!("Switched to {}", self.mode.label());
    }

    fn hold_pending(&mut self, point: Point) {
        log::debug!("Holding line endpoint at {:?}", point.absolute());
        self.pending = Some(point);
    }

    /// Interpret a primary click at `pos` (draw coordinates) according to the mode
    pub fn click(&mut self, pos: egui::Pos2, canvas: &Canvas, document: &mut Document) {
        let point = Point::from_draw(canvas, pos.x, pos.y);

        match (self.mode, self.pending.take()) {
            (Mode::Point, _) => {
                log::info!("Added {} at {:?}", point.element_type(), point.absolute());
                document.add_point(point);
            }
            (Mode::Line, None) => self.hold_pending(point),
            (Mode::Line, Some(start)) => {
                let line = Line::new(start, point);
                log::info!(
                    "Added {} from {:?} to {:?}",
                    line.element_type(),
                    line.start().absolute(),
                    line.end().absolute()
                );
                document.add_line(line);
            }
        }
    }

    /// Apply one input event to the state and the document
    pub fn handle_event(&mut self, event: &InputEvent, canvas: &Canvas, document: &mut Document) {
        match event {
            InputEvent::PointerDown { position, button } => match button {
                PointerButton::Secondary => self.toggle_mode(),
                PointerButton::Primary => self.click(*position, canvas, document),
                _ => {}
            },
            InputEvent::CloseRequested => {
                log::info!("Close requested, stopping");
                self.running = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    fn canvas() -> Canvas {
        Canvas::new(2000.0, 1200.0)
    }

    #[test]
    fn test_starts_in_point_mode() {
        let state = EditorState::default();
        assert_eq!(state.mode(), Mode::Point);
        assert!(state.pending().is_none());
        assert!(state.is_running());
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::Point.label(), "Point Addition Mode");
        assert_eq!(Mode::Line.label(), "Line Addition Mode");
    }

    #[test]
    fn test_point_mode_never_holds_pending() {
        let mut state = EditorState::default();
        let mut document = Document::new();
        state.click(Pos2::new(10.0, 10.0), &canvas(), &mut document);
        state.click(Pos2::new(20.0, 20.0), &canvas(), &mut document);
        assert!(state.pending().is_none());
        assert_eq!(document.points().len(), 2);
        assert!(document.lines().is_empty());
    }

    #[test]
    fn test_middle_button_is_ignored() {
        let mut state = EditorState::default();
        let mut document = Document::new();
        let event = InputEvent::PointerDown {
            position: Pos2::new(10.0, 10.0),
            button: PointerButton::Middle,
        };
        state.handle_event(&event, &canvas(), &mut document);
        assert_eq!(state.mode(), Mode::Point);
        assert!(document.is_empty());
    }

    #[test]
    fn test_pending_only_in_line_mode() {
        let mut state = EditorState::default();
        let mut document = Document::new();
        state.click(Pos2::new(10.0, 10.0), &canvas(), &mut document);
        assert!(state.pending().is_none());

        state.toggle_mode();
        state.click(Pos2::new(10.0, 10.0), &canvas(), &mut document);
        assert_eq!(state.mode(), Mode::Line);
        assert_eq!(state.pending().map(|p| p.draw_coord()), Some(Pos2::new(10.0, 10.0)));
    }

    #[test]
    fn test_close_stops_running() {
        let mut state = EditorState::default();
        let mut document = Document::new();
        state.handle_event(&InputEvent::CloseRequested, &canvas(), &mut document);
        assert!(!state.is_running());
    }
}

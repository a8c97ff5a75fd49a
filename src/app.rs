use egui::{Pos2, Rect};

use crate::config::Config;
use crate::document::Document;
use crate::geometry::Canvas;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::state::EditorState;

/// Application context: created once at startup, owns everything for the session.
#[derive(Debug)]
pub struct SolverApp {
    canvas: Canvas,
    renderer: Renderer,
    input: InputHandler,
    state: EditorState,
    document: Document,
    /// Cursor in draw coordinates as of the last processed frame
    cursor: Option<Pos2>,
}

impl Default for SolverApp {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl SolverApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Self {
        let canvas = config.canvas();
        let canvas_rect = Rect::from_min_size(
            Pos2::ZERO,
            egui::vec2(canvas.width(), canvas.height()),
        );

        Self {
            canvas,
            renderer: Renderer::new(config),
            input: InputHandler::new(canvas_rect),
            state: EditorState::default(),
            document: Document::new(),
            cursor: None,
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn cursor(&self) -> Option<Pos2> {
        self.cursor
    }

    /// Poll this frame's input and apply every event in arrival order
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.input.set_canvas_rect(canvas_rect);
        let frame = self.input.process_input(ctx);
        self.cursor = frame.cursor;

        for event in &frame.events {
            if !self.state.is_running() {
                break;
            }
            self.state.handle_event(event, &self.canvas, &mut self.document);
        }
    }
}

impl eframe::App for SolverApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::central_panel(self, ctx);

        // Keep redrawing at a fixed rate so the rubber band follows the cursor
        ctx.request_repaint_after(self.renderer.config().frame_interval());
    }
}

use egui::{Context, PointerButton, Pos2, Rect};

/// Input the canvas reacts to, in canvas draw coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        position: Pos2,
        button: PointerButton,
    },
    /// The window's close button was hit
    CloseRequested,
}

/// Everything gathered from egui for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Events in arrival order
    pub events: Vec<InputEvent>,
    /// Live cursor position in draw coordinates
    pub cursor: Option<Pos2>,
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self { canvas_rect }
    }

    /// Update the screen rectangle the canvas occupies
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Screen position to draw coordinates, snapped to whole pixels
    fn to_draw(&self, screen: Pos2) -> Pos2 {
        (screen - self.canvas_rect.min).to_pos2().round()
    }

    /// Drain this frame's button presses and close request from egui
    pub fn process_input(&mut self, ctx: &Context) -> FrameInput {
        let mut frame = FrameInput::default();

        ctx.input(|input| {
            frame.cursor = input.pointer.hover_pos().map(|pos| self.to_draw(pos));

            for event in &input.events {
                if let egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } = event
                {
                    frame.events.push(InputEvent::PointerDown {
                        position: self.to_draw(*pos),
                        button: *button,
                    });
                }
            }

            if input.viewport().close_requested() {
                frame.events.push(InputEvent::CloseRequested);
            }
        });

        if !frame.events.is_empty() {
            log::debug!("Processing {} input events", frame.events.len());
        }

        frame
    }
}

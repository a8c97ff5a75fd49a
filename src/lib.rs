#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;

pub use app::SolverApp;
pub use config::Config;
pub use document::Document;
pub use element::{Element, Line, Point};
pub use error::GeometryError;
pub use geometry::Canvas;
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use state::{EditorState, Mode};

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use graphic_solver::{Config, SolverApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = Config::default();
    let options = config.native_options();
    let title = config.title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(SolverApp::new(cc, config)))),
    )
}

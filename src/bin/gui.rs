// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::ViewportBuilder;
use shot_map::config::consts::{LOG_FILE, STORE_DIR};
use shot_map::config::state::GuiState;
use shot_map::{gui, log};

fn main() {
    let _log_guard = log::init_file(Path::new(STORE_DIR), LOG_FILE, "shot_map=info");

    let state = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([state.window_w as f32, state.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

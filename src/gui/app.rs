// src/gui/app.rs
use std::{
    error::Error,
    path::Path,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    core::HttpTransport,
    data::SessionSummary,
    params::Request,
    runner,
};

use super::progress::GuiProgress;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Player Shot Map",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // status line (progress writes here)
    pub status: Arc<Mutex<String>>,

    // last successful map
    pub summary: Option<SessionSummary>,
    pub texture: Option<egui::TextureHandle>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: font={}", state.options.render.font_path.display());
        Self {
            state,
            status: Arc::new(Mutex::new(s!("Enter the player's name and season to generate the shot map."))),
            summary: None,
            texture: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Validate inputs, run the pipeline, load the PNG for display.
    pub fn generate(&mut self, ctx: &egui::Context) {
        let request = match Request::parse(&self.state.gui.player_text, &self.state.gui.season_text) {
            Ok(r) => r,
            Err(e) => {
                self.status(format!("Error: {e}"));
                return;
            }
        };
        logf!("Generate: player={:?} season={}", request.player.as_ref(), request.season);

        let transport = match HttpTransport::new(&self.state.options.fetch) {
            Ok(t) => t,
            Err(e) => {
                self.status(format!("Error: {e}"));
                return;
            }
        };

        let mut prog = GuiProgress::new(self.status.clone());

        // → This is where the fetch + render happens ←
        match runner::generate(&request, &self.state.options, &transport, Some(&mut prog)) {
            Ok(map) => match load_texture(ctx, &map.path) {
                Ok(tex) => {
                    self.texture = Some(tex);
                    self.summary = Some(map.summary);
                    self.status(format!("Saved {}", map.path.display()));
                }
                Err(e) => {
                    loge!("GUI: could not display {}: {}", map.path.display(), e);
                    self.status(format!("Saved {} but could not display it: {e}", map.path.display()));
                }
            },
            Err(e) => {
                self.texture = None;
                self.summary = None;
                self.status(format!("Error: {e}"));
            }
        }
    }
}

fn load_texture(ctx: &egui::Context, path: &Path) -> Result<egui::TextureHandle, image::ImageError> {
    let rgba = image::open(path)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    Ok(ctx.load_texture("shot_map", color, egui::TextureOptions::LINEAR))
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("inputs").show(ctx, |ui| {
            ui.heading("Player Shot Map");
            ui.label("Enter the player's name and season to generate the shot map.");

            let gui = &mut self.state.gui;
            ui.horizontal(|ui| {
                ui.label("Player:");
                ui.add(egui::TextEdit::singleline(&mut gui.player_text).hint_text("Erling Haaland"));
                ui.label("Season:");
                ui.add(
                    egui::TextEdit::singleline(&mut gui.season_text)
                        .hint_text("2022")
                        .desired_width(60.0),
                );
            });

            if ui.button("Generate Shot Map").clicked() {
                self.generate(ctx);
            }
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(s) = &self.summary {
                ui.label(format!(
                    "Shots {}   Goals {}   xG {:.2}   xG/Shot {:.2}",
                    s.total_shots, s.total_goals, s.total_xg, s.xg_per_shot
                ));
            }
            if let Some(tex) = &self.texture {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let sized = egui::load::SizedTexture::from_handle(tex);
                    ui.add(egui::Image::from_texture(sized).max_width(ui.available_width()));
                });
            }
        });
    }
}

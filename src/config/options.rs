// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::color::Rgb;
use super::consts::*;
use crate::error::{Result, ShotMapError};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub render: RenderConfig,
    pub output: OutputOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub base_url: String,
    pub script_index: usize,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            script_index: SHOTS_SCRIPT_INDEX,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl FetchOptions {
    pub fn lookup_url(&self, encoded_name: &str) -> String {
        join!(self.base(), LOOKUP_PATH, encoded_name)
    }

    pub fn player_url(&self, player_id: &str) -> String {
        join!(self.base(), PLAYER_PATH, player_id)
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Everything the renderer needs, passed in explicitly. Immutable for the
/// duration of a render.
///
/// Deserializable so a JSON style file can override any subset of fields:
/// `{"goal": "#e63946", "dpi": 150}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub background: Rgb,
    pub goal: Rgb,
    pub ink: Rgb,
    pub font_path: PathBuf,
    pub dpi: u32,
    pub width_in: f64,
    pub height_in: f64,
    pub marker_area_scale: f64,
    pub marker_alpha: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            goal: GOAL,
            ink: INK,
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            dpi: DEFAULT_DPI,
            width_in: FIGURE_WIDTH_IN,
            height_in: FIGURE_HEIGHT_IN,
            marker_area_scale: MARKER_AREA_SCALE,
            marker_alpha: MARKER_ALPHA,
        }
    }
}

impl RenderConfig {
    pub fn from_style_json(text: &str) -> Result<Self> {
        let cfg: RenderConfig = serde_json::from_str(text).map_err(ShotMapError::Style)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_style_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ShotMapError::MissingResource {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_style_json(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 || self.dpi > 1200 {
            return Err(ShotMapError::InvalidInput(format!(
                "dpi must be between 1 and 1200, got {}",
                self.dpi
            )));
        }
        if !(self.width_in > 0.0 && self.height_in > 0.0) {
            return Err(ShotMapError::InvalidInput(s!("figure size must be positive")));
        }
        let dpi = self.dpi as f64;
        let max = MAX_CANVAS_SIDE_PX as f64;
        if !(self.width_in * dpi <= max && self.height_in * dpi <= max) {
            return Err(ShotMapError::InvalidInput(format!(
                "figure of {}x{} in at {} dpi exceeds {} px per side",
                self.width_in, self.height_in, self.dpi, MAX_CANVAS_SIDE_PX
            )));
        }
        if !(0.0..=1.0).contains(&self.marker_alpha) {
            return Err(ShotMapError::InvalidInput(s!("marker_alpha must be within 0..=1")));
        }
        Ok(())
    }

    /// Pixel size of the output image.
    pub fn canvas_size(&self) -> (u32, u32) {
        let px = |inches: f64| ((inches * self.dpi as f64).round() as u32).max(1);
        (px(self.width_in), px(self.height_in))
    }

    /// Typographic points → pixels at the configured dpi.
    pub fn pt(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub dir: PathBuf,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl OutputOptions {
    pub fn path_for(&self, player: &str, season: &str) -> PathBuf {
        self.dir.join(crate::file::output_file_name(player, season))
    }
}

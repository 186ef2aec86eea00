// src/render/mod.rs
//! Shots → picture.
//!
//! `scene` decides *what* goes where (pure), `surface` decides *how* it gets
//! onto pixels (plotters). `draw_map` glues the two and hands back encoded
//! PNG bytes; writing them anywhere is the caller's business.

pub mod layout;
pub mod pitch;
pub mod scene;
pub mod surface;

pub use scene::{Layer, Primitive, Scene, compose};
pub use surface::{BitmapSurface, Surface, paint, rasterize};

use crate::config::RenderConfig;
use crate::data::{SessionSummary, ShotRecord};
use crate::error::{Result, ShotMapError};
use crate::params::Season;

pub fn draw_map(
    records: &[ShotRecord],
    player: &str,
    season: &Season,
    cfg: &RenderConfig,
) -> Result<(SessionSummary, Vec<u8>)> {
    cfg.validate()?;
    let summary = SessionSummary::compute(records).ok_or_else(|| ShotMapError::EmptyResult {
        season: s!(season.as_str()),
        available: Vec::new(),
    })?;
    let scene = compose(records, &summary, player, season, cfg);
    logd!(
        "Render: {}x{} px, {} primitives",
        scene.width,
        scene.height,
        scene.items.len()
    );
    let png = rasterize(&scene, &cfg.font_path)?;
    Ok((summary, png))
}

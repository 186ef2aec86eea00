// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::{AppOptions, FetchOptions, OutputOptions, RenderConfig},
    core::Transport,
    data::{SessionSummary, ShotRecord},
    error::{Result, ShotMapError},
    file,
    params::{Request, Season},
    progress::Progress,
    render,
    specs::{lookup, shots},
};

/// Everything one successful run produced.
#[derive(Clone, Debug)]
pub struct ShotMap {
    pub player: String,
    pub player_id: String,
    pub season: Season,
    pub records: Vec<ShotRecord>,
    pub summary: SessionSummary,
    pub path: PathBuf,
}

/// Shots for one player id and season.
///
/// An empty season is reported as `EmptyResult` together with the seasons the
/// page does have.
pub fn fetch(
    transport: &dyn Transport,
    options: &FetchOptions,
    player_id: &str,
    season: &Season,
) -> Result<Vec<ShotRecord>> {
    let bundle = shots::fetch(transport, options, player_id, season.as_str())?;
    if bundle.records.is_empty() {
        return Err(ShotMapError::EmptyResult {
            season: s!(season.as_str()),
            available: bundle.seasons,
        });
    }
    Ok(bundle.records)
}

/// Draw `records` and write the PNG. Only a fully encoded image reaches disk.
pub fn render(
    records: &[ShotRecord],
    player: &str,
    season: &Season,
    config: &RenderConfig,
    output: &OutputOptions,
) -> Result<(SessionSummary, PathBuf)> {
    let (summary, png) = render::draw_map(records, player, season, config)?;
    let path = file::write_output(&output.path_for(player, season.as_str()), &png)?;
    logf!("Render: wrote {} ({} bytes)", path.display(), png.len());
    Ok((summary, path))
}

/// Summary only, no drawing and no font needed.
pub fn summarize(records: &[ShotRecord], season: &Season) -> Result<SessionSummary> {
    SessionSummary::compute(records).ok_or_else(|| ShotMapError::EmptyResult {
        season: s!(season.as_str()),
        available: Vec::new(),
    })
}

/// Top-level pipeline: name lookup → shots → image.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn generate(
    request: &Request,
    options: &AppOptions,
    transport: &dyn Transport,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ShotMap> {
    let result = run_steps(request, options, transport, &mut progress);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    match &result {
        Ok(map) => logf!("Run: OK {} {} → {}", map.player, map.season, map.path.display()),
        Err(e) => loge!("Run: {} {} failed: {}", request.player.as_ref(), request.season, e),
    }
    result
}

fn run_steps(
    request: &Request,
    options: &AppOptions,
    transport: &dyn Transport,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<ShotMap> {
    let name = request.player.as_ref();
    let season = &request.season;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(3);
        p.log(&format!("Looking up {name}…"));
    }
    let hit = lookup::find_player(transport, &options.fetch, name)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("lookup");
        p.log(&format!("Fetching shots for player {}…", hit.id));
    }

    let records = fetch(transport, &options.fetch, &hit.id, season)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("fetch");
        p.log(&format!("Drawing {} shots…", records.len()));
    }

    // The page's own spelling wins over whatever was typed
    let player = records
        .first()
        .map(|r| r.player.clone())
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| s!(name));

    let (summary, path) = render(&records, &player, season, &options.render, &options.output)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("render");
    }

    Ok(ShotMap {
        player,
        player_id: hit.id,
        season: season.clone(),
        records,
        summary,
        path,
    })
}

// src/specs/shots.rs
//! Scraping *spec* for a player's shots.
//!
//! Purpose:
//! - Fetch `/player/{id}` and pull the `shotsData` payload out of the page.
//!   The page ships it as `JSON.parse('\x5B\x7B...')` inside a `<script>`.
//! - Decode every shot, keep the ones for the requested season.
//!
//! The brittle part (which script, which quotes) sits behind
//! [`PayloadExtractor`] so a layout change touches one impl.

use serde::{Deserialize, Deserializer};

use crate::config::FetchOptions;
use crate::config::consts::{PAYLOAD_CLOSE, PAYLOAD_OPEN};
use crate::core::{Transport, html, sanitize};
use crate::data::{ShotRecord, ShotResult, seasons_present};
use crate::error::{Result, ShotMapError};

/// Finds the escaped JSON payload inside a player page.
pub trait PayloadExtractor {
    fn extract(&self, page: &str) -> Result<String>;
}

/// The `<script>` at a fixed position, sliced between two markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptSlice {
    pub index: usize,
    pub open: String,
    pub close: String,
}

impl ScriptSlice {
    pub fn at(index: usize) -> Self {
        Self { index, open: s!(PAYLOAD_OPEN), close: s!(PAYLOAD_CLOSE) }
    }
}

impl From<&FetchOptions> for ScriptSlice {
    fn from(options: &FetchOptions) -> Self {
        Self::at(options.script_index)
    }
}

impl PayloadExtractor for ScriptSlice {
    fn extract(&self, page: &str) -> Result<String> {
        let script = html::nth_script_text(page, self.index)
            .ok_or_else(|| ShotMapError::parse(format!("no <script> at index {}", self.index)))?;
        let raw = html::slice_between(&script, &self.open, &self.close).ok_or_else(|| {
            ShotMapError::parse(format!(
                "script {} lacks the {} … {} payload markers",
                self.index, self.open, self.close
            ))
        })?;
        sanitize::unescape_js(raw).map_err(|e| ShotMapError::parse(format!("payload escape: {e}")))
    }
}

/// Shots for one season plus every season the page knows about.
#[derive(Clone, Debug, PartialEq)]
pub struct ShotsBundle {
    pub records: Vec<ShotRecord>,
    pub seasons: Vec<String>,
}

/// Understat ships every field as a string; some mirrors use numbers.
pub(crate) fn de_text<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        S(String),
        N(serde_json::Number),
        Null(()),
    }
    Ok(match Text::deserialize(d)? {
        Text::S(s) => s,
        Text::N(n) => n.to_string(),
        Text::Null(()) => s!(),
    })
}

#[derive(Debug, Deserialize)]
struct RawShot {
    #[serde(rename = "X", deserialize_with = "de_text")]
    x: String,
    #[serde(rename = "Y", deserialize_with = "de_text")]
    y: String,
    #[serde(rename = "xG", deserialize_with = "de_text")]
    xg: String,
    #[serde(deserialize_with = "de_text")]
    result: String,
    #[serde(deserialize_with = "de_text")]
    season: String,
    #[serde(default, deserialize_with = "de_text")]
    player: String,
    #[serde(default, deserialize_with = "de_text")]
    minute: String,
    #[serde(default, deserialize_with = "de_text")]
    situation: String,
    #[serde(default, rename = "shotType", deserialize_with = "de_text")]
    shot_type: String,
    #[serde(default, deserialize_with = "de_text")]
    match_id: String,
    #[serde(default, deserialize_with = "de_text")]
    h_team: String,
    #[serde(default, deserialize_with = "de_text")]
    a_team: String,
    #[serde(default, deserialize_with = "de_text")]
    date: String,
}

fn coerce(field: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ShotMapError::parse(format!("field {field} is not a number: \"{value}\"")))
}

impl TryFrom<RawShot> for ShotRecord {
    type Error = ShotMapError;

    fn try_from(raw: RawShot) -> Result<Self> {
        Ok(Self {
            x: coerce("X", &raw.x)?,
            y: coerce("Y", &raw.y)?,
            xg: coerce("xG", &raw.xg)?,
            result: ShotResult::from_label(&raw.result),
            season: raw.season,
            player: raw.player,
            minute: raw.minute.trim().parse().unwrap_or(0),
            situation: raw.situation,
            shot_type: raw.shot_type,
            match_id: raw.match_id,
            home_team: raw.h_team,
            away_team: raw.a_team,
            date: raw.date,
        })
    }
}

/// Decode the unescaped payload and keep one season, in page order.
/// No match is an empty `records`, not an error.
pub fn parse_payload(json: &str, season: &str) -> Result<ShotsBundle> {
    let raw: Vec<RawShot> = serde_json::from_str(json)
        .map_err(|e| ShotMapError::parse(format!("shots payload is not the expected JSON: {e}")))?;

    let seasons = seasons_present(raw.iter().map(|r| r.season.as_str()));
    let records = raw
        .into_iter()
        .filter(|r| r.season == season)
        .map(ShotRecord::try_from)
        .collect::<Result<Vec<_>>>()?;

    Ok(ShotsBundle { records, seasons })
}

/// Extract + decode + filter an already-fetched page.
pub fn parse_page(extractor: &dyn PayloadExtractor, page: &str, season: &str) -> Result<ShotsBundle> {
    let json = extractor.extract(page)?;
    parse_payload(&json, season)
}

pub fn fetch(
    transport: &dyn Transport,
    options: &FetchOptions,
    player_id: &str,
    season: &str,
) -> Result<ShotsBundle> {
    let url = options.player_url(player_id);
    let page = transport.get_text(&url, &[])?;
    let bundle = parse_page(&ScriptSlice::from(options), &page, season)?;
    logf!(
        "Shots: player={} season={} kept={} seasons={:?}",
        player_id,
        season,
        bundle.records.len(),
        bundle.seasons
    );
    Ok(bundle)
}

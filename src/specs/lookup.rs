// src/specs/lookup.rs
//! Player search endpoint: `GET /main/getPlayersName/{name}`.
//!
//! Returns `{"success": true, "response": {"players": [{"id": "8260", ...}]}}`.
//! The first hit wins, same as the site's own search box.

use serde::Deserialize;

use crate::config::FetchOptions;
use crate::config::consts::LOOKUP_USER_AGENT;
use crate::core::{Transport, sanitize::encode_path_segment};
use crate::error::{Result, ShotMapError};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default = "default_success")]
    success: bool,
    response: Option<SearchPayload>,
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    players: Vec<PlayerHit>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PlayerHit {
    #[serde(deserialize_with = "super::shots::de_text")]
    pub id: String,
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub team: String,
}

fn default_success() -> bool {
    true
}

/// Resolve `name` to the first matching player.
///
/// Transport errors, undecodable bodies and empty hit lists all collapse into
/// `LookupFailure`: from the caller's side the player simply was not found.
pub fn find_player(transport: &dyn Transport, options: &FetchOptions, name: &str) -> Result<PlayerHit> {
    let url = options.lookup_url(&encode_path_segment(name.trim()));
    let not_found = || ShotMapError::LookupFailure { name: s!(name) };

    let body = transport
        .get_text(&url, &[("Accept", "*/*"), ("User-Agent", LOOKUP_USER_AGENT)])
        .map_err(|e| {
            logw!("Lookup: request for \"{}\" failed: {}", name, e);
            not_found()
        })?;

    first_hit(&body).ok_or_else(|| {
        logw!("Lookup: no player matches \"{}\"", name);
        not_found()
    })
}

fn first_hit(body: &str) -> Option<PlayerHit> {
    let parsed: SearchResponse = match serde_json::from_str(body) {
        Ok(p) => p,
        Err(e) => {
            logd!("Lookup: undecodable body: {}", e);
            return None;
        }
    };
    if !parsed.success {
        return None;
    }
    parsed.response?.players.into_iter().next()
}

// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ShotMapError> = std::result::Result<T, E>;

/// Everything that can abort a shot map run.
///
/// `EmptyResult` is not a `ParseFailure`: the page was
/// read fine, the player simply has no shots in that season.
#[derive(Debug, Error)]
pub enum ShotMapError {
    #[error("Could not find a player matching \"{name}\"")]
    LookupFailure { name: String },

    #[error("Unexpected page structure: {0}")]
    ParseFailure(String),

    #[error("No shots found for season {season}{}", available_hint(.available))]
    EmptyResult {
        season: String,
        available: Vec<String>,
    },

    #[error("Missing resource {}: {reason}", .path.display())]
    MissingResource { path: PathBuf, reason: String },

    #[error("{0}")]
    InvalidInput(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Drawing failed: {0}")]
    Render(String),

    #[error("Invalid style file: {0}")]
    Style(serde_json::Error),
}

impl ShotMapError {
    pub fn parse(msg: impl Into<String>) -> Self {
        ShotMapError::ParseFailure(msg.into())
    }
}

fn available_hint(available: &[String]) -> String {
    if available.is_empty() {
        s!()
    } else {
        join!(" (available: ", &available.join(", "), ")")
    }
}

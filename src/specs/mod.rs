// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge about understat lives here: which endpoint to hit,
//! where the ground truth sits in the response, and how to turn it into
//! typed records.
//!
//! ## What lives here
//! - `lookup`: free-text player name → understat player id (JSON endpoint).
//! - `shots`: player page → embedded shots payload → `Vec<ShotRecord>` for
//!   one season.
//!
//! ## What does **not** live here
//! - Statistics and drawing (`data`, `render`).
//! - Choosing output paths or writing files (`file`, `runner`).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → runner::generate → specs::lookup::find_player
//!                              → specs::shots::fetch
//!                              → runner::render
//! ```
//!
//! ## Conventions
//! - Network goes through `core::net::Transport` so every spec can be tested
//!   offline against captured or synthetic pages.
//! - Structural surprises are `ParseFailure`; a season with no shots is *not*
//!   an error at this layer.
pub mod lookup;
pub mod shots;

// src/config/consts.rs
use super::color::Rgb;

// Net config
pub const BASE_URL: &str = "https://understat.com";
pub const LOOKUP_PATH: &str = "/main/getPlayersName/";
pub const PLAYER_PATH: &str = "/player/";
pub const LOOKUP_USER_AGENT: &str = "Player Name ID";
pub const USER_AGENT: &str = concat!("shot_map/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Extraction: shots live in the 4th <script> as JSON.parse('...')
pub const SHOTS_SCRIPT_INDEX: usize = 3;
pub const PAYLOAD_OPEN: &str = "('";
pub const PAYLOAD_CLOSE: &str = "')";

// Render
pub const BACKGROUND: Rgb = Rgb(0x0f, 0x11, 0x16);
pub const GOAL: Rgb = Rgb(0x3d, 0x7e, 0xd9);
pub const INK: Rgb = Rgb::WHITE;
pub const DEFAULT_FONT_PATH: &str = "assets/DejaVuSans.ttf";
pub const DEFAULT_DPI: u32 = 300;
pub const FIGURE_WIDTH_IN: f64 = 8.0;
pub const FIGURE_HEIGHT_IN: f64 = 8.5;
pub const MAX_CANVAS_SIDE_PX: u32 = 12_000;
pub const MARKER_AREA_SCALE: f64 = 300.0; // pt² at xG = 1.0
pub const MARKER_ALPHA: f64 = 0.7;
pub const EDGE_WIDTH_PT: f64 = 0.8;
pub const PITCH_LINE_WIDTH_PT: f64 = 0.75;

// Distance label: opta x (0..100) → yards from goal
pub const PITCH_LENGTH_YARDS: f64 = 120.0;
pub const YARDS_PER_UNIT: f64 = 1.2;

// Output
pub const DEFAULT_OUT_DIR: &str = ".";
pub const OUTPUT_EXT: &str = "png";

// Local log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

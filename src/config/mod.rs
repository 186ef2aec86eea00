// src/config/mod.rs
pub mod color;
pub mod consts;
pub mod options;
pub mod state;

pub use color::Rgb;
pub use options::{AppOptions, FetchOptions, OutputOptions, RenderConfig};

// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod gui;
pub mod params;
pub mod progress;
pub mod render;
pub mod runner;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Result, ShotMapError};

// src/lib.rs
//! Ball Drop
//!
//! A procedurally generated New Year's street scene with a dropping ball,
//! driven through a pluggable viewer.

pub mod animation;
pub mod app;
pub mod config;
pub mod demo;
pub mod error;
pub mod gfx;
pub mod prelude;
pub mod viewer;

// Re-export main types for convenience
pub use app::BallDropApp;
pub use config::DemoConfig;
pub use error::SceneError;

/// Creates a ball-drop application with default settings
pub fn default() -> BallDropApp {
    BallDropApp::new(DemoConfig::default())
}

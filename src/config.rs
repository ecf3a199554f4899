//! Run settings
//!
//! Scene content is fixed in [`crate::demo::layout`]; only how the demo is
//! run is configurable.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Stop after this many frames; `None` runs until the viewer closes
    pub max_frames: Option<u64>,
    /// Frame pacing; `None` runs as fast as possible
    pub target_fps: Option<u32>,
    /// Directory holding `shaders/` and `tex/`
    pub asset_root: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            max_frames: None,
            target_fps: Some(60),
            asset_root: PathBuf::from("."),
        }
    }
}

impl DemoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: viewport size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder pattern: frame limit
    pub fn with_max_frames(mut self, frames: Option<u64>) -> Self {
        self.max_frames = frames;
        self
    }

    /// Builder pattern: frame pacing, 0 disables it
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = (fps > 0).then_some(fps);
        self
    }

    /// Builder pattern: asset directory
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    /// Time one frame may take at the target rate
    pub fn frame_budget(&self) -> Option<Duration> {
        self.target_fps
            .map(|fps| Duration::from_nanos(1_000_000_000 / u64::from(fps)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = DemoConfig::new()
            .with_size(640, 480)
            .with_max_frames(Some(10))
            .with_target_fps(0)
            .with_asset_root("assets");

        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.max_frames, Some(10));
        assert_eq!(config.target_fps, None);
        assert_eq!(config.frame_budget(), None);
        assert_eq!(config.asset_root, PathBuf::from("assets"));
    }

    #[test]
    fn test_frame_budget() {
        let config = DemoConfig::new().with_target_fps(50);
        assert_eq!(config.frame_budget(), Some(Duration::from_millis(20)));
    }
}

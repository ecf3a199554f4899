//! Full-screen effects the viewer may carry
//!
//! Both are optional: the animator only feeds them when the viewer reports
//! one is installed.

/// Screen-space background driven by resolution, time and frame number
pub trait BackgroundEffect {
    fn set_resolution(&mut self, width: f32, height: f32);
    fn set_time(&mut self, time: f32);
    fn set_frame(&mut self, frame: u64);
}

/// Environment cube that animates over time
pub trait Skybox {
    fn set_time(&mut self, time: f32);
}

/// Vertical two-color gradient behind the scene
#[derive(Debug, Clone, PartialEq)]
pub struct GradientBackground {
    pub bottom: [f32; 4],
    pub top: [f32; 4],
    resolution: [f32; 2],
    time: f32,
    frame: u64,
}

impl GradientBackground {
    pub fn new(bottom: [f32; 4], top: [f32; 4]) -> Self {
        Self {
            bottom,
            top,
            resolution: [0.0, 0.0],
            time: 0.0,
            frame: 0,
        }
    }

    /// Color at normalized screen height `t` (0 = bottom, 1 = top)
    pub fn color_at(&self, t: f32) -> [f32; 4] {
        let t = t.clamp(0.0, 1.0);
        std::array::from_fn(|i| self.bottom[i] + (self.top[i] - self.bottom[i]) * t)
    }

    pub fn resolution(&self) -> [f32; 2] {
        self.resolution
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl BackgroundEffect for GradientBackground {
    fn set_resolution(&mut self, width: f32, height: f32) {
        self.resolution = [width, height];
    }

    fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    fn set_frame(&mut self, frame: u64) {
        self.frame = frame;
    }
}

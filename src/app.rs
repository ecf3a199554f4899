use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::{
    config::DemoConfig,
    demo::{BallDropScene, Demo},
    error::Result,
    gfx::resources::ResourceContext,
    viewer::{HeadlessViewer, Viewer},
};

/// What a finished run did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn average_fps(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds > 0.0 {
            self.frames as f64 / seconds
        } else {
            0.0
        }
    }
}

/// Drive any [`Demo`] through its lifecycle
///
/// Initializes, loads the scene, then advances and presents frames until the
/// viewer closes or `config.max_frames` is reached. Frames are only advanced
/// while the viewer is playing; paused frames are still presented.
pub fn run_demo<D: Demo + ?Sized>(
    demo: &mut D,
    viewer: &mut dyn Viewer,
    resources: &mut ResourceContext,
    config: &DemoConfig,
) -> Result<RunSummary> {
    demo.initialize(viewer);
    demo.load_scene(viewer, resources)?;

    let frame_budget = config.frame_budget();
    let start = Instant::now();
    let mut last_report = start;
    let mut frames: u64 = 0;

    while !viewer.should_close() && config.max_frames.map_or(true, |max| frames < max) {
        let frame_start = Instant::now();

        if viewer.is_playing() {
            demo.advance_frame(viewer);
        }
        viewer.present_frame();
        frames += 1;

        if last_report.elapsed() >= Duration::from_secs(1) {
            debug!(
                "{} frames in {:.1}s",
                frames,
                start.elapsed().as_secs_f32()
            );
            last_report = Instant::now();
        }

        if let Some(budget) = frame_budget {
            let spent = frame_start.elapsed();
            if spent < budget {
                thread::sleep(budget - spent);
            }
        }
    }

    let summary = RunSummary {
        frames,
        elapsed: start.elapsed(),
    };
    info!(
        "Stopped after {} frames ({:.1} fps average)",
        summary.frames,
        summary.average_fps()
    );
    Ok(summary)
}

/// The ball-drop scene wired to a headless viewer
pub struct BallDropApp {
    config: DemoConfig,
    viewer: HeadlessViewer,
    resources: ResourceContext,
    scene: BallDropScene,
}

impl BallDropApp {
    /// Create the application from run settings
    pub fn new(config: DemoConfig) -> Self {
        Self {
            viewer: HeadlessViewer::new(config.width, config.height),
            resources: ResourceContext::new(&config.asset_root),
            scene: BallDropScene::new(),
            config,
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Run the application (consumes self)
    pub fn run(mut self) -> Result<RunSummary> {
        self.scene
            .run(&mut self.viewer, &mut self.resources, &self.config)
    }
}

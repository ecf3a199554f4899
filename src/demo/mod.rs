//! Demo lifecycle
//!
//! A demo is configured once and then stepped once per frame by
//! [`run_demo`](crate::app::run_demo). The viewer and the resource
//! registries are passed in explicitly at every step.

pub mod ball_drop;
pub mod layout;

pub use ball_drop::BallDropScene;

use crate::{
    app::{run_demo, RunSummary},
    config::DemoConfig,
    error::Result,
    gfx::resources::ResourceContext,
    viewer::Viewer,
};

/// Lifecycle hooks the loop driver calls
pub trait Demo {
    /// Called once before anything is loaded
    ///
    /// Use this to set viewer options and start clocks.
    fn initialize(&mut self, viewer: &mut dyn Viewer);

    /// Build every object, light and effect
    ///
    /// Any error here is fatal: the loop never starts.
    fn load_scene(&mut self, viewer: &mut dyn Viewer, resources: &mut ResourceContext) -> Result<()>;

    /// Update the scene for the next presented frame
    ///
    /// Only called while the viewer is playing.
    fn advance_frame(&mut self, viewer: &mut dyn Viewer);

    /// Run the whole lifecycle until the viewer closes or the frame limit is hit
    fn run(
        &mut self,
        viewer: &mut dyn Viewer,
        resources: &mut ResourceContext,
        config: &DemoConfig,
    ) -> Result<RunSummary> {
        run_demo(self, viewer, resources, config)
    }
}

//! Viewer framework interface
//!
//! A viewer owns the window, the object registry, the lights and the optional
//! background effects. Scenes configure it through this trait and never touch
//! the GPU themselves.

pub mod headless;

pub use headless::HeadlessViewer;

use crate::gfx::{
    effects::{BackgroundEffect, Skybox},
    scene::{Light, ObjectHandle, PolygonMode, Scene, ShadingMode},
};

pub trait Viewer {
    /// Object registry
    fn scene(&self) -> &Scene;

    fn scene_mut(&mut self) -> &mut Scene;

    fn add_light(&mut self, light: Light);

    fn lights(&self) -> &[Light];

    fn set_polygon_mode(&mut self, handle: ObjectHandle, mode: PolygonMode) {
        if let Some(object) = self.scene_mut().get_mut(handle) {
            object.polygon_mode = mode;
        }
    }

    fn set_shading_mode(&mut self, handle: ObjectHandle, mode: ShadingMode) {
        if let Some(object) = self.scene_mut().get_mut(handle) {
            object.shading_mode = mode;
        }
    }

    /// Show or hide the world axes overlay
    fn set_draw_axes(&mut self, draw: bool);

    /// Flip between paused and playing. Frames only advance while playing.
    fn toggle_play(&mut self);

    fn is_playing(&self) -> bool;

    /// Current viewport size in pixels
    fn window_size(&self) -> (u32, u32);

    fn set_background(&mut self, background: Box<dyn BackgroundEffect>);

    fn background_mut(&mut self) -> Option<&mut dyn BackgroundEffect>;

    fn set_skybox(&mut self, skybox: Box<dyn Skybox>);

    fn skybox_mut(&mut self) -> Option<&mut dyn Skybox>;

    /// Draw the current state of the scene
    fn present_frame(&mut self);

    /// Whether the window asked to close
    fn should_close(&self) -> bool;
}

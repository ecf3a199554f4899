//! Viewer without a window
//!
//! Keeps all viewer state in memory and counts presented frames. Used by the
//! command-line driver and by tests.

use log::trace;

use super::Viewer;
use crate::gfx::{
    effects::{BackgroundEffect, Skybox},
    scene::{Light, Scene},
};

pub struct HeadlessViewer {
    scene: Scene,
    lights: Vec<Light>,
    width: u32,
    height: u32,
    playing: bool,
    draw_axes: bool,
    background: Option<Box<dyn BackgroundEffect>>,
    skybox: Option<Box<dyn Skybox>>,
    frames_presented: u64,
    close_after: Option<u64>,
}

impl HeadlessViewer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            scene: Scene::new(),
            lights: Vec::new(),
            width,
            height,
            playing: false,
            draw_axes: true,
            background: None,
            skybox: None,
            frames_presented: 0,
            close_after: None,
        }
    }

    /// Builder pattern: report `should_close` once `frames` have been presented
    pub fn with_close_after(mut self, frames: u64) -> Self {
        self.close_after = Some(frames);
        self
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn draws_axes(&self) -> bool {
        self.draw_axes
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }
}

impl Default for HeadlessViewer {
    fn default() -> Self {
        Self::new(1200, 800)
    }
}

impl Viewer for HeadlessViewer {
    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    fn lights(&self) -> &[Light] {
        &self.lights
    }

    fn set_draw_axes(&mut self, draw: bool) {
        self.draw_axes = draw;
    }

    fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn window_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_background(&mut self, background: Box<dyn BackgroundEffect>) {
        self.background = Some(background);
    }

    fn background_mut(&mut self) -> Option<&mut dyn BackgroundEffect> {
        self.background.as_deref_mut().map(|bg| bg as &mut dyn BackgroundEffect)
    }

    fn set_skybox(&mut self, skybox: Box<dyn Skybox>) {
        self.skybox = Some(skybox);
    }

    fn skybox_mut(&mut self) -> Option<&mut dyn Skybox> {
        self.skybox.as_deref_mut().map(|sky| sky as &mut dyn Skybox)
    }

    fn present_frame(&mut self) {
        self.frames_presented += 1;
        trace!(
            "Presented frame {} ({} objects)",
            self.frames_presented,
            self.scene.len()
        );
    }

    fn should_close(&self) -> bool {
        self.close_after
            .is_some_and(|limit| self.frames_presented >= limit)
    }
}

use cgmath::Vector3;
use log::trace;

use super::drop_cycle::DropCycle;
use crate::{gfx::scene::ObjectHandle, viewer::Viewer};

/// Per-frame update of the ball and the time-driven effects
#[derive(Debug, Clone)]
pub struct BallAnimator {
    pub cycle: DropCycle,
    /// Ball position on the ground plane; only Y animates
    pub ball_x: f32,
    pub ball_z: f32,
    frame: u64,
}

impl BallAnimator {
    pub fn new(cycle: DropCycle, ball_x: f32, ball_z: f32) -> Self {
        Self {
            cycle,
            ball_x,
            ball_z,
            frame: 0,
        }
    }

    /// World position of the ball at `time`
    pub fn ball_position(&self, time: f32) -> Vector3<f32> {
        Vector3::new(self.ball_x, self.cycle.height_at(time), self.ball_z)
    }

    /// Frames handed to the background effect so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Move the ball and push `time` into objects, background and skybox
    pub fn update(&mut self, time: f32, viewer: &mut dyn Viewer, ball: Option<ObjectHandle>) {
        if let Some(handle) = ball {
            let position = self.ball_position(time);
            if let Some(object) = viewer.scene_mut().get_mut(handle) {
                object.set_translation(position);
            }
            trace!("t={:.3}s ball y={:.3}", time, position.y);
        }

        for object in viewer.scene_mut().objects_mut() {
            object.set_time(time);
        }

        let (width, height) = viewer.window_size();
        if let Some(background) = viewer.background_mut() {
            background.set_resolution(width as f32, height as f32);
            background.set_time(time);
            background.set_frame(self.frame);
            self.frame += 1;
        }

        if let Some(skybox) = viewer.skybox_mut() {
            skybox.set_time(time);
        }
    }
}

impl Default for BallAnimator {
    fn default() -> Self {
        Self::new(DropCycle::default(), 0.0, -10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        effects::{BackgroundEffect, Skybox},
        geometry::{generate_box, generate_sphere},
        scene::PlacedObject,
    };
    use crate::viewer::HeadlessViewer;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Default)]
    struct Recorded {
        resolution: Option<(f32, f32)>,
        times: Vec<f32>,
        frames: Vec<u64>,
        sky_times: Vec<f32>,
    }

    struct RecordingBackground(Rc<RefCell<Recorded>>);

    impl BackgroundEffect for RecordingBackground {
        fn set_resolution(&mut self, width: f32, height: f32) {
            self.0.borrow_mut().resolution = Some((width, height));
        }
        fn set_time(&mut self, time: f32) {
            self.0.borrow_mut().times.push(time);
        }
        fn set_frame(&mut self, frame: u64) {
            self.0.borrow_mut().frames.push(frame);
        }
    }

    struct RecordingSkybox(Rc<RefCell<Recorded>>);

    impl Skybox for RecordingSkybox {
        fn set_time(&mut self, time: f32) {
            self.0.borrow_mut().sky_times.push(time);
        }
    }

    #[test]
    fn test_update_moves_ball_and_sets_time() {
        let mut viewer = HeadlessViewer::default();
        let building = viewer
            .scene_mut()
            .add_object(PlacedObject::new("building", generate_box(1.0, 1.0, 2.0).unwrap()));
        let ball = viewer
            .scene_mut()
            .add_object(PlacedObject::new("ball", generate_sphere(1.2, 8, 8).unwrap()));

        let mut animator = BallAnimator::default();
        animator.update(2.5, &mut viewer, Some(ball));

        let ball_obj = viewer.scene().get(ball).unwrap();
        let position = ball_obj.translation();
        assert_eq!(position.x, 0.0);
        assert_eq!(position.z, -10.0);
        assert!((position.y - 0.925).abs() < 1e-4);
        assert_eq!(ball_obj.time(), 2.5);

        // Static objects get the time but keep their transform
        let building_obj = viewer.scene().get(building).unwrap();
        assert_eq!(building_obj.time(), 2.5);
        assert_eq!(building_obj.translation(), Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_effects_receive_time_resolution_and_frames() {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let mut viewer = HeadlessViewer::new(800, 600);
        viewer.set_background(Box::new(RecordingBackground(Rc::clone(&recorded))));
        viewer.set_skybox(Box::new(RecordingSkybox(Rc::clone(&recorded))));

        let mut animator = BallAnimator::default();
        for t in [0.0, 0.016, 0.033] {
            animator.update(t, &mut viewer, None);
        }

        let recorded = recorded.borrow();
        assert_eq!(recorded.resolution, Some((800.0, 600.0)));
        assert_eq!(recorded.times, vec![0.0, 0.016, 0.033]);
        assert_eq!(recorded.frames, vec![0, 1, 2]);
        assert_eq!(recorded.sky_times, vec![0.0, 0.016, 0.033]);
        assert_eq!(animator.frame(), 3);
    }

    #[test]
    fn test_without_effects_frame_counter_stays() {
        let mut viewer = HeadlessViewer::default();
        let mut animator = BallAnimator::default();
        animator.update(1.0, &mut viewer, None);
        assert_eq!(animator.frame(), 0);
    }
}

//! New Year's ball drop
//!
//! A street of six buildings on a slanted ground plane, a pole at the far end
//! and a ball that drops down the pole over and over.

use std::path::Path;

use cgmath::Vector3;
use log::{debug, info};

use super::{
    layout::{self, BuildingSpec, BALL, BUILDINGS, BUILDING_SHADER, GROUND, LIGHTS, POLE, SHADERS, TEXTURES},
    Demo,
};
use crate::{
    animation::{BallAnimator, Clock, DropCycle, WallClock},
    error::Result,
    gfx::{
        effects::GradientBackground,
        geometry::{generate_box, generate_cylinder, generate_heightfield, generate_sphere, load_obj_mesh},
        resources::{ResourceContext, ShaderLibrary},
        scene::{ObjectHandle, PlacedObject, PolygonMode, ShadingMode},
    },
    viewer::Viewer,
};

pub struct BallDropScene<C: Clock = WallClock> {
    clock: C,
    animator: BallAnimator,
    ground: Option<ObjectHandle>,
    buildings: Vec<ObjectHandle>,
    pole: Option<ObjectHandle>,
    ball: Option<ObjectHandle>,
}

impl BallDropScene<WallClock> {
    pub fn new() -> Self {
        Self::with_clock(WallClock::new())
    }
}

impl Default for BallDropScene<WallClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BallDropScene<C> {
    /// Creates the scene with a custom time source
    pub fn with_clock(clock: C) -> Self {
        let cycle = DropCycle {
            start_y: BALL.position[1],
            drop_distance: BALL.drop_distance,
            ..DropCycle::default()
        };

        Self {
            clock,
            animator: BallAnimator::new(cycle, BALL.position[0], BALL.position[2]),
            ground: None,
            buildings: Vec::new(),
            pole: None,
            ball: None,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn animator(&self) -> &BallAnimator {
        &self.animator
    }

    pub fn ground(&self) -> Option<ObjectHandle> {
        self.ground
    }

    pub fn buildings(&self) -> &[ObjectHandle] {
        &self.buildings
    }

    pub fn pole(&self) -> Option<ObjectHandle> {
        self.pole
    }

    pub fn ball(&self) -> Option<ObjectHandle> {
        self.ball
    }

    /// Box building standing at its table position
    pub fn create_building(
        &mut self,
        viewer: &mut dyn Viewer,
        shaders: &ShaderLibrary,
        spec: &BuildingSpec,
    ) -> Result<ObjectHandle> {
        let shader = shaders.get(BUILDING_SHADER)?;
        let mesh = generate_box(spec.width, spec.depth, spec.height)?;

        let object = PlacedObject::new(spec.name, mesh)
            .with_translation(Vector3::from(spec.position))
            .with_material(spec.material())
            .with_shader(shader);

        let handle = viewer.scene_mut().add_object(object);
        self.buildings.push(handle);
        Ok(handle)
    }

    /// Slanted ground that hides the building bases in the distance
    pub fn create_ground_plane(&mut self, viewer: &mut dyn Viewer, shaders: &ShaderLibrary) -> Result<ObjectHandle> {
        let shader = shaders.get(GROUND.shader)?;
        let mesh = generate_heightfield(GROUND.width, GROUND.length, GROUND.slope, GROUND.nx, GROUND.nz)?;

        let object = PlacedObject::new("ground", mesh)
            .with_translation(Vector3::from(GROUND.position))
            .with_material(GROUND.material.to_material())
            .with_shader(shader);

        let handle = viewer.scene_mut().add_object(object);
        self.ground = Some(handle);
        Ok(handle)
    }

    /// The pole the ball drops along
    pub fn create_cylinder(&mut self, viewer: &mut dyn Viewer, shaders: &ShaderLibrary) -> Result<ObjectHandle> {
        let shader = shaders.get(POLE.shader)?;
        let mesh = generate_cylinder(POLE.radius, POLE.height, POLE.slices)?;

        let object = PlacedObject::new("pole", mesh)
            .with_translation(Vector3::from(POLE.position))
            .with_material(POLE.material.to_material())
            .with_shader(shader);

        let handle = viewer.scene_mut().add_object(object);
        self.pole = Some(handle);
        Ok(handle)
    }

    /// The ball, placed at the top of its drop
    pub fn create_sphere(&mut self, viewer: &mut dyn Viewer, shaders: &ShaderLibrary) -> Result<ObjectHandle> {
        let shader = shaders.get(BALL.shader)?;
        let mesh = generate_sphere(BALL.radius, BALL.slices, BALL.stacks)?;

        let object = PlacedObject::new("ball", mesh)
            .with_translation(Vector3::from(BALL.position))
            .with_material(BALL.material.to_material())
            .with_shader(shader);

        let handle = viewer.scene_mut().add_object(object);
        self.ball = Some(handle);
        Ok(handle)
    }

    /// Registers a mesh read from an OBJ file, named after the file
    pub fn add_obj_mesh_object(&mut self, viewer: &mut dyn Viewer, path: impl AsRef<Path>) -> Result<ObjectHandle> {
        let path = path.as_ref();
        let mesh = load_obj_mesh(path)?;

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("mesh");
        let name = viewer.scene().ensure_unique_name(stem);

        Ok(viewer.scene_mut().add_object(PlacedObject::new(name, mesh)))
    }

    fn load_resources(&self, resources: &mut ResourceContext) -> Result<()> {
        for spec in &SHADERS {
            resources.shaders.load_from_files(spec.vertex, spec.fragment, spec.name)?;
        }
        for spec in &TEXTURES {
            resources.textures.load_from_file(spec.path, spec.name)?;
        }

        info!(
            "Loaded {} shaders and {} textures from {}",
            resources.shaders.len(),
            resources.textures.len(),
            resources.asset_root().display()
        );
        Ok(())
    }

    /// Fill polygons, alpha-textured shading, then one refresh + initialize per object
    fn finalize_objects(viewer: &mut dyn Viewer) {
        let handles: Vec<ObjectHandle> = viewer.scene().handles().collect();

        for handle in handles {
            viewer.set_polygon_mode(handle, PolygonMode::Fill);
            viewer.set_shading_mode(handle, ShadingMode::TexAlpha);
            if let Some(object) = viewer.scene_mut().get_mut(handle) {
                object.set_data_refreshed();
                object.initialize();
            }
        }
    }
}

impl<C: Clock> Demo for BallDropScene<C> {
    fn initialize(&mut self, viewer: &mut dyn Viewer) {
        viewer.set_draw_axes(false);
        self.clock.restart();
    }

    fn load_scene(&mut self, viewer: &mut dyn Viewer, resources: &mut ResourceContext) -> Result<()> {
        self.load_resources(resources)?;

        for light in &LIGHTS {
            viewer.add_light(light.to_light());
        }

        viewer.set_background(Box::new(GradientBackground::new(
            layout::BACKGROUND_BOTTOM,
            layout::BACKGROUND_TOP,
        )));

        self.create_ground_plane(viewer, &resources.shaders)?;
        for spec in &BUILDINGS {
            self.create_building(viewer, &resources.shaders, spec)?;
            debug!("Placed {} at {:?}", spec.name, spec.position);
        }
        self.create_cylinder(viewer, &resources.shaders)?;
        self.create_sphere(viewer, &resources.shaders)?;

        Self::finalize_objects(viewer);

        let stats = viewer.scene().get_statistics();
        info!(
            "Scene ready: {} objects, {} vertices, {} triangles",
            stats.object_count, stats.total_vertices, stats.total_triangles
        );

        viewer.toggle_play();
        Ok(())
    }

    fn advance_frame(&mut self, viewer: &mut dyn Viewer) {
        let time = self.clock.elapsed();
        self.animator.update(time, viewer, self.ball);
    }
}

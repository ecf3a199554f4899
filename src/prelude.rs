//! # Ball Drop Prelude
//!
//! Commonly used types in one import.
//!
//! ```rust
//! use balldrop::prelude::*;
//!
//! let mut scene = BallDropScene::with_clock(ManualClock::new());
//! let mut viewer = HeadlessViewer::default();
//! let mut resources = ResourceContext::new(env!("CARGO_MANIFEST_DIR"));
//!
//! scene.initialize(&mut viewer);
//! scene.load_scene(&mut viewer, &mut resources).unwrap();
//!
//! scene.clock_mut().set(2.5);
//! scene.advance_frame(&mut viewer);
//! assert_eq!(viewer.scene().len(), 9);
//! ```

// Application and lifecycle
pub use crate::app::{run_demo, BallDropApp, RunSummary};
pub use crate::config::DemoConfig;
pub use crate::demo::{BallDropScene, Demo};
pub use crate::error::SceneError;

// Geometry and scene types
pub use crate::gfx::effects::{BackgroundEffect, GradientBackground, Skybox};
pub use crate::gfx::geometry::{
    generate_box, generate_cylinder, generate_heightfield, generate_sphere, load_obj_mesh, GeometryError,
    HeightfieldSlope, MeshData,
};
pub use crate::gfx::resources::{Material, ResourceContext, ShaderLibrary, TextureLibrary};
pub use crate::gfx::scene::{Light, ObjectHandle, PlacedObject, PolygonMode, Scene, ShadingMode};

// Animation
pub use crate::animation::{BallAnimator, Clock, DropCycle, DropPhase, ManualClock, WallClock};

// Viewer
pub use crate::viewer::{HeadlessViewer, Viewer};

// Re-export common external dependencies
pub use cgmath::Vector3;

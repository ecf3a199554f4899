//! # Scene Management Module
//!
//! This module holds the object registry the ball-drop scene is assembled
//! into, along with the per-object data the viewer consumes.
//!
//! ## Key Components
//!
//! - [`Scene`] - Append-only registry of placed objects
//! - [`PlacedObject`] - A mesh with transform, material, shader and render modes
//! - [`Light`] - Point light registered with the viewer
//! - [`Vertex3D`] - Interleaved vertex layout for upload
//!
//! ## Usage
//!
//! ```
//! use balldrop::gfx::geometry::generate_box;
//! use balldrop::gfx::scene::{PlacedObject, Scene};
//! use cgmath::Vector3;
//!
//! let mut scene = Scene::new();
//! let handle = scene.add_object(
//!     PlacedObject::new("building", generate_box(2.0, 3.0, 8.0).unwrap())
//!         .with_translation(Vector3::new(-4.0, -3.0, 0.0)),
//! );
//! assert_eq!(scene.get(handle).unwrap().translation().x, -4.0);
//! ```

pub mod light;
pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use light::Light;
pub use object::{MeshUpload, ObjectHandle, PlacedObject, PolygonMode, ShadingMode};
pub use scene::{Scene, SceneStatistics};
pub use vertex::Vertex3D;

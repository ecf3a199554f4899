//! # Graphics Module
//!
//! Everything the scene hands to a viewer: generated geometry, placed objects,
//! materials, shader/texture registries and optional background effects.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - Procedural primitives and OBJ loading
//! - **Scene** ([`scene`]) - Append-only object registry, lights, vertex layout
//! - **Resources** ([`resources`]) - Materials and the named shader/texture libraries
//! - **Effects** ([`effects`]) - Background and skybox hooks fed every frame
//!
//! Nothing in here talks to a GPU. The [`Viewer`](crate::viewer::Viewer)
//! implementation decides how objects are drawn.

pub mod effects;
pub mod geometry;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use geometry::MeshData;
pub use resources::ResourceContext;
pub use scene::{PlacedObject, Scene};

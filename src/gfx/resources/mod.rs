// src/gfx/resources/mod.rs
//! Scene resources
//!
//! Materials plus the shader and texture registries the scene is assembled
//! against. The registries are plain owned values, passed around explicitly
//! through [`ResourceContext`].

pub mod material;
pub mod shader_library;
pub mod texture_library;

use std::path::{Path, PathBuf};

// Re-export main types
pub use material::{Material, MaterialUniform};
pub use shader_library::{ShaderLibrary, ShaderProgram};
pub use texture_library::{Texture, TextureLibrary};

/// Shader and texture registries sharing one asset root
#[derive(Debug)]
pub struct ResourceContext {
    asset_root: PathBuf,
    pub shaders: ShaderLibrary,
    pub textures: TextureLibrary,
}

impl ResourceContext {
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        let asset_root = asset_root.into();
        Self {
            shaders: ShaderLibrary::new(&asset_root),
            textures: TextureLibrary::new(&asset_root),
            asset_root,
        }
    }

    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }
}

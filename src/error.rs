//! Scene assembly errors
//!
//! Everything here is an initialization failure: the scene either builds
//! completely or startup is aborted with one of these.

use std::path::PathBuf;

use thiserror::Error;

use crate::gfx::geometry::GeometryError;

#[derive(Debug, Error)]
pub enum SceneError {
    /// A generator rejected its parameters
    #[error("invalid geometry: {0}")]
    Geometry(#[from] GeometryError),

    /// A shader program was requested by a name that was never loaded
    #[error("shader program '{0}' has not been loaded")]
    ShaderNotFound(String),

    /// A texture was requested by a name that was never loaded
    #[error("texture '{0}' has not been loaded")]
    TextureNotFound(String),

    /// A shader source file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A texture file could not be opened or decoded
    #[error("failed to load texture {}: {source}", path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An OBJ file could not be parsed
    #[error("failed to load OBJ mesh {}: {source}", path.display())]
    Obj {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },
}

pub type Result<T> = std::result::Result<T, SceneError>;

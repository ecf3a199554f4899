//! Named texture registry
//!
//! Images are decoded to RGBA8 on load; uploading is up to the viewer.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{debug, warn};

use crate::error::{Result, SceneError};

/// Decoded RGBA8 image data
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Registry of textures keyed by name
#[derive(Debug, Default)]
pub struct TextureLibrary {
    root: PathBuf,
    textures: HashMap<String, Rc<Texture>>,
}

impl TextureLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            textures: HashMap::new(),
        }
    }

    /// Decodes an image file and registers it as `name`
    ///
    /// A name that is already registered is returned as-is.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>, name: &str) -> Result<Rc<Texture>> {
        if let Some(existing) = self.textures.get(name) {
            warn!("Texture '{}' already loaded, keeping the existing image", name);
            return Ok(Rc::clone(existing));
        }

        let full_path = self.root.join(path.as_ref());
        let image = image::open(&full_path)
            .map_err(|source| SceneError::Texture {
                path: full_path.clone(),
                source,
            })?
            .to_rgba8();

        let (width, height) = image.dimensions();
        debug!("Loaded texture '{}' ({}x{}) from {}", name, width, height, full_path.display());

        let texture = Rc::new(Texture {
            name: name.to_string(),
            width,
            height,
            rgba: image.into_raw(),
        });
        self.textures.insert(name.to_string(), Rc::clone(&texture));

        Ok(texture)
    }

    pub fn get(&self, name: &str) -> Result<Rc<Texture>> {
        self.textures
            .get(name)
            .cloned()
            .ok_or_else(|| SceneError::TextureNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut img = image::RgbaImage::new(3, 2);
        img.put_pixel(1, 1, image::Rgba([255, 200, 0, 255]));
        img.save(dir.path().join("dot.png")).unwrap();

        let mut library = TextureLibrary::new(dir.path());
        let texture = library.load_from_file("dot.png", "dot").unwrap();
        assert_eq!((texture.width, texture.height), (3, 2));
        assert_eq!(texture.rgba.len(), 3 * 2 * 4);
        assert_eq!(&texture.rgba[16..20], &[255, 200, 0, 255]);

        let again = library.load_from_file("elsewhere.png", "dot").unwrap();
        assert!(Rc::ptr_eq(&texture, &again));
    }

    #[test]
    fn test_missing_texture() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = TextureLibrary::new(dir.path());
        assert!(matches!(
            library.load_from_file("star.png", "star_color"),
            Err(SceneError::Texture { .. })
        ));
        assert!(matches!(library.get("star_color"), Err(SceneError::TextureNotFound(_))));
    }
}

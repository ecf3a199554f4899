//! Phong material definitions
//!
//! Every placed object carries its own material; the viewer reads it through
//! [`Material::to_uniform`] when the object is initialized.

/// GPU uniform data for materials
///
/// Laid out as three 16-byte rows so it matches std140 without reordering.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub ambient: [f32; 3],
    pub shininess: f32,
    pub diffuse: [f32; 3],
    _padding0: f32,
    pub specular: [f32; 3],
    _padding1: f32,
}

/// Material definition with Phong reflectance terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient reflectance (Ka)
    pub ambient: [f32; 3],
    /// Diffuse reflectance (Kd)
    pub diffuse: [f32; 3],
    /// Specular reflectance (Ks)
    pub specular: [f32; 3],
    /// Specular exponent
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: [0.1, 0.1, 0.1],
            diffuse: [0.8, 0.8, 0.8],
            specular: [0.0, 0.0, 0.0],
            shininess: 1.0,
        }
    }
}

impl Material {
    /// Creates a new material
    ///
    /// # Arguments
    /// * `ambient` - Ambient reflectance (Ka)
    /// * `diffuse` - Diffuse reflectance (Kd)
    /// * `specular` - Specular reflectance (Ks)
    /// * `shininess` - Specular exponent, clamped to at least 1.0
    pub fn new(ambient: [f32; 3], diffuse: [f32; 3], specular: [f32; 3], shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess: shininess.max(1.0),
        }
    }

    /// Builder pattern: Set ambient reflectance
    pub fn with_ambient(mut self, r: f32, g: f32, b: f32) -> Self {
        self.ambient = [r, g, b];
        self
    }

    /// Builder pattern: Set diffuse reflectance
    pub fn with_diffuse(mut self, r: f32, g: f32, b: f32) -> Self {
        self.diffuse = [r, g, b];
        self
    }

    /// Builder pattern: Set specular reflectance
    pub fn with_specular(mut self, r: f32, g: f32, b: f32) -> Self {
        self.specular = [r, g, b];
        self
    }

    /// Builder pattern: Set specular exponent
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess.max(1.0);
        self
    }

    /// Converts to the uniform layout
    pub fn to_uniform(&self) -> MaterialUniform {
        MaterialUniform {
            ambient: self.ambient,
            shininess: self.shininess,
            diffuse: self.diffuse,
            _padding0: 0.0,
            specular: self.specular,
            _padding1: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<MaterialUniform>(), 48);

        let material = Material::new([0.5; 3], [0.9; 3], [1.0; 3], 128.0);
        let uniform = material.to_uniform();
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&uniform));
        assert_eq!(floats[3], 128.0);
        assert_eq!(&floats[4..7], &[0.9, 0.9, 0.9]);
    }

    #[test]
    fn test_builder_clamps_shininess() {
        let material = Material::default().with_diffuse(0.3, 0.35, 0.35).with_shininess(0.0);
        assert_eq!(material.diffuse, [0.3, 0.35, 0.35]);
        assert_eq!(material.shininess, 1.0);
        assert_eq!(Material::new([0.0; 3], [0.0; 3], [0.0; 3], -4.0).shininess, 1.0);
    }
}

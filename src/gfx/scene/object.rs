use std::rc::Rc;

use cgmath::{Matrix4, SquareMatrix, Vector3};
use log::debug;

use super::vertex::Vertex3D;
use crate::gfx::{
    geometry::MeshData,
    resources::{Material, MaterialUniform, ShaderProgram},
};

/// Stable index of an object in the [`Scene`](super::Scene) registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(pub(crate) usize);

impl ObjectHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// How polygons are rasterized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonMode {
    #[default]
    Fill,
    Wireframe,
}

/// Which shading path the viewer uses for an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// Material lighting only
    #[default]
    Lighting,
    /// Lighting modulated by an alpha-blended texture
    TexAlpha,
}

/// Interleaved data prepared for the viewer by [`PlacedObject::initialize`]
#[derive(Debug, Clone, PartialEq)]
pub struct MeshUpload {
    pub vertices: Vec<Vertex3D>,
    pub indices: Vec<u32>,
    pub material: MaterialUniform,
}

impl MeshUpload {
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// A mesh placed in the world with a material and shader binding
#[derive(Debug, Clone)]
pub struct PlacedObject {
    pub name: String,
    pub mesh: MeshData,
    pub transform: Matrix4<f32>, // cgmath 4x4 transformation matrix
    pub material: Material,
    pub polygon_mode: PolygonMode,
    pub shading_mode: ShadingMode,
    shader: Option<Rc<ShaderProgram>>,
    time: f32,
    data_refreshed: bool,
    upload: Option<MeshUpload>, // None until initialize is called
}

impl PlacedObject {
    /// Create a new object with identity transformation and default material
    pub fn new(name: impl Into<String>, mesh: MeshData) -> Self {
        Self {
            name: name.into(),
            mesh,
            transform: Matrix4::identity(),
            material: Material::default(),
            polygon_mode: PolygonMode::default(),
            shading_mode: ShadingMode::default(),
            shader: None,
            time: 0.0,
            data_refreshed: true,
            upload: None,
        }
    }

    /// Builder pattern: place the object at `translation`
    pub fn with_translation(mut self, translation: Vector3<f32>) -> Self {
        self.set_translation(translation);
        self
    }

    /// Builder pattern: set the material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Builder pattern: bind a shader program
    pub fn with_shader(mut self, shader: Rc<ShaderProgram>) -> Self {
        self.shader = Some(shader);
        self
    }

    /// Set translation
    pub fn set_translation(&mut self, translation: Vector3<f32>) {
        self.transform = Matrix4::from_translation(translation);
    }

    /// Translation part of the transform
    pub fn translation(&self) -> Vector3<f32> {
        self.transform.w.truncate()
    }

    /// Reset to identity matrix
    pub fn reset_transform(&mut self) {
        self.transform = Matrix4::identity();
    }

    /// Column-major transform bytes, the layout shaders expect
    pub fn transform_bytes(&self) -> &[u8] {
        let transform_data: &[f32; 16] = self.transform.as_ref();
        bytemuck::cast_slice(transform_data)
    }

    pub fn shader(&self) -> Option<&ShaderProgram> {
        self.shader.as_deref()
    }

    pub fn set_shader(&mut self, shader: Rc<ShaderProgram>) {
        self.shader = Some(shader);
    }

    /// Time value forwarded to the shader
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    /// Mark the mesh or material as changed so the next
    /// [`initialize`](Self::initialize) rebuilds the upload data
    pub fn set_data_refreshed(&mut self) {
        self.data_refreshed = true;
    }

    pub fn is_data_refreshed(&self) -> bool {
        self.data_refreshed
    }

    /// Pack vertices, indices and material for the viewer
    ///
    /// Does nothing unless the data was marked refreshed since the last call.
    pub fn initialize(&mut self) {
        if !self.data_refreshed && self.upload.is_some() {
            return;
        }

        let upload = MeshUpload {
            vertices: self.mesh.to_vertices(),
            indices: self.mesh.flat_indices(),
            material: self.material.to_uniform(),
        };

        debug!(
            "Initialized '{}': {} vertex bytes, {} index bytes",
            self.name,
            upload.vertex_bytes().len(),
            upload.index_bytes().len()
        );

        self.upload = Some(upload);
        self.data_refreshed = false;
    }

    pub fn upload(&self) -> Option<&MeshUpload> {
        self.upload.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.upload.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_box;

    #[test]
    fn test_translation_round_trip() {
        let mut object = PlacedObject::new("b", generate_box(1.0, 1.0, 1.0).unwrap())
            .with_translation(Vector3::new(-4.0, -3.0, 0.0));
        assert_eq!(object.translation(), Vector3::new(-4.0, -3.0, 0.0));

        // Column-major: translation lives in floats 12..15
        let floats: &[f32] = bytemuck::cast_slice(object.transform_bytes());
        assert_eq!(&floats[12..15], &[-4.0, -3.0, 0.0]);

        object.reset_transform();
        assert_eq!(object.translation(), Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_initialize_packs_once_until_refreshed() {
        let mut object = PlacedObject::new("b", generate_box(2.0, 3.0, 8.0).unwrap());
        assert!(!object.is_initialized());

        object.initialize();
        let upload = object.upload().unwrap();
        assert_eq!(upload.vertices.len(), 8);
        assert_eq!(upload.indices.len(), 36);
        assert_eq!(upload.vertex_bytes().len(), 8 * Vertex3D::STRIDE);
        assert!(!object.is_data_refreshed());

        object.material = object.material.with_shininess(32.0);
        object.initialize();
        assert_eq!(object.upload().unwrap().material.shininess, 1.0);

        object.set_data_refreshed();
        object.initialize();
        assert_eq!(object.upload().unwrap().material.shininess, 32.0);
    }
}

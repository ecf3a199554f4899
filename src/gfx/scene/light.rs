use cgmath::Vector3;

/// A point light with Phong intensity terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vector3<f32>,
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
}

impl Light {
    pub fn new(position: Vector3<f32>, ambient: [f32; 3], diffuse: [f32; 3], specular: [f32; 3]) -> Self {
        Self {
            position,
            ambient,
            diffuse,
            specular,
        }
    }
}

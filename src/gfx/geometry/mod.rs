//! # Procedural Geometry Generation
//!
//! This module provides functions to generate the primitive shapes the ball-drop
//! scene is built from, plus a loader for Wavefront OBJ files that produces the
//! same mesh representation.
//!
//! ## Supported Primitives
//!
//! - **Box**: Axis-aligned building block with its base on y = 0
//! - **Heightfield**: Tilted ground grid extending toward -Z
//! - **Sphere**: UV sphere with configurable resolution
//! - **Cylinder**: Lateral surface of an upright cylinder (no caps)
//!
//! ## Usage
//!
//! ```rust
//! use balldrop::gfx::geometry::{generate_box, generate_sphere, HeightfieldSlope, generate_heightfield};
//!
//! let building = generate_box(2.0, 3.0, 8.0).unwrap();
//! let ball = generate_sphere(1.2, 40, 40).unwrap();
//! let ground = generate_heightfield(15.0, 60.0, HeightfieldSlope::new(0.0, -0.067, 0.0), 120, 120).unwrap();
//!
//! assert_eq!(building.triangle_count(), 12);
//! assert_eq!(ball.vertex_count(), 41 * 41);
//! assert_eq!(ground.triangle_count(), 2 * 120 * 120);
//! ```

pub mod obj;
pub mod primitives;

pub use obj::load_obj_mesh;
pub use primitives::*;

use thiserror::Error;

use crate::gfx::scene::vertex::Vertex3D;

/// Rejected generator input or a mesh that breaks its own invariants
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A subdivision count was zero
    #[error("{shape}: {param} must be at least 1")]
    ZeroSubdivisions {
        shape: &'static str,
        param: &'static str,
    },

    /// A dimension was zero, negative, NaN or infinite
    #[error("{shape}: {param} must be a finite positive number (got {value})")]
    InvalidDimension {
        shape: &'static str,
        param: &'static str,
        value: f32,
    },

    /// A triangle references a vertex that does not exist
    #[error("triangle {triangle} references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    /// Texture coordinates were supplied but not one per vertex
    #[error("mesh has {vertex_count} vertices but {uv_count} texture coordinates")]
    UvCountMismatch { vertex_count: usize, uv_count: usize },
}

/// Generated triangle mesh: positions, triangles and per-vertex UVs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v), one per vertex when present
    pub tex_coords: Vec<[f32; 2]>,
    /// Triangle index triples, winding order is significant
    pub triangles: Vec<[u32; 3]>,
}

impl MeshData {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this mesh
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Triangle indices as one flat list, the layout index buffers expect
    pub fn flat_indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Check the index and UV invariants
    pub fn validate(&self) -> Result<(), GeometryError> {
        let vertex_count = self.vertices.len();

        if !self.tex_coords.is_empty() && self.tex_coords.len() != vertex_count {
            return Err(GeometryError::UvCountMismatch {
                vertex_count,
                uv_count: self.tex_coords.len(),
            });
        }

        for (triangle, indices) in self.triangles.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(GeometryError::IndexOutOfRange {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(())
    }

    /// Smooth per-vertex normals from the triangle winding
    ///
    /// Face normals are accumulated unnormalized, so larger triangles weigh
    /// more, then each vertex sum is normalized. Vertices that belong to no
    /// triangle (or only to degenerate ones) get +Y.
    pub fn compute_vertex_normals(&self) -> Vec<[f32; 3]> {
        let mut normals = vec![[0.0f32; 3]; self.vertices.len()];

        for &[i0, i1, i2] in &self.triangles {
            let v0 = self.vertices[i0 as usize];
            let v1 = self.vertices[i1 as usize];
            let v2 = self.vertices[i2 as usize];

            let edge1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
            let edge2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];

            let face_normal = [
                edge1[1] * edge2[2] - edge1[2] * edge2[1],
                edge1[2] * edge2[0] - edge1[0] * edge2[2],
                edge1[0] * edge2[1] - edge1[1] * edge2[0],
            ];

            for vertex_idx in [i0, i1, i2] {
                let n = &mut normals[vertex_idx as usize];
                n[0] += face_normal[0];
                n[1] += face_normal[1];
                n[2] += face_normal[2];
            }
        }

        for n in &mut normals {
            let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            if length > f32::EPSILON {
                n[0] /= length;
                n[1] /= length;
                n[2] /= length;
            } else {
                *n = [0.0, 1.0, 0.0];
            }
        }

        normals
    }

    /// Interleave positions, normals and UVs into the upload vertex format
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        let normals = self.compute_vertex_normals();

        self.vertices
            .iter()
            .zip(normals)
            .enumerate()
            .map(|(i, (&position, normal))| Vertex3D {
                position,
                normal,
                tex_coords: self.tex_coords.get(i).copied().unwrap_or([0.0, 0.0]),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> MeshData {
        MeshData {
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]],
            tex_coords: vec![[0.0, 0.0]; 3],
            triangles: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_mesh() {
        assert_eq!(single_triangle().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_out_of_range_index() {
        let mut mesh = single_triangle();
        mesh.triangles.push([0, 2, 3]);
        assert_eq!(
            mesh.validate(),
            Err(GeometryError::IndexOutOfRange {
                triangle: 1,
                index: 3,
                vertex_count: 3,
            })
        );
    }

    #[test]
    fn test_validate_rejects_uv_mismatch() {
        let mut mesh = single_triangle();
        mesh.tex_coords.pop();
        assert!(matches!(
            mesh.validate(),
            Err(GeometryError::UvCountMismatch { vertex_count: 3, uv_count: 2 })
        ));

        // No UVs at all is allowed
        mesh.tex_coords.clear();
        assert_eq!(mesh.validate(), Ok(()));
    }

    #[test]
    fn test_normals_follow_winding() {
        // (0,0,0) -> (1,0,0) -> (0,0,-1) is counter-clockwise seen from +Y
        let normals = single_triangle().compute_vertex_normals();
        for n in normals {
            assert!((n[1] - 1.0).abs() < 1e-6, "expected +Y normal, got {:?}", n);
        }
    }

    #[test]
    fn test_to_vertices_interleaves() {
        let mesh = single_triangle();
        let vertices = mesh.to_vertices();
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.flat_indices(), vec![0, 1, 2]);
    }
}

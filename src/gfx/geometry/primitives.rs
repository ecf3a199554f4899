//! # Primitive Shape Generation
//!
//! This module contains the generators for the scene's primitive shapes.
//! All shapes are built around the local origin; world placement comes from
//! the owning object's transform.

use super::{GeometryError, MeshData};
use std::f32::consts::PI;

/// How many times the ground texture repeats along its depth
pub const HEIGHTFIELD_V_REPEAT: f32 = 5.0;

fn check_dimension(shape: &'static str, param: &'static str, value: f32) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidDimension { shape, param, value })
    }
}

fn check_subdivisions(shape: &'static str, param: &'static str, value: u32) -> Result<(), GeometryError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(GeometryError::ZeroSubdivisions { shape, param })
    }
}

/// Generate a box (building) with its base on y = 0
///
/// # Arguments
/// * `width` - Extent along X, centered on the origin
/// * `depth` - Extent along Z, centered on the origin
/// * `height` - Extent along +Y
///
/// Produces the 8 shared corners and 12 triangles, counter-clockwise seen
/// from outside. Texture coordinates are all (0, 0).
pub fn generate_box(width: f32, depth: f32, height: f32) -> Result<MeshData, GeometryError> {
    check_dimension("box", "width", width)?;
    check_dimension("box", "depth", depth)?;
    check_dimension("box", "height", height)?;

    let hw = width / 2.0;
    let hd = depth / 2.0;

    let mut data = MeshData::new();

    data.vertices = vec![
        // Bottom ring (y = 0)
        [-hw, 0.0, -hd],
        [hw, 0.0, -hd],
        [hw, 0.0, hd],
        [-hw, 0.0, hd],
        // Top ring (y = height)
        [-hw, height, -hd],
        [hw, height, -hd],
        [hw, height, hd],
        [-hw, height, hd],
    ];

    data.triangles = vec![
        // Front face (-Z)
        [0, 5, 1],
        [0, 4, 5],
        // Right face (+X)
        [1, 6, 2],
        [1, 5, 6],
        // Back face (+Z)
        [2, 7, 3],
        [2, 6, 7],
        // Left face (-X)
        [3, 4, 0],
        [3, 7, 4],
        // Top face (+Y)
        [4, 6, 5],
        [4, 7, 6],
        // Bottom face (-Y), mirrored relative to the top
        [0, 1, 2],
        [0, 2, 3],
    ];

    data.tex_coords = vec![[0.0, 0.0]; data.vertices.len()];

    Ok(data)
}

/// Coefficients of the ground plane `y = a * x + b * z + c`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightfieldSlope {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl HeightfieldSlope {
    pub const fn new(a: f32, b: f32, c: f32) -> Self {
        Self { a, b, c }
    }

    /// A level plane at y = 0
    pub const fn flat() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Elevation at planar position (x, z)
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        self.a * x + self.b * z + self.c
    }
}

/// Generate a tilted grid (ground) extending from z = 0 toward -Z
///
/// # Arguments
/// * `width` - Extent along X, centered on the origin
/// * `length` - Extent along -Z
/// * `slope` - Plane coefficients giving each grid point's height
/// * `nx` - Number of cells across the width
/// * `nz` - Number of cells along the length
///
/// The V texture coordinate is scaled by [`HEIGHTFIELD_V_REPEAT`] so the
/// texture tiles along the depth.
pub fn generate_heightfield(
    width: f32,
    length: f32,
    slope: HeightfieldSlope,
    nx: u32,
    nz: u32,
) -> Result<MeshData, GeometryError> {
    check_dimension("heightfield", "width", width)?;
    check_dimension("heightfield", "length", length)?;
    check_subdivisions("heightfield", "nx", nx)?;
    check_subdivisions("heightfield", "nz", nz)?;
    for (param, value) in [("slope.a", slope.a), ("slope.b", slope.b), ("slope.c", slope.c)] {
        if !value.is_finite() {
            return Err(GeometryError::InvalidDimension {
                shape: "heightfield",
                param,
                value,
            });
        }
    }

    let mut data = MeshData::new();

    let half_width = width * 0.5;
    let dx = width / nx as f32;
    let dz = length / nz as f32;

    for iz in 0..=nz {
        let z = -(iz as f32) * dz;
        for ix in 0..=nx {
            let x = -half_width + ix as f32 * dx;
            data.vertices.push([x, slope.height_at(x, z), z]);
            data.tex_coords.push([
                ix as f32 / nx as f32,
                iz as f32 / nz as f32 * HEIGHTFIELD_V_REPEAT,
            ]);
        }
    }

    let stride = nx + 1;
    for iz in 0..nz {
        for ix in 0..nx {
            let i0 = iz * stride + ix;
            let i1 = i0 + 1;
            let i2 = i0 + stride;
            let i3 = i2 + 1;

            data.triangles.push([i0, i1, i2]);
            data.triangles.push([i1, i3, i2]);
        }
    }

    Ok(data)
}

/// Generate a UV sphere centered at the origin
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `slices` - Number of longitude segments around Y
/// * `stacks` - Number of latitude segments from pole to pole
///
/// Rings run from the +Y pole (phi = 0) to the -Y pole (phi = PI). The seam
/// column is duplicated so U reaches 1.0.
pub fn generate_sphere(radius: f32, slices: u32, stacks: u32) -> Result<MeshData, GeometryError> {
    check_dimension("sphere", "radius", radius)?;
    check_subdivisions("sphere", "slices", slices)?;
    check_subdivisions("sphere", "stacks", stacks)?;

    let mut data = MeshData::new();

    for i in 0..=stacks {
        let v = i as f32 / stacks as f32;
        let phi = v * PI;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for j in 0..=slices {
            let u = j as f32 / slices as f32;
            let theta = u * 2.0 * PI;
            let (sin_theta, cos_theta) = theta.sin_cos();

            data.vertices.push([
                radius * sin_phi * cos_theta,
                radius * cos_phi,
                radius * sin_phi * sin_theta,
            ]);
            data.tex_coords.push([u, v]);
        }
    }

    let verts_per_row = slices + 1;
    for i in 0..stacks {
        for j in 0..slices {
            let i0 = i * verts_per_row + j;
            let i1 = i0 + 1;
            let i2 = i0 + verts_per_row;
            let i3 = i2 + 1;

            data.triangles.push([i0, i2, i1]);
            data.triangles.push([i1, i2, i3]);
        }
    }

    Ok(data)
}

/// Generate the side wall of an upright cylinder standing on y = 0
///
/// # Arguments
/// * `radius` - Cylinder radius
/// * `height` - Extent along +Y
/// * `slices` - Number of angular segments
///
/// Vertices come in bottom/top pairs per angular step. Caps are not
/// generated.
pub fn generate_cylinder(radius: f32, height: f32, slices: u32) -> Result<MeshData, GeometryError> {
    check_dimension("cylinder", "radius", radius)?;
    check_dimension("cylinder", "height", height)?;
    check_subdivisions("cylinder", "slices", slices)?;

    let mut data = MeshData::new();

    for i in 0..=slices {
        let t = i as f32 / slices as f32;
        let angle = t * 2.0 * PI;
        let x = radius * angle.cos();
        let z = radius * angle.sin();

        // Bottom vertex
        data.vertices.push([x, 0.0, z]);
        data.tex_coords.push([t, 0.0]);

        // Top vertex
        data.vertices.push([x, height, z]);
        data.tex_coords.push([t, 1.0]);
    }

    for i in 0..slices {
        let i0 = 2 * i;
        let i1 = i0 + 1;
        let i2 = i0 + 2;
        let i3 = i0 + 3;

        data.triangles.push([i0, i2, i1]);
        data.triangles.push([i1, i2, i3]);
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::HashMap;

    fn face_normal(mesh: &MeshData, tri: [u32; 3]) -> [f32; 3] {
        let [a, b, c] = tri.map(|i| mesh.vertices[i as usize]);
        let e1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let e2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        [
            e1[1] * e2[2] - e1[2] * e2[1],
            e1[2] * e2[0] - e1[0] * e2[2],
            e1[0] * e2[1] - e1[1] * e2[0],
        ]
    }

    #[test]
    fn test_box_generation() {
        let building = generate_box(2.0, 3.0, 8.0).unwrap();
        assert_eq!(building.vertex_count(), 8);
        assert_eq!(building.triangle_count(), 12);
        assert!(building.flat_indices().iter().all(|&i| i < 8));
        assert!(building.tex_coords.iter().all(|&uv| uv == [0.0, 0.0]));
        assert_eq!(building.validate(), Ok(()));

        let max_y = building.vertices.iter().map(|v| v[1]).fold(f32::MIN, f32::max);
        let min_y = building.vertices.iter().map(|v| v[1]).fold(f32::MAX, f32::min);
        assert_eq!(min_y, 0.0);
        assert_eq!(max_y, 8.0);
    }

    #[test]
    fn test_box_is_watertight() {
        let mut rng = StdRng::seed_from_u64(0xB0C5);

        for _ in 0..20 {
            let w = rng.random_range(0.1f32..10.0);
            let d = rng.random_range(0.1f32..10.0);
            let h = rng.random_range(0.1f32..20.0);
            let building = generate_box(w, d, h).unwrap();

            // Every directed edge appears once and its reverse exactly once
            let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
            for &[a, b, c] in &building.triangles {
                for edge in [(a, b), (b, c), (c, a)] {
                    *edges.entry(edge).or_default() += 1;
                }
            }
            assert_eq!(edges.len(), 36);
            for (&(a, b), &count) in &edges {
                assert_eq!(count, 1, "edge {}->{} used {} times", a, b, count);
                assert_eq!(edges.get(&(b, a)), Some(&1), "edge {}->{} has no twin", a, b);
            }
        }
    }

    #[test]
    fn test_box_faces_point_outward() {
        let building = generate_box(2.0, 3.0, 8.0).unwrap();
        let center = [0.0, 4.0, 0.0];

        for &tri in &building.triangles {
            let n = face_normal(&building, tri);
            let centroid: [f32; 3] = std::array::from_fn(|k| {
                tri.iter().map(|&i| building.vertices[i as usize][k]).sum::<f32>() / 3.0
            });
            let outward = (0..3).map(|k| n[k] * (centroid[k] - center[k])).sum::<f32>();
            assert!(outward > 0.0, "triangle {:?} faces inward", tri);
        }
    }

    #[test]
    fn test_heightfield_generation() {
        let slope = HeightfieldSlope::new(0.25, -0.067, 1.5);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            let nx = rng.random_range(1u32..16);
            let nz = rng.random_range(1u32..16);
            let ground = generate_heightfield(15.0, 60.0, slope, nx, nz).unwrap();

            assert_eq!(ground.vertex_count(), ((nx + 1) * (nz + 1)) as usize);
            assert_eq!(ground.triangle_count(), (2 * nx * nz) as usize);
            assert_eq!(ground.tex_coords.len(), ground.vertex_count());
            assert_eq!(ground.validate(), Ok(()));

            for v in &ground.vertices {
                let expected = slope.height_at(v[0], v[2]);
                assert!((v[1] - expected).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_heightfield_layout() {
        let ground = generate_heightfield(2.0, 4.0, HeightfieldSlope::flat(), 2, 2).unwrap();

        // Centered in X, starting at z = 0 and running toward -Z
        assert_eq!(ground.vertices[0], [-1.0, 0.0, 0.0]);
        assert_eq!(ground.vertices[8], [1.0, 0.0, -4.0]);

        // V repeats along the depth
        assert_eq!(ground.tex_coords[8], [1.0, HEIGHTFIELD_V_REPEAT]);

        // First cell: (i0, i1, i2) and (i1, i3, i2) with stride 3
        assert_eq!(ground.triangles[0], [0, 1, 3]);
        assert_eq!(ground.triangles[1], [1, 4, 3]);

        // Counter-clockwise from above
        let n = face_normal(&ground, ground.triangles[0]);
        assert!(n[1] > 0.0);
    }

    #[test]
    fn test_sphere_generation() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            let stacks = rng.random_range(1u32..24);
            let slices = rng.random_range(1u32..24);
            let radius = rng.random_range(0.1f32..5.0);
            let sphere = generate_sphere(radius, slices, stacks).unwrap();

            assert_eq!(sphere.vertex_count(), ((stacks + 1) * (slices + 1)) as usize);
            assert_eq!(sphere.triangle_count(), (2 * stacks * slices) as usize);
            assert_eq!(sphere.validate(), Ok(()));

            for v in &sphere.vertices {
                let distance = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
                assert!((distance - radius).abs() < 1e-4 * radius.max(1.0));
            }
        }
    }

    #[test]
    fn test_sphere_winding() {
        let sphere = generate_sphere(1.0, 4, 3).unwrap();
        // verts_per_row = 5
        assert_eq!(sphere.triangles[0], [0, 5, 1]);
        assert_eq!(sphere.triangles[1], [1, 5, 6]);
        assert_eq!(sphere.vertices[0][1], 1.0);
    }

    #[test]
    fn test_cylinder_generation() {
        let pole = generate_cylinder(0.15, 4.0, 4).unwrap();
        assert_eq!(pole.vertex_count(), 10);
        assert_eq!(pole.triangle_count(), 8);
        assert_eq!(pole.validate(), Ok(()));

        assert_eq!(pole.triangles[0], [0, 2, 1]);
        assert_eq!(pole.triangles[1], [1, 2, 3]);
        assert_eq!(pole.tex_coords[1], [0.0, 1.0]);

        for pair in pole.vertices.chunks(2) {
            assert_eq!(pair[0][1], 0.0);
            assert_eq!(pair[1][1], 4.0);
            let r = (pair[0][0] * pair[0][0] + pair[0][2] * pair[0][2]).sqrt();
            assert!((r - 0.15).abs() < 1e-6);
        }
    }

    #[test]
    fn test_generators_are_deterministic() {
        assert_eq!(generate_sphere(1.2, 40, 40), generate_sphere(1.2, 40, 40));
        assert_eq!(
            generate_heightfield(15.0, 60.0, HeightfieldSlope::new(0.0, -0.067, 0.0), 12, 12),
            generate_heightfield(15.0, 60.0, HeightfieldSlope::new(0.0, -0.067, 0.0), 12, 12)
        );
    }

    #[test]
    fn test_rejects_zero_subdivisions() {
        assert_eq!(
            generate_sphere(1.0, 0, 4),
            Err(GeometryError::ZeroSubdivisions { shape: "sphere", param: "slices" })
        );
        assert!(generate_cylinder(1.0, 1.0, 0).is_err());
        assert!(generate_heightfield(1.0, 1.0, HeightfieldSlope::flat(), 1, 0).is_err());
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(matches!(
            generate_box(0.0, 1.0, 1.0),
            Err(GeometryError::InvalidDimension { param: "width", .. })
        ));
        assert!(generate_box(1.0, f32::NAN, 1.0).is_err());
        assert!(generate_cylinder(-1.0, 1.0, 8).is_err());
        assert!(generate_heightfield(1.0, 1.0, HeightfieldSlope::new(f32::INFINITY, 0.0, 0.0), 1, 1).is_err());
    }
}

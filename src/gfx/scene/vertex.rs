//! # Vertex Data Structures
//!
//! This module defines the interleaved vertex format that placed objects hand
//! to the viewer when they are initialized.

/// A 3D vertex with position, normal and texture coordinates.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, which is required for GPU buffer operations. The viewer can take
/// the byte view from [`bytemuck::cast_slice`] as-is.
///
/// # Fields
///
/// - `position`: 3D position coordinates [x, y, z] at byte offset 0
/// - `normal`: 3D normal vector [nx, ny, nz] at byte offset 12
/// - `tex_coords`: texture coordinates [u, v] at byte offset 24
///
/// # Examples
///
/// ```
/// use balldrop::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
///     tex_coords: [0.5, 0.5],
/// };
/// assert_eq!(bytemuck::bytes_of(&vertex).len(), Vertex3D::STRIDE);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
    /// Texture coordinates [u, v]
    pub tex_coords: [f32; 2],
}

impl Vertex3D {
    /// Size of one vertex in bytes
    pub const STRIDE: usize = std::mem::size_of::<Vertex3D>();

    /// Byte offsets of position, normal and texture coordinates
    pub const ATTRIBUTE_OFFSETS: [usize; 3] = [
        0,
        std::mem::size_of::<[f32; 3]>(),
        2 * std::mem::size_of::<[f32; 3]>(),
    ];
}

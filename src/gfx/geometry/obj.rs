//! Wavefront OBJ loading into [`MeshData`]

use std::path::Path;

use log::info;

use super::MeshData;
use crate::error::SceneError;

/// Loads the first model of an OBJ file as a triangle mesh
///
/// Faces are triangulated and positions/texture coordinates are merged into a
/// single index stream. Files without texture coordinates get (0, 0) per
/// vertex.
pub fn load_obj_mesh(path: impl AsRef<Path>) -> Result<MeshData, SceneError> {
    let path = path.as_ref();

    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|source| SceneError::Obj {
        path: path.to_path_buf(),
        source,
    })?;

    let model = models.first().ok_or_else(|| SceneError::Obj {
        path: path.to_path_buf(),
        source: tobj::LoadError::GenericFailure,
    })?;
    let mesh = &model.mesh;

    let vertices: Vec<[f32; 3]> = mesh
        .positions
        .chunks_exact(3)
        .map(|p| [p[0], p[1], p[2]])
        .collect();

    let tex_coords = if mesh.texcoords.len() / 2 == vertices.len() {
        mesh.texcoords.chunks_exact(2).map(|t| [t[0], t[1]]).collect()
    } else {
        vec![[0.0, 0.0]; vertices.len()]
    };

    let triangles = mesh
        .indices
        .chunks_exact(3)
        .map(|t| [t[0], t[1], t[2]])
        .collect();

    let data = MeshData {
        vertices,
        tex_coords,
        triangles,
    };
    data.validate()?;

    info!(
        "Loaded mesh '{}' from {}: {} vertices, {} triangles",
        model.name,
        path.display(),
        data.vertex_count(),
        data.triangle_count()
    );

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_quad() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quad.obj");
        std::fs::write(
            &path,
            "o quad\n\
             v 0 0 0\nv 1 0 0\nv 1 0 -1\nv 0 0 -1\n\
             vt 0 0\nvt 1 0\nvt 1 1\nvt 0 1\n\
             f 1/1 2/2 3/3 4/4\n",
        )
        .unwrap();

        let mesh = load_obj_mesh(&path).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.tex_coords.len(), 4);
        assert_eq!(mesh.validate(), Ok(()));
    }

    #[test]
    fn test_missing_texcoords_default_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tri.obj");
        std::fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();

        let mesh = load_obj_mesh(&path).unwrap();
        assert_eq!(mesh.triangles, vec![[0, 1, 2]]);
        assert!(mesh.tex_coords.iter().all(|&uv| uv == [0.0, 0.0]));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_obj_mesh(dir.path().join("nope.obj"));
        assert!(matches!(result, Err(SceneError::Obj { .. })));
    }
}

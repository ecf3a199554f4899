use super::object::{ObjectHandle, PlacedObject};

/// Append-only registry of placed objects
///
/// Objects keep their insertion order and are never removed, so an
/// [`ObjectHandle`] stays valid for the lifetime of the scene.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<PlacedObject>,
}

impl Scene {
    /// Creates an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an object and returns its handle
    pub fn add_object(&mut self, object: PlacedObject) -> ObjectHandle {
        let handle = ObjectHandle(self.objects.len());
        self.objects.push(object);
        handle
    }

    /// Gets immutable reference to an object by handle
    pub fn get(&self, handle: ObjectHandle) -> Option<&PlacedObject> {
        self.objects.get(handle.0)
    }

    /// Gets mutable reference to an object by handle
    pub fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut PlacedObject> {
        self.objects.get_mut(handle.0)
    }

    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> impl Iterator<Item = &mut PlacedObject> {
        self.objects.iter_mut()
    }

    /// Handles of every registered object, in insertion order
    pub fn handles(&self) -> impl Iterator<Item = ObjectHandle> {
        (0..self.objects.len()).map(ObjectHandle)
    }

    /// Gets the total number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Gets all object names, in insertion order
    pub fn object_names(&self) -> Vec<String> {
        self.objects.iter().map(|obj| obj.name.clone()).collect()
    }

    /// Returns `desired_name`, suffixed with a counter if it is taken
    pub fn ensure_unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self.objects.iter().any(|obj| obj.name == test_name) {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        SceneStatistics {
            object_count: self.objects.len(),
            total_triangles: self.objects.iter().map(|obj| obj.mesh.triangle_count()).sum(),
            total_vertices: self.objects.iter().map(|obj| obj.mesh.vertex_count()).sum(),
        }
    }
}

/// Scene statistics for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub total_triangles: usize,
    pub total_vertices: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::{generate_box, generate_cylinder};

    #[test]
    fn test_append_only_handles() {
        let mut scene = Scene::new();
        let a = scene.add_object(PlacedObject::new("a", generate_box(1.0, 1.0, 1.0).unwrap()));
        let b = scene.add_object(PlacedObject::new("b", generate_cylinder(1.0, 1.0, 4).unwrap()));

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(scene.get(b).unwrap().name, "b");
        assert_eq!(scene.handles().collect::<Vec<_>>(), vec![a, b]);

        let stats = scene.get_statistics();
        assert_eq!(stats.object_count, 2);
        assert_eq!(stats.total_vertices, 8 + 10);
        assert_eq!(stats.total_triangles, 12 + 8);
    }

    #[test]
    fn test_unique_names() {
        let mut scene = Scene::new();
        scene.add_object(PlacedObject::new("teapot", generate_box(1.0, 1.0, 1.0).unwrap()));
        assert_eq!(scene.ensure_unique_name("teapot"), "teapot (1)");
        assert_eq!(scene.ensure_unique_name("ground"), "ground");
    }
}

//! Named shader program registry
//!
//! Programs are loaded once by name from source files under the asset root and
//! handed out as shared references. Compilation is left to the viewer.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{debug, warn};

use crate::error::{Result, SceneError};

/// A vertex/fragment source pair registered under a name
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderProgram {
    pub name: String,
    pub vertex_path: PathBuf,
    pub fragment_path: PathBuf,
    pub vertex_source: String,
    pub fragment_source: String,
}

/// Registry of shader programs keyed by name
#[derive(Debug, Default)]
pub struct ShaderLibrary {
    root: PathBuf,
    programs: HashMap<String, Rc<ShaderProgram>>,
}

impl ShaderLibrary {
    /// Creates an empty library resolving relative paths against `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            programs: HashMap::new(),
        }
    }

    fn read_source(&self, path: &Path) -> Result<(PathBuf, String)> {
        let full_path = self.root.join(path);
        let source = fs::read_to_string(&full_path).map_err(|source| SceneError::Io {
            path: full_path.clone(),
            source,
        })?;
        Ok((full_path, source))
    }

    /// Reads a vertex/fragment pair and registers it as `name`
    ///
    /// Loading a name that is already registered returns the existing program
    /// without touching the filesystem.
    pub fn load_from_files(
        &mut self,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
        name: &str,
    ) -> Result<Rc<ShaderProgram>> {
        if let Some(existing) = self.programs.get(name) {
            warn!("Shader '{}' already loaded, keeping the existing program", name);
            return Ok(Rc::clone(existing));
        }

        let (vertex_path, vertex_source) = self.read_source(vertex_path.as_ref())?;
        let (fragment_path, fragment_source) = self.read_source(fragment_path.as_ref())?;

        debug!(
            "Loaded shader '{}' ({} + {})",
            name,
            vertex_path.display(),
            fragment_path.display()
        );

        let program = Rc::new(ShaderProgram {
            name: name.to_string(),
            vertex_path,
            fragment_path,
            vertex_source,
            fragment_source,
        });
        self.programs.insert(name.to_string(), Rc::clone(&program));

        Ok(program)
    }

    /// Looks up a program by name
    pub fn get(&self, name: &str) -> Result<Rc<ShaderProgram>> {
        self.programs
            .get(name)
            .cloned()
            .ok_or_else(|| SceneError::ShaderNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.programs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_pair(dir: &Path) {
        fs::write(dir.join("basic.vert"), "void main() {}\n").unwrap();
        fs::write(dir.join("basic.frag"), "void main() { }\n").unwrap();
    }

    #[test]
    fn test_load_and_get() {
        let dir = tempfile::tempdir().unwrap();
        write_pair(dir.path());

        let mut library = ShaderLibrary::new(dir.path());
        let program = library.load_from_files("basic.vert", "basic.frag", "basic").unwrap();
        assert_eq!(program.vertex_source, "void main() {}\n");

        let fetched = library.get("basic").unwrap();
        assert!(Rc::ptr_eq(&program, &fetched));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_reload_by_name_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        write_pair(dir.path());

        let mut library = ShaderLibrary::new(dir.path());
        let first = library.load_from_files("basic.vert", "basic.frag", "basic").unwrap();
        // Paths that do not exist are never read for a known name
        let second = library.load_from_files("gone.vert", "gone.frag", "basic").unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_missing_file_and_unknown_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = ShaderLibrary::new(dir.path());

        let err = library.load_from_files("a.vert", "a.frag", "a").unwrap_err();
        assert!(matches!(err, SceneError::Io { .. }));
        assert!(!library.contains("a"));

        let err = library.get("street").unwrap_err();
        assert!(matches!(err, SceneError::ShaderNotFound(name) if name == "street"));
    }
}

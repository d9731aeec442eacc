use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::ArtifactKind};

/// Ordered mapping from relative path to file content.
///
/// This is the output of one generation run. Insertion order is preserved
/// and is part of the contract: two runs over the same input produce the
/// same paths in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileSet {
    files: Vec<GeneratedFile>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
    pub kind: ArtifactKind,
    /// What produced the file: an entity name or `"project"`.
    pub origin: String,
}

impl GeneratedFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, failing on an existing path.
    ///
    /// A later artifact never replaces an earlier one.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        content: String,
        kind: ArtifactKind,
        origin: impl Into<String>,
    ) -> Result<(), DomainError> {
        let path = path.into();
        let origin = origin.into();

        if path.is_empty() || path.starts_with('/') || path.split('/').any(|s| s == "..") {
            return Err(DomainError::InvalidProjectSpec(format!(
                "artifact path '{path}' is not a safe relative path"
            )));
        }

        if let Some(&existing) = self.index.get(&path) {
            let first = &self.files[existing];
            return Err(DomainError::PathCollision {
                path,
                first: format!("{} {}", first.origin, first.kind),
                second: format!("{origin} {kind}"),
            });
        }

        self.index.insert(path.clone(), self.files.len());
        self.files.push(GeneratedFile {
            path,
            content,
            kind,
            origin,
        });
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.index
            .get(path)
            .map(|&i| self.files[i].content.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }

    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    pub fn files_of_kind(&self, kind: ArtifactKind) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter().filter(move |f| f.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(GeneratedFile::size).sum()
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a GeneratedFile;
    type IntoIter = std::slice::Iter<'a, GeneratedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut set = FileSet::new();
        set.insert("pom.xml", "a".into(), ArtifactKind::BuildDescriptor, "project")
            .unwrap();
        set.insert("README.md", "b".into(), ArtifactKind::Documentation, "project")
            .unwrap();
        set.insert("a/A.java", "c".into(), ArtifactKind::DataModel, "A")
            .unwrap();
        assert_eq!(set.paths().collect::<Vec<_>>(), ["pom.xml", "README.md", "a/A.java"]);
        assert_eq!(set.total_bytes(), 3);
    }

    #[test]
    fn collision_fails_and_keeps_first() {
        let mut set = FileSet::new();
        set.insert("x/User.java", "entity".into(), ArtifactKind::DataModel, "User")
            .unwrap();
        let err = set
            .insert("x/User.java", "enum".into(), ArtifactKind::Enumeration, "project")
            .unwrap_err();
        assert!(matches!(err, DomainError::PathCollision { ref path, .. } if path == "x/User.java"));
        assert_eq!(set.get("x/User.java"), Some("entity"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn unsafe_paths_are_rejected() {
        let mut set = FileSet::new();
        for bad in ["", "/etc/passwd", "a/../../b"] {
            assert!(
                set.insert(bad, String::new(), ArtifactKind::Support, "project")
                    .is_err(),
                "{bad:?} accepted"
            );
        }
    }
}

//! Materializes a [`FileSet`] through the [`Filesystem`] port.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::FileSet,
    error::BootforgeResult,
};

/// What [`ProjectWriter::write`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub root: PathBuf,
    pub files: usize,
    pub bytes: usize,
    /// An existing directory was replaced.
    pub replaced: bool,
}

/// Writes a file set under a root directory, all or nothing.
pub struct ProjectWriter {
    filesystem: Box<dyn Filesystem>,
}

impl ProjectWriter {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    pub fn exists(&self, root: &Path) -> bool {
        self.filesystem.exists(root)
    }

    /// Write every file under `root`.
    ///
    /// An existing `root` is an error unless `overwrite` is set, in which
    /// case it is removed first. On failure the partially written tree is
    /// removed.
    #[instrument(skip_all, fields(root = %root.display(), files = file_set.len()))]
    pub fn write(&self, file_set: &FileSet, root: &Path, overwrite: bool) -> BootforgeResult<WriteReport> {
        let replaced = self.filesystem.exists(root);
        if replaced {
            if !overwrite {
                return Err(ApplicationError::ProjectExists {
                    path: root.to_path_buf(),
                }
                .into());
            }
            warn!("Removing existing directory");
            self.filesystem.remove_dir_all(root)?;
        }

        match self.write_all(file_set, root) {
            Ok(()) => {
                info!(bytes = file_set.total_bytes(), "Project written");
                Ok(WriteReport {
                    root: root.to_path_buf(),
                    files: file_set.len(),
                    bytes: file_set.total_bytes(),
                    replaced,
                })
            }
            Err(e) => {
                warn!(error = %e, "Write failed, attempting rollback");
                self.rollback(root);
                Err(e)
            }
        }
    }

    fn write_all(&self, file_set: &FileSet, root: &Path) -> BootforgeResult<()> {
        self.filesystem.create_dir_all(root)?;
        for file in file_set {
            let path = root.join(&file.path);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &file.content)?;
            debug!(path = %file.path, "Wrote file");
        }
        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(error = %e, path = %root.display(), "Rollback failed");
        } else {
            info!("Rollback successful");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use mockall::predicate::*;

    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::ArtifactKind;
    use crate::error::BootforgeError;

    fn file_set() -> FileSet {
        let mut set = FileSet::new();
        set.insert("pom.xml", "<project/>".into(), ArtifactKind::BuildDescriptor, "project")
            .unwrap();
        set.insert(
            "src/main/java/com/example/demo/entity/User.java",
            "class User {}".into(),
            ArtifactKind::DataModel,
            "User",
        )
        .unwrap();
        set
    }

    fn io_error(path: &Path) -> BootforgeError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "disk full".into(),
        }
        .into()
    }

    #[test]
    fn writes_every_file_under_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .with(eq(Path::new("out/pom.xml")), eq("<project/>"))
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .with(
                eq(Path::new("out/src/main/java/com/example/demo/entity/User.java")),
                always(),
            )
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_remove_dir_all().never();

        let report = ProjectWriter::new(Box::new(fs))
            .write(&file_set(), Path::new("out"), false)
            .unwrap();
        assert_eq!(report.files, 2);
        assert!(!report.replaced);
    }

    #[test]
    fn existing_root_without_overwrite_is_refused() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_write_file().never();
        fs.expect_remove_dir_all().never();

        let err = ProjectWriter::new(Box::new(fs))
            .write(&file_set(), Path::new("out"), false)
            .unwrap_err();
        assert!(matches!(
            err,
            BootforgeError::Application(ApplicationError::ProjectExists { .. })
        ));
    }

    #[test]
    fn overwrite_removes_the_old_tree_first() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_remove_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let report = ProjectWriter::new(Box::new(fs))
            .write(&file_set(), Path::new("out"), true)
            .unwrap();
        assert!(report.replaced);
    }

    #[test]
    fn failed_write_rolls_back() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .returning(|path, _| Err(io_error(path)));
        fs.expect_remove_dir_all()
            .with(eq(Path::new("out")))
            .times(1)
            .returning(|_| Ok(()));

        let err = ProjectWriter::new(Box::new(fs))
            .write(&file_set(), Path::new("out"), false)
            .unwrap_err();
        assert!(matches!(
            err,
            BootforgeError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}

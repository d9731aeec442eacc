//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use bootforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{BootforgeError, BootforgeResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> BootforgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> BootforgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> BootforgeResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> BootforgeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_removes_a_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("demo");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&root.join("src/main")).unwrap();
        fs.write_file(&root.join("src/main/App.java"), "class App {}").unwrap();
        assert!(fs.exists(&root.join("src/main/App.java")));
        assert_eq!(
            std::fs::read_to_string(root.join("src/main/App.java")).unwrap(),
            "class App {}"
        );

        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }

    #[test]
    fn io_failures_carry_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("no/such/dir/file.txt");
        let err = LocalFilesystem::new().write_file(&missing, "x").unwrap_err();
        assert!(err.to_string().contains("file.txt"));
        assert!(err.to_string().contains("write file"));
    }
}

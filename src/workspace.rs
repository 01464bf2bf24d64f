//! Filesystem access rooted at the project directory.
//!
//! All artifact reads and writes go through here so the pipeline itself never
//! touches paths directly. Writes create parent directories as needed.

use crate::errors::MigrateError;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Absolute path of a workspace-relative file.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    /// Read a file's content, or `None` if it does not exist.
    pub async fn read_optional(&self, name: &str) -> Result<Option<String>, MigrateError> {
        let path = self.path(name);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path).await?))
    }

    pub async fn write(&self, name: &str, content: &str) -> Result<(), MigrateError> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, content).await?;
        Ok(())
    }

    pub async fn remove(&self, name: &str) -> Result<(), MigrateError> {
        fs::remove_file(self.path(name)).await?;
        Ok(())
    }
}

impl AsRef<Path> for Workspace {
    fn as_ref(&self) -> &Path {
        &self.root
    }
}

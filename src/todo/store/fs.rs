use super::DataStore;
use crate::error::{Result, TodoError};
use crate::model::Todo;
use std::fs;
use std::path::{Path, PathBuf};

pub const STORE_DIR: &str = ".todo";
pub const STORE_FILENAME: &str = "todos.json";

/// File-backed store. The full collection lives in a single pretty-printed
/// JSON array; every save overwrites the previous document.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by an explicit document path. Tests point this at a
    /// tempdir; nothing in here consults ambient state.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the standard location under a home directory:
    /// `<home>/.todo/todos.json`.
    pub fn in_home(home: &Path) -> Self {
        Self::new(home.join(STORE_DIR).join(STORE_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Todo>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TodoError::Io)?;
        // A zero-byte document gets the same treatment as a missing one.
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|source| TodoError::CorruptStore {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(TodoError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(todos).map_err(TodoError::Serialization)?;
        fs::write(&self.path, content).map_err(TodoError::Io)?;
        Ok(())
    }
}

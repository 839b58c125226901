use crate::error::TodoError;
use crate::task::TaskList;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed persistence for the task collection
///
/// The whole collection is read and rewritten on every operation; there is
/// no incremental update. A missing or unparsable file loads as an empty
/// collection.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the task collection
    ///
    /// Never fails: a missing file, an unreadable file, or corrupt content
    /// all yield an empty collection.
    pub fn load(&self) -> TaskList {
        if !self.file_path.exists() {
            return TaskList::new();
        }

        let Ok(content) = fs::read_to_string(&self.file_path) else {
            return TaskList::new();
        };
        TaskList::from_json_str(&content).unwrap_or_default()
    }

    /// Overwrite the file with the full task collection
    pub fn save(&self, list: &TaskList) -> Result<(), TodoError> {
        let content = serde_json::to_string_pretty(list)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}

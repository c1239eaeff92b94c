//! File capability used by export and import.
//!
//! The state container never touches the filesystem directly: it hands the
//! exported document to a [`DataFiles`] implementation and receives imported
//! text from one.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{AppError, Result};

/// Name of the exported dataset.
pub const EXPORT_FILE_NAME: &str = "budget-data.json";

pub trait DataFiles {
    /// Stores `contents` under `file_name` and returns where it ended up.
    fn save(&self, file_name: &str, contents: &str) -> Result<PathBuf>;

    /// Reads a user-chosen JSON file in full.
    fn load(&self, path: &Path) -> Result<String>;
}

/// Saves exports into a directory and reads imports from any `.json` path.
#[derive(Debug, Clone)]
pub struct DirectoryFiles {
    dir: PathBuf,
}

impl DirectoryFiles {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DataFiles for DirectoryFiles {
    fn save(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    fn load(&self, path: &Path) -> Result<String> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if !is_json {
            return Err(AppError::Import(format!(
                "{} is not a .json file",
                path.display()
            )));
        }
        Ok(fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../target/test_exports")
            .join(uuid::Uuid::new_v4().to_string())
    }

    #[test]
    fn save_creates_directory_and_load_reads_back() {
        let files = DirectoryFiles::new(scratch_dir());
        let path = files.save(EXPORT_FILE_NAME, "{\n  \"a\": 1\n}").unwrap();

        assert!(path.ends_with(EXPORT_FILE_NAME));
        assert_eq!(files.load(&path).unwrap(), "{\n  \"a\": 1\n}");

        std::fs::remove_dir_all(files.dir()).unwrap();
    }

    #[test]
    fn load_rejects_other_extensions() {
        let files = DirectoryFiles::new(scratch_dir());
        let err = files.load(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(err, AppError::Import(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let files = DirectoryFiles::new(scratch_dir());
        let err = files.load(Path::new("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}

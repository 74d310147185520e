use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::PrincipleStore;

/// Writes documents into a directory, creating it on demand.
#[derive(Debug, Clone)]
pub struct FilesystemPrincipleStore {
    output_dir: PathBuf,
}

impl FilesystemPrincipleStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }
}

impl PrincipleStore for FilesystemPrincipleStore {
    fn write_document(&self, file_name: &str, contents: &str) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

use std::path::PathBuf;

use crate::domain::AppError;

/// Destination for rendered principle documents.
pub trait PrincipleStore {
    /// Persist `contents` as `file_name`, replacing any previous version.
    ///
    /// Returns the location written.
    fn write_document(&self, file_name: &str, contents: &str) -> Result<PathBuf, AppError>;
}

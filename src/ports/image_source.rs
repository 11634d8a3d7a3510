use std::path::Path;

use crate::domain::AppError;

/// Port for reading reference image files.
pub trait ImageSource {
    /// Size of the file in bytes, read without loading the content.
    fn file_size(&self, path: &Path) -> Result<u64, AppError>;

    /// Full file content.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError>;
}

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::{ImageSource, PromptExporter};

/// Filesystem adapter for image reads and prompt export.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ImageSource for LocalFilesystem {
    fn file_size(&self, path: &Path) -> Result<u64, AppError> {
        Ok(fs::metadata(path)?.len())
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        Ok(fs::read(path)?)
    }
}

impl PromptExporter for LocalFilesystem {
    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content.as_bytes())?;
        Ok(())
    }
}

use std::path::Path;

use crate::domain::AppError;

/// Port for saving the generated prompt as a text file.
pub trait PromptExporter {
    /// Write `content` UTF-8 encoded to `path`, replacing any existing file.
    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError>;
}

use std::path::{Path, PathBuf};

/// File name used when the prompt is downloaded.
pub const EXPORT_FILE_NAME: &str = "gemini-prompt.txt";

/// Location of the exported prompt inside `directory`.
pub fn export_path(directory: &Path) -> PathBuf {
    directory.join(EXPORT_FILE_NAME)
}

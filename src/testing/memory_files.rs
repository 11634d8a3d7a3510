use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{ImageSource, PromptExporter};

/// Minimal PNG signature plus IHDR tag; enough for format sniffing.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01";

enum Entry {
    Content(Vec<u8>),
    /// Only metadata is known; reading the content is a test failure.
    Sized(u64),
}

/// In-memory image source and prompt exporter.
#[derive(Default)]
pub struct MemoryFiles {
    files: HashMap<PathBuf, Entry>,
    written: RefCell<HashMap<PathBuf, String>>,
    reads: Cell<usize>,
}

impl MemoryFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: Vec<u8>) -> Self {
        self.files.insert(path.into(), Entry::Content(content));
        self
    }

    pub fn with_sized_file(mut self, path: impl Into<PathBuf>, size: u64) -> Self {
        self.files.insert(path.into(), Entry::Sized(size));
        self
    }

    pub fn written(&self, path: &Path) -> Option<String> {
        self.written.borrow().get(path).cloned()
    }

    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.written.borrow().keys().cloned().collect()
    }

    /// Number of full content reads performed.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    fn entry(&self, path: &Path) -> Result<&Entry, AppError> {
        self.files.get(path).ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
        })
    }
}

impl ImageSource for MemoryFiles {
    fn file_size(&self, path: &Path) -> Result<u64, AppError> {
        Ok(match self.entry(path)? {
            Entry::Content(bytes) => bytes.len() as u64,
            Entry::Sized(size) => *size,
        })
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        self.reads.set(self.reads.get() + 1);
        match self.entry(path)? {
            Entry::Content(bytes) => Ok(bytes.clone()),
            Entry::Sized(_) => panic!("content of {} should not be read", path.display()),
        }
    }
}

impl PromptExporter for MemoryFiles {
    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.written.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

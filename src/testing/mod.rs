mod memory_files;
mod mock_clipboard;

pub use memory_files::{MemoryFiles, PNG_BYTES};
pub use mock_clipboard::MockClipboard;

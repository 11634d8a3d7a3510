pub mod clipboard_arboard;
pub mod local_filesystem;
pub mod template;

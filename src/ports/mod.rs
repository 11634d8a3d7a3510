mod clipboard_writer;
mod image_source;
mod prompt_exporter;

pub use clipboard_writer::ClipboardWriter;
pub use image_source::ImageSource;
pub use prompt_exporter::PromptExporter;

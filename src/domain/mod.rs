pub mod copy_feedback;
pub mod error;
pub mod export;
pub mod options;
pub mod prompt;
pub mod prompt_form;
pub mod reference_image;

pub use copy_feedback::{CopyFeedback, DEFAULT_COPY_CONFIRMATION};
pub use error::AppError;
pub use export::{EXPORT_FILE_NAME, export_path};
pub use options::{AspectRatio, Lighting, Mood, OptionKind, Style};
pub use prompt::{PromptContext, TemplateRenderer, build_prompt};
pub use prompt_form::PromptForm;
pub use reference_image::{MAX_IMAGE_BYTES, ReferenceImage};

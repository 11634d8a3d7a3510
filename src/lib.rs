//! photo-prompt: compose image-generation prompts from descriptive attributes.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppConfig, FormInput, GenerateOptions, OptionList, PromptReport, copy_prompt, copy_prompt_at,
    create_context, download_prompt, download_prompt_at, generate, generate_at, list_options,
};
pub use app::session::PromptSession;
pub use domain::{
    AppError, AspectRatio, EXPORT_FILE_NAME, Lighting, MAX_IMAGE_BYTES, Mood, PromptForm,
    ReferenceImage, Style,
};

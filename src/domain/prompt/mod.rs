//! Prompt sentence assembly.

mod builder;
mod template;

pub use builder::{PROMPT_TEMPLATE, PROMPT_TEMPLATE_NAME, build_prompt, prompt_context};
pub use template::{PromptContext, TemplateRenderer};

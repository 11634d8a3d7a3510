use super::template::{PromptContext, TemplateRenderer};
use crate::domain::{AppError, PromptForm};

pub const PROMPT_TEMPLATE_NAME: &str = "prompt.txt.j2";

/// Sentence template: base clause, optional clauses in fixed order, then the aspect ratio.
pub const PROMPT_TEMPLATE: &str = include_str!("../../assets/prompt.txt.j2");

/// Build the prompt sentence for `form`.
///
/// Optional clauses are included only when their field is non-empty after trimming.
/// Values are inserted as entered.
pub fn build_prompt<R: TemplateRenderer + ?Sized>(
    form: &PromptForm,
    renderer: &R,
) -> Result<String, AppError> {
    let context = prompt_context(form)?;
    renderer.render(PROMPT_TEMPLATE, &context, PROMPT_TEMPLATE_NAME)
}

/// Template variables for `form`. Blank clauses are passed as empty strings.
pub fn prompt_context(form: &PromptForm) -> Result<PromptContext, AppError> {
    if !form.has_subject() {
        return Err(AppError::EmptySubject);
    }

    Ok(PromptContext::new()
        .with("style", form.style.as_str())
        .with("subject", form.subject.as_str())
        .with("action", clause(&form.action))
        .with("environment", clause(&form.environment))
        .with("lighting", form.lighting.map(|l| l.as_str()).unwrap_or_default())
        .with("mood", form.mood.map(|m| m.as_str()).unwrap_or_default())
        .with("camera_details", clause(&form.camera_details))
        .with("aspect_ratio", form.aspect_ratio.as_str()))
}

fn clause(value: &str) -> &str {
    if value.trim().is_empty() { "" } else { value }
}

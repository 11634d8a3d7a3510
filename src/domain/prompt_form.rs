use serde::Serialize;

use super::{AspectRatio, Lighting, Mood, Style};

/// Field values entered by the user.
///
/// Free-text fields keep exactly what was typed. Blank values are treated as unset
/// when the prompt is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromptForm {
    /// What the image shows. Required.
    pub subject: String,
    pub action: String,
    pub environment: String,
    pub style: Style,
    pub lighting: Option<Lighting>,
    pub mood: Option<Mood>,
    pub camera_details: String,
    pub aspect_ratio: AspectRatio,
}

impl PromptForm {
    pub fn new(subject: impl Into<String>) -> Self {
        Self { subject: subject.into(), ..Self::default() }
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_subject(&self) -> bool {
        !self.subject.trim().is_empty()
    }
}

//! Form session state and the actions that mutate it.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use crate::domain::{
    AppError, CopyFeedback, PromptForm, ReferenceImage, TemplateRenderer, build_prompt,
    export_path,
};
use crate::ports::{ClipboardWriter, ImageSource, PromptExporter};

/// In-memory state of one form session.
///
/// The generated prompt is recomputed only by [`PromptSession::generate`],
/// never when a field changes.
#[derive(Debug, Clone, Default)]
pub struct PromptSession {
    pub form: PromptForm,
    image: Option<ReferenceImage>,
    generated_prompt: Option<String>,
    copy_feedback: CopyFeedback,
}

impl PromptSession {
    pub fn new(form: PromptForm) -> Self {
        Self { form, ..Self::default() }
    }

    pub fn with_copy_feedback(mut self, copy_feedback: CopyFeedback) -> Self {
        self.copy_feedback = copy_feedback;
        self
    }

    pub fn generated_prompt(&self) -> Option<&str> {
        self.generated_prompt.as_deref()
    }

    pub fn image(&self) -> Option<&ReferenceImage> {
        self.image.as_ref()
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copy_feedback.is_copied(now)
    }

    /// Build the prompt from the current form.
    ///
    /// On failure the previously generated prompt is left as it was.
    pub fn generate<R: TemplateRenderer + ?Sized>(
        &mut self,
        renderer: &R,
    ) -> Result<&str, AppError> {
        let prompt = build_prompt(&self.form, renderer)?;
        debug!(chars = prompt.len(), "generated prompt");
        self.copy_feedback.clear();
        Ok(self.generated_prompt.insert(prompt).as_str())
    }

    /// Attach a reference image, replacing any previous one.
    ///
    /// Oversized or unrecognised files are rejected and the current attachment is kept.
    pub fn attach_image<S: ImageSource + ?Sized>(
        &mut self,
        path: &Path,
        source: &S,
    ) -> Result<&ReferenceImage, AppError> {
        ReferenceImage::check_size(source.file_size(path)?)?;

        let bytes = source.read_bytes(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let image = ReferenceImage::from_bytes(&file_name, &bytes)?;

        info!(file = %image.file_name, mime = image.mime_type, bytes = image.size_bytes, "attached reference image");
        Ok(self.image.insert(image))
    }

    /// Detach the reference image and its preview.
    pub fn remove_image(&mut self) -> Option<ReferenceImage> {
        self.image.take()
    }

    /// Restore every field to its default and clear the generated prompt.
    ///
    /// The reference image stays attached; use [`PromptSession::remove_image`] to drop it.
    pub fn reset(&mut self) {
        self.form.reset();
        self.generated_prompt = None;
        self.copy_feedback.clear();
        debug!("form reset");
    }

    /// Copy the generated prompt to the clipboard.
    ///
    /// Returns `false` without touching the clipboard when nothing has been generated.
    pub fn copy<C: ClipboardWriter + ?Sized>(
        &mut self,
        clipboard: &mut C,
        now: Instant,
    ) -> Result<bool, AppError> {
        let Some(prompt) = self.generated_prompt.as_deref() else {
            debug!("copy skipped: no prompt generated");
            return Ok(false);
        };

        clipboard.write_text(prompt)?;
        self.copy_feedback.mark_copied(now);
        info!("prompt copied to clipboard");
        Ok(true)
    }

    /// Save the generated prompt to `gemini-prompt.txt` inside `directory`.
    ///
    /// Returns `None` without writing anything when nothing has been generated.
    pub fn download<E: PromptExporter + ?Sized>(
        &self,
        exporter: &E,
        directory: &Path,
    ) -> Result<Option<PathBuf>, AppError> {
        let Some(prompt) = self.generated_prompt.as_deref() else {
            debug!("download skipped: no prompt generated");
            return Ok(None);
        };

        let path = export_path(directory);
        exporter.write_text(&path, prompt)?;
        info!(path = %path.display(), "prompt exported");
        Ok(Some(path))
    }
}

//! One-shot prompt generation: fill the form, optionally attach, copy, and export.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::app::AppContext;
use crate::app::session::PromptSession;
use crate::domain::{
    AppError, AspectRatio, CopyFeedback, Lighting, Mood, PromptForm, ReferenceImage, Style,
    TemplateRenderer,
};
use crate::ports::{ClipboardWriter, ImageSource, PromptExporter};

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub subject: String,
    pub action: Option<String>,
    pub environment: Option<String>,
    pub style: Option<String>,
    pub lighting: Option<String>,
    pub mood: Option<String>,
    pub camera_details: Option<String>,
    pub aspect_ratio: Option<String>,
}

impl FormInput {
    /// Parse enumerated values and fill in defaults.
    ///
    /// Blank lighting or mood means "not selected".
    pub fn into_form(self) -> Result<PromptForm, AppError> {
        Ok(PromptForm {
            subject: self.subject,
            action: self.action.unwrap_or_default(),
            environment: self.environment.unwrap_or_default(),
            style: self
                .style
                .as_deref()
                .map(str::parse::<Style>)
                .transpose()?
                .unwrap_or_default(),
            lighting: parse_optional::<Lighting>(self.lighting.as_deref())?,
            mood: parse_optional::<Mood>(self.mood.as_deref())?,
            camera_details: self.camera_details.unwrap_or_default(),
            aspect_ratio: self
                .aspect_ratio
                .as_deref()
                .map(str::parse::<AspectRatio>)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

fn parse_optional<T>(value: Option<&str>) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr<Err = AppError>,
{
    match value {
        Some(value) if !value.trim().is_empty() => value.parse().map(Some),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub form: FormInput,
    pub image: Option<PathBuf>,
    pub copy: bool,
    pub download: bool,
    /// Overrides the configured export directory.
    pub output_dir: Option<PathBuf>,
}

/// Result of a one-shot generation.
#[derive(Debug, Clone, Serialize)]
pub struct PromptReport {
    pub prompt: String,
    pub form: PromptForm,
    pub image: Option<ReferenceImage>,
    pub copied: bool,
    pub exported_to: Option<PathBuf>,
}

pub fn execute<C, F, R>(
    ctx: &mut AppContext<C, F, R>,
    options: GenerateOptions,
) -> Result<PromptReport, AppError>
where
    C: ClipboardWriter,
    F: ImageSource + PromptExporter,
    R: TemplateRenderer,
{
    let form = options.form.into_form()?;
    let mut session = PromptSession::new(form)
        .with_copy_feedback(CopyFeedback::new(ctx.config().copy_confirmation()));

    if let Some(image) = &options.image {
        let path = ctx.resolve(image);
        session.attach_image(&path, ctx.files())?;
    }

    let prompt = session.generate(ctx.renderer())?.to_string();

    let copied = options.copy && session.copy(ctx.clipboard_mut(), Instant::now())?;

    let exported_to = if options.download {
        let dir = ctx.export_dir(options.output_dir.as_deref());
        session.download(ctx.files(), &dir)?
    } else {
        None
    };

    Ok(PromptReport {
        prompt,
        image: session.image().cloned(),
        form: session.form,
        copied,
        exported_to,
    })
}

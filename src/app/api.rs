//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::adapters::clipboard_arboard::ArboardClipboardWriter;
use crate::adapters::local_filesystem::LocalFilesystem;
use crate::app::AppContext;
use crate::app::commands::{generate as generate_command, options as options_command};
use crate::app::config::load_config;
use crate::app::session::PromptSession;

pub use crate::app::commands::generate::{FormInput, GenerateOptions, PromptReport};
pub use crate::app::commands::options::OptionList;
pub use crate::app::config::AppConfig;
pub use crate::domain::AppError;

/// Context backed by the system clipboard and the local filesystem.
pub type LocalContext = AppContext<ArboardClipboardWriter, LocalFilesystem>;

/// Create an `AppContext` rooted at `root`, loading configuration from there.
pub fn create_context(
    root: impl Into<PathBuf>,
    config_path: Option<&Path>,
) -> Result<LocalContext, AppError> {
    let root = root.into();
    let config = load_config(&root, config_path)?;
    Ok(AppContext::new(root, config, ArboardClipboardWriter::new(), LocalFilesystem::new()))
}

/// Generate a prompt in the current directory.
pub fn generate(
    options: GenerateOptions,
    config_path: Option<&Path>,
) -> Result<PromptReport, AppError> {
    generate_at(std::env::current_dir()?, options, config_path)
}

/// Generate a prompt with paths and config resolved against `root`.
pub fn generate_at(
    root: impl Into<PathBuf>,
    options: GenerateOptions,
    config_path: Option<&Path>,
) -> Result<PromptReport, AppError> {
    let mut ctx = create_context(root, config_path)?;
    generate_command::execute(&mut ctx, options)
}

/// Copy the session's generated prompt to the system clipboard.
///
/// Returns `false` without opening the clipboard when nothing has been generated.
pub fn copy_prompt(
    session: &mut PromptSession,
    config_path: Option<&Path>,
) -> Result<bool, AppError> {
    copy_prompt_at(std::env::current_dir()?, session, config_path)
}

/// Copy the session's generated prompt, with config resolved against `root`.
pub fn copy_prompt_at(
    root: impl Into<PathBuf>,
    session: &mut PromptSession,
    config_path: Option<&Path>,
) -> Result<bool, AppError> {
    let mut ctx = create_context(root, config_path)?;
    session.copy(ctx.clipboard_mut(), Instant::now())
}

/// Save the session's generated prompt as `gemini-prompt.txt` in the current directory.
pub fn download_prompt(
    session: &PromptSession,
    output_dir: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<Option<PathBuf>, AppError> {
    download_prompt_at(std::env::current_dir()?, session, output_dir, config_path)
}

/// Save the session's generated prompt with `output_dir` and config resolved against `root`.
///
/// Without `output_dir` the configured export directory is used.
pub fn download_prompt_at(
    root: impl Into<PathBuf>,
    session: &PromptSession,
    output_dir: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<Option<PathBuf>, AppError> {
    let ctx = create_context(root, config_path)?;
    let dir = ctx.export_dir(output_dir);
    session.download(ctx.files(), &dir)
}

/// List enumerated form values, optionally for a single kind.
pub fn list_options(kind: Option<&str>) -> Result<Vec<OptionList>, AppError> {
    options_command::execute(kind)
}

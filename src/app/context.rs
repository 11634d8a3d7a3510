use std::path::{Path, PathBuf};

use crate::adapters::template::MinijinjaTemplateRenderer;
use crate::app::config::AppConfig;
use crate::domain::TemplateRenderer;
use crate::ports::{ClipboardWriter, ImageSource, PromptExporter};

/// Application context holding dependencies for command execution.
pub struct AppContext<C, F, R = MinijinjaTemplateRenderer>
where
    C: ClipboardWriter,
    F: ImageSource + PromptExporter,
    R: TemplateRenderer,
{
    root: PathBuf,
    config: AppConfig,
    clipboard: C,
    files: F,
    renderer: R,
}

impl<C, F> AppContext<C, F, MinijinjaTemplateRenderer>
where
    C: ClipboardWriter,
    F: ImageSource + PromptExporter,
{
    /// Create a new application context rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, config: AppConfig, clipboard: C, files: F) -> Self {
        Self::with_renderer(root, config, clipboard, files, MinijinjaTemplateRenderer::new())
    }
}

impl<C, F, R> AppContext<C, F, R>
where
    C: ClipboardWriter,
    F: ImageSource + PromptExporter,
    R: TemplateRenderer,
{
    pub fn with_renderer(
        root: impl Into<PathBuf>,
        config: AppConfig,
        clipboard: C,
        files: F,
        renderer: R,
    ) -> Self {
        Self { root: root.into(), config, clipboard, files, renderer }
    }

    /// Working directory that relative paths resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    pub fn files(&self) -> &F {
        &self.files
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Resolve a user-supplied path against the context root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Directory that receives the exported prompt.
    pub fn export_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        match override_dir {
            Some(dir) => self.resolve(dir),
            None => self.config.export_dir(&self.root),
        }
    }
}

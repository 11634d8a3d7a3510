use std::io;

use thiserror::Error;

use super::reference_image::MAX_IMAGE_BYTES;

/// Library-wide error type for photo-prompt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Subject is empty after trimming; prompt generation is blocked.
    #[error("Please enter an image subject")]
    EmptySubject,

    /// Reference image exceeds the upload cap.
    #[error(
        "File is too large ({size_bytes} bytes). Maximum {} MB",
        MAX_IMAGE_BYTES / (1024 * 1024)
    )]
    ImageTooLarge { size_bytes: u64 },

    /// File content is not a recognised image format.
    #[error("Unsupported image '{0}': not a recognised image format")]
    UnsupportedImage(String),

    /// Value is not one of the enumerated options.
    #[error("Invalid {kind} '{value}'. Run 'photo-prompt options {kind}' to list valid values")]
    InvalidOption { kind: &'static str, value: String },

    /// Option family name is not recognised.
    #[error("Unknown option kind '{0}': expected style, lighting, mood, or aspect-ratio")]
    UnknownOptionKind(String),

    /// Clipboard backend failure.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Configuration value is out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Template engine failure.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// JSON serialization failure.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Interactive prompt failure.
    #[error("{0}")]
    Interaction(String),
}

impl AppError {
    /// Whether this error is a user-facing validation message the form can recover from.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::EmptySubject
                | AppError::ImageTooLarge { .. }
                | AppError::UnsupportedImage(_)
                | AppError::InvalidOption { .. }
        )
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::EmptySubject
            | AppError::ImageTooLarge { .. }
            | AppError::UnsupportedImage(_)
            | AppError::InvalidOption { .. }
            | AppError::UnknownOptionKind(_)
            | AppError::InvalidConfig(_)
            | AppError::ConfigParse(_) => io::ErrorKind::InvalidInput,
            AppError::ClipboardError(_)
            | AppError::TemplateRender { .. }
            | AppError::Serialization(_)
            | AppError::Interaction(_) => io::ErrorKind::Other,
        }
    }
}

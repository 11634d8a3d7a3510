use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use image::ImageFormat;
use serde::Serialize;

use super::AppError;

/// Upload cap for reference images (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// A reference image attached to the form, with its inline preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceImage {
    pub file_name: String,
    pub size_bytes: u64,
    pub mime_type: &'static str,
    /// `data:<mime>;base64,<payload>`
    #[serde(skip_serializing)]
    pub data_url: String,
}

impl ReferenceImage {
    /// Reject sizes over the upload cap.
    pub fn check_size(size_bytes: u64) -> Result<(), AppError> {
        if size_bytes > MAX_IMAGE_BYTES {
            return Err(AppError::ImageTooLarge { size_bytes });
        }
        Ok(())
    }

    /// Decode raw file content into an attachment.
    ///
    /// The format is sniffed from the content first, then from the file extension.
    pub fn from_bytes(file_name: &str, bytes: &[u8]) -> Result<Self, AppError> {
        let size_bytes = bytes.len() as u64;
        Self::check_size(size_bytes)?;

        let format = image::guess_format(bytes)
            .ok()
            .or_else(|| ImageFormat::from_path(Path::new(&file_name.to_ascii_lowercase())).ok())
            .ok_or_else(|| AppError::UnsupportedImage(file_name.to_string()))?;
        let mime_type = format.to_mime_type();

        Ok(Self {
            file_name: file_name.to_string(),
            size_bytes,
            mime_type,
            data_url: format!("data:{};base64,{}", mime_type, B64.encode(bytes)),
        })
    }

    /// Human-readable size, e.g. `1.5 KB`.
    pub fn display_size(&self) -> String {
        let size = self.size_bytes as f64;
        if size >= 1024.0 * 1024.0 {
            format!("{:.1} MB", size / (1024.0 * 1024.0))
        } else if size >= 1024.0 {
            format!("{:.1} KB", size / 1024.0)
        } else {
            format!("{} B", self.size_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn png_content_produces_data_url() {
        let image = ReferenceImage::from_bytes("ref.png", PNG_HEADER).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert!(image.data_url.starts_with("data:image/png;base64,iVBORw0KGgo"));
        assert_eq!(image.size_bytes, PNG_HEADER.len() as u64);
    }

    #[test]
    fn extension_is_used_when_content_is_unrecognised() {
        let image = ReferenceImage::from_bytes("photo.JPG", b"not really a jpeg").unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[test]
    fn non_image_is_rejected() {
        let err = ReferenceImage::from_bytes("notes.txt", b"hello").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedImage(name) if name == "notes.txt"));
    }

    #[test]
    fn size_cap_is_inclusive() {
        assert!(ReferenceImage::check_size(MAX_IMAGE_BYTES).is_ok());
        assert!(matches!(
            ReferenceImage::check_size(MAX_IMAGE_BYTES + 1),
            Err(AppError::ImageTooLarge { size_bytes }) if size_bytes == MAX_IMAGE_BYTES + 1
        ));
    }

    #[test]
    fn display_size_picks_unit() {
        let mut image = ReferenceImage::from_bytes("a.gif", b"GIF89a").unwrap();
        assert_eq!(image.display_size(), "6 B");
        image.size_bytes = 1536;
        assert_eq!(image.display_size(), "1.5 KB");
        image.size_bytes = 3 * 1024 * 1024;
        assert_eq!(image.display_size(), "3.0 MB");
    }
}

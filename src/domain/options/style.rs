use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::normalize;
use crate::domain::AppError;

/// Art style the image should be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Photorealistic,
    Cinematic,
    OilPainting,
    Watercolor,
    CharcoalDrawing,
    Anime,
    CartoonIllustration,
    Vintage,
    FilmNoir,
    ModernIllustration,
    Render3d,
    DigitalArt,
}

impl Style {
    /// All styles in menu order.
    pub const ALL: [Style; 12] = [
        Style::Photorealistic,
        Style::Cinematic,
        Style::OilPainting,
        Style::Watercolor,
        Style::CharcoalDrawing,
        Style::Anime,
        Style::CartoonIllustration,
        Style::Vintage,
        Style::FilmNoir,
        Style::ModernIllustration,
        Style::Render3d,
        Style::DigitalArt,
    ];

    /// Text inserted into the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Photorealistic => "photorealistic",
            Style::Cinematic => "cinematic",
            Style::OilPainting => "oil painting",
            Style::Watercolor => "watercolor",
            Style::CharcoalDrawing => "charcoal drawing",
            Style::Anime => "anime",
            Style::CartoonIllustration => "cartoon illustration",
            Style::Vintage => "vintage",
            Style::FilmNoir => "film noir",
            Style::ModernIllustration => "modern illustration",
            Style::Render3d => "3D render",
            Style::DigitalArt => "digital art",
        }
    }
}

impl FromStr for Style {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(value);
        Style::ALL
            .into_iter()
            .find(|style| normalize(style.as_str()) == wanted)
            .ok_or_else(|| AppError::InvalidOption { kind: "style", value: value.to_string() })
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_photorealistic() {
        assert_eq!(Style::default(), Style::Photorealistic);
    }

    #[test]
    fn parses_every_canonical_value() {
        for style in Style::ALL {
            assert_eq!(style.as_str().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn parses_kebab_spelling() {
        assert_eq!("oil-painting".parse::<Style>().unwrap(), Style::OilPainting);
        assert_eq!("3d-render".parse::<Style>().unwrap(), Style::Render3d);
    }

    #[test]
    fn rejects_unknown_style() {
        let err = "pointillism".parse::<Style>().unwrap_err();
        assert!(matches!(err, AppError::InvalidOption { kind: "style", .. }));
    }
}

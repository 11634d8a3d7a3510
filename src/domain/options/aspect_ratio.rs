use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::normalize;
use crate::domain::AppError;

/// Width:height designation appended to every prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AspectRatio {
    Square,
    #[default]
    Landscape,
    Portrait,
    Classic,
    PortraitClassic,
    InstagramPortrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 6] = [
        AspectRatio::Square,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
        AspectRatio::Classic,
        AspectRatio::PortraitClassic,
        AspectRatio::InstagramPortrait,
    ];

    /// Ratio text inserted into the prompt, e.g. `16:9`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Classic => "3:2",
            AspectRatio::PortraitClassic => "2:3",
            AspectRatio::InstagramPortrait => "4:5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Square => "Square",
            AspectRatio::Landscape => "Landscape",
            AspectRatio::Portrait => "Portrait",
            AspectRatio::Classic => "Classic",
            AspectRatio::PortraitClassic => "Portrait Classic",
            AspectRatio::InstagramPortrait => "Instagram Portrait",
        }
    }

    /// Menu entry such as `16:9 (Landscape)`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.as_str(), self.label())
    }
}

impl FromStr for AspectRatio {
    type Err = AppError;

    /// Accepts `16:9`, `16x9`, or the label (`landscape`).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim().to_lowercase().replace('x', ":");
        let wanted = normalize(value);
        AspectRatio::ALL
            .into_iter()
            .find(|ratio| ratio.as_str() == trimmed || normalize(ratio.label()) == wanted)
            .ok_or_else(|| AppError::InvalidOption {
                kind: "aspect-ratio",
                value: value.to_string(),
            })
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AspectRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

//! Enumerated form options: art style, lighting, mood, and aspect ratio.

mod aspect_ratio;
mod lighting;
mod mood;
mod style;

pub use aspect_ratio::AspectRatio;
pub use lighting::Lighting;
pub use mood::Mood;
pub use style::Style;

/// Option families that can be listed or parsed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Style,
    Lighting,
    Mood,
    AspectRatio,
}

impl OptionKind {
    pub const ALL: [OptionKind; 4] =
        [OptionKind::Style, OptionKind::Lighting, OptionKind::Mood, OptionKind::AspectRatio];

    pub fn name(&self) -> &'static str {
        match self {
            OptionKind::Style => "style",
            OptionKind::Lighting => "lighting",
            OptionKind::Mood => "mood",
            OptionKind::AspectRatio => "aspect-ratio",
        }
    }

    pub fn from_name(name: &str) -> Option<OptionKind> {
        match normalize(name).as_str() {
            "style" | "styles" => Some(OptionKind::Style),
            "lighting" => Some(OptionKind::Lighting),
            "mood" | "moods" => Some(OptionKind::Mood),
            "aspect ratio" | "aspect ratios" | "ratio" => Some(OptionKind::AspectRatio),
            _ => None,
        }
    }

    /// Display labels for every value of this kind, in menu order.
    pub fn labels(&self) -> Vec<String> {
        match self {
            OptionKind::Style => Style::ALL.iter().map(|s| s.as_str().to_string()).collect(),
            OptionKind::Lighting => Lighting::ALL.iter().map(|l| l.as_str().to_string()).collect(),
            OptionKind::Mood => Mood::ALL.iter().map(|m| m.as_str().to_string()).collect(),
            OptionKind::AspectRatio => AspectRatio::ALL.iter().map(|r| r.display_label()).collect(),
        }
    }
}

/// Fold case and treat `-`, `_`, and runs of whitespace as a single space.
pub(crate) fn normalize(value: &str) -> String {
    value
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::normalize;
use crate::domain::AppError;

/// Atmosphere the image should convey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Peaceful,
    Dramatic,
    Mysterious,
    Joyful,
    Melancholic,
    Energetic,
    Surreal,
    Romantic,
    Futuristic,
    Vintage,
}

impl Mood {
    pub const ALL: [Mood; 10] = [
        Mood::Peaceful,
        Mood::Dramatic,
        Mood::Mysterious,
        Mood::Joyful,
        Mood::Melancholic,
        Mood::Energetic,
        Mood::Surreal,
        Mood::Romantic,
        Mood::Futuristic,
        Mood::Vintage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Peaceful => "peaceful",
            Mood::Dramatic => "dramatic",
            Mood::Mysterious => "mysterious",
            Mood::Joyful => "joyful",
            Mood::Melancholic => "melancholic",
            Mood::Energetic => "energetic",
            Mood::Surreal => "surreal",
            Mood::Romantic => "romantic",
            Mood::Futuristic => "futuristic",
            Mood::Vintage => "vintage",
        }
    }
}

impl FromStr for Mood {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(value);
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == wanted)
            .ok_or_else(|| AppError::InvalidOption { kind: "mood", value: value.to_string() })
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Mood {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_canonical_value() {
        for mood in Mood::ALL {
            assert_eq!(mood.as_str().parse::<Mood>().unwrap(), mood);
        }
    }

    #[test]
    fn rejects_unknown_mood() {
        let err = "grumpy".parse::<Mood>().unwrap_err();
        assert!(err.to_string().contains("Invalid mood 'grumpy'"));
    }
}

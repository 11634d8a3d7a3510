use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::normalize;
use crate::domain::AppError;

/// How the scene is lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lighting {
    NaturalSunlight,
    GoldenHour,
    BlueHour,
    StudioLighting,
    NeonLights,
    Candlelight,
    DramaticShadows,
    SoftDiffusedLight,
    HarshDirectLight,
    Backlighting,
}

impl Lighting {
    pub const ALL: [Lighting; 10] = [
        Lighting::NaturalSunlight,
        Lighting::GoldenHour,
        Lighting::BlueHour,
        Lighting::StudioLighting,
        Lighting::NeonLights,
        Lighting::Candlelight,
        Lighting::DramaticShadows,
        Lighting::SoftDiffusedLight,
        Lighting::HarshDirectLight,
        Lighting::Backlighting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lighting::NaturalSunlight => "natural sunlight",
            Lighting::GoldenHour => "golden hour",
            Lighting::BlueHour => "blue hour",
            Lighting::StudioLighting => "studio lighting",
            Lighting::NeonLights => "neon lights",
            Lighting::Candlelight => "candlelight",
            Lighting::DramaticShadows => "dramatic shadows",
            Lighting::SoftDiffusedLight => "soft diffused light",
            Lighting::HarshDirectLight => "harsh direct light",
            Lighting::Backlighting => "backlighting",
        }
    }
}

impl FromStr for Lighting {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(value);
        Lighting::ALL
            .into_iter()
            .find(|lighting| normalize(lighting.as_str()) == wanted)
            .ok_or_else(|| AppError::InvalidOption { kind: "lighting", value: value.to_string() })
    }
}

impl fmt::Display for Lighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Lighting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

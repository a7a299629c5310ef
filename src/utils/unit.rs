use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum QuantityUnitError {
    #[error("Invalid quantity unit: {0}")]
    InvalidUnit(String),
}

/// Units a package size can be entered in. Volumes are treated as masses of
/// the same magnitude (1 l is compared against 1 kg).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuantityUnit {
    #[default]
    G,
    Kg,
    Ml,
    L,
}

impl QuantityUnit {
    pub const ALL: [QuantityUnit; 4] = [
        QuantityUnit::G,
        QuantityUnit::Kg,
        QuantityUnit::Ml,
        QuantityUnit::L,
    ];

    /// How many of this unit make up one kilogram (or liter).
    pub fn per_canonical(&self) -> f64 {
        match self {
            QuantityUnit::G | QuantityUnit::Ml => 1000.0,
            QuantityUnit::Kg | QuantityUnit::L => 1.0,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            QuantityUnit::G => "g",
            QuantityUnit::Kg => "kg",
            QuantityUnit::Ml => "ml",
            QuantityUnit::L => "l",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuantityUnit::G => "г",
            QuantityUnit::Kg => "кг",
            QuantityUnit::Ml => "мл",
            QuantityUnit::L => "л",
        }
    }
}

impl fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for QuantityUnit {
    type Err = QuantityUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" | "г" => Ok(QuantityUnit::G),
            "kg" | "кг" => Ok(QuantityUnit::Kg),
            "ml" | "мл" => Ok(QuantityUnit::Ml),
            "l" | "л" => Ok(QuantityUnit::L),
            _ => Err(QuantityUnitError::InvalidUnit(s.to_string())),
        }
    }
}

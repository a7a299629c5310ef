use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Price per kilogram at which the gauge shows as full.
pub const GAUGE_FULL_SCALE: f64 = 80.0;

#[derive(Debug, Error, PartialEq)]
pub enum TierThresholdsError {
    #[error("Tier bound {0} must be positive and finite")]
    NotPositive(f64),

    #[error("Tier bounds must be strictly ascending: {0} is not above {1}")]
    NotAscending(f64, f64),
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    Excellent,
    Normal,
    Expensive,
    VeryExpensive,
    ExtremelyExpensive,
}

impl PriceTier {
    pub fn label(&self) -> &'static str {
        match self {
            PriceTier::Excellent => "Отлично",
            PriceTier::Normal => "Нормально",
            PriceTier::Expensive => "Дороговато",
            PriceTier::VeryExpensive => "Дорого",
            PriceTier::ExtremelyExpensive => "Очень Дорого",
        }
    }

    /// 0 for the cheapest tier, rising with price.
    pub fn severity(&self) -> u8 {
        *self as u8
    }

    pub fn color(&self) -> &'static str {
        match self {
            PriceTier::Excellent => "#34C759",
            PriceTier::Normal => "#007AFF",
            PriceTier::Expensive => "#FFCC00",
            PriceTier::VeryExpensive => "#FF9500",
            PriceTier::ExtremelyExpensive => "#FF3B30",
        }
    }

    pub fn text_color(&self) -> &'static str {
        match self {
            PriceTier::Expensive => "#000000",
            _ => "#FFFFFF",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PriceTier::Excellent => "check-circle",
            PriceTier::Normal => "info",
            PriceTier::Expensive => "trending-up",
            PriceTier::VeryExpensive | PriceTier::ExtremelyExpensive => "alert-circle",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Inclusive upper bounds of every tier but the last.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TierThresholds {
    pub excellent: f64,
    pub normal: f64,
    pub expensive: f64,
    pub very_expensive: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            excellent: 20.0,
            normal: 30.0,
            expensive: 45.0,
            very_expensive: 60.0,
        }
    }
}

impl TierThresholds {
    fn bounds(&self) -> [(f64, PriceTier); 4] {
        [
            (self.excellent, PriceTier::Excellent),
            (self.normal, PriceTier::Normal),
            (self.expensive, PriceTier::Expensive),
            (self.very_expensive, PriceTier::VeryExpensive),
        ]
    }

    pub fn validate(&self) -> Result<(), TierThresholdsError> {
        let mut previous = 0.0;
        for (bound, _) in self.bounds() {
            if !bound.is_finite() || bound <= 0.0 {
                return Err(TierThresholdsError::NotPositive(bound));
            }
            if bound <= previous {
                return Err(TierThresholdsError::NotAscending(bound, previous));
            }
            previous = bound;
        }
        Ok(())
    }

    pub fn classify(&self, price_per_kilogram: f64) -> Option<PriceTier> {
        if price_per_kilogram.is_nan() || price_per_kilogram <= 0.0 {
            return None;
        }

        let tier = self
            .bounds()
            .into_iter()
            .find(|(bound, _)| price_per_kilogram <= *bound)
            .map_or(PriceTier::ExtremelyExpensive, |(_, tier)| tier);

        Some(tier)
    }
}

/// Classifies against the default thresholds.
pub fn classify(price_per_kilogram: f64) -> Option<PriceTier> {
    TierThresholds::default().classify(price_per_kilogram)
}

/// Fill level of the price gauge, in percent.
pub fn gauge_fill_percent(price_per_kilogram: f64) -> f64 {
    if price_per_kilogram.is_nan() || price_per_kilogram <= 0.0 {
        return 0.0;
    }
    (price_per_kilogram / GAUGE_FULL_SCALE * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_the_lower_tier() {
        assert_eq!(classify(20.0), Some(PriceTier::Excellent));
        assert_eq!(classify(20.01), Some(PriceTier::Normal));
        assert_eq!(classify(30.0), Some(PriceTier::Normal));
        assert_eq!(classify(45.0), Some(PriceTier::Expensive));
        assert_eq!(classify(45.5), Some(PriceTier::VeryExpensive));
        assert_eq!(classify(60.0), Some(PriceTier::VeryExpensive));
        assert_eq!(classify(60.01), Some(PriceTier::ExtremelyExpensive));
        assert_eq!(classify(10_000.0), Some(PriceTier::ExtremelyExpensive));
    }

    #[test]
    fn no_tier_without_a_price() {
        assert_eq!(classify(0.0), None);
        assert_eq!(classify(-5.0), None);
        assert_eq!(classify(f64::NAN), None);
        assert_eq!(classify(0.01), Some(PriceTier::Excellent));
    }

    #[test]
    fn severity_follows_price() {
        assert!(PriceTier::Excellent < PriceTier::ExtremelyExpensive);
        assert_eq!(PriceTier::Excellent.severity(), 0);
        assert_eq!(PriceTier::ExtremelyExpensive.severity(), 4);
    }

    #[test]
    fn custom_thresholds() {
        let thresholds = TierThresholds {
            excellent: 5.0,
            normal: 10.0,
            expensive: 15.0,
            very_expensive: 20.0,
        };
        assert!(thresholds.validate().is_ok());
        assert_eq!(thresholds.classify(20.0), Some(PriceTier::VeryExpensive));
        assert_eq!(thresholds.classify(21.0), Some(PriceTier::ExtremelyExpensive));
    }

    #[test]
    fn rejects_unordered_thresholds() {
        let thresholds = TierThresholds {
            normal: 10.0,
            ..Default::default()
        };
        assert_eq!(
            thresholds.validate(),
            Err(TierThresholdsError::NotAscending(10.0, 20.0))
        );

        let thresholds = TierThresholds {
            excellent: 0.0,
            ..Default::default()
        };
        assert_eq!(
            thresholds.validate(),
            Err(TierThresholdsError::NotPositive(0.0))
        );
    }

    #[test]
    fn gauge_saturates() {
        assert_eq!(gauge_fill_percent(40.0), 50.0);
        assert_eq!(gauge_fill_percent(120.0), 100.0);
        assert_eq!(gauge_fill_percent(0.0), 0.0);
    }

    #[test]
    fn labels() {
        assert_eq!(PriceTier::Excellent.to_string(), "Отлично");
        assert_eq!(PriceTier::Expensive.text_color(), "#000000");
        assert_eq!(PriceTier::VeryExpensive.icon(), "alert-circle");
    }
}

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

use crate::utils::{
    price::{normalize, parse_amount},
    unit::QuantityUnit,
};

use super::price_tier::{PriceTier, TierThresholds};

#[derive(Debug, Error, PartialEq)]
pub enum EntryError {
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),

    #[error("Price per kilogram out of range for price {0} and quantity {1}")]
    OutOfRange(f64, f64),
}

/// Live result for the entry being typed in.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Quote {
    pub price_per_kilogram: f64,
    pub tier: PriceTier,
}

/// Raw, not yet validated input for a new entry.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub unit: QuantityUnit,
}

impl EntryDraft {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
        unit: QuantityUnit,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            quantity: quantity.into(),
            unit,
        }
    }

    /// Checked price and quantity, in that order.
    pub fn amounts(&self) -> Result<(f64, f64), EntryError> {
        let price = parse_amount(&self.price)
            .filter(|v| *v > 0.0)
            .ok_or_else(|| EntryError::InvalidPrice(self.price.clone()))?;
        let quantity = parse_amount(&self.quantity)
            .filter(|v| *v > 0.0)
            .ok_or_else(|| EntryError::InvalidQuantity(self.quantity.clone()))?;

        Ok((price, quantity))
    }

    pub fn price_per_kilogram(&self) -> Option<f64> {
        let (price, quantity) = self.amounts().ok()?;
        normalize(price, quantity, self.unit)
    }

    pub fn quote(&self, thresholds: &TierThresholds) -> Option<Quote> {
        let price_per_kilogram = self.price_per_kilogram()?;
        let tier = thresholds.classify(price_per_kilogram)?;

        Some(Quote {
            price_per_kilogram,
            tier,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PricedEntry {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    pub unit: QuantityUnit,
    pub price_per_kilogram: f64,
    pub created_at: u64,
}

impl PricedEntry {
    /// Builds an entry from a draft. `fallback_name` is used when the draft
    /// name is blank.
    pub fn from_draft(draft: &EntryDraft, fallback_name: String) -> Result<Self, EntryError> {
        let (price, quantity) = draft.amounts()?;
        let price_per_kilogram =
            normalize(price, quantity, draft.unit).ok_or(EntryError::OutOfRange(price, quantity))?;

        let name = match draft.name.trim() {
            "" => fallback_name,
            trimmed => trimmed.to_string(),
        };

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            price,
            quantity,
            unit: draft.unit,
            price_per_kilogram,
            created_at: now_millis(),
        })
    }

    pub fn tier(&self, thresholds: &TierThresholds) -> Option<PriceTier> {
        thresholds.classify(self.price_per_kilogram)
    }

    /// e.g. `2.50 BYN за 500г`
    pub fn summary(&self, currency: &str) -> String {
        format!(
            "{:.2} {currency} за {}{}",
            self.price,
            self.quantity,
            self.unit.label()
        )
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::utils::price::round_cents;

use super::priced_entry::PricedEntry;

/// How much more one entry costs per kilogram than the winner.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SavingsInsight {
    pub id: Uuid,
    pub name: String,
    /// Share of this entry's price per kilogram saved by buying the winner,
    /// rounded half away from zero.
    pub savings_percent: i64,
    /// Price per kilogram difference, rounded to cents.
    pub absolute_difference: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ComparisonResult {
    pub winner: PricedEntry,
    pub insights: Vec<SavingsInsight>,
}

impl ComparisonResult {
    pub fn is_winner(&self, id: &Uuid) -> bool {
        self.winner.id == *id
    }
}

/// Ranks entries by price per kilogram. Returns `None` when fewer than two
/// entries carry a usable price.
pub fn compare(entries: &[PricedEntry]) -> Option<ComparisonResult> {
    let mut ranked: Vec<&PricedEntry> = entries
        .iter()
        .filter(|e| e.price_per_kilogram.is_finite() && e.price_per_kilogram > 0.0)
        .collect();

    if ranked.len() < 2 {
        return None;
    }

    // stable: equal prices keep list order
    ranked.sort_by(|a, b| a.price_per_kilogram.total_cmp(&b.price_per_kilogram));

    let winner = ranked[0];
    let mut insights: Vec<SavingsInsight> = ranked[1..]
        .iter()
        .map(|entry| savings_against(winner, entry))
        .collect();

    insights.sort_by(|a, b| b.savings_percent.cmp(&a.savings_percent));

    debug!(
        "compared {} entries, winner {} at {:.2}/kg",
        ranked.len(),
        winner.id,
        winner.price_per_kilogram
    );

    Some(ComparisonResult {
        winner: winner.clone(),
        insights,
    })
}

fn savings_against(winner: &PricedEntry, entry: &PricedEntry) -> SavingsInsight {
    let difference = entry.price_per_kilogram - winner.price_per_kilogram;
    let savings_percent = (difference / entry.price_per_kilogram * 100.0).round() as i64;

    SavingsInsight {
        id: entry.id,
        name: entry.name.clone(),
        savings_percent,
        absolute_difference: round_cents(difference),
    }
}

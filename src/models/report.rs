use serde::Serialize;
use std::fmt;

use crate::config::Settings;

use super::{
    comparison::ComparisonResult,
    price_list::PriceList,
    price_tier::{PriceTier, gauge_fill_percent},
    priced_entry::{PricedEntry, Quote},
};

#[derive(Debug, Serialize, Clone)]
pub struct QuoteReport {
    pub price_per_kilogram: f64,
    pub tier: PriceTier,
    pub label: &'static str,
    pub color: &'static str,
    pub gauge_percent: f64,
    pub currency: String,
}

impl QuoteReport {
    pub fn new(quote: &Quote, settings: &Settings) -> Self {
        Self {
            price_per_kilogram: quote.price_per_kilogram,
            tier: quote.tier,
            label: quote.tier.label(),
            color: quote.tier.color(),
            gauge_percent: gauge_fill_percent(quote.price_per_kilogram),
            currency: settings.currency.clone(),
        }
    }
}

impl fmt::Display for QuoteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Итог за кг: {:.2} {} [{}]",
            self.price_per_kilogram, self.currency, self.label
        )
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct EntryView<'a> {
    #[serde(flatten)]
    pub entry: &'a PricedEntry,
    pub tier: Option<PriceTier>,
    pub gauge_percent: f64,
    pub is_best: bool,
}

/// Snapshot of a list for printing: entries with their tiers plus the
/// comparison, if there is one.
#[derive(Debug, Serialize, Clone)]
pub struct ListReport<'a> {
    pub currency: &'a str,
    pub entries: Vec<EntryView<'a>>,
    pub comparison: Option<ComparisonResult>,
}

impl<'a> ListReport<'a> {
    pub fn new(list: &'a PriceList, settings: &'a Settings) -> Self {
        let comparison = list.comparison();

        let entries = list
            .entries()
            .iter()
            .map(|entry| EntryView {
                entry,
                tier: entry.tier(&settings.tiers),
                gauge_percent: gauge_fill_percent(entry.price_per_kilogram),
                is_best: comparison.as_ref().is_some_and(|c| c.is_winner(&entry.id)),
            })
            .collect();

        Self {
            currency: &settings.currency,
            entries,
            comparison,
        }
    }

    pub fn write_entries(&self, f: &mut impl fmt::Write) -> fmt::Result {
        writeln!(f, "История ({})", self.entries.len())?;
        if self.entries.is_empty() {
            return writeln!(f, "  Список пуст");
        }

        for view in &self.entries {
            let marker = if view.is_best { "*" } else { " " };
            let label = view.tier.map_or("", |t| t.label());
            writeln!(
                f,
                "{marker} {} | {} | {:.2} {}/кг | {label} | {}",
                view.entry.name,
                view.entry.summary(self.currency),
                view.entry.price_per_kilogram,
                self.currency,
                view.entry.id
            )?;
        }
        Ok(())
    }

    pub fn write_comparison(&self, f: &mut impl fmt::Write) -> fmt::Result {
        let Some(comparison) = &self.comparison else {
            return Ok(());
        };

        writeln!(f, "Анализ выгоды")?;
        writeln!(
            f,
            "  Товар {} выгоднее остальных:",
            comparison.winner.name
        )?;
        for insight in &comparison.insights {
            writeln!(
                f,
                "  Против {}: дешевле на {}%, экономия -{:.2} {}/кг",
                insight.name, insight.savings_percent, insight.absolute_difference, self.currency
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ListReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_comparison(f)?;
        self.write_entries(f)
    }
}

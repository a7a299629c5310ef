pub mod config;
pub mod events;
pub mod handlers;
pub mod models;
pub mod utils;

pub use config::{Settings, SettingsError};
pub use models::{
    comparison::{ComparisonResult, SavingsInsight, compare},
    price_list::PriceList,
    price_tier::{PriceTier, TierThresholds, classify, gauge_fill_percent},
    priced_entry::{EntryDraft, EntryError, PricedEntry, Quote},
};
pub use utils::{
    price::{normalize, normalize_input, parse_amount},
    unit::QuantityUnit,
};

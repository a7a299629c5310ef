pub mod comparison;
pub mod price_list;
pub mod price_tier;
pub mod priced_entry;
pub mod report;

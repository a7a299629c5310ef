use std::io::Write;
use thiserror::Error;
use tracing::warn;

use crate::{
    config::Settings,
    models::{price_list::PriceList, priced_entry::EntryDraft, report::ListReport},
    utils::unit::QuantityUnitError,
};

use super::{HandlerError, write_json};

#[derive(Debug, Error, PartialEq)]
pub enum ItemSpecError {
    #[error("Expected NAME;PRICE;QUANTITY;UNIT, got {0:?}")]
    Format(String),

    #[error(transparent)]
    Unit(#[from] QuantityUnitError),
}

/// Parses `NAME;PRICE;QUANTITY;UNIT`. The name may be empty.
pub fn parse_item_spec(spec: &str) -> Result<EntryDraft, ItemSpecError> {
    let fields: Vec<&str> = spec.split(';').map(str::trim).collect();
    let [name, price, quantity, unit] = fields.as_slice() else {
        return Err(ItemSpecError::Format(spec.to_string()));
    };

    Ok(EntryDraft::new(*name, *price, *quantity, unit.parse()?))
}

/// Builds a list from item specs, in order, and prints it with its
/// comparison. Specs that do not make a valid entry are skipped.
pub fn handle_compare(
    items: &[String],
    settings: &Settings,
    json: bool,
    out: &mut impl Write,
) -> Result<PriceList, HandlerError> {
    let mut list = settings.price_list();

    for spec in items {
        let draft = match parse_item_spec(spec) {
            Ok(draft) => draft,
            Err(e) => {
                warn!("Skipping item {spec:?}: {e}");
                continue;
            }
        };

        if let Err(e) = list.add(&draft) {
            warn!("Skipping item {spec:?}: {e}");
        }
    }

    let report = ListReport::new(&list, settings);
    if json {
        write_json(out, &report)?;
    } else {
        write!(out, "{report}")?;
    }

    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::unit::QuantityUnit;

    #[test]
    fn parses_specs() {
        let draft = parse_item_spec("Rice; 3.20 ;800;g").unwrap();
        assert_eq!(draft.name, "Rice");
        assert_eq!(draft.price, "3.20");
        assert_eq!(draft.quantity, "800");
        assert_eq!(draft.unit, QuantityUnit::G);

        assert_eq!(
            parse_item_spec(";2;1;l"),
            Ok(EntryDraft::new("", "2", "1", QuantityUnit::L))
        );
    }

    #[test]
    fn rejects_malformed_specs() {
        assert_eq!(
            parse_item_spec("Rice;3.20;800"),
            Err(ItemSpecError::Format("Rice;3.20;800".into()))
        );
        assert!(matches!(
            parse_item_spec("Rice;3.20;800;cup"),
            Err(ItemSpecError::Unit(_))
        ));
    }

    #[test]
    fn skips_invalid_items() {
        let items = vec![
            "A;10;500;g".to_string(),
            "broken".to_string(),
            "B;0;500;g".to_string(),
            "B;15;500;g".to_string(),
        ];
        let mut out = Vec::new();

        let list = handle_compare(&items, &Settings::default(), false, &mut out).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.entries()[0].name, "B");

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Анализ выгоды\n"));
        assert!(text.contains("дешевле на 33%"));
    }

    #[test]
    fn json_output() {
        let items = vec![
            "Small;2.5;250;g".to_string(),
            ";4;1;l".to_string(),
            "Bulk;18;2;kg".to_string(),
        ];
        let mut out = Vec::new();

        handle_compare(&items, &Settings::default(), true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["comparison"]["winner"]["name"], "Item 2");
        let insights = value["comparison"]["insights"].as_array().unwrap();
        assert_eq!(insights[0]["name"], "Small");
        assert_eq!(insights[0]["savings_percent"], 60);
        assert_eq!(insights[1]["name"], "Bulk");
        assert_eq!(value["entries"][0]["name"], "Bulk");
        assert_eq!(value["entries"][1]["is_best"], true);
    }
}

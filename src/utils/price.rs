use super::unit::QuantityUnit;

/// Price of one kilogram (or liter) of a package costing `price` for
/// `quantity` of `unit`. Returns `None` unless both amounts are finite and
/// strictly positive.
pub fn normalize(price: f64, quantity: f64, unit: QuantityUnit) -> Option<f64> {
    if !is_positive_amount(price) || !is_positive_amount(quantity) {
        return None;
    }

    let per_kg = (price / quantity) * unit.per_canonical();
    is_positive_amount(per_kg).then_some(per_kg)
}

/// Same as [`normalize`] but starting from raw user input.
pub fn normalize_input(price: &str, quantity: &str, unit: QuantityUnit) -> Option<f64> {
    normalize(parse_amount(price)?, parse_amount(quantity)?, unit)
}

/// Parses a user-entered amount. Accepts a comma decimal separator.
pub fn parse_amount(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    value
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn is_positive_amount(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

use std::io::Write;
use tracing::{debug, info};

use crate::{
    config::Settings,
    models::{priced_entry::EntryDraft, report::QuoteReport},
};

use super::{HandlerError, write_json};

/// Prints the live price per kilogram for a draft. Returns `false` when the
/// draft is incomplete and nothing could be quoted.
pub fn handle_quote(
    draft: &EntryDraft,
    settings: &Settings,
    json: bool,
    out: &mut impl Write,
) -> Result<bool, HandlerError> {
    let Some(quote) = draft.quote(&settings.tiers) else {
        debug!("no quote for draft {:?}", draft);
        if json {
            write_json(out, &serde_json::Value::Null)?;
        }
        return Ok(false);
    };

    info!("quoted {:.2}/kg as {:?}", quote.price_per_kilogram, quote.tier);

    let report = QuoteReport::new(&quote, settings);
    if json {
        write_json(out, &report)?;
    } else {
        writeln!(out, "{report}")?;
    }

    Ok(true)
}

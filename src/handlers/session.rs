use serde_json::json;
use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::{
    config::Settings,
    events::session_command::{HELP, SessionCommand},
    models::{price_list::PriceList, report::ListReport},
};

use super::{HandlerError, quote::handle_quote, write_json};

/// Reads commands line by line until `quit` or end of input, keeping the
/// list for the whole session. The final list is returned.
pub fn run_session(
    input: impl BufRead,
    settings: &Settings,
    json: bool,
    out: &mut impl Write,
) -> Result<PriceList, HandlerError> {
    let mut list = settings.price_list();
    info!("session started");

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{e}");
                print_error(&e, json, out)?;
                continue;
            }
        };

        if !apply(command, &mut list, settings, json, out)? {
            break;
        }
    }

    info!("session ended with {} entries", list.len());
    Ok(list)
}

/// Runs one command. Returns `false` when the session should end.
fn apply(
    command: SessionCommand,
    list: &mut PriceList,
    settings: &Settings,
    json: bool,
    out: &mut impl Write,
) -> Result<bool, HandlerError> {
    match command {
        SessionCommand::Add(line) => match list.add(&line.draft()) {
            Ok(entry) => {
                if json {
                    write_json(out, entry)?;
                } else {
                    writeln!(out, "added {} {}", entry.id, entry.name)?;
                }
                print_comparison(list, settings, json, out)?;
            }
            Err(e) => print_error(&e, json, out)?,
        },
        SessionCommand::Quote(line) => {
            if !handle_quote(&line.draft(), settings, json, out)? && !json {
                writeln!(out, "no quote")?;
            }
        }
        SessionCommand::Remove(id) => {
            if list.remove(&id).is_some() {
                if json {
                    write_json(out, &json!({ "removed": id }))?;
                } else {
                    writeln!(out, "removed {id}")?;
                }
                print_comparison(list, settings, json, out)?;
            }
        }
        SessionCommand::Clear => {
            let count = list.len();
            list.clear();
            if json {
                write_json(out, &json!({ "cleared": count }))?;
            } else {
                writeln!(out, "cleared")?;
            }
        }
        SessionCommand::List => print_list(list, settings, json, out)?,
        SessionCommand::Compare => print_comparison(list, settings, json, out)?,
        SessionCommand::Help if json => write_json(out, &json!({ "help": HELP }))?,
        SessionCommand::Help => writeln!(out, "{HELP}")?,
        SessionCommand::Quit => return Ok(false),
    }

    Ok(true)
}

fn print_list(
    list: &PriceList,
    settings: &Settings,
    json: bool,
    out: &mut impl Write,
) -> Result<(), HandlerError> {
    let report = ListReport::new(list, settings);
    if json {
        write_json(out, &report)?;
    } else {
        write!(out, "{report}")?;
    }
    Ok(())
}

fn print_comparison(
    list: &PriceList,
    settings: &Settings,
    json: bool,
    out: &mut impl Write,
) -> Result<(), HandlerError> {
    let report = ListReport::new(list, settings);
    if json {
        write_json(out, &report.comparison)?;
        return Ok(());
    }

    let mut text = String::new();
    report.write_comparison(&mut text)?;
    write!(out, "{text}")?;
    Ok(())
}

fn print_error(
    error: &dyn std::error::Error,
    json: bool,
    out: &mut impl Write,
) -> Result<(), HandlerError> {
    if json {
        write_json(out, &json!({ "error": error.to_string() }))?;
    } else {
        writeln!(out, "{error}")?;
    }
    Ok(())
}

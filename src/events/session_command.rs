use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    models::priced_entry::EntryDraft,
    utils::unit::{QuantityUnit, QuantityUnitError},
};

#[derive(Debug, Error, PartialEq)]
pub enum SessionCommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid entry id: {0}")]
    InvalidId(String),

    #[error(transparent)]
    Unit(#[from] QuantityUnitError),
}

/// One line of input to an interactive session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Add(EntryDraftLine),
    Quote(EntryDraftLine),
    Remove(Uuid),
    Clear,
    List,
    Compare,
    Help,
    Quit,
}

/// `<price> <quantity> <unit> [name...]`
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraftLine {
    pub price: String,
    pub quantity: String,
    pub unit: QuantityUnit,
    pub name: String,
}

impl EntryDraftLine {
    fn parse<'a>(
        mut parts: impl Iterator<Item = &'a str>,
        usage: &'static str,
    ) -> Result<Self, SessionCommandError> {
        let (Some(price), Some(quantity), Some(unit)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(SessionCommandError::Usage(usage));
        };

        Ok(Self {
            price: price.to_string(),
            quantity: quantity.to_string(),
            unit: unit.parse()?,
            name: parts.collect::<Vec<_>>().join(" "),
        })
    }

    pub fn draft(&self) -> EntryDraft {
        EntryDraft::new(
            self.name.clone(),
            self.price.clone(),
            self.quantity.clone(),
            self.unit,
        )
    }
}

pub const ADD_USAGE: &str = "add <price> <quantity> <unit> [name]";
pub const QUOTE_USAGE: &str = "quote <price> <quantity> <unit>";
pub const REMOVE_USAGE: &str = "remove <id>";

pub const HELP: &str = "\
commands:
  add <price> <quantity> <unit> [name]   add an entry (units: g, kg, ml, l)
  quote <price> <quantity> <unit>        price per kilogram without adding
  remove <id>                            remove an entry
  clear                                  remove every entry
  list                                   show the entries
  compare                                show the best entry and savings
  help                                   show this message
  quit                                   leave the session";

impl FromStr for SessionCommand {
    type Err = SessionCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Err(SessionCommandError::Unknown(String::new()));
        };

        match command.to_lowercase().as_str() {
            "add" => Ok(SessionCommand::Add(EntryDraftLine::parse(parts, ADD_USAGE)?)),
            "quote" => Ok(SessionCommand::Quote(EntryDraftLine::parse(
                parts,
                QUOTE_USAGE,
            )?)),
            "remove" | "rm" => {
                let id = parts.next().ok_or(SessionCommandError::Usage(REMOVE_USAGE))?;
                Uuid::parse_str(id)
                    .map(SessionCommand::Remove)
                    .map_err(|_| SessionCommandError::InvalidId(id.to_string()))
            }
            "clear" => Ok(SessionCommand::Clear),
            "list" | "ls" => Ok(SessionCommand::List),
            "compare" => Ok(SessionCommand::Compare),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            other => Err(SessionCommandError::Unknown(other.to_string())),
        }
    }
}

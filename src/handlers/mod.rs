use std::{fmt, io};
use thiserror::Error;

pub mod compare;
pub mod quote;
pub mod session;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to format output: {0}")]
    Format(#[from] fmt::Error),
}

pub(crate) fn write_json<T: serde::Serialize>(
    out: &mut impl io::Write,
    value: &T,
) -> Result<(), HandlerError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

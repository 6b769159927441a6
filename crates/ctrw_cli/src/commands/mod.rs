//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod msd;
pub mod simulate;
pub mod validate;

pub use validate::Distribution;

use serde::Serialize;
use std::io;

use crate::{CliError, Result};

/// Output format shared by the reporting commands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table on stdout
    Table,
    /// Pretty-printed JSON on stdout
    Json,
    /// CSV rows with a header on stdout
    Csv,
}

impl OutputFormat {
    /// Parse a format name
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

/// Write serialisable rows to stdout as CSV
pub(crate) fn write_csv<T: Serialize>(rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout().lock());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a serialisable value to stdout as pretty JSON
pub(crate) fn write_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    io::Write::write_all(&mut out, b"\n")?;
    Ok(())
}

//! Export module for fintrack
//!
//! Writes the current transaction list, unmodified, to any `io::Write`:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable export with schema version and metadata
//! - YAML: the same document in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_transactions_json, ExportMetadata, TransactionExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_transactions_yaml;

use crate::error::FinanceResult;
use crate::models::Transaction;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("unknown export format '{}'", other)),
        }
    }
}

/// Write `transactions` in the given format
pub fn export_transactions<W: Write>(
    format: ExportFormat,
    transactions: &[Transaction],
    writer: &mut W,
) -> FinanceResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(transactions, writer),
        ExportFormat::Json => export_transactions_json(transactions, writer, true),
        ExportFormat::Yaml => export_transactions_yaml(transactions, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("yml".parse::<ExportFormat>(), Ok(ExportFormat::Yaml));
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_every_format_handles_empty_list() {
        for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Yaml] {
            let mut out = Vec::new();
            export_transactions(format, &[], &mut out).unwrap();
            assert!(!out.is_empty(), "{} wrote nothing", format);
        }
    }
}

//! YAML export

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::TransactionExport;
use crate::models::Transaction;

/// Export the transactions as a YAML document with a comment header
pub fn export_transactions_yaml<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> FinanceResult<()> {
    let export = TransactionExport::new(transactions);
    let io_err = |e: std::io::Error| FinanceError::Export(e.to_string());

    writeln!(writer, "# fintrack transaction export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

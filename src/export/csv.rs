//! CSV export

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;

const HEADER: [&str; 6] = ["ID", "Date", "Type", "Category", "Description", "Amount"];

/// Write one row per transaction, in list order
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> FinanceResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    for txn in transactions {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.date.to_string(),
                txn.kind.to_string(),
                txn.category.to_string(),
                txn.description.clone(),
                format!("{:.2}", txn.amount.to_major_units()),
            ])
            .map_err(|e| FinanceError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

//! JSON export
//!
//! Transactions wrapped in a versioned document with summary metadata.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Transaction};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Transaction export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub transactions: Vec<Transaction>,

    pub metadata: ExportMetadata,
}

/// Summary figures for the exported transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub total_income: Money,
    pub total_expenses: Money,
    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,
    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl ExportMetadata {
    fn from_transactions(transactions: &[Transaction]) -> Self {
        Self {
            transaction_count: transactions.len(),
            total_income: transactions
                .iter()
                .filter(|t| t.is_income())
                .map(|t| t.amount)
                .sum(),
            total_expenses: transactions
                .iter()
                .filter(|t| t.is_expense())
                .map(|t| t.amount)
                .sum(),
            earliest_transaction: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_transaction: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
        }
    }
}

impl TransactionExport {
    /// Build the export document; the list is copied as-is, order included
    pub fn new(transactions: &[Transaction]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions: transactions.to_vec(),
            metadata: ExportMetadata::from_transactions(transactions),
        }
    }
}

/// Export the transactions as a JSON document
pub fn export_transactions_json<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let export = TransactionExport::new(transactions);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

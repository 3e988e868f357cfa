//! Export CLI command

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use super::Context;
use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_transactions, ExportFormat};
use crate::notify::Notification;

/// Arguments of `fintrack export`
#[derive(Args)]
pub struct ExportArgs {
    /// csv, json or yaml
    pub format: ExportFormat,
    /// Output file path
    pub output: PathBuf,
}

/// Write all transactions to a file
pub fn handle_export_command(ctx: &mut Context, args: ExportArgs) -> FinanceResult<()> {
    let file = File::create(&args.output).map_err(|e| {
        FinanceError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    let transactions = ctx.store.transactions();
    export_transactions(args.format, transactions, &mut writer)?;
    writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    let count = transactions.len();
    ctx.notify(Notification::success(format!(
        "Exported {} transaction(s) as {} to {}",
        count,
        args.format,
        args.output.display()
    )));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::test_context;
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;

    #[test]
    fn test_export_csv_file() {
        let (mut ctx, temp) = test_context();
        ctx.store
            .add_transaction(
                Transaction::expense(
                    Money::from_cents(999),
                    "Books",
                    NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
                )
                .with_id("t1"),
            )
            .unwrap();

        let output = temp.path().join("out.csv");
        handle_export_command(
            &mut ctx,
            ExportArgs {
                format: ExportFormat::Csv,
                output: output.clone(),
            },
        )
        .unwrap();

        let text = std::fs::read_to_string(output).unwrap();
        assert!(text.contains("t1,2024-04-02,expense,Books,,9.99"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let (mut ctx, temp) = test_context();
        let err = handle_export_command(
            &mut ctx,
            ExportArgs {
                format: ExportFormat::Json,
                output: temp.path().join("missing").join("out.json"),
            },
        )
        .unwrap_err();
        assert!(matches!(err, FinanceError::Export(_)));
    }
}

//! JSONL audit log file
//!
//! One [`AuditEntry`] per line. A line that cannot be parsed (for example a
//! write cut short by a crash) is skipped with a warning so the rest of the
//! history stays readable.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use tracing::{trace, warn};

use crate::error::{FinanceError, FinanceResult};

use super::entry::AuditEntry;

pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry as a single line
    pub fn append(&self, entry: &AuditEntry) -> FinanceResult<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| FinanceError::Json(format!("Failed to serialize audit entry: {}", e)))?;
        line.push('\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .and_then(|mut file| file.write_all(line.as_bytes()))
            .map_err(|e| FinanceError::Io(format!("Failed to write audit log: {}", e)))?;

        trace!(
            operation = %entry.operation,
            entity = %entry.entity_type,
            id = %entry.entity_id,
            "audit entry appended"
        );
        Ok(())
    }

    /// Visit every readable entry, oldest first
    fn for_each_entry(&self, mut visit: impl FnMut(AuditEntry)) -> FinanceResult<()> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(FinanceError::Io(format!("Failed to open audit log: {}", e))),
        };

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| FinanceError::Io(format!("Failed to read audit log: {}", e)))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(entry) => visit(entry),
                Err(e) => warn!(line = index + 1, error = %e, "skipping unreadable audit entry"),
            }
        }
        Ok(())
    }

    /// Every entry, oldest first
    pub fn read_all(&self) -> FinanceResult<Vec<AuditEntry>> {
        let mut entries = Vec::new();
        self.for_each_entry(|entry| entries.push(entry))?;
        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> FinanceResult<Vec<AuditEntry>> {
        let mut window = VecDeque::new();
        self.for_each_entry(|entry| {
            if count == 0 {
                return;
            }
            if window.len() == count {
                window.pop_front();
            }
            window.push_back(entry);
        })?;
        Ok(window.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn logger_in(temp: &TempDir) -> AuditLogger {
        AuditLogger::new(temp.path().join("audit.log"))
    }

    fn expense_entry(i: usize) -> AuditEntry {
        let txn = Transaction::expense(
            Money::from_cents(100 * i as i64),
            "Food",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
        .with_id(format!("txn-{}", i));
        AuditEntry::create(EntityType::Transaction, txn.id.as_str(), None, &txn)
    }

    #[test]
    fn test_append_and_read() {
        let temp = TempDir::new().unwrap();
        let logger = logger_in(&temp);
        logger.append(&expense_entry(1)).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Transaction);
        assert_eq!(entries[0].after.as_ref().unwrap()["type"], "expense");
    }

    #[test]
    fn test_read_recent_window() {
        let temp = TempDir::new().unwrap();
        let logger = logger_in(&temp);
        for i in 0..10 {
            logger.append(&expense_entry(i)).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let ids: Vec<&str> = recent.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["txn-7", "txn-8", "txn-9"]);
        assert!(logger.read_recent(0).unwrap().is_empty());
        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_missing_log_is_empty() {
        let temp = TempDir::new().unwrap();
        let logger = logger_in(&temp);
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
        assert!(!temp.path().join("audit.log").exists());
    }

    #[test]
    fn test_truncated_line_is_skipped() {
        let temp = TempDir::new().unwrap();
        let logger = logger_in(&temp);
        logger.append(&expense_entry(1)).unwrap();

        let mut file = OpenOptions::new()
            .append(true)
            .open(temp.path().join("audit.log"))
            .unwrap();
        file.write_all(b"{\"timestamp\":\"2024-03-01T\n\n").unwrap();

        logger.append(&expense_entry(2)).unwrap();

        let ids: Vec<String> = logger
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.entity_id)
            .collect();
        assert_eq!(ids, vec!["txn-1", "txn-2"]);
    }

    #[test]
    fn test_reopen_appends() {
        let temp = TempDir::new().unwrap();
        logger_in(&temp).append(&expense_entry(1)).unwrap();
        logger_in(&temp).append(&expense_entry(2)).unwrap();
        assert_eq!(logger_in(&temp).read_all().unwrap().len(), 2);
    }
}

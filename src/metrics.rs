// Run report module
//
// Collects the outcome of every unit of work in one run so the caller can
// print a summary and tests can count outcomes without parsing log text.

use crate::models::{ItemReport, Outcome};
use std::fmt;
use std::time::{Duration, Instant};

/// The three things a run can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Backup,
    Restore,
    Initialize,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Backup => "Backup",
            Operation::Restore => "Restore",
            Operation::Initialize => "Initialization",
        };
        f.write_str(label)
    }
}

/// Outcome of every unit of work in one run
#[derive(Debug)]
pub struct OperationReport {
    pub operation: Operation,
    pub items: Vec<ItemReport>,
    started: Instant,
    duration: Duration,
}

impl OperationReport {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            items: Vec::new(),
            started: Instant::now(),
            duration: Duration::ZERO,
        }
    }

    /// Log an item's status line and keep it
    pub fn record(&mut self, item: ItemReport) {
        item.log();
        self.items.push(item);
    }

    /// Stop the clock
    pub fn finish(mut self) -> Self {
        self.duration = self.started.elapsed();
        self
    }

    pub fn copied(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Copied))
    }

    pub fn removed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Removed))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::SkippedMissing))
    }

    pub fn failed(&self) -> usize {
        self.count(Outcome::is_failure)
    }

    /// No item failed
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The closing line shown to the user. Deliberately the same whether or
    /// not some items failed; the counts go to the log.
    pub fn summary_line(&self) -> String {
        format!("{} complete.", self.operation)
    }

    /// Log outcome counts
    pub fn log_summary(&self) {
        tracing::info!(
            "{} finished in {:.2}s: {} copied, {} removed, {} skipped, {} failed",
            self.operation,
            self.duration.as_secs_f64(),
            self.copied(),
            self.removed(),
            self.skipped(),
            self.failed()
        );
        if !self.is_clean() {
            tracing::warn!("{} item(s) failed, see messages above", self.failed());
        }
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.items.iter().filter(|item| pred(&item.outcome)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemKind;
    use camino::Utf8PathBuf;

    fn item(outcome: Outcome) -> ItemReport {
        ItemReport::new(ItemKind::AddOn, "DBM", Utf8PathBuf::from("AddOns/DBM"), outcome)
    }

    #[test]
    fn test_counts() {
        let mut report = OperationReport::new(Operation::Backup);
        report.record(item(Outcome::Copied));
        report.record(item(Outcome::Copied));
        report.record(item(Outcome::SkippedMissing));
        report.record(item(Outcome::Failed("denied".to_string())));
        let report = report.finish();

        assert_eq!(report.copied(), 2);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.removed(), 0);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_summary_ignores_failures() {
        let mut report = OperationReport::new(Operation::Restore);
        report.record(item(Outcome::Failed("denied".to_string())));

        assert_eq!(report.summary_line(), "Restore complete.");
        assert_eq!(
            OperationReport::new(Operation::Backup).summary_line(),
            "Backup complete."
        );
        assert_eq!(
            OperationReport::new(Operation::Initialize).summary_line(),
            "Initialization complete."
        );
    }
}

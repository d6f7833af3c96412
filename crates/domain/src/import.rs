use serde::Serialize;

use crate::AppId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemOutcome {
    Imported { id: AppId },
    Skipped { reason: String },
    Failed { reason: String },
}

/// Everything the importer tells its caller while a scan runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ImportEvent {
    NothingFound,
    Started {
        total: usize,
    },
    ItemResult {
        current: usize,
        total: usize,
        name: String,
        outcome: ItemOutcome,
    },
    Progress {
        current: usize,
        total: usize,
    },
    Completed(ImportReport),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub found: usize,
    pub imported: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ImportReport {
    pub fn new(found: usize) -> Self {
        Self {
            found,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: &ItemOutcome) {
        match outcome {
            ItemOutcome::Imported { .. } => self.imported += 1,
            ItemOutcome::Skipped { .. } => self.skipped += 1,
            ItemOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    NothingFound,
    Completed(ImportReport),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_each_outcome() {
        let mut report = ImportReport::new(3);
        report.record(&ItemOutcome::Imported {
            id: AppId::new(1).expect("id"),
        });
        report.record(&ItemOutcome::Skipped {
            reason: "missing URL".to_string(),
        });
        report.record(&ItemOutcome::Failed {
            reason: "disk full".to_string(),
        });
        assert_eq!(
            report,
            ImportReport {
                found: 3,
                imported: 1,
                skipped: 1,
                failed: 1,
            }
        );
    }
}

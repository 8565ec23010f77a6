//! Move execution.
//! Attempts each planned entry strictly in order, one rename at a time, and
//! accounts for the outcomes under the requested failure policy.

use tracing::{error, info};

use crate::storage::Storage;

use super::plan::MoveEntry;
use super::request::OnError;

/// Terminal status of one attempted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveStatus {
    Succeeded,
    Failed { cause: String },
}

/// Ledger line for one attempted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub entry: MoveEntry,
    pub status: MoveStatus,
}

impl MoveOutcome {
    pub fn failed(&self) -> bool {
        matches!(self.status, MoveStatus::Failed { .. })
    }

    /// Underlying cause when the entry failed.
    pub fn cause(&self) -> Option<&str> {
        match &self.status {
            MoveStatus::Failed { cause } => Some(cause),
            MoveStatus::Succeeded => None,
        }
    }
}

/// Aggregate result of one operation.
#[derive(Debug, Clone, Default)]
pub struct MoveResult {
    /// One outcome per attempted entry, in plan order. Under `Stop` this
    /// ends at the first failure; under `Continue` it covers the whole plan.
    pub attempted: Vec<MoveOutcome>,
    /// True only under `Stop` when an entry failed.
    pub aborted: bool,
}

impl MoveResult {
    pub fn succeeded(&self) -> usize {
        self.attempted.iter().filter(|o| !o.failed()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted.iter().filter(|o| o.failed()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &MoveOutcome> {
        self.attempted.iter().filter(|o| o.failed())
    }
}

/// Attempt every entry in plan order.
///
/// A rename that succeeds is assumed atomic and final; one that fails is
/// assumed to have made no partial change. Nothing is retried and nothing
/// is rolled back. Under [`OnError::Stop`] the first failure ends the
/// iteration with `aborted = true` and entries after it are never
/// attempted; under [`OnError::Continue`] every entry is attempted exactly
/// once and the result is never aborted.
pub fn execute(storage: &dyn Storage, entries: Vec<MoveEntry>, on_error: OnError) -> MoveResult {
    let mut attempted = Vec::with_capacity(entries.len());

    for entry in entries {
        match storage.rename(&entry.source, &entry.destination) {
            Ok(()) => {
                info!(source = %entry.source.display(), dest = %entry.destination.display(), "moved");
                attempted.push(MoveOutcome {
                    entry,
                    status: MoveStatus::Succeeded,
                });
            }
            Err(e) => {
                error!(
                    source = %entry.source.display(),
                    dest = %entry.destination.display(),
                    error = %e,
                    "failed to move"
                );
                let stop = on_error == OnError::Stop;
                attempted.push(MoveOutcome {
                    entry,
                    status: MoveStatus::Failed {
                        cause: e.to_string(),
                    },
                });
                if stop {
                    return MoveResult {
                        attempted,
                        aborted: true,
                    };
                }
            }
        }
    }

    MoveResult {
        attempted,
        aborted: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_ops::test_support::StubStorage;
    use std::path::PathBuf;

    fn entry(source: &str, dest: &str) -> MoveEntry {
        MoveEntry {
            source: PathBuf::from(source),
            destination: PathBuf::from(dest),
        }
    }

    #[test]
    fn all_successes_cover_whole_plan() {
        let storage = StubStorage::new();
        let plan = vec![entry("/src/a", "/dst"), entry("/src/b", "/dst")];

        let result = execute(&storage, plan, OnError::Stop);
        assert!(!result.aborted);
        assert_eq!(result.succeeded(), 2);
        assert_eq!(result.failed(), 0);
    }

    #[test]
    fn stop_policy_halts_at_first_failure() {
        let storage = StubStorage::new().fail_on("/src/b");
        let plan = vec![
            entry("/src/a", "/dst"),
            entry("/src/b", "/dst"),
            entry("/src/c", "/dst"),
        ];

        let result = execute(&storage, plan, OnError::Stop);
        assert!(result.aborted);
        assert_eq!(result.attempted.len(), 2);
        assert!(!result.attempted[0].failed());
        assert!(result.attempted[1].failed());
        // The entry after the failure is never handed to the capability.
        let tried: Vec<_> = storage.rename_log().into_iter().map(|(s, _)| s).collect();
        assert_eq!(tried, vec![PathBuf::from("/src/a"), PathBuf::from("/src/b")]);
    }

    #[test]
    fn continue_policy_attempts_every_entry_once() {
        let storage = StubStorage::new().fail_on("/src/a");
        let plan = vec![entry("/src/a", "/dst"), entry("/src/b", "/dst")];

        let result = execute(&storage, plan, OnError::Continue);
        assert!(!result.aborted);
        assert_eq!(result.attempted.len(), 2);
        assert!(result.attempted[0].failed());
        assert_eq!(
            result.attempted[0].cause(),
            Some("scripted rename failure")
        );
        assert!(!result.attempted[1].failed());
        assert_eq!(storage.rename_log().len(), 2);
    }

    #[test]
    fn empty_plan_is_a_clean_result() {
        let storage = StubStorage::new();
        let result = execute(&storage, Vec::new(), OnError::Stop);
        assert!(!result.aborted);
        assert!(result.attempted.is_empty());
    }
}

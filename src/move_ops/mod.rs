//! The bulk-move operation, split into planning and execution.
//!
//! - [`plan`] decides single-file vs directory-contents mode, applies the
//!   optional name filter and produces the ordered entry list.
//! - [`execute`] attempts each rename in order under the requested failure
//!   policy and produces the per-entry ledger.
//! - [`run_move`] runs both for one [`MoveRequest`].

mod exec;
mod filter;
mod plan;
mod request;

pub use exec::{execute, MoveOutcome, MoveResult, MoveStatus};
pub use filter::NameFilter;
pub use plan::{plan, MoveEntry};
pub use request::{MoveRequest, OnError};

use anyhow::Result;
use tracing::debug;

use crate::errors::MoveError;
use crate::storage::Storage;

/// Run one move operation end to end.
///
/// Planning errors ([`MoveError::SourceNotFound`],
/// [`MoveError::InvalidFilter`]) always propagate; they are never subject to
/// the failure policy. Under [`OnError::Stop`] a failed entry surfaces as
/// [`MoveError::MoveFailed`] after zero or more earlier successful moves
/// (which are not undone). Under [`OnError::Continue`] the operation
/// succeeds even with failed entries; callers inspect
/// [`MoveResult::attempted`] for per-entry status.
pub fn run_move(storage: &dyn Storage, request: &MoveRequest) -> Result<MoveResult> {
    let entries = plan(storage, request)?;
    if entries.is_empty() {
        debug!(source = %request.source_path.display(), "nothing to move");
        return Ok(MoveResult::default());
    }

    let result = execute(storage, entries, request.on_error);
    if result.aborted
        && let Some(failed) = result.attempted.last()
    {
        return Err(MoveError::MoveFailed {
            source_path: failed.entry.source.clone(),
            dest_path: failed.entry.destination.clone(),
            cause: failed.cause().unwrap_or("rename failed").to_string(),
        }
        .into());
    }
    Ok(result)
}

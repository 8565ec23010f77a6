//! Move planning.
//! Resolves single-file vs directory-contents mode and produces the ordered
//! entry list; no filesystem mutation happens here.

use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;
use tracing::debug;

use crate::errors::MoveError;
use crate::storage::{EntryKind, Storage};

use super::filter::NameFilter;
use super::request::MoveRequest;

/// One planned rename: where an item is now and where it should go.
///
/// In directory mode `destination` is always the destination directory path
/// itself, not `<dir>/<name>`; the rename capability is responsible for
/// placing the item inside under its own base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Compute the ordered list of renames for `request`.
///
/// - Single-file mode: one entry whose destination is taken literally
///   (file-to-file rename).
/// - Directory mode: one entry per direct child whose whole name matches
///   the filter (all children when no filter is set), in listing order.
///
/// An empty directory, or a filter matching nothing, yields an empty plan;
/// that is not an error.
pub fn plan(storage: &dyn Storage, request: &MoveRequest) -> Result<Vec<MoveEntry>> {
    let source = &request.source_path;
    let kind = match storage.stat(source) {
        Ok(kind) => kind,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(MoveError::SourceNotFound(source.clone()).into());
        }
        Err(e) => {
            return Err(anyhow::Error::new(e).context(format!("stat '{}'", source.display())));
        }
    };

    if kind == EntryKind::File {
        debug!(source = %source.display(), dest = %request.dest_path.display(), "planned single-file move");
        return Ok(vec![MoveEntry {
            source: source.clone(),
            destination: request.dest_path.clone(),
        }]);
    }

    let filter = request
        .file_regex
        .as_deref()
        .map(NameFilter::new)
        .transpose()?;

    let children = storage
        .list_children(source)
        .with_context(|| format!("list directory '{}'", source.display()))?;

    let entries: Vec<MoveEntry> = children
        .into_iter()
        .filter(|child| match &filter {
            Some(f) => child
                .file_name()
                .map(|name| f.matches(&name.to_string_lossy()))
                .unwrap_or(false),
            None => true,
        })
        .map(|child| MoveEntry {
            source: child,
            destination: request.dest_path.clone(),
        })
        .collect();

    debug!(
        source = %source.display(),
        dest = %request.dest_path.display(),
        entries = entries.len(),
        filter = filter.as_ref().map(|f| f.pattern()).unwrap_or("<none>"),
        "planned directory move"
    );
    Ok(entries)
}

//! Storage capability consumed by the planner and executor.
//! One small trait (stat, list, rename) plus the local-filesystem
//! implementation used by the binary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What a path names. Anything that is not a regular file is treated as a
/// directory for planning purposes; listing a non-directory then fails at
/// the capability level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Filesystem primitives the move operation needs. Implementations must
/// report a missing path from `stat` as `io::ErrorKind::NotFound`, and
/// `list_children` must return the same order for repeated calls against an
/// unchanged directory.
pub trait Storage {
    fn stat(&self, path: &Path) -> io::Result<EntryKind>;

    /// Direct children of `dir` (no recursion).
    fn list_children(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Rename `source` to `dest` within the same namespace. A success is
    /// atomic and final; a failure is assumed to have made no change.
    fn rename(&self, source: &Path, dest: &Path) -> io::Result<()>;
}

/// `std::fs`-backed implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl Storage for LocalStorage {
    fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        let meta = fs::metadata(path)?;
        if meta.is_file() {
            Ok(EntryKind::File)
        } else {
            Ok(EntryKind::Directory)
        }
    }

    fn list_children(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut children = Vec::new();
        for entry in fs::read_dir(dir)? {
            children.push(entry?.path());
        }
        // read_dir order is platform-dependent; sort by name so repeated
        // listings of an unchanged directory come back identical.
        children.sort();
        Ok(children)
    }

    fn rename(&self, source: &Path, dest: &Path) -> io::Result<()> {
        // Planned directory-mode entries carry the bare destination
        // directory. Place the source inside it under its own base name,
        // matching the rename-into-directory semantics of the storage
        // primitives this operation was written against; std::fs::rename
        // would refuse to rename a file onto a directory path.
        let target = if dest.is_dir() {
            match source.file_name() {
                Some(name) => dest.join(name),
                None => dest.to_path_buf(),
            }
        } else {
            dest.to_path_buf()
        };
        debug!(source = %source.display(), target = %target.display(), "rename");
        fs::rename(source, &target)
    }
}

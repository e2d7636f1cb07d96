use std::io;
use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, trace};

use crate::entry::{EntryKind, FileStatus};
use crate::error::SyncError;
use crate::materialize::ensure_directory_path;
use crate::path::{is_self_or_parent, join};
use crate::results::SyncStats;
use crate::traits::Filesystem;

// ---------------------------------------------------------------------------
// SyncTask
// ---------------------------------------------------------------------------

/// One unit of work: make `dest` the image of `source`.
struct SyncTask {
    source: PathBuf,
    dest:   PathBuf,
    kind:   EntryKind,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Mirror `source` into `dest`, treating `source` as a directory.
///
/// Walks depth-first over an explicit stack so tree depth is bounded by heap,
/// not by the call stack. Children are pushed in reverse listing order, which
/// keeps the visit order pre-order and guarantees every directory exists
/// before anything below it is touched.
///
/// Stops at the first error; nothing already created is rolled back.
pub(crate) fn run(
    fs: &dyn Filesystem,
    source: PathBuf,
    dest: PathBuf,
) -> Result<SyncStats, SyncError> {
    let start = Instant::now();
    let mut stats = SyncStats::default();

    let mut stack = vec![SyncTask { source, dest, kind: EntryKind::Dir }];

    while let Some(task) = stack.pop() {
        if !task.kind.is_syncable() {
            return Err(SyncError::UnsupportedKind { path: task.source, kind: task.kind });
        }

        match task.kind {
            EntryKind::Dir => {
                sync_dir(fs, &task, &mut stats)?;

                let children = fs
                    .list_dir(&task.source)
                    .map_err(|source| SyncError::ReadDir { path: task.source.clone(), source })?;

                stack.extend(
                    children
                        .into_iter()
                        .rev()
                        .filter(|child| !is_self_or_parent(&child.name))
                        .map(|child| SyncTask {
                            source: join(&task.source, &child.name),
                            dest:   join(&task.dest, &child.name),
                            kind:   child.kind,
                        }),
                );
            }
            _ => sync_file(fs, &task, &mut stats)?,
        }
    }

    stats.duration = start.elapsed();
    Ok(stats)
}

// ---------------------------------------------------------------------------
// Per-kind steps
// ---------------------------------------------------------------------------

fn sync_dir(fs: &dyn Filesystem, task: &SyncTask, stats: &mut SyncStats) -> Result<(), SyncError> {
    if let Some(existing) = dest_status(fs, task)? {
        expect_kind(task, existing, EntryKind::Dir)?;
        trace!("{} already a directory", task.dest.display());
        stats.dirs_existing += 1;
        return Ok(());
    }

    let source_status = fs.status(&task.source).map_err(|source| SyncError::MissingInput {
        path: task.source.clone(),
        source,
    })?;
    let mode = source_status.mode;

    match fs.create_dir(&task.dest, mode) {
        Ok(()) => {
            debug!("created directory {} (mode {:o})", task.dest.display(), mode);
            stats.dirs_created += 1;
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let created = ensure_directory_path(fs, &task.dest, mode)?;
            // The target itself may have appeared in between; count it only if we made it
            if created > 0 {
                stats.dirs_created += 1;
                stats.ancestors_created += created - 1;
            }
        }
        Err(source) => {
            return Err(SyncError::CreateDir { path: task.dest.clone(), source });
        }
    }

    Ok(())
}

fn sync_file(fs: &dyn Filesystem, task: &SyncTask, stats: &mut SyncStats) -> Result<(), SyncError> {
    if let Some(existing) = dest_status(fs, task)? {
        expect_kind(task, existing, EntryKind::File)?;
        trace!("{} already present", task.dest.display());
        stats.files_existing += 1;
        return Ok(());
    }

    fs.hard_link(&task.source, &task.dest).map_err(|source| SyncError::Link {
        source_path: task.source.clone(),
        dest_path:   task.dest.clone(),
        source,
    })?;
    debug!("linked {} -> {}", task.source.display(), task.dest.display());
    stats.links_created += 1;

    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Status of the destination, `None` if it does not exist yet.
fn dest_status(fs: &dyn Filesystem, task: &SyncTask) -> Result<Option<FileStatus>, SyncError> {
    match fs.status(&task.dest) {
        Ok(status) => Ok(Some(status)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(SyncError::Status { path: task.dest.clone(), source }),
    }
}

fn expect_kind(task: &SyncTask, existing: FileStatus, expected: EntryKind) -> Result<(), SyncError> {
    if existing.kind == expected {
        Ok(())
    } else {
        Err(SyncError::TypeMismatch {
            path: task.dest.clone(),
            expected,
            found: existing.kind,
        })
    }
}

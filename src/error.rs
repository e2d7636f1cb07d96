use std::path::PathBuf;
use thiserror::Error;

use crate::entry::EntryKind;

/// `sysexits.h` status for "cannot open input".
pub const EX_NOINPUT: u8 = 66;

#[derive(Error, Debug)]
pub enum SyncError {
    // Expected: the source tree changed underneath us
    #[error("{}: {source}", .path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Destination state disagrees with the source
    #[error("{} exists as a {found}, expected a {expected}", .path.display())]
    TypeMismatch {
        path: PathBuf,
        expected: EntryKind,
        found: EntryKind,
    },

    // Operational
    #[error("mkdir {} failed: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stat {} failed: {source}", .path.display())]
    Status {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} -> {}: {source}", .source_path.display(), .dest_path.display())]
    Link {
        source_path: PathBuf,
        dest_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Preconditions
    #[error("{} is a {kind}, only directories and regular files can be synced", .path.display())]
    UnsupportedKind { path: PathBuf, kind: EntryKind },

    #[error("no {0} provided")]
    MissingArgument(&'static str),
}

/// Coarse classification of a [`SyncError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The source path vanished. The only failure treated as part of normal operation.
    MissingInput,

    /// A destination entry exists with the wrong type.
    InvariantViolation,

    /// A mkdir, listing, status or link system call failed.
    OperationalFailure,

    /// The caller handed the synchronizer something it cannot process.
    PreconditionViolation,
}

/// How the process should end after a [`SyncError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Clean exit with this status code.
    Exit(u8),

    /// Abrupt termination (`abort()`), for defects that must not look like an ordinary failure.
    Abort,
}

impl SyncError {
    /// The path this error occurred at, if applicable.
    /// For link failures this is the destination.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::MissingInput { path, .. }
            | Self::TypeMismatch { path, .. }
            | Self::CreateDir { path, .. }
            | Self::ReadDir { path, .. }
            | Self::Status { path, .. }
            | Self::UnsupportedKind { path, .. } => Some(path),
            Self::Link { dest_path, .. } => Some(dest_path),
            Self::MissingArgument(_) => None,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            Self::MissingInput { .. } => ErrorClass::MissingInput,
            Self::TypeMismatch { .. } => ErrorClass::InvariantViolation,
            Self::CreateDir { .. }
            | Self::ReadDir { .. }
            | Self::Status { .. }
            | Self::Link { .. } => ErrorClass::OperationalFailure,
            Self::UnsupportedKind { .. } | Self::MissingArgument(_) => {
                ErrorClass::PreconditionViolation
            }
        }
    }

    /// Map this error onto a process outcome.
    ///
    /// Missing input exits with [`EX_NOINPUT`]. Failed mkdir, listing and
    /// status calls exit with `1`. Link failures, type mismatches and
    /// precondition violations abort.
    pub fn termination(&self) -> Termination {
        match self {
            Self::MissingInput { .. } => Termination::Exit(EX_NOINPUT),
            Self::CreateDir { .. } | Self::ReadDir { .. } | Self::Status { .. } => {
                Termination::Exit(1)
            }
            Self::Link { .. }
            | Self::TypeMismatch { .. }
            | Self::UnsupportedKind { .. }
            | Self::MissingArgument(_) => Termination::Abort,
        }
    }
}

//! # lsync
//!
//! Mirror a directory tree into another one using hard links.
//!
//! Directories are recreated with the source directory's permission bits,
//! regular files are hard-linked, and anything already present in the
//! destination is left alone. Running it again over a partially or fully
//! synced destination is safe: it only fills in what is missing.
//!
//! A destination entry whose type disagrees with its source (a file where a
//! directory should be, or the other way round) stops the run. lsync never
//! deletes, overwrites or copies.
//!
//! # Quick Start
//!
//! ```rust
//! use std::fs;
//!
//! let src = tempfile::tempdir()?;
//! let dst = tempfile::tempdir()?;
//! fs::create_dir(src.path().join("docs"))?;
//! fs::write(src.path().join("docs/readme.txt"), "hello")?;
//!
//! let stats = lsync::sync()
//!     .source(src.path())
//!     .destination(dst.path().join("mirror"))
//!     .run()?;
//!
//! assert_eq!(stats.links_created, 1);
//! assert_eq!(fs::read_to_string(dst.path().join("mirror/docs/readme.txt"))?, "hello");
//!
//! // Nothing left to do the second time around
//! let again = lsync::sync()
//!     .source(src.path())
//!     .destination(dst.path().join("mirror"))
//!     .run()?;
//! assert_eq!(again.operations(), 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Custom Filesystems
//!
//! The engine only talks to the [`Filesystem`] trait. Swap in your own with
//! [`SyncBuilder::filesystem`] to test against an in-memory tree or to wrap
//! the host with extra behavior.

#![forbid(unsafe_code)]

pub mod materialize;
pub mod path;

mod builder;
mod engine;
mod entry;
mod error;
mod fs;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::SyncBuilder;
pub use entry::{DirChild, EntryKind, FileStatus};
pub use error::{ErrorClass, SyncError, Termination, EX_NOINPUT};
pub use fs::OsFilesystem;
pub use materialize::INTERMEDIATE_DIR_MODE;
pub use results::SyncStats;
pub use traits::Filesystem;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`SyncBuilder`] to configure and run a sync.
pub fn sync() -> SyncBuilder {
    SyncBuilder::default()
}

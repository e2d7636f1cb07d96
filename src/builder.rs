use std::path::PathBuf;

use crate::engine::run;
use crate::error::SyncError;
use crate::fs::OsFilesystem;
use crate::results::SyncStats;
use crate::traits::Filesystem;

// ---------------------------------------------------------------------------
// SyncBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a sync.
///
/// Created via [`lsync::sync()`](crate::sync). Configure with chained
/// builder methods, then call [`run()`](SyncBuilder::run) to execute.
///
/// # Example
///
/// ```rust,ignore
/// let stats = lsync::sync()
///     .source("/srv/releases/v1")
///     .destination("/srv/staging/v1")
///     .run()?;
/// ```
pub struct SyncBuilder {
    source:      Option<PathBuf>,
    destination: Option<PathBuf>,
    filesystem:  Box<dyn Filesystem>,
}

impl Default for SyncBuilder {
    fn default() -> Self {
        Self {
            source:      None,
            destination: None,
            filesystem:  Box::new(OsFilesystem),
        }
    }
}

impl SyncBuilder {
    // ── Paths ─────────────────────────────────────────────────────────────

    /// The tree to mirror. Must be a directory.
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Where the mirror goes. Created, along with any missing ancestors,
    /// if it does not exist yet.
    pub fn destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.destination = Some(path.into());
        self
    }

    // ── Backend ───────────────────────────────────────────────────────────

    /// Replace the host filesystem with a custom [`Filesystem`].
    ///
    /// Defaults to [`OsFilesystem`].
    pub fn filesystem(mut self, fs: impl Filesystem + 'static) -> Self {
        self.filesystem = Box::new(fs);
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Run the sync and return what it did.
    ///
    /// Blocks until the whole tree is processed or the first error.
    ///
    /// # Errors
    ///
    /// Every error is terminal for the run. Entries handled before the
    /// failure stay in place, so re-running after fixing the cause resumes
    /// where it stopped. See [`SyncError::class`] for the taxonomy.
    pub fn run(self) -> Result<SyncStats, SyncError> {
        let source = self.source.ok_or(SyncError::MissingArgument("source"))?;
        let destination = self
            .destination
            .ok_or(SyncError::MissingArgument("destination"))?;

        run(self.filesystem.as_ref(), source, destination)
    }
}

use std::io;
use std::path::Path;

use crate::entry::{DirChild, FileStatus};

/// The filesystem operations the synchronizer consumes.
///
/// [`OsFilesystem`](crate::OsFilesystem) is the host implementation. Implement
/// this to drive the engine against anything else: an in-memory tree in tests,
/// a recording wrapper, a chroot-style remapper.
///
/// # Error Handling
///
/// Return the raw `io::Error`; the engine attaches paths and decides which
/// failures are fatal. [`status`](Filesystem::status) must report a missing
/// path as `io::ErrorKind::NotFound`, and [`create_dir`](Filesystem::create_dir)
/// must report a missing ancestor the same way, since that is what triggers
/// the create-parents fallback.
///
/// # Example
///
/// ```rust
/// use std::io;
/// use std::path::Path;
/// use lsync::{DirChild, FileStatus, Filesystem, OsFilesystem};
///
/// /// Logs every link before delegating to the host.
/// struct Noisy(OsFilesystem);
///
/// impl Filesystem for Noisy {
///     fn status(&self, path: &Path) -> io::Result<FileStatus> { self.0.status(path) }
///     fn list_dir(&self, path: &Path) -> io::Result<Vec<DirChild>> { self.0.list_dir(path) }
///     fn create_dir(&self, path: &Path, mode: u32) -> io::Result<()> { self.0.create_dir(path, mode) }
///     fn hard_link(&self, src: &Path, dest: &Path) -> io::Result<()> {
///         eprintln!("link {} -> {}", src.display(), dest.display());
///         self.0.hard_link(src, dest)
///     }
/// }
/// ```
pub trait Filesystem {
    /// Query presence, type and permission bits of `path` without following symlinks.
    fn status(&self, path: &Path) -> io::Result<FileStatus>;

    /// Enumerate the children of `path` in listing order.
    ///
    /// Implementations may or may not yield `.` and `..`; the engine filters them.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirChild>>;

    /// Create the single directory `path` with permission bits `mode`.
    fn create_dir(&self, path: &Path, mode: u32) -> io::Result<()>;

    /// Create `dest` as a hard link to `src`.
    fn hard_link(&self, src: &Path, dest: &Path) -> io::Result<()>;
}

use std::ffi::OsString;
use std::fmt;

/// The kind of an entry, as reported by a directory listing or a status query.
///
/// Only [`EntryKind::Dir`] and [`EntryKind::File`] can be synchronized. The
/// other variants exist so a [`Filesystem`](crate::Filesystem) can report what
/// it actually saw; the engine rejects them instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl EntryKind {
    /// Whether the synchronizer knows what to do with this kind.
    pub fn is_syncable(self) -> bool {
        matches!(self, Self::File | Self::Dir)
    }

    pub(crate) fn from_file_type(ft: std::fs::FileType) -> Self {
        if ft.is_dir() {
            Self::Dir
        } else if ft.is_file() {
            Self::File
        } else if ft.is_symlink() {
            Self::Symlink
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::File    => "regular file",
            Self::Dir     => "directory",
            Self::Symlink => "symbolic link",
            Self::Other   => "special file",
        };
        f.write_str(s)
    }
}

/// On-disk presence and type of a path, queried without following symlinks.
///
/// Absence is not represented here: [`Filesystem::status`](crate::Filesystem::status)
/// reports it as an `io::ErrorKind::NotFound` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStatus {
    pub kind: EntryKind,

    /// Permission bits (`st_mode & 0o7777` on Unix, `0` elsewhere).
    pub mode: u32,
}

/// One child yielded by [`Filesystem::list_dir`](crate::Filesystem::list_dir).
///
/// `kind` comes from the directory entry itself, never from following a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirChild {
    pub name: OsString,
    pub kind: EntryKind,
}

impl DirChild {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self { name: name.into(), kind }
    }
}

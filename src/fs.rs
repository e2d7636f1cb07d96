use std::fs::{self, DirBuilder};
use std::io;
use std::path::Path;

use ignore::WalkBuilder;

use crate::entry::{DirChild, EntryKind, FileStatus};
use crate::traits::Filesystem;

/// [`Filesystem`] backed by the host operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn status(&self, path: &Path) -> io::Result<FileStatus> {
        let meta = fs::symlink_metadata(path)?;
        Ok(FileStatus {
            kind: EntryKind::from_file_type(meta.file_type()),
            mode: permission_bits(&meta),
        })
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirChild>> {
        let mut builder = WalkBuilder::new(path);
        builder
            .standard_filters(false)
            .ignore(false)
            .parents(false)
            .hidden(false)
            .follow_links(false)
            .same_file_system(false)
            .max_depth(Some(1));

        let mut children = Vec::new();
        for res in builder.build() {
            let entry = res.map_err(map_ignore_error)?;

            // The walk yields the directory itself first
            if entry.depth() == 0 {
                continue;
            }

            let kind = match entry.file_type() {
                Some(ft) => EntryKind::from_file_type(ft),
                None     => EntryKind::Other,
            };
            children.push(DirChild::new(entry.file_name(), kind));
        }
        Ok(children)
    }

    fn create_dir(&self, path: &Path, mode: u32) -> io::Result<()> {
        let mut builder = DirBuilder::new();
        set_mode(&mut builder, mode);
        builder.create(path)
    }

    fn hard_link(&self, src: &Path, dest: &Path) -> io::Result<()> {
        fs::hard_link(src, dest)
    }
}

#[cfg(unix)]
fn permission_bits(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn permission_bits(_meta: &fs::Metadata) -> u32 {
    0
}

#[cfg(unix)]
fn set_mode(builder: &mut DirBuilder, mode: u32) {
    use std::os::unix::fs::DirBuilderExt;
    builder.mode(mode & 0o7777);
}

#[cfg(not(unix))]
fn set_mode(_builder: &mut DirBuilder, _mode: u32) {}

// ---------------------------------------------------------------------------
// Map ignore::Error to io::Error
// ---------------------------------------------------------------------------

fn map_ignore_error(e: ignore::Error) -> io::Error {
    match e {
        ignore::Error::WithPath { err, .. } => map_ignore_error(*err),
        ignore::Error::WithDepth { err, .. } => map_ignore_error(*err),
        ignore::Error::Io(io_err) => io_err,
        other => io::Error::other(other.to_string()),
    }
}

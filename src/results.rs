use std::time::Duration;

/// Work performed by a completed sync.
///
/// Over an unchanged source tree a second run reports zero for every
/// `*_created` counter: everything is already in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Destination directories created as the image of a source directory.
    pub dirs_created: usize,

    /// Missing ancestors created along the way (only ever above the destination root).
    pub ancestors_created: usize,

    /// Hard links created.
    pub links_created: usize,

    /// Destination directories that already existed.
    pub dirs_existing: usize,

    /// Destination files that already existed.
    pub files_existing: usize,

    /// Wall-clock time of the run.
    pub duration: Duration,
}

impl SyncStats {
    /// Total number of mkdir and link operations performed.
    pub fn operations(&self) -> usize {
        self.dirs_created + self.ancestors_created + self.links_created
    }

    /// Total number of source entries visited, root included.
    pub fn entries(&self) -> usize {
        self.dirs_created + self.links_created + self.dirs_existing + self.files_existing
    }
}

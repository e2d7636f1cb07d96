use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::SyncError;
use crate::traits::Filesystem;

/// Mode for ancestors created on the way to a deeper target: owner-only `rwx`.
pub const INTERMEDIATE_DIR_MODE: u32 = 0o700;

/// Create `path` and every missing ancestor, like `mkdir -p`.
///
/// Existing components are left untouched. Missing ancestors are created with
/// [`INTERMEDIATE_DIR_MODE`], the final component with `final_mode`. The first
/// failed mkdir stops the walk and is returned; ancestors already created stay.
///
/// Returns how many directories were created.
pub fn ensure_directory_path(
    fs: &dyn Filesystem,
    path: &Path,
    final_mode: u32,
) -> Result<usize, SyncError> {
    let components: Vec<Component<'_>> = path.components().collect();
    let last = components.len().saturating_sub(1);

    let mut prefix = PathBuf::new();
    let mut created = 0;

    for (i, component) in components.into_iter().enumerate() {
        prefix.push(component);

        // `/` and drive prefixes always exist and cannot be created
        if matches!(component, Component::RootDir | Component::Prefix(_)) {
            continue;
        }

        // Any status failure counts as absent; mkdir reports the real cause
        if fs.status(&prefix).is_ok() {
            continue;
        }

        let mode = if i == last { final_mode } else { INTERMEDIATE_DIR_MODE };
        fs.create_dir(&prefix, mode)
            .map_err(|source| SyncError::CreateDir { path: prefix.clone(), source })?;
        debug!("created directory {} (mode {:o})", prefix.display(), mode);
        created += 1;
    }

    Ok(created)
}

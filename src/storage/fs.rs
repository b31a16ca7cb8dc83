//! Storage directory layout and file placement

use std::path::{Path, PathBuf};

use anyhow::anyhow;

use crate::storage::error::StorageError;

pub const TRACKS_SUBDIR: &str = "tracks";
pub const COVER_SUBDIR: &str = "cover_image";

/// Fixed on-disk layout for uploaded media: audio files under
/// `<root>/tracks`, cover images under `<root>/cover_image`.
#[derive(Debug, Clone)]
pub struct StorageLayout {
    root: PathBuf,
}

impl StorageLayout {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn tracks_dir(&self) -> PathBuf {
        self.root.join(TRACKS_SUBDIR)
    }

    pub fn covers_dir(&self) -> PathBuf {
        self.root.join(COVER_SUBDIR)
    }

    /// Path of a stored file for display, always with forward slashes.
    pub fn display_path(dir: &Path, basename: &str) -> String {
        format!("{}/{}", dir.to_string_lossy().replace('\\', "/"), basename)
    }
}

/// Copies `source` into `dest_dir`, preserving the basename.
///
/// Creates the destination directory if absent. A same-named file already
/// present is overwritten, plain copy semantics. Returns the stored
/// basename, which is what gets persisted — never the full path. The copy is
/// not atomic; a crash mid-copy leaves a partial file behind.
pub fn copy_into(source: &Path, dest_dir: &Path) -> Result<String, StorageError> {
    let basename = source
        .file_name()
        .ok_or_else(|| {
            StorageError::Internal(anyhow!("source path {} has no file name", source.display()))
        })?
        .to_string_lossy()
        .into_owned();

    std::fs::create_dir_all(dest_dir)?;
    std::fs::copy(source, dest_dir.join(&basename))?;

    Ok(basename)
}

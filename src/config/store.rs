use std::fs;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;

use crate::domain::ports::Storage;
use crate::sources::validate_image;
use crate::utils::error::{Result, WallsyError};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// `Storage` adapter over the wallsy media dir.
///
/// Input images are never modified in place and existing files are never
/// overwritten: imports copy into the media dir, and name collisions get
/// a numeric suffix.
#[derive(Debug, Clone)]
pub struct MediaStore {
    media_dir: PathBuf,
}

impl MediaStore {
    pub fn new(media_dir: PathBuf) -> Self {
        Self { media_dir }
    }

    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }
}

impl Storage for MediaStore {
    async fn import_file(&self, path: &Path) -> Result<PathBuf> {
        let src = expand_tilde(path);
        validate_image(&src)?;

        // Re-importing a file already inside the media dir is a no-op.
        if src.parent() == Some(self.media_dir.as_path()) {
            tracing::debug!("{} is already in the media dir", src.display());
            return Ok(src);
        }

        let file_name = src
            .file_name()
            .ok_or_else(|| WallsyError::ProcessingError {
                message: format!("{} has no file name component", src.display()),
            })?;

        let dest = dedup_path(&self.media_dir.join(file_name));
        fs::copy(&src, &dest)?;
        tracing::debug!("Copied {} to {}", src.display(), dest.display());

        Ok(dest)
    }

    async fn store_bytes(&self, file_name: &str, data: &[u8]) -> Result<PathBuf> {
        let dest = dedup_path(&self.media_dir.join(file_name));
        fs::write(&dest, data)?;
        Ok(dest)
    }

    async fn random_entry(&self) -> Result<PathBuf> {
        let mut entries: Vec<PathBuf> = fs::read_dir(&self.media_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_image_extension(path))
            .collect();
        entries.sort();

        entries
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| WallsyError::ProcessingError {
                message: format!(
                    "No images in {} to pick from. Run 'add' to import some first",
                    self.media_dir.display()
                ),
            })
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Next free variant of `path`: the path itself if unused, otherwise
/// `stem-1.ext`, `stem-2.ext`, ...
pub fn dedup_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let parent = path.parent().unwrap_or_else(|| Path::new(""));

    let mut n = 1u32;
    loop {
        let candidate = parent.join(format!("{}-{}{}", stem, n, ext));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

//! Pipeline sinks: save a copy, open a viewer, set the desktop wallpaper.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::store::{dedup_path, expand_tilde};
use crate::domain::model::ImageFile;
use crate::utils::error::Result;
use crate::wallpaper;

/// Copy a final image to `dest` (or the configured save dir), optionally
/// renamed. The extension is preserved when the new name has none.
pub fn save_copy(
    image: &ImageFile,
    dest: Option<&Path>,
    name: Option<&str>,
    default_dir: &Path,
) -> Result<PathBuf> {
    let dir = match dest {
        Some(dir) => expand_tilde(dir),
        None => default_dir.to_path_buf(),
    };
    fs::create_dir_all(&dir)?;

    let file_name = match name {
        Some(name) if Path::new(name).extension().is_some() => name.to_string(),
        Some(name) => match image.path.extension() {
            Some(ext) => format!("{}.{}", name, ext.to_string_lossy()),
            None => name.to_string(),
        },
        None => image.file_name(),
    };

    let dest_path = dedup_path(&dir.join(file_name));
    fs::copy(&image.path, &dest_path)?;

    Ok(dest_path)
}

/// Open the image with the default system viewer, detached.
pub fn show(image: &ImageFile) -> Result<()> {
    Command::new("xdg-open")
        .arg(&image.path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

/// Copy the image into the wallpaper dir and point the desktop at it.
/// The copy keeps the desktop working even if the media tree is pruned
/// later; same-named files in the wallpaper dir are refreshed in place.
pub fn set_desktop(image: &ImageFile, wallpaper_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(wallpaper_dir)?;

    let dest = wallpaper_dir.join(image.file_name());
    if dest != image.path {
        fs::copy(&image.path, &dest)?;
        tracing::debug!("Copied {} to {}", image.file_name(), wallpaper_dir.display());
    }

    wallpaper::set(&dest)?;
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Origin;
    use tempfile::TempDir;

    fn image_at(dir: &Path, name: &str) -> ImageFile {
        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([9, 9, 9]));
        let path = dir.join(name);
        image::DynamicImage::ImageRgb8(img).save(&path).unwrap();
        ImageFile::new(path, Origin::LocalFile)
    }

    #[test]
    fn test_save_copy_defaults_to_save_dir_and_original_name() {
        let tmp = TempDir::new().unwrap();
        let saved_dir = tmp.path().join("saved");
        let image = image_at(tmp.path(), "sunset.png");

        let saved = save_copy(&image, None, None, &saved_dir).unwrap();
        assert_eq!(saved, saved_dir.join("sunset.png"));
        assert!(saved.exists());
    }

    #[test]
    fn test_save_copy_renames_and_keeps_extension() {
        let tmp = TempDir::new().unwrap();
        let image = image_at(tmp.path(), "sunset.png");

        let saved = save_copy(&image, Some(tmp.path()), Some("myphoto"), tmp.path()).unwrap();
        assert_eq!(saved, tmp.path().join("myphoto.png"));
    }

    #[test]
    fn test_save_copy_never_overwrites() {
        let tmp = TempDir::new().unwrap();
        let image = image_at(tmp.path(), "sunset.png");

        let first = save_copy(&image, Some(tmp.path()), Some("wall"), tmp.path()).unwrap();
        let second = save_copy(&image, Some(tmp.path()), Some("wall"), tmp.path()).unwrap();
        assert_eq!(first, tmp.path().join("wall.png"));
        assert_eq!(second, tmp.path().join("wall-1.png"));
    }
}

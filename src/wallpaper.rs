//! GNOME desktop background integration.
//!
//! Reads and writes the `org.gnome.desktop.background` schema through the
//! `gsettings` CLI. Modern GNOME consults `picture-uri-dark` in dark
//! mode, so setting a wallpaper writes both keys; reading uses
//! `picture-uri` only.

use std::path::{Path, PathBuf};
use std::process::Command;

use url::Url;

use crate::sources::validate_image;
use crate::utils::error::{Result, WallsyError};

const SCHEMA: &str = "org.gnome.desktop.background";
const KEY_LIGHT: &str = "picture-uri";
const KEY_DARK: &str = "picture-uri-dark";

/// Path of the currently-set desktop wallpaper.
pub fn current() -> Result<PathBuf> {
    let output = run_gsettings(&["get", SCHEMA, KEY_LIGHT])?;
    let path = parse_picture_uri(&output)?;

    if !path.exists() {
        return Err(WallsyError::WallpaperError {
            message: format!(
                "current wallpaper {} no longer exists on disk",
                path.display()
            ),
        });
    }

    Ok(path)
}

/// Set `path` as the desktop background for both light and dark modes.
/// The image is validated before any key is written so a half-set state
/// cannot point the desktop at junk.
pub fn set(path: &Path) -> Result<()> {
    let abs = path
        .canonicalize()
        .map_err(|e| WallsyError::WallpaperError {
            message: format!("{}: {}", path.display(), e),
        })?;

    if !abs.is_file() {
        return Err(WallsyError::WallpaperError {
            message: format!("{} is not a file", abs.display()),
        });
    }

    validate_image(&abs)?;

    let uri = Url::from_file_path(&abs)
        .map_err(|_| WallsyError::WallpaperError {
            message: format!("could not build a file:// URI for {}", abs.display()),
        })?
        .to_string();

    for key in [KEY_LIGHT, KEY_DARK] {
        run_gsettings(&["set", SCHEMA, key, &uri])?;
    }

    tracing::debug!("gsettings {} updated to {}", SCHEMA, uri);
    Ok(())
}

fn run_gsettings(args: &[&str]) -> Result<String> {
    let output = Command::new("gsettings")
        .args(args)
        .output()
        .map_err(|e| WallsyError::WallpaperError {
            message: format!("could not run gsettings: {}", e),
        })?;

    if !output.status.success() {
        return Err(WallsyError::WallpaperError {
            message: format!(
                "gsettings {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Cleanse gsettings output into a filesystem path. The value comes back
/// single-quoted and usually as a `file://` URI.
fn parse_picture_uri(raw: &str) -> Result<PathBuf> {
    let cleaned = raw.trim().trim_matches('\'');

    if cleaned.is_empty() {
        return Err(WallsyError::WallpaperError {
            message: "no desktop wallpaper is currently set".to_string(),
        });
    }

    if cleaned.starts_with("file://") {
        return Url::parse(cleaned)
            .ok()
            .and_then(|url| url.to_file_path().ok())
            .ok_or_else(|| WallsyError::WallpaperError {
                message: format!("could not parse wallpaper URI '{}'", cleaned),
            });
    }

    Ok(PathBuf::from(cleaned))
}

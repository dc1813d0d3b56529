use std::path::PathBuf;

use image::ImageFormat;
use url::Url;

use crate::domain::ports::Storage;
use crate::utils::error::{Result, WallsyError};

/// Fetch an image over HTTP and persist it through the store.
///
/// Redirects are followed (the Unsplash Source endpoints answer with one),
/// so the file name is derived from the *final* URL. The response body is
/// sniffed before anything touches disk; a 200 that is not an image is a
/// download error, not a saved junk file.
pub async fn fetch_image<S: Storage>(
    client: &reqwest::Client,
    store: &S,
    url: &str,
) -> Result<PathBuf> {
    tracing::debug!("GET {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(WallsyError::DownloadError {
            url: url.to_string(),
            reason: format!("server returned status {}", status),
        });
    }

    let final_url = response.url().clone();
    tracing::debug!("Resolved to {}", final_url);

    let bytes = response.bytes().await?;

    let format = image::guess_format(&bytes).map_err(|_| WallsyError::DownloadError {
        url: url.to_string(),
        reason: "the target resource does not appear to be an image".to_string(),
    })?;

    let file_name = derive_file_name(&final_url, format);
    store.store_bytes(&file_name, &bytes).await
}

/// File name for a downloaded image: the last path segment of the final
/// URL, re-extensioned to match the sniffed format. URLs with no usable
/// segment get a timestamped name.
fn derive_file_name(final_url: &Url, format: ImageFormat) -> String {
    let ext = format.extensions_str().first().copied().unwrap_or("img");

    let stem = final_url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(|segment| {
            std::path::Path::new(segment)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| segment.to_string())
        })
        .filter(|stem| !stem.is_empty());

    match stem {
        Some(stem) => format!("{}.{}", stem, ext),
        None => format!(
            "wallsy-{}.{}",
            chrono::Local::now().format("%Y%m%d-%H%M%S"),
            ext
        ),
    }
}

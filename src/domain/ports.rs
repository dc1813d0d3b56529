use crate::domain::model::{ImageFile, PipelineOutput};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Filesystem side of the pipeline: the wallsy media tree.
pub trait Storage: Send + Sync {
    /// Copy a validated image from an arbitrary path into the media dir.
    fn import_file(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;

    /// Persist raw image bytes under the given file name. Existing files
    /// are never overwritten; collisions get a numeric suffix.
    fn store_bytes(
        &self,
        file_name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;

    /// Pick a uniformly random image already in the media dir.
    fn random_entry(&self) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn media_dir(&self) -> &Path;
    fn effects_dir(&self) -> &Path;
    fn wallpaper_dir(&self) -> &Path;
    fn save_dir(&self) -> &Path;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn source(&self) -> Result<Vec<ImageFile>>;
    async fn apply_effects(&self, images: Vec<ImageFile>) -> Result<Vec<ImageFile>>;
    async fn deliver(&self, images: Vec<ImageFile>) -> Result<PipelineOutput>;
}

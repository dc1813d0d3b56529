use async_trait::async_trait;
use reqwest::Client;

use crate::core::{ConfigProvider, ImageFile, Pipeline, PipelineOutput, PipelineSpec, Storage};
use crate::domain::model::{Origin, SinkSpec, SourceSpec};
use crate::effects;
use crate::sinks;
use crate::sources::{download, unsplash};
use crate::utils::error::Result;
use crate::wallpaper;

/// The pipeline for one wallsy invocation: resolves the source stages
/// into an image stream, folds the effect chain over it, then runs each
/// sink over the final stream.
pub struct WallsyPipeline<S: Storage, C: ConfigProvider> {
    store: S,
    config: C,
    spec: PipelineSpec,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> WallsyPipeline<S, C> {
    pub fn new(store: S, config: C, spec: PipelineSpec) -> Self {
        Self {
            store,
            config,
            spec,
            client: Client::new(),
        }
    }

    async fn fetch(&self, url: &str, origin: Origin) -> Result<ImageFile> {
        let path = download::fetch_image(&self.client, &self.store, url).await?;
        println!(
            "🌐 downloaded {} to {}",
            origin_label(&origin),
            path.display()
        );
        Ok(ImageFile::new(path, origin))
    }
}

#[async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for WallsyPipeline<S, C> {
    async fn source(&self) -> Result<Vec<ImageFile>> {
        let mut images = Vec::new();

        for source in &self.spec.sources {
            match source {
                SourceSpec::File(path) => {
                    let imported = self.store.import_file(path).await?;
                    println!("🖼  added {} to the wallsy folder", imported.display());
                    images.push(ImageFile::new(imported, Origin::LocalFile));
                }
                SourceSpec::Url(url) => {
                    images.push(self.fetch(url, Origin::Url(url.clone())).await?);
                }
                SourceSpec::RandomOnline {
                    keywords,
                    dimensions,
                    count,
                } => {
                    for _ in 0..*count {
                        let url = unsplash::random_featured_photo(keywords, *dimensions);
                        images.push(self.fetch(&url, Origin::UnsplashRandom).await?);
                    }
                }
                SourceSpec::RandomLocal { count } => {
                    for _ in 0..*count {
                        let picked = self.store.random_entry().await?;
                        println!("🎲 grabbed {} from the wallsy folder", picked.display());
                        images.push(ImageFile::new(picked, Origin::LocalRandom));
                    }
                }
                SourceSpec::CurrentWallpaper => {
                    let current = wallpaper::current()?;
                    let imported = self.store.import_file(&current).await?;
                    println!("🖥  using current wallpaper {}", imported.display());
                    images.push(ImageFile::new(imported, Origin::CurrentWallpaper));
                }
            }
        }

        Ok(images)
    }

    async fn apply_effects(&self, images: Vec<ImageFile>) -> Result<Vec<ImageFile>> {
        if self.spec.effects.is_empty() {
            return Ok(images);
        }

        let mut out = Vec::with_capacity(images.len());
        for image in images {
            let mut current = image;
            for effect in &self.spec.effects {
                tracing::debug!("Applying {} to {}", effect.name(), current.file_name());
                let path = effects::apply_to_file(effect, &current.path, self.config.effects_dir())?;
                println!("🎨 '{}' saved {}", effect.name(), path.display());
                current = ImageFile::new(path, Origin::Derived);
            }
            out.push(current);
        }

        Ok(out)
    }

    async fn deliver(&self, images: Vec<ImageFile>) -> Result<PipelineOutput> {
        let mut delivered = Vec::new();

        for sink in &self.spec.sinks {
            for image in &images {
                match sink {
                    SinkSpec::Save { dest, name } => {
                        let saved = sinks::save_copy(
                            image,
                            dest.as_deref(),
                            name.as_deref(),
                            self.config.save_dir(),
                        )?;
                        println!("💾 saved {}", saved.display());
                        delivered.push(format!("saved {}", saved.display()));
                    }
                    SinkSpec::Show => {
                        sinks::show(image)?;
                        println!("👀 opened {} in the system viewer", image.file_name());
                        delivered.push(format!("opened {}", image.file_name()));
                    }
                    SinkSpec::Desktop => {
                        let set = sinks::set_desktop(image, self.config.wallpaper_dir())?;
                        println!("🖥  desktop wallpaper set to {}", set.display());
                        delivered.push(format!("desktop wallpaper set to {}", set.display()));
                    }
                }
            }
        }

        Ok(PipelineOutput { images, delivered })
    }
}

fn origin_label(origin: &Origin) -> String {
    match origin {
        Origin::Url(url) => format!("an image from {}", url),
        Origin::UnsplashRandom => "a random Unsplash photo".to_string(),
        _ => "an image".to_string(),
    }
}

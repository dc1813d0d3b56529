pub mod config;
pub mod core;
pub mod domain;
pub mod effects;
pub mod sinks;
pub mod sources;
pub mod utils;
pub mod wallpaper;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{store::MediaStore, WallsyConfig};
pub use core::{engine::PipelineEngine, pipeline::WallsyPipeline};
pub use domain::model::{PipelineOutput, PipelineSpec};
pub use utils::error::{Result, WallsyError};

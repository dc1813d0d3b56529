use std::time::Duration;

use crate::core::{Pipeline, PipelineOutput};
use crate::utils::error::Result;

/// Runs the three pipeline phases in order, optionally on a repeating
/// interval (`every`). In repeat mode the first failing run aborts the
/// loop: an unattended refresh must not spin on a dead network.
pub struct PipelineEngine<P: Pipeline> {
    pipeline: P,
    repeat: Option<Duration>,
}

impl<P: Pipeline> PipelineEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            repeat: None,
        }
    }

    pub fn with_repeat(pipeline: P, repeat: Option<Duration>) -> Self {
        Self { pipeline, repeat }
    }

    pub async fn run(&self) -> Result<PipelineOutput> {
        let mut output = self.run_once().await?;

        while let Some(interval) = self.repeat {
            let next = chrono::Local::now() + chrono::Duration::seconds(interval.as_secs() as i64);
            tracing::info!("Next refresh at {}", next.format("%H:%M:%S"));
            tokio::time::sleep(interval).await;
            output = self.run_once().await?;
        }

        Ok(output)
    }

    async fn run_once(&self) -> Result<PipelineOutput> {
        tracing::info!("Sourcing images...");
        let images = self.pipeline.source().await?;
        tracing::info!("Sourced {} image(s)", images.len());

        let images = self.pipeline.apply_effects(images).await?;

        tracing::info!("Delivering...");
        let output = self.pipeline.deliver(images).await?;

        Ok(output)
    }
}

use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives one assembly run through the pipeline phases. A failure in any
/// phase stops the run before the next one, so a retrieval or decoding
/// error never produces an output artifact.
pub struct SquadEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> SquadEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting squad assembly run...");

        tracing::info!("Fetching roster...");
        let roster = self.pipeline.extract().await?;
        tracing::info!("Fetched {} heroes", roster.len());
        self.monitor.log_stats("Extract");

        tracing::info!("Assembling squads...");
        let squads = self.pipeline.transform(roster).await?;
        tracing::info!("Assembled {} squads", squads.len());
        self.monitor.log_stats("Transform");

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(squads).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Hero, SquadRecord};
    use crate::utils::error::SquadError;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct ScriptedPipeline {
        fail_extract: bool,
        loaded: AtomicBool,
    }

    impl ScriptedPipeline {
        fn new(fail_extract: bool) -> Self {
            Self {
                fail_extract,
                loaded: AtomicBool::new(false),
            }
        }
    }

    #[async_trait::async_trait]
    impl Pipeline for ScriptedPipeline {
        async fn extract(&self) -> Result<Vec<Hero>> {
            if self.fail_extract {
                return Err(SquadError::UnexpectedPayload {
                    found: "string".to_string(),
                });
            }
            Ok(Vec::new())
        }

        async fn transform(&self, _roster: Vec<Hero>) -> Result<Vec<SquadRecord>> {
            Ok(Vec::new())
        }

        async fn load(&self, _squads: Vec<SquadRecord>) -> Result<String> {
            self.loaded.store(true, Ordering::SeqCst);
            Ok("out/squads_output.json".to_string())
        }
    }

    #[tokio::test]
    async fn run_returns_output_path() {
        let engine = SquadEngine::new(ScriptedPipeline::new(false));
        assert_eq!(engine.run().await.unwrap(), "out/squads_output.json");
    }

    #[tokio::test]
    async fn extract_failure_skips_load() {
        let pipeline = ScriptedPipeline::new(true);
        let engine = SquadEngine::new(pipeline);

        assert!(engine.run().await.is_err());
        assert!(!engine.pipeline.loaded.load(Ordering::SeqCst));
    }
}

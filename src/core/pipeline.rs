use crate::core::{AssemblyConfig, Hero, OutputFormat, Pipeline, SquadRecord, Storage};
use crate::domain::model::decode_roster;
use crate::domain::services::assemble_squads;
use crate::utils::error::{Result, SquadError};
use reqwest::Client;

pub struct SquadPipeline<S: Storage, C: AssemblyConfig> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: AssemblyConfig> SquadPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: AssemblyConfig> Pipeline for SquadPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Hero>> {
        tracing::debug!("Fetching roster from: {}", self.config.roster_endpoint());
        let response = self
            .client
            .get(self.config.roster_endpoint())
            .send()
            .await?;

        tracing::debug!("Roster response status: {}", response.status());

        // Any non-success status or body failure aborts the run. There is no
        // fallback roster and no partial recovery.
        let payload: serde_json::Value = response.error_for_status()?.json().await?;
        decode_roster(payload)
    }

    async fn transform(&self, roster: Vec<Hero>) -> Result<Vec<SquadRecord>> {
        let threshold = self.config.leadership_threshold();
        let pool_size = self.config.pool_size();
        tracing::debug!(
            "Assembling squads from {} heroes (threshold {}, pool size {})",
            roster.len(),
            threshold,
            pool_size
        );

        let squads = assemble_squads(&roster, threshold, pool_size);
        Ok(squads)
    }

    async fn load(&self, squads: Vec<SquadRecord>) -> Result<String> {
        let format = self.config.output_format();
        let file_name = format.file_name();

        let bytes = match format {
            OutputFormat::Json => serde_json::to_vec_pretty(&squads)?,
            OutputFormat::Csv => render_csv(&squads)?,
        };

        tracing::debug!("Writing {} squads ({} bytes) to storage", squads.len(), bytes.len());
        self.storage.write_file(file_name, &bytes).await?;

        Ok(format!("{}/{}", self.config.output_path(), file_name))
    }
}

fn render_csv(squads: &[SquadRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["leader", "score", "member_1", "member_2", "member_3", "member_4"])?;

    for squad in squads {
        let mut row = vec![squad.leader.clone(), squad.score.to_string()];
        row.extend(squad.squad.iter().cloned());
        writer.write_record(&row)?;
    }

    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| SquadError::Io(e.into_error()))
}

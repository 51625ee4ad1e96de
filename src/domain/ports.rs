use crate::domain::model::{Hero, SquadRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The output sink. Squad documents go out through here and nothing comes
/// back in.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Configuration surface consumed by the pipeline.
pub trait AssemblyConfig: Send + Sync {
    fn roster_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    /// Candidate pool cap per leader (`top_n`).
    fn pool_size(&self) -> usize;
    fn leadership_threshold(&self) -> i64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl OutputFormat {
    pub const VALID_NAMES: [&'static str; 2] = ["json", "csv"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Json => "squads_output.json",
            Self::Csv => "squads_output.csv",
        }
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Fetch and strictly decode the roster. Any failure here is fatal to
    /// the run; no squads are assembled and nothing is written.
    async fn extract(&self) -> Result<Vec<Hero>>;
    async fn transform(&self, roster: Vec<Hero>) -> Result<Vec<SquadRecord>>;
    async fn load(&self, squads: Vec<SquadRecord>) -> Result<String>;
}

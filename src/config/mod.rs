pub mod toml_config;

use crate::domain::model::{DEFAULT_LEADERSHIP_THRESHOLD, DEFAULT_POOL_SIZE};
use crate::domain::ports::{AssemblyConfig, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{
    self, validate_output_format, validate_path, validate_positive_number, validate_range,
    validate_url,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Published roster document of the original recruiting exercise.
pub const DEFAULT_ROSTER_URL: &str =
    "https://storage.googleapis.com/dc-recruiting-longform-4d1c78ff/heroes-1460ca6a.json";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "squadron")]
#[command(about = "Assembles scored four-hero squads from a fetched roster")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ROSTER_URL)]
    pub roster_url: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "json", help = "Output format: json or csv")]
    pub output_format: String,

    #[arg(long, default_value_t = DEFAULT_POOL_SIZE, help = "Candidate pool size per leader")]
    pub top_n: usize,

    #[arg(
        long,
        default_value_t = DEFAULT_LEADERSHIP_THRESHOLD,
        help = "Minimum leadership ability to head a squad"
    )]
    pub leadership_threshold: i64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

impl AssemblyConfig for CliConfig {
    fn roster_endpoint(&self) -> &str {
        &self.roster_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::from_name(&self.output_format).unwrap_or_default()
    }

    fn pool_size(&self) -> usize {
        self.top_n
    }

    fn leadership_threshold(&self) -> i64 {
        self.leadership_threshold
    }
}

impl validation::Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("roster_url", &self.roster_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_output_format("output_format", &self.output_format)?;
        validate_positive_number("top_n", self.top_n, 1)?;
        validate_range("leadership_threshold", self.leadership_threshold, 1, 10)?;
        Ok(())
    }
}

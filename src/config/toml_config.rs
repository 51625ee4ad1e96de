use crate::domain::model::{DEFAULT_LEADERSHIP_THRESHOLD, DEFAULT_POOL_SIZE};
use crate::domain::ports::{AssemblyConfig, OutputFormat};
use crate::utils::error::{Result, SquadError};
use crate::utils::validation::{
    validate_output_format, validate_path, validate_positive_number, validate_range, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-driven run configuration for the `toml_squads` entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub run: Option<RunSection>,
    pub source: SourceSection,
    pub assembly: Option<AssemblySection>,
    pub load: LoadSection,
    pub monitoring: Option<MonitoringSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblySection {
    pub top_n: Option<usize>,
    pub leadership_threshold: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadSection {
    pub output_path: String,
    pub output_format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SquadError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SquadError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn run_name(&self) -> &str {
        self.run.as_ref().map(|r| r.name.as_str()).unwrap_or("squadron")
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    fn format_name(&self) -> &str {
        self.load.output_format.as_deref().unwrap_or("json")
    }
}

impl AssemblyConfig for TomlConfig {
    fn roster_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::from_name(self.format_name()).unwrap_or_default()
    }

    fn pool_size(&self) -> usize {
        self.assembly
            .as_ref()
            .and_then(|a| a.top_n)
            .unwrap_or(DEFAULT_POOL_SIZE)
    }

    fn leadership_threshold(&self) -> i64 {
        self.assembly
            .as_ref()
            .and_then(|a| a.leadership_threshold)
            .unwrap_or(DEFAULT_LEADERSHIP_THRESHOLD)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_path("load.output_path", &self.load.output_path)?;
        validate_output_format("load.output_format", self.format_name())?;
        validate_positive_number("assembly.top_n", self.pool_size(), 1)?;
        validate_range(
            "assembly.leadership_threshold",
            self.leadership_threshold(),
            1,
            10,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let content = r#"
[run]
name = "nightly-squads"
description = "Full roster run"

[source]
endpoint = "https://example.com/heroes.json"

[assembly]
top_n = 12
leadership_threshold = 8

[load]
output_path = "./out"
output_format = "csv"

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(content).unwrap();

        assert_eq!(config.run_name(), "nightly-squads");
        assert_eq!(config.roster_endpoint(), "https://example.com/heroes.json");
        assert_eq!(config.pool_size(), 12);
        assert_eq!(config.leadership_threshold(), 8);
        assert_eq!(config.output_format(), OutputFormat::Csv);
        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn optional_sections_fall_back_to_defaults() {
        let content = r#"
[source]
endpoint = "https://example.com/heroes.json"

[load]
output_path = "./out"
"#;

        let config = TomlConfig::from_toml_str(content).unwrap();

        assert_eq!(config.run_name(), "squadron");
        assert_eq!(config.pool_size(), DEFAULT_POOL_SIZE);
        assert_eq!(config.leadership_threshold(), DEFAULT_LEADERSHIP_THRESHOLD);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_source_section_is_a_parse_error() {
        let content = r#"
[load]
output_path = "./out"
"#;

        assert!(matches!(
            TomlConfig::from_toml_str(content),
            Err(SquadError::ConfigParse { .. })
        ));
    }

    #[test]
    fn invalid_format_fails_validation() {
        let content = r#"
[source]
endpoint = "https://example.com/heroes.json"

[load]
output_path = "./out"
output_format = "parquet"
"#;

        let config = TomlConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_err());
    }
}

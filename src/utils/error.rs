use thiserror::Error;

#[derive(Error, Debug)]
pub enum SquadError {
    #[error("Roster retrieval failed: {0}")]
    Retrieval(#[from] reqwest::Error),

    #[error("Roster payload was not a JSON array (got {found})")]
    UnexpectedPayload { found: String },

    #[error("Malformed roster record at index {index}: {source}")]
    MalformedRecord {
        index: usize,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parsing error: {message}")]
    ConfigParse { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Retrieval,
    Roster,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad invocation; fix the flags or the config file.
    Configuration,
    /// The provider or its payload failed; possibly transient.
    Upstream,
    /// Local processing or write failure.
    Processing,
}

impl SquadError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Retrieval(_) | Self::UnexpectedPayload { .. } => ErrorCategory::Retrieval,
            Self::MalformedRecord { .. } => ErrorCategory::Roster,
            Self::Io(_) | Self::Serialization(_) | Self::Csv(_) => ErrorCategory::Output,
            Self::InvalidConfigValue { .. } | Self::ConfigParse { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Configuration,
            ErrorCategory::Retrieval | ErrorCategory::Roster => ErrorSeverity::Upstream,
            ErrorCategory::Output => ErrorSeverity::Processing,
        }
    }

    /// Process exit code for the CLI entry points.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Configuration => 1,
            ErrorSeverity::Upstream => 2,
            ErrorSeverity::Processing => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Retrieval(e) => format!("Could not fetch the roster: {}", e),
            Self::UnexpectedPayload { found } => format!(
                "The roster endpoint answered with a JSON {} instead of an array of heroes",
                found
            ),
            Self::MalformedRecord { index, .. } => format!(
                "Roster record #{} does not match the expected hero shape",
                index
            ),
            Self::Io(e) => format!("Could not write the output file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Retrieval => {
                "Check the roster URL and your network connection, then rerun"
            }
            ErrorCategory::Roster => {
                "The roster document is corrupt; no squads were assembled. Fix the source data"
            }
            ErrorCategory::Output => "Check the output path exists and is writable",
            ErrorCategory::Configuration => "Run with --help to see the accepted values",
        }
    }
}

pub type Result<T> = std::result::Result<T, SquadError>;

use crate::utils::error::{Result, SquadError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SquadError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SquadError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SquadError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SquadError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SquadError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SquadError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SquadError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_output_format(field_name: &str, format: &str) -> Result<()> {
    use crate::domain::ports::OutputFormat;

    if OutputFormat::from_name(format).is_none() {
        return Err(SquadError::InvalidConfigValue {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: format!(
                "Unsupported format. Valid formats: {}",
                OutputFormat::VALID_NAMES.join(", ")
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("roster_url", "https://example.com").is_ok());
        assert!(validate_url("roster_url", "http://example.com").is_ok());
        assert!(validate_url("roster_url", "").is_err());
        assert!(validate_url("roster_url", "invalid-url").is_err());
        assert!(validate_url("roster_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("top_n", 30, 1).is_ok());
        assert!(validate_positive_number("top_n", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("leadership_threshold", 7, 1, 10).is_ok());
        assert!(validate_range("leadership_threshold", 0, 1, 10).is_err());
        assert!(validate_range("leadership_threshold", 11, 1, 10).is_err());
    }

    #[test]
    fn test_validate_output_format() {
        assert!(validate_output_format("output_format", "json").is_ok());
        assert!(validate_output_format("output_format", "csv").is_ok());
        assert!(validate_output_format("output_format", "yaml").is_err());
    }
}

use crate::utils::error::{PovError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PovError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PovError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PovError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(PovError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Discovery notes arrive as plain text; only .txt and .md files are accepted.
pub fn validate_notes_file(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PovError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some("txt") | Some("md") => Ok(()),
        _ => Err(PovError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Only .txt and .md files are supported".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_https() {
        assert!(validate_url("docs_base_url", "https://docs.snyk.io").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_other_schemes() {
        assert!(validate_url("docs_base_url", "ftp://example.com").is_err());
        assert!(validate_url("docs_base_url", "").is_err());
        assert!(validate_url("docs_base_url", "not a url").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("min_discovery_length", 30, 1).is_ok());
        assert!(validate_positive_number("min_discovery_length", 0, 1).is_err());
    }

    #[test]
    fn test_validate_notes_file_extensions() {
        assert!(validate_notes_file("notes_file", "discovery.txt").is_ok());
        assert!(validate_notes_file("notes_file", "discovery.md").is_ok());
        assert!(validate_notes_file("notes_file", "discovery.pdf").is_err());
        assert!(validate_notes_file("notes_file", "").is_err());
    }
}

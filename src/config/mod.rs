#[cfg(feature = "cli")]
pub mod cli;
pub mod dictionaries;

use crate::config::dictionaries::DictionaryOverrides;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::Deserialize;

pub const DEFAULT_MIN_DISCOVERY_LENGTH: usize = 30;
pub const DEFAULT_DOCS_BASE_URL: &str = "https://docs.snyk.io";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Discovery notes shorter than this never qualify.
    pub min_discovery_length: usize,
    /// Base URL the implementation-resource links are joined to.
    pub docs_base_url: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            min_discovery_length: DEFAULT_MIN_DISCOVERY_LENGTH,
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
        }
    }
}

impl Validate for ProcessorConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("min_discovery_length", self.min_discovery_length, 1)?;
        validate_url("docs_base_url", &self.docs_base_url)?;
        Ok(())
    }
}

/// TOML config file layout: a `[processor]` table plus optional
/// `[dictionaries]` additions.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    #[serde(default)]
    pub processor: ProcessorConfig,
    #[serde(default)]
    pub dictionaries: DictionaryOverrides,
}

impl FileConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FileConfig = toml::from_str(content)?;
        config.processor.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

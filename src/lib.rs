pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{StaticCompetitiveIntel, StaticImplementationCatalog};
pub use crate::config::dictionaries::KeywordDictionaries;
pub use crate::config::{FileConfig, ProcessorConfig};
pub use crate::core::processor::PovProcessor;
pub use crate::domain::model::{ProcessOutcome, TechStackOverrides};
pub use crate::utils::error::{PovError, Result};

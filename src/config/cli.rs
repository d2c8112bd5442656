use crate::domain::model::TechStackOverrides;
use crate::utils::error::Result;
use crate::utils::validation::{validate_notes_file, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pov-sherpa")]
#[command(about = "Turn customer discovery notes into a POV worksheet with implementation guidance")]
pub struct CliConfig {
    /// Discovery notes file (.txt or .md). Reads stdin when omitted and no
    /// structured fields are given.
    #[arg(long)]
    pub notes_file: Option<String>,

    /// TOML config file with processor settings and dictionary additions.
    #[arg(long)]
    pub config: Option<String>,

    /// Override the minimum discovery-notes length.
    #[arg(long)]
    pub min_length: Option<usize>,

    // Structured form fields. Abbreviations and common typos are normalized
    // before processing ("gh" -> "GitHub", "pyton" -> "Python").
    #[arg(long)]
    pub scm: Option<String>,

    /// Comma-separated language list.
    #[arg(long)]
    pub languages: Option<String>,

    #[arg(long)]
    pub current_state: Option<String>,

    #[arg(long)]
    pub additional_context: Option<String>,

    #[arg(long)]
    pub ide: Option<String>,

    #[arg(long)]
    pub cicd: Option<String>,

    #[arg(long)]
    pub container_registry: Option<String>,

    #[arg(long)]
    pub iac: Option<String>,

    #[arg(long)]
    pub cloud_provider: Option<String>,

    /// Pretty-print the JSON outcome.
    #[arg(long)]
    pub pretty: bool,

    /// Emit logs as JSON instead of the compact human format.
    #[arg(long)]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> TechStackOverrides {
        TechStackOverrides {
            scm: self.scm.clone(),
            languages: self.languages.clone(),
            current_state: self.current_state.clone(),
            additional_context: self.additional_context.clone(),
            ide: self.ide.clone(),
            cicd: self.cicd.clone(),
            container_registry: self.container_registry.clone(),
            iac: self.iac.clone(),
            cloud_provider: self.cloud_provider.clone(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.notes_file {
            validate_notes_file("notes_file", path)?;
        }
        Ok(())
    }
}

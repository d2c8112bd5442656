use crate::config::dictionaries::KeywordDictionaries;
use crate::config::ProcessorConfig;
use crate::core::extract::Extractor;
use crate::core::{assistant, enhance, qualify, worksheet};
use crate::domain::model::{
    ProcessOutcome, QualificationResult, QualifiedOutcome, TechStackOverrides,
};
use crate::domain::ports::{CompetitiveIntel, ImplementationCatalog};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Orchestrates one discovery-notes request end to end: qualification gate,
/// extraction, worksheet rendering, then the two collaborator lookups.
/// Stateless between calls; identical input yields identical output.
pub struct PovProcessor<I, C> {
    extractor: Extractor,
    config: ProcessorConfig,
    intel: I,
    catalog: C,
}

impl<I: CompetitiveIntel, C: ImplementationCatalog> PovProcessor<I, C> {
    pub fn new(
        config: ProcessorConfig,
        dicts: KeywordDictionaries,
        intel: I,
        catalog: C,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            extractor: Extractor::new(dicts)?,
            config,
            intel,
            catalog,
        })
    }

    pub fn qualify_opportunity(&self, notes: &str) -> QualificationResult {
        qualify::qualify_opportunity(
            notes,
            self.config.min_discovery_length,
            self.extractor.dictionaries(),
        )
    }

    pub async fn process_discovery_notes(
        &self,
        notes: &str,
        overrides: Option<&TechStackOverrides>,
    ) -> Result<ProcessOutcome> {
        let qualification = self.qualify_opportunity(notes);
        if !qualification.qualified {
            tracing::debug!(
                missing = ?qualification.missing_fields,
                "discovery notes did not qualify"
            );
            return Ok(ProcessOutcome::NotQualified(qualification));
        }

        let mut info = self.extractor.extract_information(notes);
        if let Some(raw) = overrides {
            let enhanced = enhance::normalize_overrides(raw, self.extractor.dictionaries());
            tracing::debug!(?enhanced, "applying normalized tech-stack overrides");
            enhance::apply_overrides(&mut info.tech_stack, &enhanced);
        }
        tracing::info!(
            customer = %info.customer_name,
            competitors = info.competitors.len(),
            "extracted discovery information"
        );

        let pov_worksheet = worksheet::render(&info, self.extractor.dictionaries());
        let competitive_advantages = self.intel.competitive_advantages(&info.competitors).await?;
        let implementation_guides = self.catalog.implementation_guides(&info.tech_stack).await?;

        Ok(ProcessOutcome::Qualified(Box::new(QualifiedOutcome {
            qualified: true,
            pov_worksheet,
            competitive_advantages,
            implementation_guides,
            extracted_info: info,
        })))
    }

    /// Canned reply for short chat messages that are not discovery notes.
    pub fn route_message(&self, message: &str) -> String {
        assistant::route_message(message)
    }
}

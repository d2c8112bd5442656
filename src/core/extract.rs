use crate::config::dictionaries::{DictionaryEntry, KeywordDictionaries};
use crate::core::narrative;
use crate::domain::model::{ExtractedInfo, TechStack, CUSTOMER_NAME_TBD};
use crate::utils::error::Result;
use regex::Regex;

pub const CHALLENGES_TBD: &str = "Challenges to be identified";
pub const STAKEHOLDERS_TBD: &str = "Stakeholders TBD";
pub const TIMELINE_TBD: &str = "Timeline TBD";
pub const BUDGET_TBD: &str = "Budget TBD";

/// Single-pass keyword extractor over free-text discovery notes. All
/// extractions are independent scans of the same input; nothing depends on
/// another extractor's result.
pub struct Extractor {
    dicts: KeywordDictionaries,
    name_patterns: Vec<Regex>,
}

pub(crate) fn sentences(notes: &str) -> impl Iterator<Item = &str> {
    notes.split(['.', '!', '?'])
}

/// All matched canonical labels, deduplicated, in declared dictionary order.
pub(crate) fn all_matches(dict: &[DictionaryEntry], notes_lower: &str) -> Vec<String> {
    dict.iter()
        .filter(|entry| entry.matches(notes_lower))
        .map(|entry| entry.label.clone())
        .collect()
}

/// First match in declared dictionary order; the tie-break is the entry
/// order, not input order.
pub(crate) fn first_match(dict: &[DictionaryEntry], notes_lower: &str) -> Option<String> {
    dict.iter()
        .find(|entry| entry.matches(notes_lower))
        .map(|entry| entry.label.clone())
}

impl Extractor {
    pub fn new(dicts: KeywordDictionaries) -> Result<Self> {
        let name_patterns = vec![
            Regex::new(r"(?i)(?:customer|client|company|organization):\s*([A-Z][A-Za-z\s&]+)")?,
            Regex::new(r"(?i)([A-Z][A-Za-z\s&]+)\s+(?:is|has|wants|needs)")?,
        ];
        Ok(Self {
            dicts,
            name_patterns,
        })
    }

    pub fn dictionaries(&self) -> &KeywordDictionaries {
        &self.dicts
    }

    pub fn extract_information(&self, notes: &str) -> ExtractedInfo {
        let lower = notes.to_lowercase();
        ExtractedInfo {
            customer_name: self.extract_customer_name(notes),
            current_state: narrative::current_state_narrative(notes, &self.dicts),
            challenges: self.sentences_with_keywords(
                notes,
                &self.dicts.challenge_keywords,
                CHALLENGES_TBD,
            ),
            tech_stack: self.extract_tech_stack(&lower),
            stakeholders: self.sentences_with_keywords(
                notes,
                &self.dicts.stakeholder_keywords,
                STAKEHOLDERS_TBD,
            ),
            competitors: self.extract_competitors(&lower),
            timeline: self.first_sentence_with_keywords(
                notes,
                &self.dicts.timeline_keywords,
                TIMELINE_TBD,
            ),
            budget: self.first_sentence_with_keywords(
                notes,
                &self.dicts.budget_keywords,
                BUDGET_TBD,
            ),
        }
    }

    pub fn extract_tech_stack(&self, notes_lower: &str) -> TechStack {
        TechStack {
            source_code_management: all_matches(&self.dicts.scm_tools, notes_lower),
            languages: all_matches(&self.dicts.languages, notes_lower),
            ide: first_match(&self.dicts.ides, notes_lower),
            cicd: first_match(&self.dicts.cicd_tools, notes_lower),
            container_registry: first_match(&self.dicts.container_registries, notes_lower),
            iac_formats: all_matches(&self.dicts.iac_formats, notes_lower),
            cloud_provider: first_match(&self.dicts.cloud_providers, notes_lower),
        }
    }

    pub fn extract_competitors(&self, notes_lower: &str) -> Vec<String> {
        all_matches(&self.dicts.competitor_tools, notes_lower)
    }

    fn extract_customer_name(&self, notes: &str) -> String {
        for pattern in &self.name_patterns {
            if let Some(captures) = pattern.captures(notes) {
                if let Some(name) = captures.get(1) {
                    return name.as_str().trim().to_string();
                }
            }
        }
        CUSTOMER_NAME_TBD.to_string()
    }

    fn sentences_with_keywords(
        &self,
        notes: &str,
        keywords: &[String],
        placeholder: &str,
    ) -> Vec<String> {
        let matched: Vec<String> = sentences(notes)
            .filter(|sentence| {
                let lower = sentence.to_lowercase();
                keywords.iter().any(|kw| lower.contains(kw))
            })
            .map(|sentence| sentence.trim().to_string())
            .filter(|sentence| !sentence.is_empty())
            .collect();

        if matched.is_empty() {
            vec![placeholder.to_string()]
        } else {
            matched
        }
    }

    fn first_sentence_with_keywords(
        &self,
        notes: &str,
        keywords: &[String],
        placeholder: &str,
    ) -> String {
        sentences(notes)
            .find(|sentence| {
                let lower = sentence.to_lowercase();
                keywords.iter().any(|kw| lower.contains(kw))
            })
            .map(|sentence| sentence.trim().to_string())
            .filter(|sentence| !sentence.is_empty())
            .unwrap_or_else(|| placeholder.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ScmValue, LANGUAGES_TBD};

    fn extractor() -> Extractor {
        Extractor::new(KeywordDictionaries::default()).unwrap()
    }

    #[test]
    fn test_python_github_manual_reviews() {
        let notes = "Company: Acme Corp. The team writes Python and hosts code on GitHub. \
                     They are currently using manual reviews before release";
        let info = extractor().extract_information(notes);
        assert_eq!(info.tech_stack.languages, vec!["Python"]);
        assert_eq!(info.tech_stack.source_code_management, vec!["github"]);
        assert!(
            info.current_state.contains("manual security reviews"),
            "current state was: {}",
            info.current_state
        );
    }

    #[test]
    fn test_multiple_scm_products_detected_as_list() {
        let notes = "Teams are split between GitHub and GitLab; security is currently manual";
        let ex = extractor();
        let stack = ex.extract_tech_stack(&notes.to_lowercase());
        assert_eq!(stack.source_code_management, vec!["github", "gitlab"]);
        assert!(matches!(
            stack.report().source_code_management,
            ScmValue::Many(_)
        ));
    }

    #[test]
    fn test_no_language_keywords_reports_sentinel() {
        let notes = "they currently run security scans on everything by hand";
        let stack = extractor().extract_tech_stack(&notes.to_lowercase());
        assert!(stack.languages.is_empty());
        assert_eq!(stack.report().languages, vec![LANGUAGES_TBD.to_string()]);
    }

    #[test]
    fn test_languages_returned_in_dictionary_order() {
        // Input order is rust-then-python; the dictionary declares Python first.
        let notes = "services in rust, tooling in python";
        let stack = extractor().extract_tech_stack(notes);
        assert_eq!(stack.languages, vec!["Python", "Rust"]);
    }

    #[test]
    fn test_single_valued_fields_take_first_dictionary_match() {
        let notes = "builds run on travis and jenkins depending on the team";
        let stack = extractor().extract_tech_stack(notes);
        // jenkins is declared before travis.
        assert_eq!(stack.cicd.as_deref(), Some("jenkins"));
    }

    #[test]
    fn test_customer_name_patterns() {
        let ex = extractor();
        let info = ex.extract_information("Customer: Globex Industries. They currently use Python");
        assert_eq!(info.customer_name, "Globex Industries");

        let info = ex.extract_information("no names here whatsoever");
        assert_eq!(info.customer_name, CUSTOMER_NAME_TBD);
    }

    #[test]
    fn test_challenge_sentences_collected_and_trimmed() {
        let notes = "The main challenge is vulnerability backlog. Deploys are fine. \
                     Another problem is compliance reporting";
        let info = extractor().extract_information(notes);
        assert_eq!(
            info.challenges,
            vec![
                "The main challenge is vulnerability backlog",
                "Another problem is compliance reporting"
            ]
        );
    }

    #[test]
    fn test_narrative_placeholders_when_nothing_matches() {
        let info = extractor().extract_information("bare text with no markers");
        assert_eq!(info.challenges, vec![CHALLENGES_TBD.to_string()]);
        assert_eq!(info.timeline, TIMELINE_TBD);
        assert_eq!(info.budget, BUDGET_TBD);
    }

    #[test]
    fn test_competitor_detection_uses_display_labels() {
        let notes = "they run veracode and trivy today";
        let competitors = extractor().extract_competitors(notes);
        assert_eq!(competitors, vec!["Veracode", "Trivy"]);
    }
}

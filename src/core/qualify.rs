use crate::config::dictionaries::KeywordDictionaries;
use crate::domain::model::QualificationResult;

pub const TECH_STACK_FIELD: &str = "Technology stack information";
pub const CURRENT_STATE_FIELD: &str = "Current state and security practices";

/// Gate on a minimum-information threshold: enough text, plus at least one
/// technology-stack signal and one current-state signal. Pure function of
/// the input; failure is a result value, not an error.
pub fn qualify_opportunity(
    notes: &str,
    min_length: usize,
    dicts: &KeywordDictionaries,
) -> QualificationResult {
    let mut result = QualificationResult {
        qualified: true,
        message: String::new(),
        missing_fields: Vec::new(),
        recommendations: Vec::new(),
    };

    let trimmed = notes.trim();
    if trimmed.len() < min_length {
        result.qualified = false;
        result.message = "Insufficient discovery information provided.".to_string();
        result.recommendations.push(format!(
            "Please provide more detailed discovery notes (at least {} characters)",
            min_length
        ));
    }

    let lower = trimmed.to_lowercase();
    let mut missing = Vec::new();
    if !dicts.has_tech_signal(&lower) {
        missing.push(TECH_STACK_FIELD.to_string());
    }
    if !dicts.has_state_signal(&lower) {
        missing.push(CURRENT_STATE_FIELD.to_string());
    }

    if !missing.is_empty() {
        result.qualified = false;
        result.message = "Opportunity not qualified - missing key discovery information.".to_string();
        result.recommendations.push(format!(
            "Please gather more information about: {}",
            missing.join(", ")
        ));
        result.missing_fields = missing;
    }

    result
}

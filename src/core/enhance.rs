use crate::config::dictionaries::{normalize_token, KeywordDictionaries};
use crate::domain::model::{TechStack, TechStackOverrides};

/// Expands abbreviations and fixes common typos in structured form fields
/// ("gh" -> "GitHub", "k8s" -> "Kubernetes", "pyton" -> "Python").
/// Unmatched input passes through trimmed. This is a formatting convenience
/// that runs before extraction-result overriding, never on free text.
pub fn normalize_overrides(
    raw: &TechStackOverrides,
    dicts: &KeywordDictionaries,
) -> TechStackOverrides {
    TechStackOverrides {
        // "multiple" is a form-level marker, not an SCM name.
        scm: raw.scm.as_ref().map(|scm| {
            if scm.trim() == "multiple" {
                scm.trim().to_string()
            } else {
                normalize_token(&dicts.scm_normalizations, scm)
            }
        }),
        languages: raw.languages.as_ref().map(|languages| {
            languages
                .split(',')
                .map(|token| normalize_token(&dicts.language_normalizations, token))
                .collect::<Vec<_>>()
                .join(", ")
        }),
        current_state: raw.current_state.clone(),
        additional_context: raw.additional_context.clone(),
        ide: raw
            .ide
            .as_ref()
            .map(|ide| normalize_token(&dicts.ide_normalizations, ide)),
        cicd: raw
            .cicd
            .as_ref()
            .map(|cicd| normalize_token(&dicts.cicd_normalizations, cicd)),
        container_registry: raw
            .container_registry
            .as_ref()
            .map(|registry| normalize_token(&dicts.container_registry_normalizations, registry)),
        iac: raw
            .iac
            .as_ref()
            .map(|iac| normalize_token(&dicts.iac_normalizations, iac)),
        cloud_provider: raw
            .cloud_provider
            .as_ref()
            .map(|cloud| normalize_token(&dicts.cloud_normalizations, cloud)),
    }
}

/// Normalized form fields replace the corresponding extraction results;
/// fields the form left blank keep whatever extraction found.
pub fn apply_overrides(stack: &mut TechStack, enhanced: &TechStackOverrides) {
    if let Some(scm) = non_empty(&enhanced.scm) {
        if scm != "multiple" {
            stack.source_code_management = vec![scm];
        }
    }
    if let Some(languages) = non_empty(&enhanced.languages) {
        stack.languages = languages
            .split(',')
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .collect();
    }
    if let Some(ide) = non_empty(&enhanced.ide) {
        stack.ide = Some(ide);
    }
    if let Some(cicd) = non_empty(&enhanced.cicd) {
        stack.cicd = Some(cicd);
    }
    if let Some(registry) = non_empty(&enhanced.container_registry) {
        stack.container_registry = Some(registry);
    }
    if let Some(iac) = non_empty(&enhanced.iac) {
        stack.iac_formats = vec![iac];
    }
    if let Some(cloud) = non_empty(&enhanced.cloud_provider) {
        stack.cloud_provider = Some(cloud);
    }
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field
        .as_ref()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

use crate::config::dictionaries::KeywordDictionaries;
use crate::core::extract::{all_matches, sentences};

pub const CURRENT_STATE_TBD: &str = "Current state analysis needed";

/// Composes the current-state prose. The checks run in a fixed order and the
/// first that fires wins: explicit no-security signal, named tool template,
/// practices-only template, sentence search, generic placeholder.
pub fn current_state_narrative(notes: &str, dicts: &KeywordDictionaries) -> String {
    let lower = notes.to_lowercase();
    let tools = all_matches(&dicts.competitor_tools, &lower);
    let practices = all_matches(&dicts.scan_practices, &lower);

    if dicts
        .no_security_phrases
        .iter()
        .any(|phrase| lower.contains(phrase))
    {
        return no_security_template();
    }
    if !tools.is_empty() {
        return tool_template(&tools, &practices, dicts);
    }
    if !practices.is_empty() {
        return practice_template(&practices);
    }
    if let Some(sentence) = first_current_state_sentence(notes, dicts) {
        return sentence;
    }
    CURRENT_STATE_TBD.to_string()
}

fn no_security_template() -> String {
    "No existing security tooling in place; application security is not yet addressed."
        .to_string()
}

fn tool_template(tools: &[String], practices: &[String], dicts: &KeywordDictionaries) -> String {
    let mut narrative = format!("Currently using {}", tools.join(", "));
    if !practices.is_empty() {
        narrative.push_str(&format!(" with {}", practices.join(", ")));
    }
    let pains: Vec<&str> = tools
        .iter()
        .filter_map(|tool| dicts.pain_point_for(tool))
        .collect();
    if pains.is_empty() {
        narrative.push('.');
    } else {
        narrative.push_str(&format!(". Known pain points: {}.", pains.join("; ")));
    }
    narrative
}

fn practice_template(practices: &[String]) -> String {
    format!("Current security practices: {} only.", practices.join(", "))
}

fn first_current_state_sentence(notes: &str, dicts: &KeywordDictionaries) -> Option<String> {
    sentences(notes)
        .find(|sentence| {
            let lower = sentence.to_lowercase();
            dicts
                .current_state_keywords
                .iter()
                .any(|kw| lower.contains(kw))
        })
        .map(|sentence| sentence.trim().to_string())
        .filter(|sentence| !sentence.is_empty())
}

use crate::config::dictionaries::KeywordDictionaries;
use crate::domain::model::{
    ExecutiveSummary, ExtractedInfo, Milestone, PovWorksheet, SolutionEntry, StakeholderEntry,
    SuccessCriterion,
};

/// Fills the worksheet templates from extracted info. Pure and
/// deterministic: identical input always renders identical output.
pub fn render(info: &ExtractedInfo, dicts: &KeywordDictionaries) -> PovWorksheet {
    PovWorksheet {
        executive_summary: ExecutiveSummary {
            current_state: info.current_state.clone(),
            future_state: future_state(info, dicts),
        },
        solutions_map: solutions_map(&info.challenges),
        stakeholders: info
            .stakeholders
            .iter()
            .map(|sentence| StakeholderEntry {
                name: "Name TBD".to_string(),
                role: sentence.clone(),
                contact: "Contact TBD".to_string(),
            })
            .collect(),
        tech_stack: info.tech_stack.clone(),
        timeline: timeline(),
        success_criteria: success_criteria(),
        onboarding_checklist: onboarding_checklist(info),
    }
}

/// Lead paragraph is picked by first-match over ordered substring checks on
/// the current state, then fixed-order benefit clauses for each detected
/// tech-stack field, then a fixed closing sentence.
fn future_state(info: &ExtractedInfo, dicts: &KeywordDictionaries) -> String {
    let state_lower = info.current_state.to_lowercase();

    let lead = if state_lower.contains("no existing security") || state_lower.contains("no security")
    {
        "From zero coverage to full visibility: every repository is scanned on every change, \
         and developers fix issues before they merge."
    } else if state_lower.contains("manual") {
        "Manual reviews are replaced by automated scanning across the SDLC, so engineers \
         spend their time remediating instead of hunting."
    } else if dicts
        .competitor_tools
        .iter()
        .any(|entry| entry.matches(&state_lower))
    {
        "The incumbent tooling is consolidated into developer-first security with faster \
         scans and actionable results inside existing workflows."
    } else {
        "Security is embedded throughout the development lifecycle, with findings surfaced \
         where developers already work."
    };

    let mut parts = vec![lead.to_string()];
    let stack = &info.tech_stack;
    if !stack.source_code_management.is_empty() {
        parts.push(format!(
            "Automated PR checks run in {}.",
            stack.source_code_management.join(", ")
        ));
    }
    if !stack.languages.is_empty() {
        parts.push(format!(
            "SAST and SCA coverage spans {}.",
            stack.languages.join(", ")
        ));
    }
    if let Some(ide) = &stack.ide {
        parts.push(format!("Findings and fixes appear inline in {}.", ide));
    }
    if let Some(cicd) = &stack.cicd {
        parts.push(format!("Security gates are wired into {}.", cicd));
    }
    if let Some(registry) = &stack.container_registry {
        parts.push(format!(
            "Images in {} are continuously monitored.",
            registry
        ));
    }
    if !stack.iac_formats.is_empty() {
        parts.push(format!(
            "Misconfigurations in {} are caught before deployment.",
            stack.iac_formats.join(", ")
        ));
    }
    if let Some(cloud) = &stack.cloud_provider {
        parts.push(format!(
            "Runtime context from {} prioritizes what matters most.",
            cloud
        ));
    }
    parts.push(
        "Teams taking this approach typically cut mean time to remediate by 60% and ship \
         40% fewer vulnerabilities to production."
            .to_string(),
    );
    parts.join(" ")
}

fn solutions_map(challenges: &[String]) -> Vec<SolutionEntry> {
    let mut map = Vec::new();
    let contains = |needle: &str| {
        challenges
            .iter()
            .any(|challenge| challenge.to_lowercase().contains(needle))
    };

    if contains("vulnerability") {
        map.push(SolutionEntry {
            outcome: "Reduce security vulnerabilities".to_string(),
            pathway: "Shift-left security scanning".to_string(),
            products: vec![
                "Snyk Open Source".to_string(),
                "Snyk Code".to_string(),
                "Snyk Container".to_string(),
            ],
        });
    }
    if contains("compliance") {
        map.push(SolutionEntry {
            outcome: "Meet compliance requirements".to_string(),
            pathway: "Automated compliance scanning".to_string(),
            products: vec![
                "Snyk Open Source".to_string(),
                "Snyk Container".to_string(),
                "Snyk IaC".to_string(),
            ],
        });
    }
    if contains("developer") {
        map.push(SolutionEntry {
            outcome: "Improve developer experience".to_string(),
            pathway: "IDE integration and auto-fix".to_string(),
            products: vec!["Snyk IDE plugins".to_string(), "Snyk Learn".to_string()],
        });
    }

    if map.is_empty() {
        map.push(SolutionEntry {
            outcome: "Business outcomes to be defined".to_string(),
            pathway: "Pathway to be determined".to_string(),
            products: vec!["Snyk products to be selected".to_string()],
        });
    }
    map
}

fn timeline() -> Vec<Milestone> {
    let steps = [
        (
            "Demo Session",
            "Product overview and value proposition",
            "Week 0",
            "Complete",
        ),
        (
            "POV Planning",
            "Tech stack analysis, success criteria, timing",
            "Week 1",
            "To Do",
        ),
        (
            "POV Kickoff",
            "Integration setup, IDE plugins, training",
            "Week 2",
            "To Do",
        ),
        (
            "POV Testing",
            "CI/CD testing, results validation",
            "Week 3",
            "To Do",
        ),
        (
            "POV Wrap Up",
            "Results review, technical signoff",
            "Week 4",
            "To Do",
        ),
    ];
    steps
        .iter()
        .map(|(event, agenda, due, status)| Milestone {
            event: event.to_string(),
            agenda: agenda.to_string(),
            due: due.to_string(),
            status: status.to_string(),
        })
        .collect()
}

fn success_criteria() -> Vec<SuccessCriterion> {
    vec![
        SuccessCriterion {
            desired_state: "Innovate Faster".to_string(),
            capabilities: "Quickly identify and remediate software vulnerabilities earlier in the SDLC"
                .to_string(),
            priority: "1 - Must Have".to_string(),
            result: "To Do".to_string(),
        },
        SuccessCriterion {
            desired_state: "Reduce Risk Exposure".to_string(),
            capabilities: "Automated PR Checks for SAST/SCA vulnerabilities".to_string(),
            priority: "2 - Should Have".to_string(),
            result: "To Do".to_string(),
        },
        SuccessCriterion {
            desired_state: "Efficiently Deliver Secure Software".to_string(),
            capabilities: "Gating flexibility: pass/fail based on certain flags".to_string(),
            priority: "3 - Nice to Have".to_string(),
            result: "To Do".to_string(),
        },
    ]
}

fn onboarding_checklist(info: &ExtractedInfo) -> Vec<String> {
    let mut checklist: Vec<String> = [
        "Provision your Snyk account",
        "Set up joint Slack/MS Teams channel for communication",
        "Configure SCM integration(s)",
        "Set up Snyk Essentials",
        "Import repositories into Snyk",
        "Invite additional team members",
    ]
    .iter()
    .map(|step| step.to_string())
    .collect();

    if info.tech_stack.ide.is_some() {
        checklist.push("Configure IDE plugins".to_string());
    }
    if info.tech_stack.cicd.is_some() {
        checklist.push("Configure CI/CD integration".to_string());
    }
    checklist
}

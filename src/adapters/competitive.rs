use crate::domain::model::{CompetitiveReport, CompetitorProfile};
use crate::domain::ports::CompetitiveIntel;
use crate::utils::error::Result;
use async_trait::async_trait;

struct CompetitorRecord {
    key: &'static str,
    name: &'static str,
    advantages: &'static [&'static str],
    trap_questions: &'static [&'static str],
    weaknesses: &'static [&'static str],
}

const SAST_INCUMBENT_ADVANTAGES: &[&str] = &[
    "Snyk provides faster, more accurate scanning with lower false positive rates",
    "Snyk offers better developer experience with seamless IDE integration",
    "Snyk provides comprehensive coverage including open source, containers, and IaC",
    "Snyk offers real-time vulnerability updates and auto-fix capabilities",
    "Snyk provides better integration with modern CI/CD pipelines",
];

const SAST_INCUMBENT_TRAP_QUESTIONS: &[&str] = &[
    "How long does it take to get scan results in your current setup?",
    "What's your false positive rate and how do you handle it?",
    "How do you handle container security and infrastructure scanning?",
    "Can developers easily integrate security scanning into their IDEs?",
    "How quickly do you get updates for newly discovered vulnerabilities?",
];

const SAST_INCUMBENT_WEAKNESSES: &[&str] = &[
    "Slower scanning performance",
    "Higher false positive rates",
    "Limited container and infrastructure security",
    "Poor developer experience",
    "Complex setup and configuration",
];

const CONTAINER_PLATFORM_ADVANTAGES: &[&str] = &[
    "Snyk provides more comprehensive application security coverage",
    "Snyk offers better developer experience with IDE integration",
    "Snyk provides faster vulnerability scanning and updates",
    "Snyk offers better integration with development workflows",
    "Snyk provides more granular policy controls for application security",
];

const CONTAINER_PLATFORM_TRAP_QUESTIONS: &[&str] = &[
    "How do you handle application security beyond container scanning?",
    "Can developers easily integrate security into their development workflow?",
    "How quickly do you get updates for application vulnerabilities?",
    "What's your process for scanning open source dependencies?",
    "How do you handle infrastructure as code security?",
];

const CONTAINER_PLATFORM_WEAKNESSES: &[&str] = &[
    "Limited application security focus",
    "Poor developer experience",
    "Slower vulnerability updates",
    "Limited development workflow integration",
    "Basic application security policies",
];

const CONTAINER_SCANNER_WEAKNESSES: &[&str] = &[
    "Limited to container scanning only",
    "No application security coverage",
    "Poor developer experience",
    "Limited integration capabilities",
    "Basic policy management",
];

const CONTAINER_SCANNER_ADVANTAGES: &[&str] = &[
    "Snyk provides more comprehensive security coverage beyond containers",
    "Snyk offers better developer experience with IDE integration",
    "Snyk provides faster vulnerability scanning and updates",
    "Snyk offers better integration with development workflows",
    "Snyk provides more granular policy controls and compliance features",
];

const GENERAL_ADVANTAGES: &[&str] = &[
    "Snyk provides comprehensive security coverage across applications, containers, and infrastructure",
    "Snyk offers superior developer experience with seamless IDE integration",
    "Snyk provides real-time vulnerability updates and auto-fix capabilities",
    "Snyk offers better integration with modern CI/CD pipelines",
    "Snyk provides more granular policy controls and compliance features",
];

const COMPETITORS: &[CompetitorRecord] = &[
    CompetitorRecord {
        key: "github advanced security",
        name: "GitHub Advanced Security",
        advantages: &[
            "Snyk provides more comprehensive vulnerability coverage across languages and frameworks",
            "Snyk offers real-time vulnerability scanning with faster update cycles",
            "Snyk provides better developer experience with IDE integration and auto-fix capabilities",
            "Snyk offers more granular policy controls and compliance features",
            "Snyk provides better container and infrastructure security scanning",
        ],
        trap_questions: &[
            "How do you handle vulnerabilities in languages not natively supported by GitHub?",
            "What's your process for scanning container images and infrastructure as code?",
            "How quickly do you get vulnerability updates compared to when they're discovered?",
            "Can you show me how your IDE integration helps developers fix issues in real-time?",
            "What compliance frameworks do you support for audit requirements?",
        ],
        weaknesses: &[
            "Limited language support compared to Snyk",
            "Slower vulnerability database updates",
            "Less comprehensive container security",
            "Limited infrastructure as code scanning",
            "Basic IDE integration without auto-fix",
        ],
    },
    CompetitorRecord {
        key: "checkmarx",
        name: "Checkmarx",
        advantages: SAST_INCUMBENT_ADVANTAGES,
        trap_questions: SAST_INCUMBENT_TRAP_QUESTIONS,
        weaknesses: SAST_INCUMBENT_WEAKNESSES,
    },
    CompetitorRecord {
        key: "veracode",
        name: "Veracode",
        advantages: &[
            "Snyk provides faster scanning with real-time results",
            "Snyk offers better developer experience with IDE integration",
            "Snyk provides comprehensive coverage including containers and IaC",
            "Snyk offers more granular policy controls and compliance features",
            "Snyk provides better integration with modern development workflows",
        ],
        trap_questions: &[
            "How long does it take to get scan results in your current process?",
            "How do you handle container security and cloud infrastructure?",
            "Can developers easily integrate security into their daily workflow?",
            "What's your process for handling infrastructure as code security?",
            "How do you ensure compliance across different environments?",
        ],
        weaknesses: &[
            "Slower scanning and longer feedback cycles",
            "Limited container and infrastructure security",
            "Poor developer experience",
            "Complex compliance management",
            "Limited modern CI/CD integration",
        ],
    },
    CompetitorRecord {
        key: "sonarqube",
        name: "SonarQube",
        advantages: &[
            "Snyk provides more comprehensive security coverage beyond code quality",
            "Snyk offers better vulnerability scanning with real-time updates",
            "Snyk provides container and infrastructure security scanning",
            "Snyk offers better developer experience with auto-fix capabilities",
            "Snyk provides more granular security policies and compliance features",
        ],
        trap_questions: &[
            "How do you handle security vulnerabilities vs code quality issues?",
            "What's your process for container and infrastructure security?",
            "How quickly do you get updates for newly discovered vulnerabilities?",
            "Can you show me how developers fix security issues in real-time?",
            "What compliance frameworks do you support for security requirements?",
        ],
        weaknesses: &[
            "Limited security focus (more code quality oriented)",
            "Slower vulnerability database updates",
            "No container or infrastructure security",
            "Limited auto-fix capabilities",
            "Basic security policy management",
        ],
    },
    CompetitorRecord {
        key: "fortify",
        name: "Fortify",
        advantages: SAST_INCUMBENT_ADVANTAGES,
        trap_questions: SAST_INCUMBENT_TRAP_QUESTIONS,
        weaknesses: SAST_INCUMBENT_WEAKNESSES,
    },
    CompetitorRecord {
        key: "prisma cloud",
        name: "Prisma Cloud",
        advantages: CONTAINER_PLATFORM_ADVANTAGES,
        trap_questions: CONTAINER_PLATFORM_TRAP_QUESTIONS,
        weaknesses: CONTAINER_PLATFORM_WEAKNESSES,
    },
    CompetitorRecord {
        key: "aqua security",
        name: "Aqua Security",
        advantages: CONTAINER_PLATFORM_ADVANTAGES,
        trap_questions: CONTAINER_PLATFORM_TRAP_QUESTIONS,
        weaknesses: CONTAINER_PLATFORM_WEAKNESSES,
    },
    CompetitorRecord {
        key: "twistlock",
        name: "Twistlock",
        advantages: CONTAINER_PLATFORM_ADVANTAGES,
        trap_questions: CONTAINER_PLATFORM_TRAP_QUESTIONS,
        weaknesses: CONTAINER_PLATFORM_WEAKNESSES,
    },
    CompetitorRecord {
        key: "clair",
        name: "Clair",
        advantages: CONTAINER_SCANNER_ADVANTAGES,
        trap_questions: CONTAINER_PLATFORM_TRAP_QUESTIONS,
        weaknesses: CONTAINER_SCANNER_WEAKNESSES,
    },
    CompetitorRecord {
        key: "trivy",
        name: "Trivy",
        advantages: CONTAINER_SCANNER_ADVANTAGES,
        trap_questions: CONTAINER_PLATFORM_TRAP_QUESTIONS,
        weaknesses: CONTAINER_SCANNER_WEAKNESSES,
    },
];

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// In-process competitor table; lookup is by lower-cased name.
#[derive(Debug, Clone, Default)]
pub struct StaticCompetitiveIntel;

impl StaticCompetitiveIntel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompetitiveIntel for StaticCompetitiveIntel {
    async fn competitive_advantages(&self, competitors: &[String]) -> Result<CompetitiveReport> {
        let mut profiles = Vec::new();
        let mut advantages = Vec::new();
        let mut trap_questions = Vec::new();

        for competitor in competitors {
            let key = competitor.to_lowercase();
            if let Some(record) = COMPETITORS.iter().find(|record| record.key == key) {
                profiles.push(CompetitorProfile {
                    name: record.name.to_string(),
                    advantages: owned(record.advantages),
                    weaknesses: owned(record.weaknesses),
                });
                advantages.extend(owned(record.advantages));
                trap_questions.extend(owned(record.trap_questions));
            } else {
                tracing::debug!(competitor = %competitor, "no competitive profile on file");
            }
        }

        Ok(CompetitiveReport {
            competitors: profiles,
            advantages: dedup_preserving_order(advantages),
            trap_questions: dedup_preserving_order(trap_questions),
            general_advantages: owned(GENERAL_ADVANTAGES),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_input_yields_general_advantages_only() {
        let report = StaticCompetitiveIntel::new()
            .competitive_advantages(&[])
            .await
            .unwrap();
        assert!(report.competitors.is_empty());
        assert!(report.advantages.is_empty());
        assert!(report.trap_questions.is_empty());
        assert_eq!(report.general_advantages.len(), 5);
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let report = StaticCompetitiveIntel::new()
            .competitive_advantages(&["Veracode".to_string()])
            .await
            .unwrap();
        assert_eq!(report.competitors.len(), 1);
        assert_eq!(report.competitors[0].name, "Veracode");
        assert_eq!(report.advantages.len(), 5);
    }

    #[tokio::test]
    async fn test_duplicate_entries_removed_across_competitors() {
        // Checkmarx and Fortify share their advantage list.
        let report = StaticCompetitiveIntel::new()
            .competitive_advantages(&["Checkmarx".to_string(), "Fortify".to_string()])
            .await
            .unwrap();
        assert_eq!(report.competitors.len(), 2);
        assert_eq!(report.advantages.len(), 5);
        assert_eq!(report.trap_questions.len(), 5);
    }

    #[tokio::test]
    async fn test_unknown_competitor_skipped() {
        let report = StaticCompetitiveIntel::new()
            .competitive_advantages(&["Acme Scanner".to_string(), "Trivy".to_string()])
            .await
            .unwrap();
        assert_eq!(report.competitors.len(), 1);
        assert_eq!(report.competitors[0].name, "Trivy");
    }
}

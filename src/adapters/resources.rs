use crate::domain::model::{
    CategoryGuides, Guide, ImplementationGuides, TechStack,
};
use crate::domain::ports::ImplementationCatalog;
use crate::utils::error::Result;
use async_trait::async_trait;

struct GuideRecord {
    key: &'static str,
    name: &'static str,
    paths: &'static [&'static str],
    setup_steps: &'static [&'static str],
}

const SCM_GUIDES: &[GuideRecord] = &[
    GuideRecord {
        key: "github",
        name: "GitHub Integration",
        paths: &[
            "/integrations/git-repository-scm-integrations/github-integration",
            "/integrations/git-repository-scm-integrations/github-integration/github-actions-integration",
            "/integrations/git-repository-scm-integrations/github-integration/github-enterprise-integration",
        ],
        setup_steps: &[
            "Install Snyk GitHub App",
            "Configure repository access",
            "Set up GitHub Actions workflow",
            "Configure PR checks",
        ],
    },
    GuideRecord {
        key: "gitlab",
        name: "GitLab Integration",
        paths: &[
            "/integrations/git-repository-scm-integrations/gitlab-integration",
            "/integrations/git-repository-scm-integrations/gitlab-integration/gitlab-ci-cd-integration",
        ],
        setup_steps: &[
            "Install Snyk GitLab App",
            "Configure repository access",
            "Set up GitLab CI/CD pipeline",
            "Configure merge request checks",
        ],
    },
    GuideRecord {
        key: "bitbucket",
        name: "Bitbucket Integration",
        paths: &[
            "/integrations/git-repository-scm-integrations/bitbucket-integration",
            "/integrations/git-repository-scm-integrations/bitbucket-integration/bitbucket-pipelines-integration",
        ],
        setup_steps: &[
            "Install Snyk Bitbucket App",
            "Configure repository access",
            "Set up Bitbucket Pipelines",
            "Configure PR checks",
        ],
    },
    GuideRecord {
        key: "azure devops",
        name: "Azure DevOps Integration",
        paths: &[
            "/integrations/git-repository-scm-integrations/azure-devops-integration",
            "/integrations/git-repository-scm-integrations/azure-devops-integration/azure-pipelines-integration",
        ],
        setup_steps: &[
            "Configure Azure DevOps connection",
            "Set up Azure Pipelines",
            "Configure PR policies",
            "Set up build validation",
        ],
    },
];

const LANGUAGE_GUIDES: &[GuideRecord] = &[
    GuideRecord {
        key: "javascript",
        name: "JavaScript/Node.js",
        paths: &[
            "/snyk-open-source/language-and-package-manager-support/javascript-and-node.js",
            "/snyk-open-source/language-and-package-manager-support/javascript-and-node.js/npm",
            "/snyk-open-source/language-and-package-manager-support/javascript-and-node.js/yarn",
        ],
        setup_steps: &[
            "Install Snyk CLI",
            "Authenticate with Snyk",
            "Test your dependencies",
            "Monitor for vulnerabilities",
        ],
    },
    GuideRecord {
        key: "typescript",
        name: "TypeScript",
        paths: &[
            "/snyk-open-source/language-and-package-manager-support/javascript-and-node.js/typescript",
            "/snyk-code/language-support/typescript",
        ],
        setup_steps: &[
            "Install Snyk CLI",
            "Configure TypeScript project",
            "Test dependencies and code",
            "Set up monitoring",
        ],
    },
    GuideRecord {
        key: "python",
        name: "Python",
        paths: &[
            "/snyk-open-source/language-and-package-manager-support/python",
            "/snyk-open-source/language-and-package-manager-support/python/pip",
            "/snyk-open-source/language-and-package-manager-support/python/poetry",
        ],
        setup_steps: &[
            "Install Snyk CLI",
            "Configure Python environment",
            "Test requirements.txt or poetry.lock",
            "Monitor for vulnerabilities",
        ],
    },
    GuideRecord {
        key: "java",
        name: "Java",
        paths: &[
            "/snyk-open-source/language-and-package-manager-support/java",
            "/snyk-open-source/language-and-package-manager-support/java/maven",
            "/snyk-open-source/language-and-package-manager-support/java/gradle",
        ],
        setup_steps: &[
            "Install Snyk CLI",
            "Configure Maven or Gradle",
            "Test dependencies",
            "Monitor for vulnerabilities",
        ],
    },
    GuideRecord {
        key: "c#",
        name: "C#/.NET",
        paths: &[
            "/snyk-open-source/language-and-package-manager-support/csharp",
            "/snyk-open-source/language-and-package-manager-support/csharp/nuget",
        ],
        setup_steps: &[
            "Install Snyk CLI",
            "Configure .NET project",
            "Test NuGet packages",
            "Monitor for vulnerabilities",
        ],
    },
    GuideRecord {
        key: "go",
        name: "Go",
        paths: &[
            "/snyk-open-source/language-and-package-manager-support/go",
            "/snyk-open-source/language-and-package-manager-support/go/go-modules",
        ],
        setup_steps: &[
            "Install Snyk CLI",
            "Configure Go modules",
            "Test dependencies",
            "Monitor for vulnerabilities",
        ],
    },
];

const IDE_GUIDES: &[GuideRecord] = &[
    GuideRecord {
        key: "vscode",
        name: "Visual Studio Code",
        paths: &[
            "/integrations/ide-tools/visual-studio-code-extension-for-snyk-code",
            "/integrations/ide-tools/visual-studio-code-extension-for-snyk-open-source",
        ],
        setup_steps: &[
            "Install Snyk VS Code extension",
            "Authenticate with Snyk",
            "Configure workspace settings",
            "Start scanning",
        ],
    },
    GuideRecord {
        key: "intellij",
        name: "IntelliJ IDEA",
        paths: &[
            "/integrations/ide-tools/intellij-idea-jetbrains-ide-plugin",
            "/integrations/ide-tools/intellij-idea-jetbrains-ide-plugin/installation-and-activation",
        ],
        setup_steps: &[
            "Install Snyk IntelliJ plugin",
            "Authenticate with Snyk",
            "Configure project settings",
            "Start scanning",
        ],
    },
];

const CICD_GUIDES: &[GuideRecord] = &[
    GuideRecord {
        key: "jenkins",
        name: "Jenkins",
        paths: &[
            "/integrations/ci-cd-integrations/jenkins-integration",
            "/integrations/ci-cd-integrations/jenkins-integration/jenkins-pipeline-integration",
        ],
        setup_steps: &[
            "Install Snyk Jenkins plugin",
            "Configure Snyk credentials",
            "Add Snyk steps to pipeline",
            "Configure build conditions",
        ],
    },
    GuideRecord {
        key: "github actions",
        name: "GitHub Actions",
        paths: &[
            "/integrations/ci-cd-integrations/github-actions-integration",
            "/integrations/ci-cd-integrations/github-actions-integration/github-actions-for-snyk-open-source",
        ],
        setup_steps: &[
            "Add Snyk GitHub Action",
            "Configure secrets",
            "Set up workflow",
            "Configure failure conditions",
        ],
    },
    GuideRecord {
        key: "gitlab ci",
        name: "GitLab CI/CD",
        paths: &[
            "/integrations/ci-cd-integrations/gitlab-ci-cd-integration",
            "/integrations/ci-cd-integrations/gitlab-ci-cd-integration/gitlab-ci-cd-for-snyk-open-source",
        ],
        setup_steps: &[
            "Add Snyk to .gitlab-ci.yml",
            "Configure variables",
            "Set up pipeline stages",
            "Configure failure conditions",
        ],
    },
    GuideRecord {
        key: "azure pipelines",
        name: "Azure Pipelines",
        paths: &[
            "/integrations/ci-cd-integrations/azure-pipelines-integration",
            "/integrations/ci-cd-integrations/azure-pipelines-integration/azure-pipelines-for-snyk-open-source",
        ],
        setup_steps: &[
            "Add Snyk task to pipeline",
            "Configure service connection",
            "Set up build steps",
            "Configure failure conditions",
        ],
    },
];

const CONTAINER_GUIDE: GuideRecord = GuideRecord {
    key: "containers",
    name: "Container Security",
    paths: &[
        "/snyk-container",
        "/snyk-container/getting-started-with-container-vulnerability-management",
        "/snyk-container/scanning-your-container-images",
    ],
    setup_steps: &[
        "Install Snyk CLI",
        "Authenticate with Snyk",
        "Scan container images",
        "Monitor for vulnerabilities",
    ],
};

const IAC_GUIDES: &[GuideRecord] = &[
    GuideRecord {
        key: "terraform",
        name: "Terraform",
        paths: &[
            "/snyk-infrastructure-as-code",
            "/snyk-infrastructure-as-code/getting-started-with-infrastructure-as-code-security",
            "/snyk-infrastructure-as-code/scanning-terraform-files",
        ],
        setup_steps: &[
            "Install Snyk CLI",
            "Scan Terraform files",
            "Review security issues",
            "Fix misconfigurations",
        ],
    },
    GuideRecord {
        key: "cloudformation",
        name: "AWS CloudFormation",
        paths: &[
            "/snyk-infrastructure-as-code/scanning-cloudformation-files",
            "/snyk-infrastructure-as-code/scanning-cloudformation-files/cloudformation-security-rules",
        ],
        setup_steps: &[
            "Install Snyk CLI",
            "Scan CloudFormation templates",
            "Review security issues",
            "Fix misconfigurations",
        ],
    },
    GuideRecord {
        key: "kubernetes",
        name: "Kubernetes Manifests",
        paths: &[
            "/snyk-infrastructure-as-code/scanning-kubernetes-configuration-files",
            "/snyk-infrastructure-as-code/scanning-kubernetes-configuration-files/kubernetes-security-rules",
        ],
        setup_steps: &[
            "Install Snyk CLI",
            "Scan Kubernetes manifests",
            "Review security issues",
            "Fix misconfigurations",
        ],
    },
];

/// Implementation-resource lookup over the static docs catalog. Links are
/// joined to a configurable base URL so self-hosted docs mirrors work.
#[derive(Debug, Clone)]
pub struct StaticImplementationCatalog {
    base_url: String,
}

impl StaticImplementationCatalog {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn guide(&self, record: &GuideRecord) -> Guide {
        Guide {
            name: record.name.to_string(),
            links: record
                .paths
                .iter()
                .map(|path| format!("{}{}", self.base_url, path))
                .collect(),
            setup_steps: record
                .setup_steps
                .iter()
                .map(|step| step.to_string())
                .collect(),
        }
    }

    fn links(&self, paths: &[&str]) -> Vec<String> {
        paths
            .iter()
            .map(|path| format!("{}{}", self.base_url, path))
            .collect()
    }

    /// Shared lookup shape: undetected -> "not specified" fallback, detected
    /// but unknown -> "not available" fallback, else the matching guides.
    fn category(
        &self,
        values: &[String],
        records: &[GuideRecord],
        category_name: &str,
        not_specified: &str,
        not_available: &str,
        general_paths: &[&str],
    ) -> CategoryGuides {
        if values.is_empty() {
            return CategoryGuides::General {
                name: category_name.to_string(),
                message: not_specified.to_string(),
                general_links: self.links(general_paths),
            };
        }

        let guides: Vec<Guide> = values
            .iter()
            .filter_map(|value| {
                let key = value.to_lowercase();
                records.iter().find(|record| record.key == key)
            })
            .map(|record| self.guide(record))
            .collect();

        if guides.is_empty() {
            CategoryGuides::General {
                name: category_name.to_string(),
                message: not_available.to_string(),
                general_links: self.links(&general_paths[..1]),
            }
        } else {
            CategoryGuides::Specific(guides)
        }
    }
}

#[async_trait]
impl ImplementationCatalog for StaticImplementationCatalog {
    async fn implementation_guides(&self, stack: &TechStack) -> Result<ImplementationGuides> {
        let as_slice = |field: &Option<String>| -> Vec<String> {
            field.iter().cloned().collect()
        };

        Ok(ImplementationGuides {
            scm: self.category(
                &stack.source_code_management,
                SCM_GUIDES,
                "Source Code Management",
                "SCM tool not specified in discovery notes",
                "SCM integration guide not available",
                &[
                    "/integrations/git-repository-scm-integrations",
                    "/integrations/git-repository-scm-integrations/github-integration",
                    "/integrations/git-repository-scm-integrations/gitlab-integration",
                ],
            ),
            languages: self.category(
                &stack.languages,
                LANGUAGE_GUIDES,
                "Programming Languages",
                "Languages not specified in discovery notes",
                "Language-specific guides not available",
                &[
                    "/snyk-open-source/language-and-package-manager-support",
                    "/snyk-code/language-support",
                ],
            ),
            ide: self.category(
                &as_slice(&stack.ide),
                IDE_GUIDES,
                "IDE Integration",
                "IDE not specified in discovery notes",
                "IDE integration guide not available",
                &[
                    "/integrations/ide-tools",
                    "/integrations/ide-tools/visual-studio-code-extension-for-snyk-code",
                    "/integrations/ide-tools/intellij-idea-jetbrains-ide-plugin",
                ],
            ),
            cicd: self.category(
                &as_slice(&stack.cicd),
                CICD_GUIDES,
                "CI/CD Integration",
                "CI/CD tool not specified in discovery notes",
                "CI/CD integration guide not available",
                &[
                    "/integrations/ci-cd-integrations",
                    "/integrations/ci-cd-integrations/github-actions-integration",
                    "/integrations/ci-cd-integrations/jenkins-integration",
                ],
            ),
            containers: CategoryGuides::Specific(vec![self.guide(&CONTAINER_GUIDE)]),
            iac: self.category(
                &stack.iac_formats,
                IAC_GUIDES,
                "Infrastructure as Code",
                "IaC formats not specified in discovery notes",
                "IaC-specific guides not available",
                &[
                    "/snyk-infrastructure-as-code",
                    "/snyk-infrastructure-as-code/getting-started-with-infrastructure-as-code-security",
                ],
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DOCS_BASE_URL;

    fn catalog() -> StaticImplementationCatalog {
        StaticImplementationCatalog::new(DEFAULT_DOCS_BASE_URL)
    }

    #[tokio::test]
    async fn test_empty_stack_gets_fallbacks_everywhere_but_containers() {
        let guides = catalog()
            .implementation_guides(&TechStack::default())
            .await
            .unwrap();
        assert!(matches!(guides.scm, CategoryGuides::General { .. }));
        assert!(matches!(guides.languages, CategoryGuides::General { .. }));
        assert!(matches!(guides.ide, CategoryGuides::General { .. }));
        assert!(matches!(guides.cicd, CategoryGuides::General { .. }));
        assert!(matches!(guides.iac, CategoryGuides::General { .. }));
        match &guides.containers {
            CategoryGuides::Specific(list) => {
                assert_eq!(list[0].name, "Container Security");
            }
            other => panic!("unexpected container guides: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_detected_stack_resolves_specific_guides() {
        let stack = TechStack {
            source_code_management: vec!["github".to_string()],
            languages: vec!["Python".to_string(), "Go".to_string()],
            ide: Some("vscode".to_string()),
            cicd: Some("jenkins".to_string()),
            iac_formats: vec!["terraform".to_string()],
            ..TechStack::default()
        };
        let guides = catalog().implementation_guides(&stack).await.unwrap();

        match &guides.scm {
            CategoryGuides::Specific(list) => {
                assert_eq!(list.len(), 1);
                assert_eq!(list[0].name, "GitHub Integration");
                assert!(list[0].links[0]
                    .starts_with("https://docs.snyk.io/integrations/git-repository-scm"));
            }
            other => panic!("unexpected scm guides: {:?}", other),
        }
        match &guides.languages {
            CategoryGuides::Specific(list) => {
                let names: Vec<&str> = list.iter().map(|g| g.name.as_str()).collect();
                assert_eq!(names, vec!["Python", "Go"]);
            }
            other => panic!("unexpected language guides: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_value_gets_not_available_fallback() {
        let stack = TechStack {
            source_code_management: vec!["AWS CodeCommit".to_string()],
            ..TechStack::default()
        };
        let guides = catalog().implementation_guides(&stack).await.unwrap();
        match &guides.scm {
            CategoryGuides::General { message, general_links, .. } => {
                assert_eq!(message, "SCM integration guide not available");
                assert_eq!(general_links.len(), 1);
            }
            other => panic!("unexpected scm guides: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_base_url_override_and_trailing_slash() {
        let catalog = StaticImplementationCatalog::new("https://docs.example.com/");
        let stack = TechStack {
            iac_formats: vec!["terraform".to_string()],
            ..TechStack::default()
        };
        let guides = catalog.implementation_guides(&stack).await.unwrap();
        match &guides.iac {
            CategoryGuides::Specific(list) => {
                assert_eq!(
                    list[0].links[0],
                    "https://docs.example.com/snyk-infrastructure-as-code"
                );
            }
            other => panic!("unexpected iac guides: {:?}", other),
        }
    }
}

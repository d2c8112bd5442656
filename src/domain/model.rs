use serde::{Deserialize, Serialize, Serializer};

pub const CUSTOMER_NAME_TBD: &str = "Customer Name TBD";
pub const SCM_TBD: &str = "SCM tool TBD";
pub const LANGUAGES_TBD: &str = "Languages TBD";
pub const IDE_TBD: &str = "IDE TBD";
pub const CICD_TBD: &str = "CI/CD TBD";
pub const CONTAINER_REGISTRY_TBD: &str = "Container Registry TBD";
pub const IAC_TBD: &str = "IaC formats TBD";
pub const CLOUD_PROVIDER_TBD: &str = "Cloud Provider TBD";

/// Detected technology stack. Empty vectors and `None` mean "not detected";
/// the TBD sentinel strings only exist in the serialized report, never here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechStack {
    pub source_code_management: Vec<String>,
    pub languages: Vec<String>,
    pub ide: Option<String>,
    pub cicd: Option<String>,
    pub container_registry: Option<String>,
    pub iac_formats: Vec<String>,
    pub cloud_provider: Option<String>,
}

impl TechStack {
    pub fn report(&self) -> TechStackReport {
        TechStackReport {
            source_code_management: match self.source_code_management.len() {
                0 => ScmValue::One(SCM_TBD.to_string()),
                1 => ScmValue::One(self.source_code_management[0].clone()),
                _ => ScmValue::Many(self.source_code_management.clone()),
            },
            languages: if self.languages.is_empty() {
                vec![LANGUAGES_TBD.to_string()]
            } else {
                self.languages.clone()
            },
            ide: self.ide.clone().unwrap_or_else(|| IDE_TBD.to_string()),
            cicd: self.cicd.clone().unwrap_or_else(|| CICD_TBD.to_string()),
            container_registry: self
                .container_registry
                .clone()
                .unwrap_or_else(|| CONTAINER_REGISTRY_TBD.to_string()),
            iac_formats: if self.iac_formats.is_empty() {
                vec![IAC_TBD.to_string()]
            } else {
                self.iac_formats.clone()
            },
            cloud_provider: self
                .cloud_provider
                .clone()
                .unwrap_or_else(|| CLOUD_PROVIDER_TBD.to_string()),
        }
    }
}

// Serialized form is always the report, so callers cannot mistake a
// sentinel string for detected data on the Rust side.
impl Serialize for TechStack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.report().serialize(serializer)
    }
}

/// SCM serializes as a plain string for a single detection and as a list
/// when multiple SCM products were mentioned.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ScmValue {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TechStackReport {
    pub source_code_management: ScmValue,
    pub languages: Vec<String>,
    pub ide: String,
    pub cicd: String,
    pub container_registry: String,
    pub iac_formats: Vec<String>,
    pub cloud_provider: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedInfo {
    pub customer_name: String,
    pub current_state: String,
    pub challenges: Vec<String>,
    pub tech_stack: TechStack,
    pub stakeholders: Vec<String>,
    pub competitors: Vec<String>,
    pub timeline: String,
    pub budget: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QualificationResult {
    pub qualified: bool,
    pub message: String,
    pub missing_fields: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Structured form input. Raw user-entered strings, normalized by the
/// enhancement stage before they override extraction results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TechStackOverrides {
    pub scm: Option<String>,
    /// Comma-separated list, as entered in the form.
    pub languages: Option<String>,
    pub current_state: Option<String>,
    pub additional_context: Option<String>,
    pub ide: Option<String>,
    pub cicd: Option<String>,
    pub container_registry: Option<String>,
    pub iac: Option<String>,
    pub cloud_provider: Option<String>,
}

impl TechStackOverrides {
    /// Renders the structured fields as a discovery-notes block, the way the
    /// implementation-guide form submits them.
    pub fn to_notes(&self) -> String {
        let mut lines = Vec::new();
        if let Some(scm) = &self.scm {
            lines.push(format!("SCM: {}", scm));
        }
        if let Some(languages) = &self.languages {
            lines.push(format!("Programming Languages: {}", languages));
        }
        if let Some(current_state) = &self.current_state {
            lines.push(format!("Current Scan Processes: {}", current_state));
        }
        if let Some(ide) = &self.ide {
            lines.push(format!("IDE: {}", ide));
        }
        if let Some(cicd) = &self.cicd {
            lines.push(format!("CI/CD: {}", cicd));
        }
        if let Some(registry) = &self.container_registry {
            lines.push(format!("Container Registry: {}", registry));
        }
        if let Some(iac) = &self.iac {
            lines.push(format!("Infrastructure as Code: {}", iac));
        }
        if let Some(cloud) = &self.cloud_provider {
            lines.push(format!("Cloud Provider: {}", cloud));
        }
        if let Some(context) = &self.additional_context {
            lines.push(format!("Additional Context: {}", context));
        }
        lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    pub current_state: String,
    pub future_state: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SolutionEntry {
    pub outcome: String,
    pub pathway: String,
    pub products: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderEntry {
    pub name: String,
    pub role: String,
    pub contact: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub event: String,
    pub agenda: String,
    pub due: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuccessCriterion {
    pub desired_state: String,
    pub capabilities: String,
    pub priority: String,
    pub result: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PovWorksheet {
    pub executive_summary: ExecutiveSummary,
    pub solutions_map: Vec<SolutionEntry>,
    pub stakeholders: Vec<StakeholderEntry>,
    pub tech_stack: TechStack,
    pub timeline: Vec<Milestone>,
    pub success_criteria: Vec<SuccessCriterion>,
    pub onboarding_checklist: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorProfile {
    pub name: String,
    pub advantages: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveReport {
    pub competitors: Vec<CompetitorProfile>,
    pub advantages: Vec<String>,
    pub trap_questions: Vec<String>,
    pub general_advantages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub name: String,
    pub links: Vec<String>,
    pub setup_steps: Vec<String>,
}

/// A category either has concrete guides or a general fallback pointing at
/// the top-level docs for that integration area.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CategoryGuides {
    Specific(Vec<Guide>),
    General {
        name: String,
        message: String,
        #[serde(rename = "generalLinks")]
        general_links: Vec<String>,
    },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuides {
    pub scm: CategoryGuides,
    pub languages: CategoryGuides,
    pub ide: CategoryGuides,
    pub cicd: CategoryGuides,
    pub containers: CategoryGuides,
    pub iac: CategoryGuides,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QualifiedOutcome {
    pub qualified: bool,
    pub pov_worksheet: PovWorksheet,
    pub competitive_advantages: CompetitiveReport,
    pub implementation_guides: ImplementationGuides,
    pub extracted_info: ExtractedInfo,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ProcessOutcome {
    NotQualified(QualificationResult),
    Qualified(Box<QualifiedOutcome>),
}

impl ProcessOutcome {
    pub fn qualified(&self) -> bool {
        matches!(self, ProcessOutcome::Qualified(_))
    }
}

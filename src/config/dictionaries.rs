use serde::Deserialize;

/// One canonical label with its known aliases. Aliases are stored
/// lower-cased; matching is plain substring containment against the
/// lower-cased notes, with no word-boundary handling.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub label: String,
    pub aliases: Vec<String>,
}

impl DictionaryEntry {
    fn new(label: &str, aliases: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            aliases: aliases.iter().map(|a| a.to_lowercase()).collect(),
        }
    }

    pub fn matches(&self, notes_lower: &str) -> bool {
        self.aliases.iter().any(|alias| notes_lower.contains(alias))
    }
}

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(from, to)| (from.to_lowercase(), to.to_string()))
        .collect()
}

fn words(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|w| w.to_lowercase()).collect()
}

/// Immutable keyword tables driving every extractor. Built once at process
/// start and injected into the processor; entry order is the declared
/// tie-break order for single-valued fields and the output order for
/// multi-valued fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordDictionaries {
    pub scm_tools: Vec<DictionaryEntry>,
    pub languages: Vec<DictionaryEntry>,
    pub ides: Vec<DictionaryEntry>,
    pub cicd_tools: Vec<DictionaryEntry>,
    pub container_registries: Vec<DictionaryEntry>,
    pub iac_formats: Vec<DictionaryEntry>,
    pub cloud_providers: Vec<DictionaryEntry>,
    /// Labels are display names ("Veracode"); collaborator lookups lower-case them.
    pub competitor_tools: Vec<DictionaryEntry>,
    /// Known pain point per competitor tool, keyed by its display label.
    pub pain_points: Vec<(String, String)>,
    /// Labels are the practice phrases used in current-state narratives.
    pub scan_practices: Vec<DictionaryEntry>,
    pub no_security_phrases: Vec<String>,
    pub current_state_keywords: Vec<String>,
    pub challenge_keywords: Vec<String>,
    pub stakeholder_keywords: Vec<String>,
    pub timeline_keywords: Vec<String>,
    pub budget_keywords: Vec<String>,
    /// Generic words counting as a technology-stack signal for qualification,
    /// on top of every language and SCM alias.
    pub tech_signal_keywords: Vec<String>,
    pub state_signal_keywords: Vec<String>,
    pub language_normalizations: Vec<(String, String)>,
    pub scm_normalizations: Vec<(String, String)>,
    pub ide_normalizations: Vec<(String, String)>,
    pub cicd_normalizations: Vec<(String, String)>,
    pub container_registry_normalizations: Vec<(String, String)>,
    pub iac_normalizations: Vec<(String, String)>,
    pub cloud_normalizations: Vec<(String, String)>,
}

impl Default for KeywordDictionaries {
    fn default() -> Self {
        Self {
            scm_tools: vec![
                DictionaryEntry::new("github", &["github"]),
                DictionaryEntry::new("gitlab", &["gitlab"]),
                DictionaryEntry::new("bitbucket", &["bitbucket"]),
                DictionaryEntry::new("azure devops", &["azure devops"]),
                DictionaryEntry::new("aws codecommit", &["aws codecommit", "codecommit"]),
            ],
            languages: vec![
                DictionaryEntry::new("JavaScript", &["javascript"]),
                DictionaryEntry::new("TypeScript", &["typescript"]),
                DictionaryEntry::new("Python", &["python"]),
                DictionaryEntry::new("Java", &["java"]),
                DictionaryEntry::new("C#", &["c#", "csharp"]),
                DictionaryEntry::new("Go", &["go"]),
                DictionaryEntry::new("Rust", &["rust"]),
                DictionaryEntry::new("PHP", &["php"]),
                DictionaryEntry::new("Ruby", &["ruby"]),
                DictionaryEntry::new("Node.js", &["node.js", "nodejs"]),
            ],
            ides: vec![
                DictionaryEntry::new("vscode", &["vscode", "visual studio code", "vs code"]),
                DictionaryEntry::new("intellij", &["intellij"]),
                DictionaryEntry::new("eclipse", &["eclipse"]),
                DictionaryEntry::new("vim", &["vim"]),
                DictionaryEntry::new("emacs", &["emacs"]),
            ],
            cicd_tools: vec![
                DictionaryEntry::new("jenkins", &["jenkins"]),
                DictionaryEntry::new("github actions", &["github actions"]),
                DictionaryEntry::new("gitlab ci", &["gitlab ci"]),
                DictionaryEntry::new("azure pipelines", &["azure pipelines"]),
                DictionaryEntry::new("circleci", &["circleci", "circle ci"]),
                DictionaryEntry::new("travis", &["travis"]),
            ],
            container_registries: vec![
                DictionaryEntry::new("docker hub", &["docker hub", "dockerhub"]),
                DictionaryEntry::new("ecr", &["ecr"]),
                DictionaryEntry::new("acr", &["acr"]),
                DictionaryEntry::new("gcr", &["gcr"]),
                DictionaryEntry::new("artifactory", &["artifactory"]),
            ],
            iac_formats: vec![
                DictionaryEntry::new("terraform", &["terraform"]),
                DictionaryEntry::new("cloudformation", &["cloudformation"]),
                DictionaryEntry::new("arm", &["arm template", " arm "]),
                DictionaryEntry::new("kubernetes", &["kubernetes", "k8s"]),
                DictionaryEntry::new("helm", &["helm"]),
            ],
            cloud_providers: vec![
                DictionaryEntry::new("aws", &["aws", "amazon web services"]),
                DictionaryEntry::new("azure", &["azure"]),
                DictionaryEntry::new("gcp", &["gcp", "google cloud"]),
            ],
            competitor_tools: vec![
                DictionaryEntry::new("GitHub Advanced Security", &["github advanced security"]),
                DictionaryEntry::new("Checkmarx", &["checkmarx"]),
                DictionaryEntry::new("Veracode", &["veracode"]),
                DictionaryEntry::new("SonarQube", &["sonarqube"]),
                DictionaryEntry::new("Fortify", &["fortify"]),
                DictionaryEntry::new("Prisma Cloud", &["prisma cloud"]),
                DictionaryEntry::new("Aqua Security", &["aqua security"]),
                DictionaryEntry::new("Twistlock", &["twistlock"]),
                DictionaryEntry::new("Clair", &["clair"]),
                DictionaryEntry::new("Trivy", &["trivy"]),
            ],
            pain_points: vec![
                (
                    "GitHub Advanced Security".to_string(),
                    "limited language coverage, slower vulnerability database updates".to_string(),
                ),
                (
                    "Checkmarx".to_string(),
                    "slow scan times, high false positive rates, complex setup".to_string(),
                ),
                (
                    "Veracode".to_string(),
                    "slow scan times, high false positive rates".to_string(),
                ),
                (
                    "SonarQube".to_string(),
                    "code-quality focus with shallow security coverage".to_string(),
                ),
                (
                    "Fortify".to_string(),
                    "slow scan times, high false positive rates, complex setup".to_string(),
                ),
                (
                    "Prisma Cloud".to_string(),
                    "limited application security coverage outside containers".to_string(),
                ),
                (
                    "Aqua Security".to_string(),
                    "limited application security coverage outside containers".to_string(),
                ),
                (
                    "Twistlock".to_string(),
                    "limited application security coverage outside containers".to_string(),
                ),
                (
                    "Clair".to_string(),
                    "container-only coverage with no application security".to_string(),
                ),
                (
                    "Trivy".to_string(),
                    "container-only coverage with no application security".to_string(),
                ),
            ],
            scan_practices: vec![
                DictionaryEntry::new("manual security reviews", &["manual"]),
                DictionaryEntry::new(
                    "SAST scanning",
                    &["sast", "static analysis", "static application security"],
                ),
                // Bare "sca" is a substring of "scan", hence the spacing trick.
                DictionaryEntry::new(
                    "dependency (SCA) scanning",
                    &[" sca ", "sca,", "software composition", "dependency scan", "open source scan"],
                ),
                DictionaryEntry::new(
                    "container image scanning",
                    &["container scan", "image scan", "container security scan"],
                ),
                DictionaryEntry::new(
                    "IaC scanning",
                    &["iac scan", "infrastructure as code scan", "terraform scan"],
                ),
            ],
            no_security_phrases: words(&[
                "no security",
                "no existing security",
                "nothing in place",
                "no tooling",
                "no scanning",
                "not doing any security",
                "limited security",
                "don't have any security",
                "do not have any security",
                "no appsec",
            ]),
            current_state_keywords: words(&[
                "currently",
                "existing",
                "current state",
                "now",
                "presently",
            ]),
            challenge_keywords: words(&[
                "challenge",
                "problem",
                "issue",
                "pain",
                "difficulty",
                "struggle",
            ]),
            stakeholder_keywords: words(&[
                "stakeholder",
                "contact",
                "team",
                "person",
                "manager",
                "director",
                "vp",
            ]),
            timeline_keywords: words(&["timeline", "deadline", "by", "within", "weeks", "months"]),
            budget_keywords: words(&["budget", "cost", "price", "investment", "spend"]),
            tech_signal_keywords: words(&[
                "language",
                "tech",
                "stack",
                "scm",
                "framework",
                "source control",
                "version control",
            ]),
            state_signal_keywords: words(&[
                "current",
                "existing",
                "scan",
                "security",
                "tool",
                "nothing",
                "manual",
                "today",
                "process",
                "practice",
                "sast",
                "sca",
            ]),
            language_normalizations: pairs(&[
                ("js", "JavaScript"),
                ("javascript", "JavaScript"),
                ("ts", "TypeScript"),
                ("typescript", "TypeScript"),
                ("py", "Python"),
                ("python", "Python"),
                ("pyton", "Python"),
                ("pythn", "Python"),
                ("pyth", "Python"),
                ("java", "Java"),
                (".net", "C#"),
                ("dotnet", "C#"),
                ("csharp", "C#"),
                ("c#", "C#"),
                ("c sharp", "C#"),
                ("go", "Go"),
                ("golang", "Go"),
                ("rust", "Rust"),
                ("php", "PHP"),
                ("ruby", "Ruby"),
                ("rb", "Ruby"),
                ("node", "Node.js"),
                ("nodejs", "Node.js"),
                ("node.js", "Node.js"),
                ("react", "React"),
                ("reactjs", "React"),
                ("angular", "Angular"),
                ("angularjs", "Angular"),
                ("vue", "Vue.js"),
                ("vuejs", "Vue.js"),
                ("vue.js", "Vue.js"),
                ("c++", "C++"),
                ("cpp", "C++"),
                ("kotlin", "Kotlin"),
                ("swift", "Swift"),
                ("dart", "Dart"),
                ("scala", "Scala"),
            ]),
            scm_normalizations: pairs(&[
                ("gh", "GitHub"),
                ("github", "GitHub"),
                ("git hub", "GitHub"),
                ("git-hub", "GitHub"),
                ("gl", "GitLab"),
                ("gitlab", "GitLab"),
                ("git lab", "GitLab"),
                ("git-lab", "GitLab"),
                ("bb", "Bitbucket"),
                ("bitbucket", "Bitbucket"),
                ("bit bucket", "Bitbucket"),
                ("azdo", "Azure DevOps"),
                ("azure devops", "Azure DevOps"),
                ("azure-devops", "Azure DevOps"),
                ("ado", "Azure DevOps"),
                ("tfs", "Azure DevOps"),
                ("vsts", "Azure DevOps"),
                ("aws codecommit", "AWS CodeCommit"),
                ("codecommit", "AWS CodeCommit"),
            ]),
            ide_normalizations: pairs(&[
                ("vscode", "VS Code"),
                ("vs code", "VS Code"),
                ("visual studio code", "VS Code"),
                ("intellij", "IntelliJ IDEA"),
                ("intellij idea", "IntelliJ IDEA"),
                ("idea", "IntelliJ IDEA"),
                ("eclipse", "Eclipse"),
                ("vim", "Vim"),
                ("neovim", "Neovim"),
                ("emacs", "Emacs"),
                ("sublime", "Sublime Text"),
                ("atom", "Atom"),
                ("webstorm", "WebStorm"),
                ("pycharm", "PyCharm"),
            ]),
            cicd_normalizations: pairs(&[
                ("jenkins", "Jenkins"),
                ("github actions", "GitHub Actions"),
                ("gh actions", "GitHub Actions"),
                ("gitlab ci", "GitLab CI/CD"),
                ("gitlab ci/cd", "GitLab CI/CD"),
                ("azure pipelines", "Azure Pipelines"),
                ("azure devops pipelines", "Azure Pipelines"),
                ("circleci", "CircleCI"),
                ("circle ci", "CircleCI"),
                ("travis", "Travis CI"),
                ("travis ci", "Travis CI"),
                ("bamboo", "Bamboo"),
                ("teamcity", "TeamCity"),
            ]),
            container_registry_normalizations: pairs(&[
                ("docker hub", "Docker Hub"),
                ("dockerhub", "Docker Hub"),
                ("ecr", "Amazon ECR"),
                ("amazon ecr", "Amazon ECR"),
                ("acr", "Azure Container Registry"),
                ("azure container registry", "Azure Container Registry"),
                ("gcr", "Google Container Registry"),
                ("google container registry", "Google Container Registry"),
                ("gar", "Google Artifact Registry"),
                ("google artifact registry", "Google Artifact Registry"),
                ("artifactory", "JFrog Artifactory"),
                ("jfrog", "JFrog Artifactory"),
            ]),
            iac_normalizations: pairs(&[
                ("terraform", "Terraform"),
                ("tf", "Terraform"),
                ("cloudformation", "AWS CloudFormation"),
                ("cfn", "AWS CloudFormation"),
                ("arm", "Azure Resource Manager"),
                ("azure rm", "Azure Resource Manager"),
                ("kubernetes", "Kubernetes"),
                ("k8s", "Kubernetes"),
                ("helm", "Helm"),
                ("pulumi", "Pulumi"),
                ("cdk", "AWS CDK"),
                ("aws cdk", "AWS CDK"),
            ]),
            cloud_normalizations: pairs(&[
                ("aws", "Amazon Web Services (AWS)"),
                ("amazon", "Amazon Web Services (AWS)"),
                ("amazon web services", "Amazon Web Services (AWS)"),
                ("azure", "Microsoft Azure"),
                ("microsoft azure", "Microsoft Azure"),
                ("gcp", "Google Cloud Platform (GCP)"),
                ("google cloud", "Google Cloud Platform (GCP)"),
                ("google cloud platform", "Google Cloud Platform (GCP)"),
                ("multi-cloud", "Multi-cloud"),
                ("multicloud", "Multi-cloud"),
                ("on-premises", "On-premises"),
                ("on-prem", "On-premises"),
                ("hybrid", "Hybrid cloud"),
            ]),
        }
    }
}

impl KeywordDictionaries {
    /// Qualification family 1: a named language, a named SCM product, or a
    /// generic technology word.
    pub fn has_tech_signal(&self, notes_lower: &str) -> bool {
        self.tech_signal_keywords
            .iter()
            .any(|kw| notes_lower.contains(kw))
            || self.languages.iter().any(|e| e.matches(notes_lower))
            || self.scm_tools.iter().any(|e| e.matches(notes_lower))
    }

    /// Qualification family 2: presence or absence of existing security
    /// tooling or practices.
    pub fn has_state_signal(&self, notes_lower: &str) -> bool {
        self.state_signal_keywords
            .iter()
            .any(|kw| notes_lower.contains(kw))
            || self
                .no_security_phrases
                .iter()
                .any(|phrase| notes_lower.contains(phrase))
    }

    pub fn pain_point_for(&self, competitor_label: &str) -> Option<&str> {
        self.pain_points
            .iter()
            .find(|(label, _)| label == competitor_label)
            .map(|(_, pain)| pain.as_str())
    }

    pub fn apply_overrides(&mut self, overrides: DictionaryOverrides) {
        self.scm_tools.extend(overrides.scm_tools);
        self.languages.extend(overrides.languages);
        self.ides.extend(overrides.ides);
        self.cicd_tools.extend(overrides.cicd_tools);
        self.container_registries
            .extend(overrides.container_registries);
        self.iac_formats.extend(overrides.iac_formats);
        self.cloud_providers.extend(overrides.cloud_providers);
        self.competitor_tools.extend(overrides.competitor_tools);
        self.tech_signal_keywords
            .extend(overrides.tech_signal_keywords.iter().map(|w| w.to_lowercase()));
        self.state_signal_keywords
            .extend(overrides.state_signal_keywords.iter().map(|w| w.to_lowercase()));
    }
}

/// Optional additions loaded from the `[dictionaries]` table of a TOML
/// config file. Additions are appended after the built-in entries, so the
/// built-in tie-break order is preserved.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct DictionaryOverrides {
    #[serde(default)]
    pub scm_tools: Vec<DictionaryEntry>,
    #[serde(default)]
    pub languages: Vec<DictionaryEntry>,
    #[serde(default)]
    pub ides: Vec<DictionaryEntry>,
    #[serde(default)]
    pub cicd_tools: Vec<DictionaryEntry>,
    #[serde(default)]
    pub container_registries: Vec<DictionaryEntry>,
    #[serde(default)]
    pub iac_formats: Vec<DictionaryEntry>,
    #[serde(default)]
    pub cloud_providers: Vec<DictionaryEntry>,
    #[serde(default)]
    pub competitor_tools: Vec<DictionaryEntry>,
    #[serde(default)]
    pub tech_signal_keywords: Vec<String>,
    #[serde(default)]
    pub state_signal_keywords: Vec<String>,
}

/// Flat normalization lookup: case-insensitive trimmed match, unmatched
/// input passes through trimmed.
pub fn normalize_token(map: &[(String, String)], raw: &str) -> String {
    let trimmed = raw.trim();
    let key = trimmed.to_lowercase();
    map.iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| to.clone())
        .unwrap_or_else(|| trimmed.to_string())
}

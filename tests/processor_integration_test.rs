use pov_sherpa::domain::model::{CategoryGuides, ProcessOutcome, ScmValue};
use pov_sherpa::{
    KeywordDictionaries, PovProcessor, ProcessorConfig, StaticCompetitiveIntel,
    StaticImplementationCatalog,
};

fn processor() -> PovProcessor<StaticCompetitiveIntel, StaticImplementationCatalog> {
    let config = ProcessorConfig::default();
    let catalog = StaticImplementationCatalog::new(&config.docs_base_url);
    PovProcessor::new(
        config,
        KeywordDictionaries::default(),
        StaticCompetitiveIntel::new(),
        catalog,
    )
    .unwrap()
}

const DISCOVERY_NOTES: &str = "Customer: Initech. They currently run Veracode for SAST but \
    complain about slow scan times. Code lives in GitHub and GitLab, mostly Python services. \
    The main challenge is vulnerability backlog. The platform team owns security tooling. \
    They want a decision within 6 weeks. Budget is approved";

#[tokio::test]
async fn test_end_to_end_qualified_flow() {
    let outcome = processor()
        .process_discovery_notes(DISCOVERY_NOTES, None)
        .await
        .unwrap();

    let qualified = match outcome {
        ProcessOutcome::Qualified(qualified) => qualified,
        ProcessOutcome::NotQualified(result) => {
            panic!("expected qualification, got {:?}", result)
        }
    };

    let info = &qualified.extracted_info;
    assert_eq!(info.customer_name, "Initech");
    assert_eq!(info.tech_stack.languages, vec!["Python"]);
    assert_eq!(
        info.tech_stack.source_code_management,
        vec!["github", "gitlab"]
    );
    assert!(matches!(
        info.tech_stack.report().source_code_management,
        ScmValue::Many(_)
    ));
    assert_eq!(info.competitors, vec!["Veracode"]);
    assert!(info
        .current_state
        .contains("slow scan times, high false positive rates"));
    assert_eq!(info.timeline, "They want a decision within 6 weeks");
    assert_eq!(info.budget, "Budget is approved");

    let sheet = &qualified.pov_worksheet;
    assert_eq!(sheet.executive_summary.current_state, info.current_state);
    assert!(sheet
        .executive_summary
        .future_state
        .starts_with("The incumbent tooling is consolidated"));
    assert_eq!(
        sheet.solutions_map[0].outcome,
        "Reduce security vulnerabilities"
    );
    assert_eq!(sheet.timeline.len(), 5);

    let intel = &qualified.competitive_advantages;
    assert_eq!(intel.competitors.len(), 1);
    assert_eq!(intel.competitors[0].name, "Veracode");
    assert_eq!(intel.trap_questions.len(), 5);
    assert_eq!(intel.general_advantages.len(), 5);

    match &qualified.implementation_guides.scm {
        CategoryGuides::Specific(guides) => {
            let names: Vec<&str> = guides.iter().map(|g| g.name.as_str()).collect();
            assert_eq!(names, vec!["GitHub Integration", "GitLab Integration"]);
        }
        other => panic!("unexpected scm guides: {:?}", other),
    }
}

#[tokio::test]
async fn test_identical_input_yields_byte_identical_output() {
    let processor = processor();
    let first = processor
        .process_discovery_notes(DISCOVERY_NOTES, None)
        .await
        .unwrap();
    let second = processor
        .process_discovery_notes(DISCOVERY_NOTES, None)
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_short_notes_are_rejected_as_value_not_error() {
    let outcome = processor()
        .process_discovery_notes("too short", None)
        .await
        .unwrap();
    match outcome {
        ProcessOutcome::NotQualified(result) => {
            assert!(!result.qualified);
            assert_eq!(result.message, "Insufficient discovery information provided.");
        }
        ProcessOutcome::Qualified(_) => panic!("short notes must not qualify"),
    }
}

#[tokio::test]
async fn test_signal_free_notes_list_both_missing_categories() {
    let notes = "We are a mid-size logistics firm looking to modernize our warehouses";
    let outcome = processor().process_discovery_notes(notes, None).await.unwrap();
    match outcome {
        ProcessOutcome::NotQualified(result) => {
            assert_eq!(result.missing_fields.len(), 2);
            assert!(result
                .missing_fields
                .iter()
                .any(|f| f.contains("Technology stack")));
            assert!(result
                .missing_fields
                .iter()
                .any(|f| f.contains("Current state")));
        }
        ProcessOutcome::Qualified(_) => panic!("signal-free notes must not qualify"),
    }
}

#[tokio::test]
async fn test_serialized_shape_matches_api_contract() {
    let outcome = processor()
        .process_discovery_notes(DISCOVERY_NOTES, None)
        .await
        .unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["qualified"], true);
    assert!(json["povWorksheet"]["executiveSummary"]["currentState"].is_string());
    assert_eq!(
        json["extractedInfo"]["techStack"]["languages"],
        serde_json::json!(["Python"])
    );
    assert_eq!(
        json["extractedInfo"]["techStack"]["sourceCodeManagement"],
        serde_json::json!(["github", "gitlab"])
    );
    assert_eq!(json["extractedInfo"]["techStack"]["ide"], "IDE TBD");
    assert!(json["implementationGuides"]["containers"].is_array());
}

#[tokio::test]
async fn test_undetected_languages_serialize_as_sentinel_list() {
    let notes = "Customer: Hooli. They currently scan nothing and have no security tooling, \
        the whole tech stack is undocumented";
    let outcome = processor().process_discovery_notes(notes, None).await.unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        json["extractedInfo"]["techStack"]["languages"],
        serde_json::json!(["Languages TBD"])
    );
    assert_eq!(
        json["extractedInfo"]["techStack"]["sourceCodeManagement"],
        "SCM tool TBD"
    );
    assert!(json["extractedInfo"]["currentState"]
        .as_str()
        .unwrap()
        .starts_with("No existing security tooling"));
}

#[tokio::test]
async fn test_notes_from_file() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("discovery.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{}", DISCOVERY_NOTES).unwrap();

    let notes = std::fs::read_to_string(&path).unwrap();
    let outcome = processor().process_discovery_notes(&notes, None).await.unwrap();
    assert!(outcome.qualified());
}

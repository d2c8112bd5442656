use pov_sherpa::domain::model::{CategoryGuides, ProcessOutcome};
use pov_sherpa::{
    FileConfig, KeywordDictionaries, PovProcessor, ProcessorConfig, StaticCompetitiveIntel,
    StaticImplementationCatalog, TechStackOverrides,
};

fn processor_with(
    config: ProcessorConfig,
    dicts: KeywordDictionaries,
) -> PovProcessor<StaticCompetitiveIntel, StaticImplementationCatalog> {
    let catalog = StaticImplementationCatalog::new(&config.docs_base_url);
    PovProcessor::new(config, dicts, StaticCompetitiveIntel::new(), catalog).unwrap()
}

fn default_processor() -> PovProcessor<StaticCompetitiveIntel, StaticImplementationCatalog> {
    processor_with(ProcessorConfig::default(), KeywordDictionaries::default())
}

fn form_input() -> TechStackOverrides {
    TechStackOverrides {
        scm: Some("gh".to_string()),
        languages: Some("pyton, js".to_string()),
        current_state: Some("currently nothing in place for security".to_string()),
        ide: Some("vscode".to_string()),
        cicd: Some("gh actions".to_string()),
        iac: Some("k8s".to_string()),
        cloud_provider: Some("aws".to_string()),
        ..TechStackOverrides::default()
    }
}

#[tokio::test]
async fn test_structured_form_flow_normalizes_and_overrides() {
    let overrides = form_input();
    let notes = overrides.to_notes();

    let outcome = default_processor()
        .process_discovery_notes(&notes, Some(&overrides))
        .await
        .unwrap();

    let qualified = match outcome {
        ProcessOutcome::Qualified(qualified) => qualified,
        ProcessOutcome::NotQualified(result) => {
            panic!("form input should qualify, got {:?}", result)
        }
    };

    let stack = &qualified.extracted_info.tech_stack;
    assert_eq!(stack.source_code_management, vec!["GitHub"]);
    assert_eq!(stack.languages, vec!["Python", "JavaScript"]);
    assert_eq!(stack.ide.as_deref(), Some("VS Code"));
    assert_eq!(stack.cicd.as_deref(), Some("GitHub Actions"));
    assert_eq!(stack.iac_formats, vec!["Kubernetes"]);
    assert_eq!(
        stack.cloud_provider.as_deref(),
        Some("Amazon Web Services (AWS)")
    );

    // "nothing in place" fires the no-security narrative, which drives the
    // zero-coverage future state.
    assert!(qualified
        .extracted_info
        .current_state
        .starts_with("No existing security tooling"));
    assert!(qualified
        .pov_worksheet
        .executive_summary
        .future_state
        .starts_with("From zero coverage"));

    // Normalized SCM resolves to a concrete guide; "VS Code" has no catalog
    // entry and falls back to the general IDE links.
    match &qualified.implementation_guides.scm {
        CategoryGuides::Specific(guides) => {
            assert_eq!(guides[0].name, "GitHub Integration");
        }
        other => panic!("unexpected scm guides: {:?}", other),
    }
    assert!(matches!(
        qualified.implementation_guides.ide,
        CategoryGuides::General { .. }
    ));

    // Detected IDE/CI-CD add the two conditional onboarding steps.
    assert_eq!(qualified.pov_worksheet.onboarding_checklist.len(), 8);
}

#[tokio::test]
async fn test_unrecognized_form_tokens_pass_through_trimmed() {
    let overrides = TechStackOverrides {
        scm: Some("  Fossil  ".to_string()),
        languages: Some("Python".to_string()),
        current_state: Some("currently manual reviews".to_string()),
        ..TechStackOverrides::default()
    };
    let notes = overrides.to_notes();

    let outcome = default_processor()
        .process_discovery_notes(&notes, Some(&overrides))
        .await
        .unwrap();

    match outcome {
        ProcessOutcome::Qualified(qualified) => {
            assert_eq!(
                qualified.extracted_info.tech_stack.source_code_management,
                vec!["Fossil"]
            );
        }
        ProcessOutcome::NotQualified(result) => panic!("should qualify, got {:?}", result),
    }
}

#[tokio::test]
async fn test_toml_config_tightens_gate_and_extends_dictionaries() {
    let file = FileConfig::from_toml_str(
        r#"
        [processor]
        min_discovery_length = 200

        [[dictionaries.languages]]
        label = "Zig"
        aliases = ["zig"]
        "#,
    )
    .unwrap();

    let mut dicts = KeywordDictionaries::default();
    dicts.apply_overrides(file.dictionaries);
    let processor = processor_with(file.processor, dicts);

    let notes = "The team writes Zig, keeps code in GitHub, and currently has manual reviews";
    let outcome = processor.process_discovery_notes(notes, None).await.unwrap();
    assert!(
        !outcome.qualified(),
        "notes shorter than the raised floor must be rejected"
    );

    let result = processor.qualify_opportunity(notes);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("at least 200 characters")));

    // Same notes pass the default gate, and the added dictionary entry is live.
    let default = default_processor();
    let outcome = default.process_discovery_notes(notes, None).await.unwrap();
    assert!(outcome.qualified());

    let dicts = {
        let mut dicts = KeywordDictionaries::default();
        dicts.apply_overrides(
            FileConfig::from_toml_str(
                r#"
                [[dictionaries.languages]]
                label = "Zig"
                aliases = ["zig"]
                "#,
            )
            .unwrap()
            .dictionaries,
        );
        dicts
    };
    let extended = processor_with(ProcessorConfig::default(), dicts);
    match extended.process_discovery_notes(notes, None).await.unwrap() {
        ProcessOutcome::Qualified(qualified) => {
            assert_eq!(qualified.extracted_info.tech_stack.languages, vec!["Zig"]);
        }
        ProcessOutcome::NotQualified(result) => panic!("should qualify, got {:?}", result),
    }
}

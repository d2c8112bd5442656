use clap::Parser;
use pov_sherpa::utils::{logger, validation::Validate};
use pov_sherpa::{
    CliConfig, FileConfig, KeywordDictionaries, PovProcessor, ProcessorConfig,
    StaticCompetitiveIntel, StaticImplementationCatalog,
};
use std::io::Read;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_service_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::info!("Starting pov-sherpa CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let mut config = ProcessorConfig::default();
    let mut dicts = KeywordDictionaries::default();
    if let Some(path) = &cli.config {
        let file = FileConfig::from_file(path)?;
        config = file.processor;
        dicts.apply_overrides(file.dictionaries);
    }
    if let Some(min_length) = cli.min_length {
        config.min_discovery_length = min_length;
    }

    let overrides = cli.overrides();
    let notes = if let Some(path) = &cli.notes_file {
        tracing::info!("Reading discovery notes from {}", path);
        std::fs::read_to_string(path)?
    } else if !overrides.is_empty() {
        overrides.to_notes()
    } else {
        tracing::info!("Reading discovery notes from stdin");
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let catalog = StaticImplementationCatalog::new(&config.docs_base_url);
    let processor = PovProcessor::new(config, dicts, StaticCompetitiveIntel::new(), catalog)?;

    let outcome = processor
        .process_discovery_notes(
            &notes,
            if overrides.is_empty() {
                None
            } else {
                Some(&overrides)
            },
        )
        .await?;

    if outcome.qualified() {
        tracing::info!(
            "Implementation guidance generated on {}",
            chrono::Local::now().format("%Y-%m-%d")
        );
    } else {
        tracing::warn!("Opportunity not qualified; resubmit with richer notes");
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{}", json);

    Ok(())
}

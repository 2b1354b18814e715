//! CLI entrypoint for examgen
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use examgen_application::{GenerateAnswerInput, GenerateAnswerUseCase, LlmGateway};
use examgen_domain::{Model, OutputFormat};
use examgen_infrastructure::{
    ConfigLoader, GroqGateway, JsonlConversationLogger, LocalDocumentLoader,
};
use examgen_presentation::{AnswerReport, Cli, ConsoleFormatter};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so stdout carries only the answer
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    for issue in config.validate() {
        warn!("Config issue: {}", issue);
    }
    ConsoleFormatter::set_color(config.output.color);

    let Some(question) = cli.question else {
        bail!("Question is required. Use --show-config to inspect configuration sources.");
    };

    let documents = LocalDocumentLoader::new().load(&cli.docs)?;

    // === Dependency Injection ===
    // The credential is resolved here and handed to the gateway explicitly
    let credential = config.provider.resolve_credential();
    let provider = config.provider.to_provider_config(credential);
    info!("Using model {} at {}", provider.model, provider.base_url);
    let gateway: Arc<dyn LlmGateway> = Arc::new(GroqGateway::new(provider));

    let mut use_case = GenerateAnswerUseCase::new(gateway);
    if let Some(path) = &cli.log_conversation {
        match JsonlConversationLogger::open(path) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                use_case = use_case.with_conversation_logger(Arc::new(logger));
            }
            None => warn!("Conversation logging disabled"),
        }
    }

    let mut input = GenerateAnswerInput::new(question.as_str(), cli.marks.as_str())
        .with_documents(documents);
    if let Some(name) = &cli.model {
        let Ok(model) = name.parse::<Model>();
        input = input.with_model(model);
    }

    let result = use_case.execute(input).await;

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    let output = match format {
        OutputFormat::Text => ConsoleFormatter::format_text(&result),
        OutputFormat::Json => {
            ConsoleFormatter::format_json(&AnswerReport::new(&question, &cli.marks, &result))
        }
    };
    println!("{}", output);

    if let Ok(answer) = &result
        && cli.verbose > 0
    {
        eprintln!("{}", ConsoleFormatter::format_usage(answer));
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

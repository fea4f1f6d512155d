//! CLI entrypoint for billed
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use billed_application::{BillStore, Navigator, NewBillUseCase, NoNavigation, SelectFileError};
use billed_domain::Severity;
use billed_infrastructure::{
    ConfigLoader, FileConfig, HttpBillStore, InMemoryBillStore, ReceiptReader,
};
use billed_presentation::{
    Cli, Command, ConsoleFormatter, ConsoleNavigator, OutputFormat, SubmitArgs,
};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        print!("{}", ConfigLoader::describe_config_sources());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let mut has_errors = false;
    for issue in config.validate() {
        match issue.severity {
            Severity::Error => {
                has_errors = true;
                eprintln!("{}", ConsoleFormatter::format_error(&issue.message));
            }
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if has_errors {
        bail!("Invalid configuration");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let output = cli
        .output
        .or(config.output.format.map(OutputFormat::from))
        .unwrap_or(OutputFormat::Text);

    match cli.command {
        Some(Command::Check { files }) => {
            let rendered = match output {
                OutputFormat::Text => ConsoleFormatter::format_check(&files),
                OutputFormat::Json => ConsoleFormatter::format_check_json(&files),
            };
            print!("{}", rendered);
            Ok(())
        }
        Some(Command::Submit(args)) => submit(&config, cli.email.as_deref(), args, output).await,
        None => bail!("A command is required. Use --help for usage."),
    }
}

/// Upload the receipt, then submit the bill on the reserved id
async fn submit(
    config: &FileConfig,
    email: Option<&str>,
    args: SubmitArgs,
    output: OutputFormat,
) -> Result<()> {
    let session = config
        .build_session(email)
        .context("Set session.email in billed.toml or pass --email")?;

    // === Dependency Injection ===
    let store: Arc<dyn BillStore> = if args.dry_run {
        info!("Dry run: using the in-memory bill store");
        Arc::new(InMemoryBillStore::new())
    } else {
        Arc::new(HttpBillStore::new(&config.api.base_url)?.with_jwt(session.jwt()))
    };
    // JSON output stays machine-readable: navigation is only logged
    let navigator: Arc<dyn Navigator> = match output {
        OutputFormat::Text => Arc::new(ConsoleNavigator::default()),
        OutputFormat::Json => Arc::new(NoNavigation),
    };

    let mut use_case = NewBillUseCase::new(store, navigator, session)
        .with_behavior(config.behavior());

    let receipt = ReceiptReader::read(&args.receipt).await?;
    let bill_id = match use_case.select_file(receipt).await {
        Ok(draft) => draft.bill_id().unwrap_or_default().to_string(),
        Err(e @ SelectFileError::InvalidFormat { .. }) => {
            let message = e.user_message().unwrap_or_default();
            bail!("{}: {}", e, message)
        }
        Err(e) => return Err(e.into()),
    };

    let bill = use_case.submit(&args.to_form()).await?;

    let rendered = match output {
        OutputFormat::Text => ConsoleFormatter::format_bill(&bill, &bill_id),
        OutputFormat::Json => ConsoleFormatter::format_bill_json(&bill, &bill_id),
    };
    println!("{}", rendered);

    Ok(())
}

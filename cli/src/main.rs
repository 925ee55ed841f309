//! CLI entrypoint for llm-panel
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use panel_application::{
    RunPanelError, RunPanelInput, RunPanelUseCase, RunRefineInput, RunRefineUseCase,
};
use panel_domain::{ProviderId, Question};
use panel_infrastructure::{ConfigLoader, ThirdSeat, build_gateway};
use panel_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
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
        .init();

    info!("Starting llm-panel");

    // Load configuration, then let CLI flags override it
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    if cli.local {
        config.panel.third_seat = ThirdSeat::Local;
    }
    if !cli.seat.is_empty() {
        config.panel.seats = cli
            .seat
            .iter()
            .map(|s| ProviderId::from(s.as_str()))
            .collect();
    }
    if let Some(adjudicator) = &cli.adjudicator {
        config.panel.adjudicator = Some(ProviderId::from(adjudicator.as_str()));
    }
    if cli.critique {
        config.panel.enable_critique = true;
    }
    if cli.no_critique {
        config.panel.enable_critique = false;
    }

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    // Question is required outside --show-config
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. See --help for usage."),
    };
    let question = match Question::try_new(question) {
        Some(q) => q,
        None => bail!("Question must not be empty."),
    };

    let seats = config.resolve_seats();

    // === Dependency Injection ===
    // Build provider adapters from configuration
    let (gateway, warnings) = build_gateway(&config, &seats)?;
    for warning in &warnings {
        warn!("{warning}");
    }
    let gateway = Arc::new(gateway);

    // Ctrl-C aborts in-flight provider calls
    let cancellation = CancellationToken::new();
    {
        let token = cancellation.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted; aborting in-flight provider calls");
                token.cancel();
            }
        });
    }

    // Print header
    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|{:^60}|", "llm-panel - LLM Panel");
        println!("+============================================================+");
        println!();
        println!("Question: {}", question);
        println!(
            "Seats: {}",
            seats
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
    }

    // Refinement chain mode
    if cli.refine {
        let input = RunRefineInput::new(question, seats);
        let use_case = RunRefineUseCase::new(gateway).with_cancellation(cancellation.clone());
        let report = use_case.execute(input).await?;

        let output = match cli.output {
            OutputFormat::Full => ConsoleFormatter::format_refine(&report),
            OutputFormat::Synthesis => format!("{}\n", report.final_text()),
            OutputFormat::Json => ConsoleFormatter::format_refine_json(&report),
        };
        println!("{}", output);
        return Ok(());
    }

    // Panel mode
    let mut input = RunPanelInput::new(question, seats);
    if let Some(adjudicator) = config.resolve_adjudicator() {
        input = input.with_adjudicator(adjudicator);
    }
    input = input.with_critique(config.panel.enable_critique);

    let use_case = RunPanelUseCase::new(gateway).with_cancellation(cancellation.clone());

    // Execute with or without progress reporting
    let result = if cli.quiet {
        use_case.execute(input).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    };

    match result {
        Ok(report) => {
            let output = match cli.output {
                OutputFormat::Full => ConsoleFormatter::format(&report),
                OutputFormat::Synthesis => ConsoleFormatter::format_synthesis_only(&report),
                OutputFormat::Json => ConsoleFormatter::format_json(&report),
            };
            println!("{}", output);
            Ok(())
        }
        // The panel answered but the adjudicator could not; print what we
        // have and signal the degraded result through the exit code.
        Err(RunPanelError::SynthesisUnavailable { panel, reason }) => {
            warn!("Synthesis unavailable: {}", reason);
            let output = match cli.output {
                OutputFormat::Json => {
                    serde_json::to_string_pretty(&panel).unwrap_or_else(|_| "[]".to_string())
                }
                _ => ConsoleFormatter::format_degraded(&panel, &reason),
            };
            println!("{}", output);
            std::process::exit(2);
        }
        Err(e) => Err(e.into()),
    }
}

//! CLI entrypoint for Quiz Challenge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use quiz_application::{
    CountdownTimer, FetchQuizUseCase, QuizBinding, QuizOrchestrator, QuizService,
    ViewStateRendering,
};
use quiz_infrastructure::{ConfigLoader, HttpQuizService, TokioCountdownTimer};
use quiz_presentation::{Cli, ConsolePresenter};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
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

    info!("Starting Quiz Challenge");

    // Load configuration (files are skipped with --no-config)
    let mut file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };
    // The override lands before validation so a non-positive --period is
    // rejected like any other config source.
    if let Some(period) = cli.period {
        file_config.game.timer_period_seconds = period;
    }
    file_config.validate()?;

    let game_config = file_config.game_config();

    // === Dependency Injection ===
    // Create infrastructure adapters
    let client = reqwest::Client::new();
    let quiz_service: Arc<dyn QuizService> =
        Arc::new(HttpQuizService::new(client, file_config.api.base_url.clone()));
    let timer: Arc<dyn CountdownTimer> = Arc::new(TokioCountdownTimer::new());

    let fetch_quiz = FetchQuizUseCase::new(quiz_service);
    let orchestrator = Arc::new(QuizOrchestrator::new(timer, fetch_quiz, game_config));

    // Console presenter receives both field bindings and state rendering
    let presenter = Arc::new(ConsolePresenter::new());
    let binding: Arc<dyn QuizBinding> = presenter.clone();
    let rendering: Arc<dyn ViewStateRendering> = presenter.clone();
    orchestrator.bind(&binding);
    orchestrator.attach_renderer(&rendering);

    orchestrator.on_view_did_load().await;

    // Game loop: commands start with ':', everything else is an answer
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => continue,
            ":start" | ":toggle" => orchestrator.toggle_timer(),
            ":reset" => orchestrator.reset_quiz().await,
            ":quit" | ":q" => break,
            answer => orchestrator.verify_text_field_input(Some(answer)),
        }
    }

    info!("Leaving Quiz Challenge");

    Ok(())
}

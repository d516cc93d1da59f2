//! LearnFlow - language learning backend
//!
//! Entry point: loads configuration, wires the catalog store, text-generation
//! client and quiz service together, then runs the requested command.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::{non_blocking, rolling};

use learnflow::catalog::CatalogStore;
use learnflow::cli::{Args, Commands};
use learnflow::config::Config;
use learnflow::llm::{LlmClient, OpenAiBackend};
use learnflow::server::{self, AppState};
use learnflow::subtitle::format_timestamp;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging to both console and file
    setup_logging(args.verbose)?;

    let mut config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            if std::path::Path::new("learnflow.toml").exists() {
                info!("Found learnflow.toml in current directory, loading...");
                Config::from_file("learnflow.toml")?
            } else {
                Config::default()
            }
        }
    };

    if let Commands::InitConfig { output } = &args.command {
        config.save_to_file(output)?;
        println!("Wrote default configuration to {}", output.display());
        return Ok(());
    }

    if let Commands::Serve { host, port, catalog } = &args.command {
        if let Some(host) = host {
            config.server.host = host.clone();
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
        if let Some(catalog) = catalog {
            config.catalog.path = catalog.clone();
        }
    }

    // The API key is read once here and handed to the backend
    let backend = OpenAiBackend::from_env(&config.llm)?;
    if !backend.has_api_key() {
        warn!(
            "{} is not set; quiz generation and translation will return fallbacks",
            config.llm.api_key_env
        );
    }

    let catalog = Arc::new(CatalogStore::new(&config.catalog.path));
    let llm = Arc::new(LlmClient::new(Arc::new(backend), config.llm.clone()));
    let state = AppState::new(catalog.clone(), llm.clone());

    match args.command {
        Commands::Serve { .. } => {
            info!("Serving catalog {}", catalog.path().display());
            server::serve(&config.server, state).await?;
        }
        Commands::Videos => {
            let videos = catalog.list_videos().await;

            if videos.is_empty() {
                println!("No videos found in {}", catalog.path().display());
            } else {
                println!("{:<20} {:<8} {:<14} {:<9} {:<10} {:<5}", "Id", "Lang", "Difficulty", "Duration", "Subtitles", "Quiz");
                println!("{}", "-".repeat(70));

                for video in videos {
                    println!(
                        "{:<20} {:<8} {:<14} {:<9} {:<10} {:<5}",
                        video.id,
                        video.language,
                        video.difficulty,
                        format_timestamp(video.duration),
                        video.subtitles.len(),
                        if video.quiz.is_some() { "yes" } else { "no" }
                    );
                }
            }
        }
        Commands::Quiz { video_id, regenerate } => {
            let quiz = if regenerate {
                state.quiz.create_quiz(&video_id).await?
            } else {
                state.quiz.get_or_create_quiz(&video_id).await?
            };
            println!("{}", serde_json::to_string_pretty(&quiz)?);
        }
        Commands::Translate { text, from_lang, to_lang } => {
            let translation = llm.translate(&text, &from_lang, &to_lang).await;
            println!("{}", serde_json::to_string_pretty(&translation)?);
        }
        // Written before the backend was built
        Commands::InitConfig { .. } => {}
    }

    Ok(())
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool) -> Result<()> {
    let log_dir = std::env::current_dir()?.join(".learnflow").join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Daily rotation
    let file_appender = rolling::daily(&log_dir, "learnflow.log");
    let (non_blocking_file, guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(guard);

    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Logging initialized - console: {}, file: {}",
          log_level, log_dir.join("learnflow.log").display());

    Ok(())
}

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use serpkit::gateway::SerpApiClient;
use serpkit::tools::{HELP_RESOURCE_URI, ToolCall, ToolContext, ToolExecutor, help_text};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

fn setup_logging(default_level: LevelFilter) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("serpkit")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("serpkit.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG, when set, overrides the configured level
    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn log_level(cli: &Cli, config: &Config) -> LevelFilter {
    if cli.is_verbose() {
        return LevelFilter::Debug;
    }
    config
        .log_level
        .as_deref()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    let executor = ToolExecutor::standard();

    match &cli.command {
        None => handle_list_command(&executor, false),
        Some(Commands::List { json }) => handle_list_command(&executor, *json),
        Some(Commands::Call { tool, args }) => handle_call_command(&executor, tool, args.as_deref(), config).await,
        Some(Commands::Docs) => handle_docs_command(),
    }
}

fn handle_list_command(executor: &ToolExecutor, json: bool) -> Result<()> {
    let defs = executor.definitions();
    info!("Listing {} tools", defs.len());

    if json {
        let schemas: Vec<serde_json::Value> = defs.iter().map(|d| d.to_mcp_schema()).collect();
        println!("{}", serde_json::to_string_pretty(&schemas)?);
        return Ok(());
    }

    println!("{}", "Available tools:".green());
    for def in defs {
        println!("  {:<20} {}", def.name.cyan(), def.description);
    }
    Ok(())
}

async fn handle_call_command(executor: &ToolExecutor, tool: &str, args: Option<&str>, config: &Config) -> Result<()> {
    info!("Calling tool: {}", tool);

    let input = match args {
        Some(raw) => serde_json::from_str(raw).context("Failed to parse --args as JSON")?,
        None => serde_json::json!({}),
    };

    let client = SerpApiClient::new(config.serpapi.client_config()).context("Failed to create SerpAPI client")?;
    let ctx = ToolContext::new(Arc::new(client), config.serpapi.credentials())
        .with_default_max_flight_results(config.flights.max_results);

    let result = executor.execute(&ToolCall::new("cli", tool, input), &ctx).await;
    println!("{}", serde_json::to_string_pretty(&result.content)?);

    if result.is_error {
        eprintln!("{} {}", "Tool failed:".red(), tool);
        std::process::exit(1);
    }
    Ok(())
}

fn handle_docs_command() -> Result<()> {
    println!("{} {}", "Resource:".green(), HELP_RESOURCE_URI);
    println!("{}", help_text());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up SERP_API_KEY from a local .env if present
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(log_level(&cli, &config)).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}

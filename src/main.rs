//! favcache - Local favicon cache for password-manager launchers
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use favcache::cli::{Cli, Commands};
use favcache::config::ConfigManager;
use favcache::error::FavcacheResult;
use favcache::layout::CacheLayout;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> FavcacheResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("favcache=warn"),
        1 => EnvFilter::new("favcache=info"),
        _ => EnvFilter::new("favcache=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let config = config_manager.load()?;

    let layout = CacheLayout::resolve(cli.cache_dir.as_deref(), &config);

    match cli.command {
        Commands::Update => favcache::cli::commands::update(layout, &config),
        Commands::Register(args) => favcache::cli::commands::register(args, layout, &config),
        Commands::Resolve(args) => favcache::cli::commands::resolve(args, layout, &config),
        Commands::Status => favcache::cli::commands::status(layout, &config),
        Commands::Trigger => favcache::cli::commands::trigger(layout, cli.config.as_deref()),
        Commands::Config(args) => favcache::cli::commands::config(args, &config_manager, &config),
    }
}

//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// favcache - Local favicon cache for password-manager launchers
///
/// Resolves, downloads and caches entry icons through a fallback URL
/// chain so launcher lookups never touch the network.
#[derive(Parser, Debug)]
#[command(name = "favcache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FAVCACHE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Cache root directory (overrides config and platform default)
    #[arg(long, global = true, env = "FAVCACHE_DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download icons for all pending entries
    Update,

    /// Register a favicon key for an entry
    Register(RegisterArgs),

    /// Print the cached icon path for an entry
    Resolve(ResolveArgs),

    /// Show index and cache directory state
    Status,

    /// Launch the update as a detached background process
    Trigger,

    /// Show configuration
    Config(ConfigArgs),
}

/// Arguments for the register command
#[derive(Parser, Debug)]
pub struct RegisterArgs {
    /// Entry identifier
    pub id: String,

    /// Favicon key (a domain-like string)
    #[arg(long, conflicts_with = "payload", required_unless_present = "payload")]
    pub fav: Option<String>,

    /// Raw metadata payload: a JSON object whose `fav` field holds the key
    #[arg(long)]
    pub payload: Option<String>,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Entry identifier
    pub id: String,

    /// Path printed when no cached icon exists
    #[arg(long)]
    pub fallback: Option<PathBuf>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// What to show
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,
}

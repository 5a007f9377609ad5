pub mod toml_config;

use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "kombucha")]
#[command(about = "Kombucha ingredient calculator")]
pub struct CliConfig {
    /// Total water in liters; the starter follows at the configured ratio
    #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["starter", "interactive"])]
    pub water: Option<String>,

    /// Starter liquid in liters; the water follows at the configured ratio
    #[arg(long, allow_hyphen_values = true, conflicts_with = "interactive")]
    pub starter: Option<String>,

    /// Read edits line by line from stdin
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "book-catalog")]
#[command(about = "Runs the library catalog demonstration")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Category for the title and delayed lookups
    /// (JavaScript, CSS, HTML, TypeScript, Angular, Software)
    #[arg(long)]
    pub category: Option<String>,

    /// Delay before the asynchronous lookups complete, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Customer name used for checkout
    #[arg(long)]
    pub customer: Option<String>,

    /// Book ids to check out
    #[arg(long, value_delimiter = ',')]
    pub checkout_ids: Vec<u32>,

    /// Where demo output goes: tracing or stdout
    #[arg(long)]
    pub sink: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

//! Command line configuration

use std::path::PathBuf;

use clap::{Args, Parser};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Catalog settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Fixture set to load the menu & promotions from; the built-in catalog is used when omitted
    #[arg(short, long)]
    pub fixture: Option<String>,

    /// Directory containing `items/` and `promotions/` fixture files
    #[arg(long, env = "BEST_CHARGE_FIXTURES_DIR", default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,
}

/// Best charge CLI configuration
#[derive(Debug, Parser)]
#[command(
    name = "best-charge",
    about = "Prices an order with its cheapest promotion and prints the receipt",
    long_about = None
)]
pub struct Config {
    /// Cart lines such as "ITEM0001 x 1"; read from stdin, one per line, when omitted
    pub items: Vec<String>,

    /// Catalog settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

//! CLI definitions.

pub mod commands;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "signals")]
#[command(author, version, about = "Rule-based trading signal engine")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", env = "SIGNALS_CONFIG")]
    pub config: PathBuf,

    /// Log level (defaults to the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one indicator snapshot and run it through the gate
    Analyze(AnalyzeArgs),
    /// Replay historical bars through the engine
    Replay(ReplayArgs),
    /// List the condition evaluators
    Conditions,
    /// Validate configuration
    ValidateConfig,
    /// Print the default configuration as TOML
    DefaultConfig,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Symbol the snapshot belongs to
    #[arg(short, long)]
    pub symbol: String,

    /// Indicator snapshot (JSON)
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Evaluate at this time (RFC 3339) instead of now
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct ReplayArgs {
    /// Symbol to replay
    #[arg(short, long)]
    pub symbol: String,

    /// Data file (CSV)
    #[arg(long)]
    pub data: PathBuf,

    /// Bars kept in the trailing indicator window
    #[arg(long)]
    pub lookback: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Save results to file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

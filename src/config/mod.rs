pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "display-helpers")]
#[command(about = "Display formatting and JSON import/export helpers")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Locale preset, overrides the configuration file (e.g. en-US, zh-CN)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Turn a camelCase key into a label
    Label { key: String },

    /// Render a month count as years and months
    Tenure {
        #[arg(allow_hyphen_values = true)]
        months: String,
    },

    /// Render a number with digit grouping
    Number {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Save text (argument, or stdin when omitted or "-") as a JSON download
    Export {
        content: Option<String>,

        #[arg(long)]
        filename: Option<String>,

        #[arg(long)]
        output_dir: Option<String>,

        /// Parse the content and write it pretty-printed
        #[arg(long)]
        pretty: bool,
    },

    /// Import a JSON file (prompts on stdin when no path is given)
    Import {
        path: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },
}

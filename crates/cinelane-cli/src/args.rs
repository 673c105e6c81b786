use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "cinelane")]
#[command(about = "Browse hand-picked movie recommendations in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml [default: $CINELANE_PATH or the XDG data dir]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// TOML catalog to use instead of the built-in picks
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive recommendation screen
    Browse {
        /// Index of the first recommendation shown
        #[arg(long, default_value_t = 0)]
        start: usize,
    },

    /// Print one recommendation screen
    Show {
        #[arg(long, default_value_t = 0)]
        index: usize,
    },

    /// List every recommendation in the catalog
    List,

    /// Trigger the play action for a recommendation
    Play {
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
}

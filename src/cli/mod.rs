//! CLI module - Command-line interface for cityweather
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cityweather - 12-hour city forecasts with a search counter
#[derive(Parser)]
#[command(name = "cityweather")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the standard locations
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (default)
    #[command(alias = "web")]
    Serve,

    /// Look up the forecast for a city and print it
    #[command(alias = "f")]
    Forecast {
        /// City name
        #[arg(required = true)]
        city: Vec<String>,
    },

    /// Show how often each city was searched
    Stats,

    /// Create default config file
    #[command(alias = "init")]
    InitConfig,
}

pub use commands::*;

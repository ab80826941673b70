//! Configuration management for the form linter.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (project or user-global)
//! - Precedence: command line > config file > defaults

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name, looked up in the current directory
pub const PROJECT_CONFIG_FILE: &str = ".formlint.toml";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Command-line arguments for the form linter
#[derive(Debug, Parser)]
#[command(name = "formlint")]
#[command(about = "Accessibility linter for donation form markup")]
#[command(version)]
pub struct Args {
    /// Path to a TOML config file
    #[arg(long, global = true, help = "Config file (default: .formlint.toml)")]
    pub config: Option<PathBuf>,

    /// Output format for reports
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level for the linter
    #[arg(
        long,
        global = true,
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// What to do with the input markup
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Report structural defects; exits 1 when any are found
    Check {
        /// Markup file, `-` or omitted for stdin
        file: Option<PathBuf>,
    },
    /// Evaluate the donation form checklist; exits 1 when a rule fails
    Requirements {
        /// Markup file, `-` or omitted for stdin
        file: Option<PathBuf>,
    },
    /// Print markup with known defects repaired
    Fix {
        /// Markup file, `-` or omitted for stdin
        file: Option<PathBuf>,
    },
    /// Print the known-good donation form
    Reference,
    /// Print the bundled defective donation form
    Sample,
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Contents of a config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Parse config file contents
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        toml::from_str(content)
            .with_context(|| format!("Failed to parse config file {}", source_path.display()))
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content, path)
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub format: OutputFormat,
    pub log_level: String,
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let config_path = match &args.config {
            // An explicit path must exist
            Some(path) => Some(path.clone()),
            None => discover_config_file(),
        };

        let file_config = match &config_path {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Self::merge(args, file_config, config_path))
    }

    fn merge(args: Args, file_config: FileConfig, config_path: Option<PathBuf>) -> Self {
        Config {
            command: args.command,
            format: args.format.or(file_config.format).unwrap_or_default(),
            log_level: args
                .log_level
                .or(file_config.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            config_path,
        }
    }
}

/// Find a config file: project file first, then the user config directory
fn discover_config_file() -> Option<PathBuf> {
    let project = PathBuf::from(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    let user = dirs::config_dir()?.join("formlint").join("config.toml");
    user.is_file().then_some(user)
}

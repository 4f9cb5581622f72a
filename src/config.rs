//! Configuration for lcdcon
//!
//! Settings are resolved with the precedence CLI > env > file > defaults.
//! The config file lives at `$XDG_CONFIG_HOME/lcdcon/config.toml` unless
//! `--config` points elsewhere.

use clap::{Parser, Subcommand, ValueEnum};
use console_core::fonts::DEFAULT_FONT_DIR;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI arguments for lcdcon
#[derive(Parser, Debug, Clone)]
#[command(name = "lcdcon")]
#[command(version)]
#[command(about = "Control the text console of a small Linux display", long_about = None)]
pub struct CliArgs {
    /// Path to custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Console font to load before running the command
    #[arg(short, long, value_name = "FONT")]
    pub font: Option<String>,

    /// Directory of installed console fonts
    #[arg(long, value_name = "DIR")]
    pub font_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the console size as "<rows> <columns>"
    Size,
    /// List installed console fonts
    Fonts,
    /// Clear the screen and home the cursor
    Clear,
    /// Show or hide the cursor
    Cursor {
        #[arg(value_enum)]
        visibility: Visibility,
    },
    /// Move the cursor to a 1-based position
    Move {
        #[arg(allow_negative_numbers = true)]
        column: i32,
        #[arg(allow_negative_numbers = true)]
        row: i32,
    },
    /// Erase from a 1-based position to the end of its line
    EraseLine {
        #[arg(allow_negative_numbers = true)]
        column: i32,
        #[arg(allow_negative_numbers = true)]
        row: i32,
    },
    /// Print text at a 1-based position
    Print {
        #[arg(allow_negative_numbers = true)]
        column: i32,
        #[arg(allow_negative_numbers = true)]
        row: i32,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Show "Hello World!" at (4,4) for a few seconds
    Demo {
        /// How long to keep the message on screen
        #[arg(long, default_value_t = 5)]
        seconds: u64,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Show,
    Hide,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Font passed to setfont; empty keeps the current font
    pub font: String,
    /// Directory searched by `fonts`
    pub font_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font: String::new(),
            font_dir: PathBuf::from(DEFAULT_FONT_DIR),
        }
    }
}

/// Configuration error
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub message: String,
    pub field: Option<String>,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "Config error in '{}': {}", field, self.message)
        } else {
            write!(f, "Config error: {}", self.message)
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration with full precedence:
    /// CLI args > environment variables > config file > defaults
    pub fn load_with_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        let config_path = args.config.clone().or_else(Self::default_config_path);
        if let Some(path) = &config_path {
            if path.exists() {
                match Self::load_from_file(path) {
                    Ok(file_config) => config = file_config,
                    Err(e) => {
                        // Keep going with defaults
                        log::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        config.apply_env_vars(|key| env::var(key).ok());
        config.apply_cli_args(args);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            message: format!("Failed to read config file: {}", e),
            field: None,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError {
            message: format!("Failed to parse config file: {}", e),
            field: None,
        })
    }

    /// Apply `LCDCON_*` variables as returned by `lookup`
    fn apply_env_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("LCDCON_FONT") {
            self.font = val;
        }
        if let Some(val) = lookup("LCDCON_FONT_DIR") {
            self.font_dir = PathBuf::from(val);
        }
    }

    fn apply_cli_args(&mut self, args: &CliArgs) {
        if let Some(font) = &args.font {
            self.font = font.clone();
        }
        if let Some(dir) = &args.font_dir {
            self.font_dir = dir.clone();
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.font.chars().any(char::is_whitespace) {
            return Err(ConfigError {
                message: format!("Font name '{}' must not contain whitespace", self.font),
                field: Some("font".to_string()),
            });
        }
        if self.font_dir.as_os_str().is_empty() {
            return Err(ConfigError {
                message: "Font directory must not be empty".to_string(),
                field: Some("font_dir".to_string()),
            });
        }
        Ok(())
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lcdcon").join("config.toml"))
    }
}

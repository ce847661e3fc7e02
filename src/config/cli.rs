use crate::config::toml_config::DEFAULT_CONFIG_FILE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_extension, validate_path, Validate};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "add-signature")]
#[command(about = "Prepend a timestamped signature comment to source files")]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Force the feature on, ignoring `enabled` in the config file
    #[arg(long, global = true, conflicts_with = "disable")]
    pub enable: bool,

    /// Force the feature off, ignoring `enabled` in the config file
    #[arg(long, global = true)]
    pub disable: bool,

    /// Signature template overriding the config file
    #[arg(long, global = true)]
    pub text: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Prepend the signature to each file
    Sign {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the comment block for a file extension without touching any file
    Preview {
        /// Extension including the leading dot, e.g. `.rs`
        #[arg(short, long)]
        extension: String,

        /// Resolve placeholders at this local time (`YYYY-MM-DDTHH:MM:SS`)
        #[arg(long)]
        at: Option<NaiveDateTime>,
    },

    /// List the supported file extensions and their comment markers
    Extensions,

    /// Sign every file created under a directory until interrupted
    Watch {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Write a default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// `Some(true)` for `--enable`, `Some(false)` for `--disable`.
    pub fn enabled_override(&self) -> Option<bool> {
        match (self.enable, self.disable) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config.to_string_lossy())?;
        match &self.command {
            Command::Sign { files } => {
                for file in files {
                    validate_path("files", &file.to_string_lossy())?;
                }
                Ok(())
            }
            Command::Preview { extension, .. } => validate_extension("extension", extension),
            Command::Watch { dir } => validate_path("dir", &dir.to_string_lossy()),
            Command::Extensions | Command::InitConfig { .. } => Ok(()),
        }
    }
}

pub mod toml_config;

pub use toml_config::{AppConfig, StorageBackend};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "small-cart")]
#[command(about = "A terminal shopping cart with a persistent basket")]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the stored cart (overrides storage.path)
    #[arg(long)]
    pub storage_dir: Option<String>,

    /// Storage key of the cart (overrides storage.key)
    #[arg(long)]
    pub storage_key: Option<String>,

    /// Keep the cart in memory only
    #[arg(long)]
    pub memory: bool,

    /// Answer yes to confirmation prompts
    #[arg(short, long)]
    pub yes: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliArgs {
    /// Defaults, then the config file, then command-line overrides.
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };

        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(dir) = &self.storage_dir {
            config.storage.path = dir.clone();
            tracing::info!("🔧 Storage directory overridden to: {}", dir);
        }
        if let Some(key) = &self.storage_key {
            config.storage.key = key.clone();
        }
        if self.memory {
            config.storage.backend = StorageBackend::Memory;
        }
    }
}

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use engine::{Currency, DEFAULT_PAGE_SIZE};
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/sprout.toml";
const ENV_PREFIX: &str = "SPROUT";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub page_size: usize,
    pub currency: Currency,
    pub export_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub log_file: PathBuf,
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            currency: Currency::default(),
            export_dir: PathBuf::from("."),
            request_timeout_secs: 15,
            log_file: PathBuf::from("sprout.log"),
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(AppError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(AppError::InvalidConfig("base_url is empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Parser)]
#[command(name = "sprout", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:3000).
    #[arg(long)]
    base_url: Option<String>,
    /// Directory where exports are written.
    #[arg(long)]
    export_dir: Option<PathBuf>,
    /// Transactions per page.
    #[arg(long)]
    page_size: Option<usize>,
    /// Display currency code (USD, EUR).
    #[arg(long)]
    currency: Option<Currency>,
}

pub fn load() -> Result<AppConfig> {
    resolve(Args::parse())
}

fn resolve(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(export_dir) = args.export_dir {
        settings.export_dir = export_dir;
    }
    if let Some(page_size) = args.page_size {
        settings.page_size = page_size;
    }
    if let Some(currency) = args.currency {
        settings.currency = currency;
    }

    settings.validate()?;
    Ok(settings)
}

//! Runtime configuration.
//!
//! Values are layered, later sources winning:
//!   flightcal.toml   (optional, working directory)
//!   environment      (CAL_ID, CREDENTIALS_PATH, TOKEN_PATH; `.env` is loaded first if present)

use std::path::PathBuf;

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;

const CONFIG_FILE: &str = "flightcal";

fn default_credentials_path() -> PathBuf {
    PathBuf::from("credentials.json")
}

fn default_token_path() -> PathBuf {
    PathBuf::from("token.json")
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Calendar that receives the events (CAL_ID)
    #[serde(rename = "cal_id")]
    pub calendar_id: String,

    #[serde(default = "default_credentials_path")]
    pub credentials_path: PathBuf,

    #[serde(default = "default_token_path")]
    pub token_path: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        // A missing .env is fine, the variables may already be set
        check_dotenv(dotenvy::dotenv())?;

        let builder = config::Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::default());

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: Config = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration (is CAL_ID set?)")?;

        if config.calendar_id.trim().is_empty() {
            anyhow::bail!("CAL_ID must not be empty");
        }

        Ok(config)
    }
}

/// Accept a missing `.env`; anything else wrong with it is fatal.
fn check_dotenv<T>(result: std::result::Result<T, dotenvy::Error>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("Failed to load .env"),
    }
}

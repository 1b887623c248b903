use std::env;

use anyhow::{anyhow, Result};

const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the schedule backend, without a trailing slash.
    pub api_base: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_base = env::var("API")
            .map_err(|_| anyhow!("API must be set in the environment or .env file"))?;
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| anyhow!("PORT must be a number between 1 and 65535"))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            port,
        })
    }
}

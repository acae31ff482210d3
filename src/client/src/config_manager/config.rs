use anyhow::{Context, Result};
use config::Config as RConfig;
use serde::{Deserialize, Serialize};

const REQUEST_TIMEOUT_MS: u64 = 30_000;
const CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Transport settings for the outbound submission path. The request timeout
/// bounds how long a submission can block waiting on the remote endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub request_timeout_ms: u64,
    pub connect_timeout_ms: u64,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load_default_config() -> Result<Config> {
        let mut builder = RConfig::builder();

        // set defaults
        builder = builder
            .set_default("request_timeout_ms", REQUEST_TIMEOUT_MS)?
            .set_default("connect_timeout_ms", CONNECT_TIMEOUT_MS)?;

        let config: Config = builder
            .build()?
            .try_deserialize()
            .context("failed to parse relay config")?;

        Ok(config)
    }
}

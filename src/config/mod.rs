pub mod toml_config;

use crate::adapters::nominatim::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_socket_addr, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "city-distance")]
#[command(about = "HTTP service for city geocoding and great-circle distances")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: String,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub geocoder_endpoint: String,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    fn geocoder_endpoint(&self) -> &str {
        &self.geocoder_endpoint
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// Checks shared by every [`ConfigProvider`].
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_socket_addr("server.listen_addr", config.listen_addr())?;
    validate_url("geocoder.endpoint", config.geocoder_endpoint())?;
    validate_non_empty_string("geocoder.user_agent", config.user_agent())?;
    validate_range(
        "geocoder.timeout_seconds",
        config.request_timeout().as_secs(),
        1,
        MAX_TIMEOUT_SECONDS,
    )
}

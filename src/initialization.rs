use std::{env, fs};
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::logging::setup_logger;
use crate::manager_forecast::models::InsightThresholds;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct General {
    pub log_path: String,
    pub log_level: String,
}

#[derive(Deserialize, Debug)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize, Debug)]
pub struct Owm {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub general: General,
    pub web_server: WebServer,
    pub owm: Owm,
    #[serde(default)]
    pub insights: InsightThresholds,
}

/// Returns a configuration struct for the application and starts logging
///
/// The config file is given by the CONFIG_PATH environment variable and defaults to
/// config.toml in the working directory. An empty api key is taken from API_KEY.
pub fn config() -> Result<Config, ConfigError> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());

    let toml = fs::read_to_string(&config_path)
        .map_err(|e| ConfigError(format!("unable to read {}: {}", config_path, e)))?;
    let mut config = parse_config(&toml)?;

    if config.owm.api_key.is_empty() {
        config.owm.api_key = env::var("API_KEY").unwrap_or_default();
    }
    validate(&config)?;

    setup_logger(&config.general.log_path, &config.general.log_level)?;

    Ok(config)
}

fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(toml)?)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.owm.api_key.trim().is_empty() {
        return Err(ConfigError::from("no OpenWeather api key configured"));
    }

    let insights = &config.insights;
    if insights.comfort_low > insights.comfort_high {
        return Err(ConfigError(format!(
            "insights.comfort_low ({}) is above insights.comfort_high ({})",
            insights.comfort_low, insights.comfort_high
        )));
    }

    Ok(())
}

use std::fmt;
use std::fmt::Formatter;
use log4rs::config::runtime::ConfigErrors;
use log::SetLoggerError;
use crate::manager_forecast::errors::ForecastError;
use crate::manager_owm::errors::OWMError;

/// Error representing an unrecoverable error that will halt the application
///
#[derive(Debug)]
pub struct UnrecoverableError(pub String);
impl fmt::Display for UnrecoverableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "UnrecoverableError: {}", self.0)
    }
}
impl From<std::io::Error> for UnrecoverableError {
    fn from(e: std::io::Error) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<ConfigError> for UnrecoverableError {
    fn from(e: ConfigError) -> Self {
        UnrecoverableError(e.to_string())
    }
}
impl From<OWMError> for UnrecoverableError {
    fn from(e: OWMError) -> Self { UnrecoverableError(e.to_string()) }
}

/// Errors while managing configuration
///
#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<SetLoggerError> for ConfigError {
    fn from(e: SetLoggerError) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<ConfigErrors> for ConfigError {
    fn from(e: ConfigErrors) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}

/// Errors ending a dashboard request, each tied to the stage that failed
///
#[derive(Debug)]
pub enum DashboardError {
    BlankCity,
    Owm(OWMError),
    Forecast(ForecastError),
}

impl DashboardError {
    /// Name of the failing stage as shown to the user
    pub fn stage(&self) -> &'static str {
        match self {
            DashboardError::BlankCity => "input",
            DashboardError::Owm(OWMError::LocationNotFound(_)) => "location",
            DashboardError::Owm(_) => "fetch",
            DashboardError::Forecast(_) => "forecast",
        }
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::BlankCity => write!(f, "DashboardError: no city given"),
            DashboardError::Owm(e) => write!(f, "DashboardError: {}", e),
            DashboardError::Forecast(e) => write!(f, "DashboardError: {}", e),
        }
    }
}
impl From<OWMError> for DashboardError {
    fn from(e: OWMError) -> Self { DashboardError::Owm(e) }
}
impl From<ForecastError> for DashboardError {
    fn from(e: ForecastError) -> Self { DashboardError::Forecast(e) }
}

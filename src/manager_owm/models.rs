use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, TimestampSeconds};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoLocation {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWind {
    pub speed: f64,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct Sys {
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub sunrise: DateTime<Utc>,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub sunset: DateTime<Utc>,
}

/// Current conditions snapshot as returned by the weather endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub main: CurrentMain,
    pub wind: CurrentWind,
    /// Visibility in meters, not always reported
    pub visibility: Option<u32>,
    pub sys: Sys,
    /// Shift in seconds from UTC for the location
    #[serde(default)]
    pub timezone: i32,
}

/// Forecast document, the interval objects are kept loosely typed and left
/// for the forecast normalizer to validate one by one
#[derive(Debug, Clone, Deserialize)]
pub struct RawForecast {
    pub list: Vec<serde_json::Value>,
}

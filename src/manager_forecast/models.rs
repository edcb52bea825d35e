use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::manager_forecast::errors::MalformedRecord;

/// One normalized 3 hour forecast interval
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRecord {
    pub timestamp: NaiveDateTime,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub pressure: u32,
    pub cloud_coverage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub temp_min: f64,
    pub temp_max: f64,
    pub temp_mean: f64,
    pub humidity_mean: f64,
    pub wind_mean: f64,
    pub pressure_mean: f64,
    pub clouds_mean: f64,
    pub samples: usize,
}

/// A forecast record with a display label attached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyEntry {
    pub time: String,
    #[serde(flatten)]
    pub record: ForecastRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightSummary {
    pub latest_temp_max: f64,
    pub temp_trend_delta: f64,
    pub wind_mean: f64,
    pub wind_intensity_label: String,
    pub humidity_mean: f64,
    pub humidity_comfort_label: String,
    pub recommendation: String,
    pub daytime_duration_hours: i64,
}

/// Limits used when classifying insights
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightThresholds {
    /// Mean wind below this (m/s) is "Moderate", otherwise "Strong"
    pub wind_threshold: f64,
    /// Inclusive lower bound of the comfortable humidity band (%)
    pub comfort_low: f64,
    /// Inclusive upper bound of the comfortable humidity band (%)
    pub comfort_high: f64,
    /// Mean humidity above this (%) brings the umbrella advisory
    pub advisory_threshold: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            wind_threshold: 5.0,
            comfort_low: 40.0,
            comfort_high: 60.0,
            advisory_threshold: 70.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayMetrics {
    pub date: NaiveDate,
    pub temp_max: f64,
    pub temp_min: f64,
    pub humidity_mean: f64,
    pub wind_mean: f64,
}

/// First versus last day of the forecast window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayComparison {
    pub first: DayMetrics,
    pub last: DayMetrics,
}

/// Five number summary of all forecast temperatures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureDistribution {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Everything the pipeline derives from one forecast payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub records: Vec<ForecastRecord>,
    pub daily: Vec<DailySummary>,
    pub hourly: Vec<HourlyEntry>,
    pub insights: InsightSummary,
    pub comparison: DayComparison,
    pub distribution: TemperatureDistribution,
    pub skipped: Vec<MalformedRecord>,
}

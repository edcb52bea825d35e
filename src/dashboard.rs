use chrono::{DateTime, FixedOffset, Offset, Utc};
use log::{info, warn};
use serde::Serialize;
use crate::errors::DashboardError;
use crate::manager_forecast::analyze;
use crate::manager_forecast::models::{
    Analysis, DailySummary, DayComparison, ForecastRecord, HourlyEntry, InsightSummary,
    InsightThresholds, TemperatureDistribution,
};
use crate::manager_owm::models::{CurrentWeather, GeoLocation};
use crate::manager_owm::OWM;

/// Which optional parts of the dashboard to include
#[derive(Debug, Clone, Copy)]
pub struct DashboardOptions {
    pub hourly: bool,
    pub raw: bool,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        DashboardOptions { hourly: true, raw: false }
    }
}

#[derive(Debug, Serialize)]
pub struct CurrentConditions {
    pub description: String,
    pub icon_url: Option<String>,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub pressure: u32,
    pub visibility_km: Option<f64>,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    /// Sunrise as HH:MM in the location's own offset
    pub sunrise_label: String,
    pub sunset_label: String,
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub location: GeoLocation,
    pub current: CurrentConditions,
    pub daily: Vec<DailySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly: Option<Vec<HourlyEntry>>,
    pub insights: InsightSummary,
    pub comparison: DayComparison,
    pub distribution: TemperatureDistribution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Vec<ForecastRecord>>,
    pub skipped_records: usize,
    pub warnings: Vec<String>,
}

/// Builds the full dashboard for a city.
///
/// Geocoding, current conditions and forecast are fetched in that order, after which the
/// forecast is analyzed. The first failing stage ends the request.
///
/// # Arguments
///
/// * 'owm' - OpenWeather client
/// * 'city' - city name as typed by the user
/// * 'thresholds' - insight classification limits
/// * 'options' - optional dashboard parts
pub async fn dashboard(
    owm: &OWM,
    city: &str,
    thresholds: &InsightThresholds,
    options: DashboardOptions,
) -> Result<Dashboard, DashboardError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(DashboardError::BlankCity);
    }

    let location = owm.geocode(city).await?;
    info!("'{}' resolved to {}, {} ({}, {})", city, location.name, location.country, location.lat, location.lon);

    let current = owm.current_weather(&location).await?;
    let forecast = owm.forecast(&location).await?;

    let analysis = analyze(&forecast.list, current.sys.sunrise, current.sys.sunset, thresholds)?;

    Ok(assemble(location, &current, analysis, options))
}

/// Puts fetched and derived data together into a dashboard
///
/// # Arguments
///
/// * 'location' - geocoded location
/// * 'current' - current conditions
/// * 'analysis' - result of the forecast analysis
/// * 'options' - optional dashboard parts
fn assemble(location: GeoLocation, current: &CurrentWeather, analysis: Analysis, options: DashboardOptions) -> Dashboard {
    let warnings: Vec<String> = analysis.skipped.iter().map(|m| m.to_string()).collect();
    if !warnings.is_empty() {
        warn!("dashboard for {} built with {} skipped forecast intervals", location.name, warnings.len());
    }

    Dashboard {
        current: current_conditions(current),
        location,
        daily: analysis.daily,
        hourly: options.hourly.then_some(analysis.hourly),
        insights: analysis.insights,
        comparison: analysis.comparison,
        distribution: analysis.distribution,
        raw: options.raw.then_some(analysis.records),
        skipped_records: analysis.skipped.len(),
        warnings,
    }
}

fn current_conditions(current: &CurrentWeather) -> CurrentConditions {
    let offset = FixedOffset::east_opt(current.timezone).unwrap_or_else(|| Utc.fix());
    let condition = current.weather.first();

    CurrentConditions {
        description: condition.map(|c| title_case(&c.description)).unwrap_or_default(),
        icon_url: condition.map(|c| format!("https://openweathermap.org/img/wn/{}@2x.png", c.icon)),
        temperature: current.main.temp,
        feels_like: current.main.feels_like,
        humidity: current.main.humidity,
        wind_speed: current.wind.speed,
        pressure: current.main.pressure,
        visibility_km: current.visibility.map(|v| v as f64 / 1000.0),
        sunrise: current.sys.sunrise,
        sunset: current.sys.sunset,
        sunrise_label: current.sys.sunrise.with_timezone(&offset).format("%H:%M").to_string(),
        sunset_label: current.sys.sunset.with_timezone(&offset).format("%H:%M").to_string(),
    }
}

/// Upper cases the first letter of every word, "light rain" becomes "Light Rain"
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

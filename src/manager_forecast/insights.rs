use chrono::{DateTime, Utc};
use crate::manager_forecast::errors::ForecastError;
use crate::manager_forecast::models::{
    DailySummary, DayComparison, DayMetrics, ForecastRecord, InsightSummary, InsightThresholds,
    TemperatureDistribution,
};

const MODERATE_WIND: &str = "Moderate";
const STRONG_WIND: &str = "Strong";
const COMFORTABLE: &str = "Comfortable";
const UNCOMFORTABLE: &str = "Adjust expectations";
const UMBRELLA_ADVISORY: &str = "Take an umbrella - High humidity expected";
const ENJOY_ADVISORY: &str = "Enjoy the weather!";

/// Derives trend, wind, humidity and daylight insights from the daily summaries.
///
/// # Arguments
///
/// * 'daily' - daily summaries in ascending date order, must not be empty
/// * 'sunrise' - sunrise from the current conditions
/// * 'sunset' - sunset from the current conditions
/// * 'thresholds' - classification limits
pub fn derive_insights(
    daily: &[DailySummary],
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    thresholds: &InsightThresholds,
) -> Result<InsightSummary, ForecastError> {
    let (first, last) = match (daily.first(), daily.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ForecastError::EmptyForecast { skipped: 0 }),
    };

    let wind_mean = mean(daily.iter().map(|d| d.wind_mean));
    let humidity_mean = mean(daily.iter().map(|d| d.humidity_mean));

    let wind_intensity_label = if wind_mean < thresholds.wind_threshold {
        MODERATE_WIND
    } else {
        STRONG_WIND
    };

    let humidity_comfort_label =
        if humidity_mean >= thresholds.comfort_low && humidity_mean <= thresholds.comfort_high {
            COMFORTABLE
        } else {
            UNCOMFORTABLE
        };

    let recommendation = if humidity_mean > thresholds.advisory_threshold {
        UMBRELLA_ADVISORY
    } else {
        ENJOY_ADVISORY
    };

    Ok(InsightSummary {
        latest_temp_max: last.temp_max,
        temp_trend_delta: last.temp_max - first.temp_max,
        wind_mean,
        wind_intensity_label: wind_intensity_label.to_string(),
        humidity_mean,
        humidity_comfort_label: humidity_comfort_label.to_string(),
        recommendation: recommendation.to_string(),
        daytime_duration_hours: daytime_hours(sunrise, sunset),
    })
}

/// Whole hours of daylight. The difference is taken modulo one day, so a sunset
/// reported before the sunrise still gives a non-negative count.
fn daytime_hours(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> i64 {
    (sunset - sunrise).num_seconds().rem_euclid(86_400) / 3_600
}

/// Puts the first and the last day of the forecast side by side
///
/// # Arguments
///
/// * 'daily' - daily summaries in ascending date order, must not be empty
pub fn compare_days(daily: &[DailySummary]) -> Result<DayComparison, ForecastError> {
    match (daily.first(), daily.last()) {
        (Some(first), Some(last)) => Ok(DayComparison {
            first: day_metrics(first),
            last: day_metrics(last),
        }),
        _ => Err(ForecastError::EmptyForecast { skipped: 0 }),
    }
}

fn day_metrics(day: &DailySummary) -> DayMetrics {
    DayMetrics {
        date: day.date,
        temp_max: day.temp_max,
        temp_min: day.temp_min,
        humidity_mean: day.humidity_mean,
        wind_mean: day.wind_mean,
    }
}

/// Computes the five number summary of all forecast temperatures.
///
/// Quartiles use linear interpolation between the closest ranks.
///
/// # Arguments
///
/// * 'records' - normalized forecast records, must not be empty
pub fn temperature_distribution(records: &[ForecastRecord]) -> Result<TemperatureDistribution, ForecastError> {
    let mut temps: Vec<f64> = records.iter().map(|r| r.temperature).collect();
    if temps.is_empty() {
        return Err(ForecastError::EmptyForecast { skipped: 0 });
    }
    temps.sort_by(|a, b| a.total_cmp(b));

    Ok(TemperatureDistribution {
        min: temps[0],
        q1: quantile(&temps, 0.25),
        median: quantile(&temps, 0.5),
        q3: quantile(&temps, 0.75),
        max: temps[temps.len() - 1],
    })
}

fn quantile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;

    sorted[lower] + (sorted[upper] - sorted[lower]) * (pos - lower as f64)
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    sum / n as f64
}

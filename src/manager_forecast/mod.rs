pub mod errors;
pub mod models;
mod daily;
mod hourly;
mod insights;
mod normalize;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde_json::Value;
use crate::manager_forecast::errors::ForecastError;
use crate::manager_forecast::models::{Analysis, InsightThresholds};

use daily::aggregate_daily;
use hourly::select_hourly;
use insights::{compare_days, derive_insights, temperature_distribution};
use normalize::normalize;

/// Runs a raw forecast through normalization, daily aggregation, hourly selection and
/// insight derivation.
///
/// Malformed intervals are skipped, logged and returned in the analysis. If nothing
/// usable remains the whole forecast is rejected.
///
/// # Arguments
///
/// * 'raw' - the interval objects of a forecast document, in chronological order
/// * 'sunrise' - sunrise from the current conditions
/// * 'sunset' - sunset from the current conditions
/// * 'thresholds' - insight classification limits
pub fn analyze(
    raw: &[Value],
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    thresholds: &InsightThresholds,
) -> Result<Analysis, ForecastError> {
    let (records, skipped) = normalize(raw);

    if !skipped.is_empty() {
        warn!("skipped {} of {} forecast intervals", skipped.len(), raw.len());
        for m in &skipped {
            debug!("{}", m);
        }
    }

    if records.is_empty() {
        return Err(ForecastError::EmptyForecast { skipped: skipped.len() });
    }

    let daily = aggregate_daily(&records);
    let hourly = select_hourly(&records);
    let insights = derive_insights(&daily, sunrise, sunset, thresholds)?;
    let comparison = compare_days(&daily)?;
    let distribution = temperature_distribution(&records)?;

    Ok(Analysis {
        records,
        daily,
        hourly,
        insights,
        comparison,
        distribution,
        skipped,
    })
}

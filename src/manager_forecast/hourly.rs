use crate::manager_forecast::models::{ForecastRecord, HourlyEntry};

/// Number of intervals shown in the hourly breakdown
pub const HOURLY_ENTRIES: usize = 24;

/// Returns the first intervals of the forecast labelled with their time of day.
///
/// # Arguments
///
/// * 'records' - normalized forecast records in chronological order
pub fn select_hourly(records: &[ForecastRecord]) -> Vec<HourlyEntry> {
    records.iter()
        .take(HOURLY_ENTRIES)
        .map(|r| HourlyEntry {
            time: r.timestamp.format("%H:%M").to_string(),
            record: r.clone(),
        })
        .collect()
}

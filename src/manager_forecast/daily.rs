use std::collections::BTreeMap;
use chrono::NaiveDate;
use crate::manager_forecast::models::{DailySummary, ForecastRecord};

struct DayAccumulator {
    temp_min: f64,
    temp_max: f64,
    temp_sum: f64,
    humidity_sum: f64,
    wind_sum: f64,
    pressure_sum: f64,
    clouds_sum: f64,
    samples: usize,
}

impl DayAccumulator {
    fn new(record: &ForecastRecord) -> Self {
        DayAccumulator {
            temp_min: record.temperature,
            temp_max: record.temperature,
            temp_sum: 0.0,
            humidity_sum: 0.0,
            wind_sum: 0.0,
            pressure_sum: 0.0,
            clouds_sum: 0.0,
            samples: 0,
        }
    }

    fn add(&mut self, record: &ForecastRecord) {
        self.temp_min = self.temp_min.min(record.temperature);
        self.temp_max = self.temp_max.max(record.temperature);
        self.temp_sum += record.temperature;
        self.humidity_sum += record.humidity as f64;
        self.wind_sum += record.wind_speed;
        self.pressure_sum += record.pressure as f64;
        self.clouds_sum += record.cloud_coverage as f64;
        self.samples += 1;
    }

    fn summary(&self, date: NaiveDate) -> DailySummary {
        let n = self.samples as f64;

        DailySummary {
            date,
            temp_min: self.temp_min,
            temp_max: self.temp_max,
            // summation rounding may otherwise push the mean of equal values past them
            temp_mean: (self.temp_sum / n).clamp(self.temp_min, self.temp_max),
            humidity_mean: self.humidity_sum / n,
            wind_mean: self.wind_sum / n,
            pressure_mean: self.pressure_sum / n,
            clouds_mean: self.clouds_sum / n,
            samples: self.samples,
        }
    }
}

/// Groups forecast records per calendar date and summarizes each day.
///
/// The date is taken from the record timestamp as is, no timezone conversion is done.
/// Days are returned in ascending order and only days with at least one record exist.
///
/// # Arguments
///
/// * 'records' - normalized forecast records
pub fn aggregate_daily(records: &[ForecastRecord]) -> Vec<DailySummary> {
    let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();

    for record in records {
        days.entry(record.timestamp.date())
            .or_insert_with(|| DayAccumulator::new(record))
            .add(record);
    }

    days.iter()
        .map(|(date, acc)| acc.summary(*date))
        .collect()
}

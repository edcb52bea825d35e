use chrono::NaiveDateTime;
use serde_json::Value;
use crate::manager_forecast::errors::MalformedRecord;
use crate::manager_forecast::models::ForecastRecord;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Flattens raw forecast intervals into forecast records.
///
/// Intervals with a missing, null or out of range field are skipped and reported
/// back as malformed, the rest keep their original order.
///
/// # Arguments
///
/// * 'raw' - the `list` array of an OpenWeather forecast document
pub fn normalize(raw: &[Value]) -> (Vec<ForecastRecord>, Vec<MalformedRecord>) {
    let mut records = Vec::with_capacity(raw.len());
    let mut malformed = Vec::new();

    for (index, value) in raw.iter().enumerate() {
        match normalize_record(value) {
            Ok(record) => records.push(record),
            Err(fields) => malformed.push(MalformedRecord { index, fields }),
        }
    }

    (records, malformed)
}

fn normalize_record(value: &Value) -> Result<ForecastRecord, Vec<String>> {
    let mut bad: Vec<String> = Vec::new();

    let timestamp = extract(value, "dt_txt", &mut bad, |v| {
        v.as_str().and_then(|s| NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok())
    });
    let temperature = extract(value, "main.temp", &mut bad, Value::as_f64);
    let feels_like = extract(value, "main.feels_like", &mut bad, Value::as_f64);
    let humidity = extract(value, "main.humidity", &mut bad, percent);
    let pressure = extract(value, "main.pressure", &mut bad, |v| {
        whole(v).filter(|p| *p > 0).and_then(|p| u32::try_from(p).ok())
    });
    let wind_speed = extract(value, "wind.speed", &mut bad, |v| v.as_f64().filter(|s| *s >= 0.0));
    let cloud_coverage = extract(value, "clouds.all", &mut bad, percent);

    match (timestamp, temperature, feels_like, humidity, pressure, wind_speed, cloud_coverage) {
        (
            Some(timestamp),
            Some(temperature),
            Some(feels_like),
            Some(humidity),
            Some(pressure),
            Some(wind_speed),
            Some(cloud_coverage),
        ) => Ok(ForecastRecord {
            timestamp,
            temperature,
            feels_like,
            humidity,
            wind_speed,
            pressure,
            cloud_coverage,
        }),
        _ => Err(bad),
    }
}

/// Looks up a dotted path and converts it, noting the path in `bad` on failure
///
/// # Arguments
///
/// * 'value' - raw interval object
/// * 'path' - dotted path, e.g. "main.temp"
/// * 'bad' - collects "<path> missing" or "<path> invalid"
/// * 'convert' - conversion and range check
fn extract<T>(value: &Value, path: &str, bad: &mut Vec<String>, convert: impl Fn(&Value) -> Option<T>) -> Option<T> {
    let pointer = format!("/{}", path.replace('.', "/"));

    match value.pointer(&pointer) {
        None | Some(Value::Null) => {
            bad.push(format!("{} missing", path));
            None
        }
        Some(v) => {
            let converted = convert(v);
            if converted.is_none() {
                bad.push(format!("{} invalid", path));
            }
            converted
        }
    }
}

fn percent(v: &Value) -> Option<u8> {
    whole(v).filter(|p| *p <= 100).map(|p| p as u8)
}

/// Non-negative integer, also when written as a float with no fraction, e.g. 55.0
fn whole(v: &Value) -> Option<u64> {
    v.as_u64().or_else(|| {
        v.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64)
            .map(|f| f as u64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn interval(dt_txt: &str, temp: f64, humidity: u64) -> Value {
        json!({
            "dt": 1705320000,
            "dt_txt": dt_txt,
            "main": {"temp": temp, "feels_like": temp - 1.5, "humidity": humidity, "pressure": 1012},
            "wind": {"speed": 3.2, "deg": 240},
            "clouds": {"all": 75},
            "weather": [{"description": "broken clouds"}]
        })
    }

    #[test]
    fn flattens_nested_fields() {
        let (records, malformed) = normalize(&[interval("2024-01-15 12:00:00", 5.5, 80)]);

        assert!(malformed.is_empty());
        let r = &records[0];
        assert_eq!(r.timestamp.to_string(), "2024-01-15 12:00:00");
        assert_eq!(r.temperature, 5.5);
        assert_eq!(r.feels_like, 4.0);
        assert_eq!(r.humidity, 80);
        assert_eq!(r.pressure, 1012);
        assert_eq!(r.wind_speed, 3.2);
        assert_eq!(r.cloud_coverage, 75);
    }

    #[test]
    fn integer_temperatures_are_accepted() {
        let mut raw = interval("2024-01-15 12:00:00", 0.0, 50);
        raw["main"]["temp"] = json!(7);

        let (records, _) = normalize(&[raw]);
        assert_eq!(records[0].temperature, 7.0);
    }

    #[test]
    fn missing_humidity_skips_only_that_record() {
        let mut broken = interval("2024-01-15 15:00:00", 6.0, 70);
        broken["main"].as_object_mut().unwrap().remove("humidity");
        let raw = vec![
            interval("2024-01-15 12:00:00", 5.0, 60),
            broken,
            interval("2024-01-15 18:00:00", 4.0, 90),
        ];

        let (records, malformed) = normalize(&raw);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp.to_string(), "2024-01-15 12:00:00");
        assert_eq!(records[1].timestamp.to_string(), "2024-01-15 18:00:00");
        assert_eq!(malformed, vec![MalformedRecord { index: 1, fields: vec!["main.humidity missing".to_string()] }]);
    }

    #[test]
    fn null_and_missing_sections_are_reported() {
        let raw = json!({
            "dt_txt": "2024-01-15 12:00:00",
            "main": {"temp": null, "feels_like": 3.0, "humidity": 50, "pressure": 1000},
            "clouds": {"all": 10}
        });

        let (records, malformed) = normalize(&[raw]);

        assert!(records.is_empty());
        assert_eq!(malformed[0].fields, vec!["main.temp missing", "wind.speed missing"]);
    }

    #[test]
    fn out_of_range_values_are_invalid() {
        let mut raw = interval("2024-01-15 12:00:00", 5.0, 101);
        raw["wind"]["speed"] = json!(-1.0);
        raw["main"]["pressure"] = json!(0);
        raw["clouds"]["all"] = json!("many");

        let (records, malformed) = normalize(&[raw]);

        assert!(records.is_empty());
        assert_eq!(
            malformed[0].fields,
            vec!["main.humidity invalid", "main.pressure invalid", "wind.speed invalid", "clouds.all invalid"]
        );
    }

    #[test]
    fn whole_floats_are_accepted_as_integers() {
        let mut raw = interval("2024-01-15 12:00:00", 5.0, 0);
        raw["main"]["humidity"] = json!(55.0);
        raw["main"]["pressure"] = json!(1013.0);
        raw["clouds"]["all"] = json!(40.0);

        let (records, malformed) = normalize(&[raw]);

        assert!(malformed.is_empty());
        assert_eq!(records[0].humidity, 55);
        assert_eq!(records[0].pressure, 1013);
        assert_eq!(records[0].cloud_coverage, 40);
    }

    #[test]
    fn fractional_percentages_are_invalid() {
        let mut raw = interval("2024-01-15 12:00:00", 5.0, 0);
        raw["main"]["humidity"] = json!(55.5);

        let (records, malformed) = normalize(&[raw]);

        assert!(records.is_empty());
        assert_eq!(malformed[0].fields, vec!["main.humidity invalid"]);
    }

    #[test]
    fn unparsable_timestamp_is_invalid() {
        let raw = interval("15/01/2024 12:00", 5.0, 50);

        let (records, malformed) = normalize(&[raw]);

        assert!(records.is_empty());
        assert_eq!(malformed[0].fields, vec!["dt_txt invalid"]);
    }

    #[test]
    fn empty_list_gives_nothing() {
        let (records, malformed) = normalize(&[]);
        assert!(records.is_empty());
        assert!(malformed.is_empty());
    }
}

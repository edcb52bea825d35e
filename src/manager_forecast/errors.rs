use std::fmt;
use serde::Serialize;

#[derive(Debug, PartialEq)]
pub enum ForecastError {
    /// No usable interval was left after normalization
    EmptyForecast { skipped: usize },
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ForecastError::EmptyForecast { skipped } => {
                write!(f, "ForecastError::EmptyForecast: no usable forecast intervals ({} skipped as malformed)", skipped)
            }
        }
    }
}

/// A forecast interval that could not be normalized, carried as a warning
/// rather than an error since the remaining intervals are still usable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MalformedRecord {
    /// Position in the raw forecast list
    pub index: usize,
    /// Missing or invalid fields, as dotted paths into the raw object
    pub fields: Vec<String>,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MalformedRecord: interval {} skipped, bad fields: {}", self.index, self.fields.join(", "))
    }
}

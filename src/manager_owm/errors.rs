use std::fmt;

#[derive(Debug)]
pub enum OWMError {
    LocationNotFound(String),
    Fetch(String),
    Document(String),
}

impl fmt::Display for OWMError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OWMError::LocationNotFound(city) => write!(f, "OWMError::LocationNotFound: city '{}' not found", city),
            OWMError::Fetch(e) => write!(f, "OWMError::Fetch: {}", e),
            OWMError::Document(e) => write!(f, "OWMError::Document: {}", e),
        }
    }
}
impl From<reqwest::Error> for OWMError {
    fn from(e: reqwest::Error) -> Self {
        OWMError::Fetch(e.to_string())
    }
}
impl From<serde_json::Error> for OWMError {
    fn from(e: serde_json::Error) -> Self {
        OWMError::Document(e.to_string())
    }
}

pub mod errors;
pub mod models;

use std::time::Duration;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use crate::manager_owm::errors::OWMError;
use crate::manager_owm::models::{CurrentWeather, GeoLocation, RawForecast};


/// Struct for fetching locations, current conditions and forecasts from OpenWeather
pub struct OWM {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OWM {
    /// Returns an OWM struct ready for fetching weather data from OpenWeather
    ///
    /// All requests ask for metric units.
    ///
    /// # Arguments
    ///
    /// * 'api_key' - OpenWeather api key
    /// * 'base_url' - scheme and host of the api, e.g. https://api.openweathermap.org
    /// * 'timeout_secs' - request timeout in seconds
    pub fn new(api_key: &str, base_url: &str, timeout_secs: u64) -> Result<OWM, OWMError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolves a city name to its first geocoding match
    ///
    /// # Arguments
    ///
    /// * 'city' - free text city name, e.g. "London" or "Paris,FR"
    pub async fn geocode(&self, city: &str) -> Result<GeoLocation, OWMError> {
        let matches: Vec<GeoLocation> = self
            .get_json("/geo/1.0/direct", &[("q", city.to_string()), ("limit", "1".to_string())])
            .await?;

        matches
            .into_iter()
            .next()
            .ok_or_else(|| OWMError::LocationNotFound(city.to_string()))
    }

    /// Retrieves current conditions for a location
    ///
    /// # Arguments
    ///
    /// * 'location' - a location as returned from geocode
    pub async fn current_weather(&self, location: &GeoLocation) -> Result<CurrentWeather, OWMError> {
        self.get_json("/data/2.5/weather", &Self::coordinates(location)).await
    }

    /// Retrieves the 5 day forecast in 3 hour intervals for a location
    ///
    /// # Arguments
    ///
    /// * 'location' - a location as returned from geocode
    pub async fn forecast(&self, location: &GeoLocation) -> Result<RawForecast, OWMError> {
        self.get_json("/data/2.5/forecast", &Self::coordinates(location)).await
    }

    fn coordinates(location: &GeoLocation) -> [(&'static str, String); 3] {
        [
            ("lat", location.lat.to_string()),
            ("lon", location.lon.to_string()),
            ("units", "metric".to_string()),
        ]
    }

    /// Makes a GET request and parses the body as json
    ///
    /// # Arguments
    ///
    /// * 'path' - path relative to the base url
    /// * 'query' - query parameters, the api key is added here
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, OWMError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("requesting {}", url);

        let req = self.client
            .get(url)
            .query(query)
            .query(&[("appid", &self.api_key)])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(OWMError::Fetch(format!("Error while fetching {} from OpenWeather: {}", path, status)));
        }

        let json = req.text().await?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn london() -> GeoLocation {
        GeoLocation {
            name: "London".to_string(),
            country: "GB".to_string(),
            state: Some("England".to_string()),
            lat: 51.5073,
            lon: -0.1276,
        }
    }

    async fn owm_for(server: &MockServer) -> OWM {
        OWM::new("secret", &server.uri(), 5).unwrap()
    }

    #[tokio::test]
    async fn geocode_returns_first_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .and(query_param("q", "London"))
            .and(query_param("limit", "1"))
            .and(query_param("appid", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "London", "country": "GB", "state": "England", "lat": 51.5073, "lon": -0.1276}
            ])))
            .mount(&server)
            .await;

        let location = owm_for(&server).await.geocode("London").await.unwrap();
        assert_eq!(location.name, "London");
        assert_eq!(location.country, "GB");
        assert!((location.lat - 51.5073).abs() < 1e-9);
    }

    #[tokio::test]
    async fn geocode_empty_result_is_location_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let result = owm_for(&server).await.geocode("Atlantis").await;
        assert!(matches!(result, Err(OWMError::LocationNotFound(c)) if c == "Atlantis"));
    }

    #[tokio::test]
    async fn server_error_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = owm_for(&server).await.current_weather(&london()).await;
        assert!(matches!(result, Err(OWMError::Fetch(_))));
    }

    #[tokio::test]
    async fn garbage_body_is_document_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = owm_for(&server).await.forecast(&london()).await;
        assert!(matches!(result, Err(OWMError::Document(_))));
    }

    #[tokio::test]
    async fn current_weather_parses_sun_times() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "weather": [{"description": "light rain", "icon": "10d"}],
                "main": {"temp": 12.3, "feels_like": 11.0, "humidity": 81, "pressure": 1009},
                "wind": {"speed": 4.1},
                "visibility": 10000,
                "sys": {"sunrise": 1700000000, "sunset": 1700030000},
                "timezone": 0
            })))
            .mount(&server)
            .await;

        let current = owm_for(&server).await.current_weather(&london()).await.unwrap();
        assert_eq!(current.weather[0].icon, "10d");
        assert_eq!(current.main.humidity, 81);
        assert_eq!(current.sys.sunrise.timestamp(), 1700000000);
        assert_eq!((current.sys.sunset - current.sys.sunrise).num_seconds(), 30000);
    }

    #[tokio::test]
    async fn forecast_keeps_intervals_untyped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "cnt": 2,
                "list": [
                    {"dt_txt": "2024-01-15 12:00:00", "main": {"temp": 5.0}},
                    {"something": "else"}
                ]
            })))
            .mount(&server)
            .await;

        let forecast = owm_for(&server).await.forecast(&london()).await.unwrap();
        assert_eq!(forecast.list.len(), 2);
    }
}

//! Reverse geocoding via a Nominatim-compatible endpoint.

use crate::core::workflow::ReverseGeocoder;
use crate::errors::{AppError, AppResult};
use crate::models::record::GeoPoint;
use reqwest::header::{HeaderValue, USER_AGENT};

pub struct NominatimClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl ReverseGeocoder for NominatimClient {
    fn resolve(&self, point: &GeoPoint) -> AppResult<String> {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}&zoom=18&addressdetails=1",
            self.endpoint.trim_end_matches('/'),
            point.latitude,
            point.longitude
        );

        // Nominatim's usage policy requires an identifying User-Agent.
        let res = self
            .client
            .get(&url)
            .header(
                USER_AGENT,
                HeaderValue::from_static(concat!("pointage/", env!("CARGO_PKG_VERSION"))),
            )
            .send()
            .map_err(|e| AppError::Geocode(e.to_string()))?;

        if !res.status().is_success() {
            return Err(AppError::Geocode(format!(
                "reverse geocode failed with status {}",
                res.status()
            )));
        }

        let body: serde_json::Value = res.json().map_err(|e| AppError::Geocode(e.to_string()))?;

        // A response without display_name counts as a miss, the caller
        // keeps its placeholder label.
        body.get("display_name")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::Geocode("response has no display_name".to_string()))
    }
}

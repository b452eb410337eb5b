//! Public IP lookup against an ipify-style endpoint.

use crate::core::workflow::IdentityProvider;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct IpResponse {
    ip: String,
}

pub struct IpifyClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl IpifyClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl IdentityProvider for IpifyClient {
    fn public_ip(&self) -> AppResult<String> {
        let res = self
            .client
            .get(&self.endpoint)
            .send()
            .map_err(|e| AppError::Identity(e.to_string()))?;

        if !res.status().is_success() {
            return Err(AppError::Identity(format!(
                "lookup failed with status {}",
                res.status()
            )));
        }

        let body: IpResponse = res.json().map_err(|e| AppError::Identity(e.to_string()))?;
        Ok(body.ip)
    }
}

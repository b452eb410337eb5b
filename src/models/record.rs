use super::{day_token::DayToken, direction::Direction};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Shown whenever geolocation or reverse geocoding did not produce a label.
pub const ADDRESS_UNAVAILABLE: &str = "Adresse non disponible";

/// A pair of GPS coordinates obtained from the device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One stored punch, immutable after creation.
///
/// The serialized field names and layout are the persisted wire format
/// (`latitude`/`longitude` are `null` when the position was unavailable),
/// so renaming anything here breaks every already-stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockRecord {
    pub ip: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    pub address: String,
    pub timestamp: DateTime<Local>,
    #[serde(rename = "type")]
    pub direction: Direction,
    pub token: DayToken,
}

impl ClockRecord {
    /// Build a fresh record stamped with the current local time.
    /// The coordinate pair goes in as a single optional value so the two
    /// fields can never disagree about whether a position was captured.
    pub fn new(
        ip: String,
        position: Option<GeoPoint>,
        address: String,
        direction: Direction,
        token: DayToken,
    ) -> Self {
        Self {
            ip,
            latitude: position.map(|p| p.latitude),
            longitude: position.map(|p| p.longitude),
            address,
            timestamp: Local::now(),
            direction,
            token,
        }
    }

    /// The captured position, if any.
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }

    /// Storage key of this record: the natural key
    /// (day token, direction, device IP).
    pub fn storage_key(&self) -> String {
        record_key(&self.token, self.direction, &self.ip)
    }

    pub fn date_str(&self) -> String {
        self.timestamp.format("%d/%m/%Y").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Deterministic key derivation for the record store.
/// Layout `pointage-<token>-<direction>-<ip>` is the persisted convention
/// the admin view enumerates by prefix; it must stay stable.
pub fn record_key(token: &DayToken, direction: Direction, ip: &str) -> String {
    format!("pointage-{}-{}-{}", token, direction.as_str(), ip)
}

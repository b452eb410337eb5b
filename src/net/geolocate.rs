//! Device position source.
//!
//! A CLI host has no GPS, so the position collaborator reads the fixed
//! coordinates configured for the device (e.g. the kiosk at the entrance).
//! When none are configured the lookup fails, which the workflow treats
//! exactly like a browser user denying geolocation.

use crate::core::workflow::Locator;
use crate::errors::{AppError, AppResult};
use crate::models::record::GeoPoint;

pub struct ConfiguredLocator {
    position: Option<GeoPoint>,
}

impl ConfiguredLocator {
    pub fn new(position: Option<GeoPoint>) -> Self {
        Self { position }
    }
}

impl Locator for ConfiguredLocator {
    fn locate(&self) -> AppResult<GeoPoint> {
        self.position
            .ok_or_else(|| AppError::Geolocation("no device position configured".to_string()))
    }
}

//! The clock-in workflow: everything that happens between a scan and a
//! stored record.
//!
//! One scan runs strictly in order: validate the token and direction,
//! resolve the device's public IP, check the store for an existing record
//! under the natural key, then capture position and address and persist.
//! Validation and identity failures are terminal; position and address
//! lookups degrade silently to "no coordinates" / placeholder label.

use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::day_token::DayToken;
use crate::models::direction::Direction;
use crate::models::record::{ADDRESS_UNAVAILABLE, ClockRecord, GeoPoint, record_key};

/// Public IP lookup collaborator (ipify-style service).
pub trait IdentityProvider {
    fn public_ip(&self) -> AppResult<String>;
}

/// Device position collaborator. Denial or unavailability is an `Err`,
/// which the workflow always recovers from.
pub trait Locator {
    fn locate(&self) -> AppResult<GeoPoint>;
}

/// Coordinates → human-readable address collaborator.
pub trait ReverseGeocoder {
    fn resolve(&self, point: &GeoPoint) -> AppResult<String>;
}

/// Terminal state of a successful workflow run.
#[derive(Debug)]
pub enum ScanOutcome {
    /// A new record was created and persisted.
    Recorded(ClockRecord),
    /// This device already punched this direction today; the existing
    /// record is surfaced untouched.
    AlreadyRecorded(ClockRecord),
}

impl ScanOutcome {
    pub fn record(&self) -> &ClockRecord {
        match self {
            ScanOutcome::Recorded(r) | ScanOutcome::AlreadyRecorded(r) => r,
        }
    }
}

pub struct ClockInWorkflow<'a, I, L, G> {
    store: &'a RecordStore<'a>,
    identity: &'a I,
    locator: &'a L,
    geocoder: &'a G,
}

impl<'a, I, L, G> ClockInWorkflow<'a, I, L, G>
where
    I: IdentityProvider,
    L: Locator,
    G: ReverseGeocoder,
{
    pub fn new(store: &'a RecordStore<'a>, identity: &'a I, locator: &'a L, geocoder: &'a G) -> Self {
        Self {
            store,
            identity,
            locator,
            geocoder,
        }
    }

    /// Run one scan attempt end to end.
    pub fn run(&self, token: &str, direction: &str) -> AppResult<ScanOutcome> {
        // Validating
        let direction = Direction::from_param(direction)
            .ok_or_else(|| AppError::InvalidDirection(direction.to_string()))?;
        let token =
            DayToken::parse(token).ok_or_else(|| AppError::InvalidToken(token.to_string()))?;

        // ResolvingIdentity: terminal on failure, no retry
        let ip = self.identity.public_ip()?;

        // CheckingExisting
        let key = record_key(&token, direction, &ip);
        if let Some(existing) = self.store.get(&key)? {
            return Ok(ScanOutcome::AlreadyRecorded(existing));
        }

        // Recording: position and address are best-effort
        let position = self.locator.locate().ok();
        let address = match &position {
            Some(point) => self
                .geocoder
                .resolve(point)
                .unwrap_or_else(|_| ADDRESS_UNAVAILABLE.to_string()),
            None => ADDRESS_UNAVAILABLE.to_string(),
        };

        let record = ClockRecord::new(ip, position, address, direction, token);
        self.store.insert(&key, &record)?;

        Ok(ScanOutcome::Recorded(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use rusqlite::Connection;

    struct FixedIp(&'static str);
    impl IdentityProvider for FixedIp {
        fn public_ip(&self) -> AppResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct NoIp;
    impl IdentityProvider for NoIp {
        fn public_ip(&self) -> AppResult<String> {
            Err(AppError::Identity("lookup unreachable".into()))
        }
    }

    struct Denied;
    impl Locator for Denied {
        fn locate(&self) -> AppResult<GeoPoint> {
            Err(AppError::Geolocation("denied".into()))
        }
    }

    struct FixedPosition;
    impl Locator for FixedPosition {
        fn locate(&self) -> AppResult<GeoPoint> {
            Ok(GeoPoint {
                latitude: 48.8901,
                longitude: 2.4509,
            })
        }
    }

    struct FixedAddress(&'static str);
    impl ReverseGeocoder for FixedAddress {
        fn resolve(&self, _point: &GeoPoint) -> AppResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct GeocodeDown;
    impl ReverseGeocoder for GeocodeDown {
        fn resolve(&self, _point: &GeoPoint) -> AppResult<String> {
            Err(AppError::Geocode("service unavailable".into()))
        }
    }

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().expect("open in-memory db");
        init_db(&conn).expect("init schema");
        conn
    }

    #[test]
    fn geolocation_denial_degrades_to_placeholder() {
        let conn = test_conn();
        let store = RecordStore::new(&conn);
        let (identity, locator, geocoder) = (FixedIp("203.0.113.5"), Denied, GeocodeDown);
        let wf = ClockInWorkflow::new(&store, &identity, &locator, &geocoder);

        let outcome = wf.run("QR-2024-06-21", "entree").expect("workflow runs");
        let rec = match outcome {
            ScanOutcome::Recorded(r) => r,
            other => panic!("expected Recorded, got {:?}", other),
        };
        assert_eq!(rec.ip, "203.0.113.5");
        assert!(rec.position().is_none());
        assert_eq!(rec.address, ADDRESS_UNAVAILABLE);
        assert_eq!(rec.direction, Direction::Entree);
    }

    #[test]
    fn second_scan_reports_already_recorded_and_keeps_first_timestamp() {
        let conn = test_conn();
        let store = RecordStore::new(&conn);
        let identity = FixedIp("203.0.113.5");
        let locator = FixedPosition;
        let geocoder = FixedAddress("1 Rue Saint-Denis, Noisy-le-Sec");
        let wf = ClockInWorkflow::new(&store, &identity, &locator, &geocoder);

        let first = wf.run("QR-2024-06-21", "entree").unwrap();
        let first_ts = first.record().timestamp;

        let second = wf.run("QR-2024-06-21", "entree").unwrap();
        match second {
            ScanOutcome::AlreadyRecorded(r) => assert_eq!(r.timestamp, first_ts),
            other => panic!("expected AlreadyRecorded, got {:?}", other),
        }

        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn same_device_can_punch_both_directions() {
        let conn = test_conn();
        let store = RecordStore::new(&conn);
        let (identity, locator, geocoder) = (FixedIp("203.0.113.5"), Denied, GeocodeDown);
        let wf = ClockInWorkflow::new(&store, &identity, &locator, &geocoder);

        wf.run("QR-2024-06-21", "entree").unwrap();
        let outcome = wf.run("QR-2024-06-21", "sortie").unwrap();
        assert!(matches!(outcome, ScanOutcome::Recorded(_)));
        assert_eq!(store.list_all().unwrap().len(), 2);
    }

    #[test]
    fn invalid_direction_writes_nothing() {
        let conn = test_conn();
        let store = RecordStore::new(&conn);
        let (identity, locator, geocoder) = (FixedIp("203.0.113.5"), Denied, GeocodeDown);
        let wf = ClockInWorkflow::new(&store, &identity, &locator, &geocoder);

        let err = wf.run("QR-2024-06-21", "depart").unwrap_err();
        assert!(matches!(err, AppError::InvalidDirection(_)));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn invalid_token_writes_nothing() {
        let conn = test_conn();
        let store = RecordStore::new(&conn);
        let (identity, locator, geocoder) = (FixedIp("203.0.113.5"), Denied, GeocodeDown);
        let wf = ClockInWorkflow::new(&store, &identity, &locator, &geocoder);

        let err = wf.run("QR-2024-13-40", "entree").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(_)));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn identity_failure_is_terminal() {
        let conn = test_conn();
        let store = RecordStore::new(&conn);
        let (identity, locator, geocoder) = (NoIp, FixedPosition, FixedAddress("x"));
        let wf = ClockInWorkflow::new(&store, &identity, &locator, &geocoder);

        let err = wf.run("QR-2024-06-21", "entree").unwrap_err();
        assert!(matches!(err, AppError::Identity(_)));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn geocode_failure_keeps_coordinates_but_placeholder_label() {
        let conn = test_conn();
        let store = RecordStore::new(&conn);
        let (identity, locator, geocoder) = (FixedIp("198.51.100.7"), FixedPosition, GeocodeDown);
        let wf = ClockInWorkflow::new(&store, &identity, &locator, &geocoder);

        let outcome = wf.run("QR-2024-06-21", "sortie").unwrap();
        let rec = outcome.record();
        assert!(rec.position().is_some());
        assert_eq!(rec.address, ADDRESS_UNAVAILABLE);
    }
}

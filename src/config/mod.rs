use crate::models::record::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Origin prepended to the scan path when building the QR payload.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_ip_endpoint")]
    pub ip_endpoint: String,
    #[serde(default = "default_geocode_endpoint")]
    pub geocode_endpoint: String,
    /// Fixed device position; both must be set for scans to carry GPS data.
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// QR regeneration period. Keep at or below 60 so the direction flips
    /// within a minute of the schedule boundary.
    #[serde(default = "default_qr_refresh_secs")]
    pub qr_refresh_secs: u64,
    #[serde(default = "default_records_refresh_secs")]
    pub records_refresh_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_ip_endpoint() -> String {
    "https://api.ipify.org?format=json".to_string()
}
fn default_geocode_endpoint() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}
fn default_qr_refresh_secs() -> u64 {
    60
}
fn default_records_refresh_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            base_url: default_base_url(),
            ip_endpoint: default_ip_endpoint(),
            geocode_endpoint: default_geocode_endpoint(),
            latitude: None,
            longitude: None,
            qr_refresh_secs: default_qr_refresh_secs(),
            records_refresh_secs: default_records_refresh_secs(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pointage")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".pointage")
        }
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pointage.conf")
    }

    /// Full path of the SQLite database.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("pointage.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration directory and file.
    /// `is_test` skips writing the config file so test runs never touch
    /// the user's real configuration.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(())
    }

    /// The configured device position, if both coordinates are present.
    pub fn device_position(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/p.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/p.sqlite");
        assert_eq!(cfg.qr_refresh_secs, 60);
        assert_eq!(cfg.records_refresh_secs, 30);
        assert!(cfg.device_position().is_none());
        assert!(cfg.ip_endpoint.contains("ipify"));
    }

    #[test]
    fn position_requires_both_coordinates() {
        let cfg: Config =
            serde_yaml::from_str("database: x\nlatitude: 48.89\n").unwrap();
        assert!(cfg.device_position().is_none());

        let cfg: Config =
            serde_yaml::from_str("database: x\nlatitude: 48.89\nlongitude: 2.45\n").unwrap();
        let p = cfg.device_position().unwrap();
        assert_eq!(p.longitude, 2.45);
    }
}

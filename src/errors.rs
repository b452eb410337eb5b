//! Unified application error type.
//! All modules (db, core, net, cli) return AppError to keep error handling
//! consistent across the crate.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Scan validation (terminal, user-visible)
    // ---------------------------
    #[error("Format de token invalide: {0}")]
    InvalidToken(String),

    #[error("Type de pointage invalide: {0}")]
    InvalidDirection(String),

    // ---------------------------
    // External collaborators
    // ---------------------------
    /// Public IP lookup failed. Terminal: without a device identifier
    /// there is no natural key to record under.
    #[error("Echec de la recherche d'adresse IP: {0}")]
    Identity(String),

    /// Device position unavailable or denied. Always recovered by the
    /// workflow, never shown to the user.
    #[error("Geolocation unavailable: {0}")]
    Geolocation(String),

    /// Reverse geocoding failed. Recovered, the placeholder label stays.
    #[error("Reverse geocoding failed: {0}")]
    Geocode(String),

    // ---------------------------
    // Storage read path
    // ---------------------------
    #[error("Corrupt record under key '{key}': {reason}")]
    StorageRead { key: String, reason: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

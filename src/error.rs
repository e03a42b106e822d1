//! Error types for tplink-archer
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ArcherError
pub type Result<T> = std::result::Result<T, ArcherError>;

/// Unified error type for router operations
#[derive(Debug, Error)]
pub enum ArcherError {
    // -------------------------------------------------------------------------
    // Session Errors
    // -------------------------------------------------------------------------
    /// Login handshake exhausted, or a request issued before logging in
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The router answered an authenticated request with a non-200 status
    #[error("Request to {path} failed with HTTP status {status}")]
    Request { path: String, status: u16 },

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("No DHCP lease found for address {0}")]
    LeaseNotFound(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

//! Connection failure capture and diagnostic rendering
//!
//! Every failed connection attempt collapses into a single error kind,
//! [`ConnectError`], carrying the three fields reported by the server or the
//! transport layer: a human-readable message, the SQLSTATE classification and
//! the vendor-specific numeric code.

use sqlx::mysql::MySqlDatabaseError;
use thiserror::Error;

/// SQLSTATE reported when the server cannot be reached at the transport level
pub const STATE_COMMUNICATION_FAILURE: &str = "08S01";

/// Catch-all SQLSTATE for failures without a server-assigned state
pub const STATE_GENERAL_ERROR: &str = "HY000";

/// A failed connection attempt
///
/// Exactly one of these is produced per attempt; the classification carried by
/// the SQLSTATE is preserved, so authentication failures (class `28`) remain
/// distinguishable from network failures (class `08`).
#[derive(Debug, Clone, Error)]
#[error("{message} (SQLState: {state}, vendor code: {vendor_code})")]
pub struct ConnectError {
    message: String,
    state: String,
    vendor_code: u32,
}

impl ConnectError {
    /// Create a connection error from its three diagnostic fields
    #[must_use]
    pub const fn new(message: String, state: String, vendor_code: u32) -> Self {
        Self {
            message,
            state,
            vendor_code,
        }
    }

    /// Human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// SQLSTATE classification, e.g. `28000` or `08S01`
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Vendor-specific numeric error code, `0` for client-side failures
    #[must_use]
    pub const fn vendor_code(&self) -> u32 {
        self.vendor_code
    }

    /// True when the server rejected the credentials (SQLSTATE class `28`)
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        self.state.starts_with("28")
    }

    /// True when the server could not be reached (SQLSTATE class `08`)
    #[must_use]
    pub fn is_communication_failure(&self) -> bool {
        self.state.starts_with("08")
    }

    /// Render the three diagnostic lines written to standard output when a
    /// connection attempt fails
    #[must_use]
    pub fn diagnostics(&self) -> String {
        format!(
            "SQLException: {}\nSQLState: {}\nVendorError: {}\n",
            self.message, self.state, self.vendor_code
        )
    }
}

impl From<sqlx::Error> for ConnectError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => {
                let state = db
                    .code()
                    .map_or_else(|| STATE_GENERAL_ERROR.to_string(), |code| code.into_owned());
                let vendor_code = db
                    .try_downcast_ref::<MySqlDatabaseError>()
                    .map_or(0, |mysql| u32::from(mysql.number()));

                Self::new(db.message().to_string(), state, vendor_code)
            }
            sqlx::Error::Io(io) => Self::new(
                format!("communications link failure: {io}"),
                STATE_COMMUNICATION_FAILURE.to_string(),
                0,
            ),
            sqlx::Error::Tls(tls) => Self::new(
                format!("TLS negotiation failed: {tls}"),
                STATE_COMMUNICATION_FAILURE.to_string(),
                0,
            ),
            sqlx::Error::Protocol(message) => Self::new(
                format!("protocol violation: {message}"),
                STATE_COMMUNICATION_FAILURE.to_string(),
                0,
            ),
            other => Self::new(other.to_string(), STATE_GENERAL_ERROR.to_string(), 0),
        }
    }
}

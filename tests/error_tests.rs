//! Diagnostic capture and classification tests

use dbping::error::{STATE_COMMUNICATION_FAILURE, STATE_GENERAL_ERROR};
use dbping::ConnectError;

#[test]
fn test_diagnostics_format_matches_documented_output() {
    let err = ConnectError::new(
        "Access denied for user 'minty'@'localhost' (using password: YES)".to_string(),
        "28000".to_string(),
        1045,
    );

    let diagnostics = err.diagnostics();
    let lines: Vec<&str> = diagnostics.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("SQLException: "));
    assert!(lines[1].starts_with("SQLState: "));
    assert!(lines[2].starts_with("VendorError: "));

    // Each field is non-empty and the vendor code parses as an integer
    assert!(lines[0].len() > "SQLException: ".len());
    assert!(lines[1].len() > "SQLState: ".len());
    let code: u32 = lines[2]["VendorError: ".len()..].parse().unwrap();
    assert_eq!(code, 1045);
}

#[test]
fn test_auth_and_network_failures_stay_distinct() {
    let auth = ConnectError::new("Access denied".to_string(), "28000".to_string(), 1045);
    let network = ConnectError::new(
        "Connection refused".to_string(),
        STATE_COMMUNICATION_FAILURE.to_string(),
        0,
    );

    assert!(auth.is_auth_failure());
    assert!(network.is_communication_failure());
    assert_ne!(auth.state(), network.state());
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "Connection refused");
    let err = ConnectError::from(sqlx::Error::Io(io));

    assert_eq!(err.state(), STATE_COMMUNICATION_FAILURE);
    assert_eq!(err.vendor_code(), 0);
    assert!(!err.message().is_empty());
}

#[test]
fn test_unclassified_error_conversion() {
    let err = ConnectError::from(sqlx::Error::WorkerCrashed);

    assert_eq!(err.state(), STATE_GENERAL_ERROR);
    assert_eq!(err.vendor_code(), 0);
}

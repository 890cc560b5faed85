//! Tests for core_kernel error types

use core_kernel::error::CoreError;

#[test]
fn test_rejected_displays_backend_message() {
    let error = CoreError::rejected(400, "Insurance plan is not applicable");
    assert_eq!(error.to_string(), "Insurance plan is not applicable");
    assert_eq!(error.envelope_status(), Some(400));
}

#[test]
fn test_missing_data_reports_status() {
    let error = CoreError::MissingData { status: 200 };
    assert!(error.to_string().contains("200"));
    assert_eq!(error.envelope_status(), Some(200));
}

#[test]
fn test_token_error_has_no_envelope_status() {
    let error = CoreError::unknown_token("time period", "1_DAY");
    assert_eq!(error.to_string(), "Unknown time period token: 1_DAY");
    assert_eq!(error.envelope_status(), None);
}

use std::error::Error;
use gymflow_core::errors::{GymError, GymResult};

#[test]
fn test_gym_error_display() {
    let not_found = GymError::NotFound("Trainer not found".to_string());
    let validation = GymError::Validation("Invalid input".to_string());
    let authentication = GymError::Authentication("Missing bearer token".to_string());
    let authorization = GymError::Authorization("Not authorized".to_string());
    let window = GymError::InvalidTimeWindow("Too late".to_string());
    let conflict = GymError::SchedulingConflict("Slot taken".to_string());
    let database = GymError::Database(eyre::eyre!("Database connection failed"));
    let internal = GymError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(not_found.to_string(), "Resource not found: Trainer not found");
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(
        authentication.to_string(),
        "Authentication error: Missing bearer token"
    );
    assert_eq!(authorization.to_string(), "Authorization error: Not authorized");
    assert_eq!(window.to_string(), "Invalid time window: Too late");
    assert_eq!(conflict.to_string(), "Scheduling conflict: Slot taken");
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let gym_error = GymError::Internal(Box::new(io_error));

    assert!(gym_error.source().is_some());
}

#[test]
fn test_eyre_report_converts_into_database_error() {
    fn failing() -> GymResult<()> {
        Err(eyre::eyre!("pool timed out"))?;
        Ok(())
    }

    match failing() {
        Err(GymError::Database(report)) => assert!(report.to_string().contains("pool timed out")),
        other => panic!("Expected Database error, got: {:?}", other),
    }
}

#[test]
fn test_client_error_classification() {
    assert!(GymError::NotFound(String::new()).is_client_error());
    assert!(GymError::Validation(String::new()).is_client_error());
    assert!(GymError::InvalidTimeWindow(String::new()).is_client_error());
    assert!(GymError::SchedulingConflict(String::new()).is_client_error());
    assert!(!GymError::Database(eyre::eyre!("down")).is_client_error());
}

//! Error types for the rental engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during pricing and scheduling.

use thiserror::Error;

/// The main error type for the rental engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use rental_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/fleet.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/fleet.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A quotation input field failed validation.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A booking window was invalid (for example end before start).
    #[error("Invalid booking window: {message}")]
    InvalidWindow {
        /// A description of what made the window invalid.
        message: String,
    },

    /// Equipment id was not found in the fleet catalog.
    #[error("Equipment not found: {id}")]
    EquipmentNotFound {
        /// The equipment id that was not found.
        id: String,
    },

    /// Operator id was not found in the fleet catalog.
    #[error("Operator not found: {id}")]
    OperatorNotFound {
        /// The operator id that was not found.
        id: String,
    },

    /// Lead id was not found in the repository.
    #[error("Lead not found: {id}")]
    LeadNotFound {
        /// The lead id that was not found.
        id: String,
    },

    /// Quotation id was not found in the repository.
    #[error("Quotation not found: {id}")]
    QuotationNotFound {
        /// The quotation id that was not found.
        id: String,
    },

    /// Job id was not found in the repository.
    #[error("Job not found: {id}")]
    JobNotFound {
        /// The job id that was not found.
        id: String,
    },

    /// A candidate booking overlaps existing jobs holding the same resources.
    #[error("Booking conflicts with {} existing job(s)", .conflicting_job_ids.len())]
    ScheduleConflict {
        /// Ids of the jobs that hold the equipment or operator in the window.
        conflicting_job_ids: Vec<String>,
    },

    /// The session lacks the role required for an operation.
    #[error("Role '{required}' required for this operation")]
    Forbidden {
        /// The role that was required.
        required: String,
    },

    /// No authenticated user is present in the session.
    #[error("Not authenticated")]
    NotAuthenticated,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/fleet.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/fleet.yaml"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "base_rate".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input 'base_rate': must not be negative"
        );
    }

    #[test]
    fn test_equipment_not_found_displays_id() {
        let error = EngineError::EquipmentNotFound {
            id: "eq_99".to_string(),
        };
        assert_eq!(error.to_string(), "Equipment not found: eq_99");
    }

    #[test]
    fn test_schedule_conflict_displays_count() {
        let error = EngineError::ScheduleConflict {
            conflicting_job_ids: vec!["job_1".to_string(), "job_2".to_string()],
        };
        assert_eq!(error.to_string(), "Booking conflicts with 2 existing job(s)");
    }

    #[test]
    fn test_invalid_window_displays_message() {
        let error = EngineError::InvalidWindow {
            message: "end is before start".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid booking window: end is before start"
        );
    }

    #[test]
    fn test_forbidden_displays_required_role() {
        let error = EngineError::Forbidden {
            required: "sales_agent".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Role 'sales_agent' required for this operation"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_authenticated() -> EngineResult<()> {
            Err(EngineError::NotAuthenticated)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_authenticated()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

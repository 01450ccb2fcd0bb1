//! Error types for the payroll console.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the payroll session can observe. Input failures are
//! recoverable and handled inside the session; only I/O errors escape it.

use thiserror::Error;

/// The main error type for the payroll console.
///
/// # Example
///
/// ```
/// use payroll_console::error::PayrollError;
///
/// let error = PayrollError::DuplicateId { id: 7 };
/// assert_eq!(error.to_string(), "Employee ID 7 is already registered");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Text was not a well-formed number for the requested field.
    #[error("Invalid {field}: '{input}'")]
    InvalidFormat {
        /// The field being parsed.
        field: String,
        /// The rejected text.
        input: String,
    },

    /// An employee with this id already exists in the registry.
    #[error("Employee ID {id} is already registered")]
    DuplicateId {
        /// The duplicated id.
        id: u32,
    },

    /// A menu selection outside the offered range.
    #[error("Invalid menu choice: '{input}'")]
    InvalidChoice {
        /// The rejected text.
        input: String,
    },

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

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl PayrollError {
    /// Builds a [`PayrollError::InvalidFormat`] for the named field.
    pub fn invalid_format(field: &str, input: &str) -> Self {
        Self::InvalidFormat {
            field: field.to_string(),
            input: input.to_string(),
        }
    }

    /// Returns true for failures the session recovers from by re-prompting
    /// or returning to the menu.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat { .. } | Self::DuplicateId { .. } | Self::InvalidChoice { .. }
        )
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_displays_field_and_input() {
        let error = PayrollError::invalid_format("hourly wage", "12.5.0");
        assert_eq!(error.to_string(), "Invalid hourly wage: '12.5.0'");
    }

    #[test]
    fn test_duplicate_id_displays_id() {
        let error = PayrollError::DuplicateId { id: 42 };
        assert_eq!(error.to_string(), "Employee ID 42 is already registered");
    }

    #[test]
    fn test_invalid_choice_displays_input() {
        let error = PayrollError::InvalidChoice {
            input: "9".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid menu choice: '9'");
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/session.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/session.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_io_error_converts_with_question_mark() {
        fn fails() -> PayrollResult<()> {
            let write: std::io::Result<()> = Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "closed",
            ));
            write?;
            Ok(())
        }

        let error = fails().unwrap_err();
        assert!(matches!(error, PayrollError::Io(_)));
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_input_errors_are_recoverable() {
        assert!(PayrollError::invalid_format("id", "x").is_recoverable());
        assert!(PayrollError::DuplicateId { id: 1 }.is_recoverable());
        assert!(
            PayrollError::InvalidChoice {
                input: "0".to_string()
            }
            .is_recoverable()
        );
        assert!(
            !PayrollError::ConfigNotFound {
                path: "x".to_string()
            }
            .is_recoverable()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }
}

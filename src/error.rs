//! Error types for the Qucsim circuit simulator.
//!
//! The engine favours best-effort results: malformed netlist lines, unknown
//! component types and singular systems are degraded locally and never show
//! up here. [`QucsimError`] only covers the cases a caller must hear about:
//! parameter text that cannot be converted to a number, and missing or
//! unreadable files.

use thiserror::Error;

/// Result type alias using [`QucsimError`].
pub type Result<T> = std::result::Result<T, QucsimError>;

/// Unified error type for all Qucsim operations.
#[derive(Error, Debug)]
pub enum QucsimError {
    // ============ Netlist Errors ============
    /// A component parameter could not be converted to a usable number
    #[error("Invalid parameter {param}=\"{value}\" for component '{component}': {message}")]
    InvalidParameter {
        component: String,
        param: String,
        value: String,
        message: String,
    },

    /// A `.DC` directive value could not be converted to a number
    #[error("Invalid simulation parameter {param}=\"{value}\": {message}")]
    InvalidSimulationParam {
        param: String,
        value: String,
        message: String,
    },

    // ============ I/O Errors ============
    /// The expected result artifact does not exist
    #[error("No output file found at '{path}'")]
    MissingFile { path: String },

    /// Error reading a netlist or result file
    #[error("Failed to read file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a result file
    #[error("Failed to write file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl QucsimError {
    /// Create an invalid component parameter error
    pub fn invalid_parameter(
        component: impl Into<String>,
        param: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            component: component.into(),
            param: param.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an invalid simulation parameter error
    pub fn invalid_simulation_param(
        param: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidSimulationParam {
            param: param.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a missing file error
    pub fn missing_file(path: &std::path::Path) -> Self {
        Self::MissingFile {
            path: path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = QucsimError::invalid_parameter("R1", "R", "abc", "not a number");
        assert_eq!(
            err.to_string(),
            "Invalid parameter R=\"abc\" for component 'R1': not a number"
        );
    }

    #[test]
    fn test_missing_file_message() {
        let err = QucsimError::missing_file(std::path::Path::new("/tmp/nope.dat"));
        assert_eq!(err.to_string(), "No output file found at '/tmp/nope.dat'");
    }
}

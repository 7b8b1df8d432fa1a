use std::collections::TryReserveError;
use std::num::ParseIntError;
use std::str::Utf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to allocate input buffer for {requested} integers: {source}")]
    AllocationError {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("Invalid integer {token:?} at position {index}: {source}")]
    ParseError {
        index: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Input is not valid UTF-8 near integer {index}: {source}")]
    EncodingError {
        index: usize,
        #[source]
        source: Utf8Error,
    },

    #[error("Unexpected end of input: expected {expected} integers, found {found}")]
    ShortInputError { expected: usize, found: usize },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Resource,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl BenchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BenchError::IoError(_)
            | BenchError::ParseError { .. }
            | BenchError::EncodingError { .. }
            | BenchError::ShortInputError { .. } => ErrorCategory::Input,
            BenchError::AllocationError { .. } => ErrorCategory::Resource,
            BenchError::TomlError(_)
            | BenchError::ConfigError { .. }
            | BenchError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            BenchError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Resource => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Output => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Resource => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BenchError::IoError(_) => "Check that the input file exists and is readable".to_string(),
            BenchError::AllocationError { requested, .. } => format!(
                "Lower --input-size (currently {}) or free up memory",
                requested
            ),
            BenchError::ParseError { .. } | BenchError::EncodingError { .. } => {
                "Input must contain only whitespace-separated 32-bit integers".to_string()
            }
            BenchError::ShortInputError { expected, .. } => format!(
                "Provide at least {} integers or lower --input-size",
                expected
            ),
            BenchError::TomlError(_) => "Make sure the config file is valid TOML".to_string(),
            BenchError::ConfigError { .. } => {
                "Make sure the config file exists and is readable".to_string()
            }
            BenchError::SerializationError(_) => "Retry with --report text".to_string(),
            BenchError::InvalidConfigValueError { .. } => {
                "Run with --help to see accepted options".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;

//! repint error types.
//!
//! This module provides error handling using `exn` for context-aware errors
//! while preserving stable `error_type()` strings for host interop.

use std::fmt;

/// Error kind enum for repint operations.
///
/// Each variant corresponds to a specific error condition and maps to a
/// stable `error_type()` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The construction argument is not a `[element, length]` pair.
    InvalidSpec { message: String },
    /// The element is not an integer.
    UnsupportedElementKind { kind: String },
    /// Element index past the end of the vector.
    IndexOutOfRange { index: u64, length: u64 },
    /// A sum over `length` elements does not fit the 64-bit accumulator.
    IntegerOverflow { length: u64 },
    /// `min`/`max` over an empty set of elements.
    EmptyReduction { op: &'static str },
    /// The vector is too long to be addressed on this platform.
    LengthOverflow { length: u64 },
    /// Materialization would exceed the configured limit.
    MaterializeLimit { length: u64, limit: u64 },
    /// Configuration error.
    ConfigError { message: String },
    /// TOML parsing error.
    TomlError { message: String },
    /// JSON parsing error.
    JsonError { message: String },
    /// I/O error.
    IoError { message: String },
}

impl ErrorKind {
    /// Get the error type as a string.
    ///
    /// These strings are stable and must not change.
    pub fn error_type(&self) -> &'static str {
        match self {
            ErrorKind::InvalidSpec { .. } => "invalid_spec",
            ErrorKind::UnsupportedElementKind { .. } => "unsupported_element_kind",
            ErrorKind::IndexOutOfRange { .. } => "index_out_of_range",
            ErrorKind::IntegerOverflow { .. } => "integer_overflow",
            ErrorKind::EmptyReduction { .. } => "empty_reduction",
            ErrorKind::LengthOverflow { .. } => "length_overflow",
            ErrorKind::MaterializeLimit { .. } => "materialize_limit",
            ErrorKind::ConfigError { .. } => "config_error",
            ErrorKind::TomlError { .. } => "toml_error",
            ErrorKind::JsonError { .. } => "json_error",
            ErrorKind::IoError { .. } => "io_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidSpec { message } => write!(f, "invalid spec: {}", message),
            ErrorKind::UnsupportedElementKind { kind } => {
                write!(f, "unsupported element kind: {} (only integer is supported)", kind)
            }
            ErrorKind::IndexOutOfRange { index, length } => {
                write!(f, "index {} out of range for length {}", index, length)
            }
            ErrorKind::IntegerOverflow { length } => {
                write!(f, "integer overflow: sum of {} elements does not fit in 64 bits", length)
            }
            ErrorKind::EmptyReduction { op } => {
                write!(f, "{}: no non-missing elements to reduce", op)
            }
            ErrorKind::LengthOverflow { length } => {
                write!(f, "length {} cannot be addressed on this platform", length)
            }
            ErrorKind::MaterializeLimit { length, limit } => write!(
                f,
                "refusing to materialize {} elements (limit is {})",
                length, limit
            ),
            ErrorKind::ConfigError { message } => write!(f, "config error: {}", message),
            ErrorKind::TomlError { message } => write!(f, "toml error: {}", message),
            ErrorKind::JsonError { message } => write!(f, "json error: {}", message),
            ErrorKind::IoError { message } => write!(f, "io error: {}", message),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Main error type for repint operations.
///
/// Wraps `exn::Exn<ErrorKind>` while exposing the stable `error_type()`.
#[derive(Debug)]
pub struct RepError(exn::Exn<ErrorKind>);

impl RepError {
    /// Create a new error from an error kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self(exn::Exn::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_error()
    }

    /// Get the error type as a string.
    pub fn error_type(&self) -> &'static str {
        self.kind().error_type()
    }

    /// Create an "invalid spec" error.
    pub fn invalid_spec(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSpec {
            message: message.into(),
        })
    }

    /// Create an "unsupported element kind" error.
    pub fn unsupported_element_kind(kind: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedElementKind { kind: kind.into() })
    }

    /// Create an "index out of range" error.
    pub fn index_out_of_range(index: u64, length: u64) -> Self {
        Self::new(ErrorKind::IndexOutOfRange { index, length })
    }

    /// Create an "integer overflow" error.
    pub fn integer_overflow(length: u64) -> Self {
        Self::new(ErrorKind::IntegerOverflow { length })
    }

    /// Create an "empty reduction" error.
    pub fn empty_reduction(op: &'static str) -> Self {
        Self::new(ErrorKind::EmptyReduction { op })
    }

    /// Create a "length overflow" error.
    pub fn length_overflow(length: u64) -> Self {
        Self::new(ErrorKind::LengthOverflow { length })
    }

    /// Create a "materialize limit" error.
    pub fn materialize_limit(length: u64, limit: u64) -> Self {
        Self::new(ErrorKind::MaterializeLimit { length, limit })
    }

    /// Create a "config error".
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigError {
            message: message.into(),
        })
    }

    /// Check if this is an IndexOutOfRange error.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::IndexOutOfRange { .. })
    }

    /// Check if this is an IntegerOverflow error.
    pub fn is_integer_overflow(&self) -> bool {
        matches!(self.kind(), ErrorKind::IntegerOverflow { .. })
    }

    /// Check if this is an EmptyReduction error.
    pub fn is_empty_reduction(&self) -> bool {
        matches!(self.kind(), ErrorKind::EmptyReduction { .. })
    }
}

impl fmt::Display for RepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for RepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for RepError {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::IoError {
            message: e.to_string(),
        })
    }
}

impl From<serde_json::Error> for RepError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(ErrorKind::JsonError {
            message: e.to_string(),
        })
    }
}

impl From<toml::de::Error> for RepError {
    fn from(e: toml::de::Error) -> Self {
        Self::new(ErrorKind::TomlError {
            message: e.to_string(),
        })
    }
}

impl From<toml::ser::Error> for RepError {
    fn from(e: toml::ser::Error) -> Self {
        Self::new(ErrorKind::TomlError {
            message: e.to_string(),
        })
    }
}

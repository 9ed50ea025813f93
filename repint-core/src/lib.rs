//! repint Core Library
//!
//! A lazy vector of `length` copies of one integer ("virtual repeat vector").
//! Element access, region reads and reductions are answered from a compact
//! `(value, length)` descriptor; a concrete buffer is allocated only when a
//! caller asks for raw access.
//!
//! # Architecture
//!
//! - `types`: Core data types (Int, Descriptor, RepInt, Config, errors, reports)
//! - `ops`: Operations on a handle (materialize, access, reduce, duplicate, inspect)
//! - `helpers`: Low-level utilities (region clamping, buffer scans, `[value, length]` parsing)

pub mod types;
pub mod ops;
pub mod helpers;

// Re-export commonly used types at crate root
pub use types::{
    BufferReport,
    Config,
    Descriptor,
    ErrorKind,
    Inspection,
    Int,
    RepError,
    RepInt,
    State,
    Summary,
    XLen,
    NA_INTEGER,
};

pub use ops::Iter;
pub use helpers::parse::RepSpec;

/// Result alias for repint operations.
pub type Result<T> = std::result::Result<T, RepError>;

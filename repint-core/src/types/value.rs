//! Integer element type with a dedicated missing value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw encoding of the missing integer.
///
/// Realized buffers use the host layout (`i32` per element), so the missing
/// value has to live inside the `i32` domain. `i32::MIN` is reserved for it and
/// is never a valid element.
pub const NA_INTEGER: i32 = i32::MIN;

/// A single integer element: a valid `i32` or missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<i32>", into = "Option<i32>")]
pub enum Int {
    /// Missing value.
    Na,
    /// A valid integer (never [`NA_INTEGER`]).
    Value(i32),
}

impl Int {
    /// Convert to the raw buffer representation.
    #[inline]
    pub fn to_raw(self) -> i32 {
        match self {
            Int::Na => NA_INTEGER,
            Int::Value(v) => v,
        }
    }

    /// Convert from the raw buffer representation.
    #[inline]
    pub fn from_raw(raw: i32) -> Self {
        if raw == NA_INTEGER {
            Int::Na
        } else {
            Int::Value(raw)
        }
    }

    /// True if this is the missing value.
    #[inline]
    pub fn is_na(self) -> bool {
        matches!(self, Int::Na)
    }

    /// The integer, or `None` if missing.
    #[inline]
    pub fn get(self) -> Option<i32> {
        match self {
            Int::Na => None,
            Int::Value(v) => Some(v),
        }
    }
}

impl From<i32> for Int {
    fn from(raw: i32) -> Self {
        Int::from_raw(raw)
    }
}

impl From<Option<i32>> for Int {
    fn from(v: Option<i32>) -> Self {
        v.map_or(Int::Na, Int::from_raw)
    }
}

impl From<Int> for Option<i32> {
    fn from(v: Int) -> Self {
        v.get()
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Int::Na => write!(f, "NA"),
            Int::Value(v) => write!(f, "{}", v),
        }
    }
}

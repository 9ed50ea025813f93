//! Serializable reports: introspection and reduction summaries.

use std::fmt;

use serde::{Serialize, Serializer};

use super::{Int, State, XLen};

/// Element kind reported by introspection. Only integers are supported.
pub const ELEMENT_KIND: &str = "integer";

/// Diagnostic description of a handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    /// Element kind.
    pub kind: &'static str,
    /// Representation state.
    pub state: State,
    /// Logical length.
    pub length: XLen,
    /// Repeated value from the descriptor.
    pub value: Int,
    /// Description of the realized buffer, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realized: Option<BufferReport>,
}

/// Description of a realized buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BufferReport {
    /// Element kind.
    pub kind: &'static str,
    /// Number of elements in the buffer.
    pub length: usize,
    /// Leading elements.
    pub head: Vec<Int>,
}

impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            " rep.int {} {} (value {}, length {})",
            self.kind, self.state, self.value, self.length
        )?;
        if let Some(buf) = &self.realized {
            write!(f, "  {}", buf)?;
        }
        Ok(())
    }
}

impl fmt::Display for BufferReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.kind, self.length)?;
        for v in &self.head {
            write!(f, " {}", v)?;
        }
        if self.head.len() < self.length {
            write!(f, " ...")?;
        }
        writeln!(f)
    }
}

/// All reductions of a handle, with failures recorded by `error_type()`.
///
/// In JSON each reduction is either its value or `{"error": "<error_type>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Logical length.
    pub length: XLen,
    /// Whether missing values were skipped.
    pub na_rm: bool,
    /// Sum; `Ok(None)` when a missing value propagates.
    #[serde(serialize_with = "serialize_outcome")]
    pub sum: Result<Option<i64>, &'static str>,
    /// Minimum.
    #[serde(serialize_with = "serialize_outcome")]
    pub min: Result<Int, &'static str>,
    /// Maximum.
    #[serde(serialize_with = "serialize_outcome")]
    pub max: Result<Int, &'static str>,
    /// Sortedness.
    pub sorted: bool,
    /// True if no element is missing.
    pub no_na: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Outcome<'a, T> {
    Value(&'a T),
    Error { error: &'static str },
}

fn serialize_outcome<T, S>(result: &Result<T, &'static str>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match result {
        Ok(value) => Outcome::Value(value),
        Err(error) => Outcome::Error { error: *error },
    }
    .serialize(serializer)
}

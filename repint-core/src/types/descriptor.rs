//! The compact `(value, length)` pair behind every repeat vector.

use serde::{Deserialize, Serialize};

use super::Int;

/// Extended vector length / index type.
///
/// 64 bits wide so that vectors longer than the 32-bit index range can be
/// described regardless of the target's pointer width.
pub type XLen = u64;

/// Immutable description of a virtual repeat vector.
///
/// Every element of the described vector equals `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Descriptor {
    /// The repeated element.
    pub value: Int,
    /// Number of elements.
    pub length: XLen,
}

impl Descriptor {
    /// Create a new descriptor.
    pub fn new(value: impl Into<Int>, length: XLen) -> Self {
        Self {
            value: value.into(),
            length,
        }
    }

    /// True if the described vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

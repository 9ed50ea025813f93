//! Introspection.

use crate::types::ELEMENT_KIND;
use crate::{BufferReport, Inspection, Int, RepInt};

impl RepInt {
    /// Describe the handle without changing it.
    pub fn inspect(&self) -> Inspection {
        let realized = self.dataptr_or_null().map(|buf| BufferReport {
            kind: ELEMENT_KIND,
            length: buf.len(),
            head: buf
                .iter()
                .take(self.preview)
                .map(|&raw| Int::from_raw(raw))
                .collect(),
        });
        Inspection {
            kind: ELEMENT_KIND,
            state: self.state(),
            length: self.len(),
            value: self.desc.value,
            realized,
        }
    }
}

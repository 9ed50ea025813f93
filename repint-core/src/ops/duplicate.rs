//! Duplication re-lazifies: only the descriptor is copied.

use std::sync::OnceLock;

use crate::RepInt;

impl RepInt {
    /// An independent handle with the same contents.
    ///
    /// The copy starts lazy even if `self` is materialized, since the buffer
    /// can be rebuilt from the descriptor. A detached handle is the exception:
    /// its buffer is the only record of its contents, so it is cloned.
    pub fn duplicate(&self) -> RepInt {
        let realized = match self.detached_buffer() {
            Some(buf) => {
                log::debug!("Duplicating detached buffer of {} elements", buf.len());
                OnceLock::from(Box::<[i32]>::from(buf))
            }
            None => OnceLock::new(),
        };
        RepInt {
            desc: self.desc,
            realized,
            detached: self.detached,
            limit: self.limit,
            preview: self.preview,
        }
    }
}

impl Clone for RepInt {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

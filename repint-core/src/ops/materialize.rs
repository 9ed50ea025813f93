//! Materialization: the only path that allocates a buffer.

use crate::{RepError, RepInt};

impl RepInt {
    /// Read-only access to the realized buffer, filling it on first use.
    ///
    /// The fill runs at most once per handle, even when several threads race
    /// on the first call; later calls return the same buffer.
    pub fn realize(&self) -> Result<&[i32], RepError> {
        if let Some(buf) = self.realized.get() {
            return Ok(buf);
        }
        let n = self.materialize_len()?;
        let raw = self.desc.value.to_raw();
        let buf = self.realized.get_or_init(|| {
            log::debug!("Materializing {} copies of {}", n, self.desc.value);
            vec![raw; n].into_boxed_slice()
        });
        Ok(buf)
    }

    /// Writable access to the realized buffer.
    ///
    /// The handle is detached from its descriptor for good: later queries scan
    /// the buffer instead of using the descriptor shortcuts.
    pub fn realize_mut(&mut self) -> Result<&mut [i32], RepError> {
        self.realize()?;
        if !self.detached {
            log::debug!("Detaching {} element buffer from its descriptor", self.desc.length);
            self.detached = true;
        }
        // Populated by `realize` above.
        Ok(self
            .realized
            .get_mut()
            .map(|buf| &mut buf[..])
            .unwrap_or_default())
    }

    /// The realized buffer, or `None` without materializing.
    pub fn dataptr_or_null(&self) -> Option<&[i32]> {
        self.realized.get().map(|buf| &**buf)
    }

    /// Validate that the buffer can be allocated.
    fn materialize_len(&self) -> Result<usize, RepError> {
        let length = self.desc.length;
        if let Some(limit) = self.limit {
            if length > limit {
                return Err(RepError::materialize_limit(length, limit));
            }
        }
        usize::try_from(length).map_err(|_| RepError::length_overflow(length))
    }
}

//! The repeat-vector handle.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::{Config, Descriptor, Int, XLen};

/// Representation state of a [`RepInt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    /// Only the descriptor exists.
    Lazy,
    /// A buffer has been realized and still matches the descriptor.
    Materialized,
    /// A writable buffer reference was handed out; the buffer is now the
    /// source of truth and the descriptor is only historical.
    Detached,
}

impl State {
    /// Lower-case name used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            State::Lazy => "lazy",
            State::Materialized => "materialized",
            State::Detached => "detached",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vector of `length` copies of one integer, realized only on demand.
///
/// Read-only queries are answered from the [`Descriptor`] without allocating.
/// The first raw-buffer request fills a buffer once and caches it; the slot is
/// a one-shot cell, so a handle can be shared across threads and concurrent
/// first requests agree on a single buffer.
///
/// Once [`RepInt::realize_mut`] has been called the handle behaves as a plain
/// materialized array: every query scans the buffer, because the caller may
/// have changed it.
pub struct RepInt {
    pub(crate) desc: Descriptor,
    pub(crate) realized: OnceLock<Box<[i32]>>,
    pub(crate) detached: bool,
    pub(crate) limit: Option<XLen>,
    pub(crate) preview: usize,
}

impl RepInt {
    /// Create a lazy handle with default configuration.
    pub fn new(value: impl Into<Int>, length: XLen) -> Self {
        Self::with_config(value, length, &Config::default())
    }

    /// Create a lazy handle carrying the limits from `config`.
    pub fn with_config(value: impl Into<Int>, length: XLen, config: &Config) -> Self {
        Self::from_descriptor(Descriptor::new(value, length), config)
    }

    /// Create a lazy handle from an existing descriptor.
    pub fn from_descriptor(desc: Descriptor, config: &Config) -> Self {
        Self {
            desc,
            realized: OnceLock::new(),
            detached: false,
            limit: config.max_materialize_len,
            preview: config.region_preview,
        }
    }

    /// The descriptor this handle was built from.
    ///
    /// For a detached handle this no longer describes the contents.
    pub fn descriptor(&self) -> Descriptor {
        self.desc
    }

    /// Number of elements.
    pub fn len(&self) -> XLen {
        self.desc.length
    }

    /// True if the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.desc.is_empty()
    }

    /// Current representation state.
    pub fn state(&self) -> State {
        if self.detached {
            State::Detached
        } else if self.realized.get().is_some() {
            State::Materialized
        } else {
            State::Lazy
        }
    }

    /// True once a buffer has been realized.
    pub fn is_materialized(&self) -> bool {
        self.realized.get().is_some()
    }

    /// True once a writable buffer has been handed out.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// The buffer, if the handle answers queries from it.
    pub(crate) fn detached_buffer(&self) -> Option<&[i32]> {
        if self.detached {
            self.realized.get().map(|buf| &**buf)
        } else {
            None
        }
    }
}

impl fmt::Debug for RepInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepInt")
            .field("desc", &self.desc)
            .field("state", &self.state())
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_lazy() {
        let v = RepInt::new(7, 5);
        assert_eq!(v.len(), 5);
        assert_eq!(v.state(), State::Lazy);
        assert!(!v.is_materialized());
        assert_eq!(v.descriptor(), Descriptor::new(7, 5));
    }

    #[test]
    fn test_with_config_copies_limits() {
        let config = Config {
            max_materialize_len: Some(10),
            region_preview: 2,
        };
        let v = RepInt::with_config(Int::Na, 3, &config);
        assert_eq!(v.limit, Some(10));
        assert_eq!(v.preview, 2);
    }

    #[test]
    fn test_handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RepInt>();
    }

    #[test]
    fn test_debug_does_not_dump_buffer() {
        let v = RepInt::new(1, 3);
        let s = format!("{:?}", v);
        assert!(s.contains("Lazy"));
    }
}

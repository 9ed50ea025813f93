//! Operations on a repeat-vector handle.
//!
//! Each module adds an `impl RepInt` block for one concern.

mod access;
mod duplicate;
mod inspect;
mod materialize;
mod reduce;

pub use access::Iter;

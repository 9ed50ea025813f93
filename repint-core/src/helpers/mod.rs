//! Low-level helper utilities.

pub mod parse;
pub mod region;
pub mod scan;

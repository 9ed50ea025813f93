//! Core type definitions for repint.

mod config;
mod descriptor;
mod error;
mod handle;
mod report;
mod value;

pub use config::{Config, CONFIG_FILE_NAME};
pub use descriptor::{Descriptor, XLen};
pub use error::{ErrorKind, RepError};
pub use handle::{RepInt, State};
pub use report::{BufferReport, Inspection, Summary, ELEMENT_KIND};
pub use value::{Int, NA_INTEGER};

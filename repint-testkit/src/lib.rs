//! repint test kit: equivalence testing utilities.
//!
//! Every answer a lazy [`RepInt`](repint_core::RepInt) gives must match the
//! answer of a plain materialized vector run through textbook algorithms.
//! This crate provides that reference vector and a small scenario format for
//! replaying operations on both.
//!
//! # Key Types
//!
//! - [`NaiveVec`]: Fully materialized reference vector
//! - [`Scenario`]: Descriptor plus the steps to replay
//! - [`Op`]: One operation, serialized as `{"op": "...", ...}`
//! - [`Mismatch`]: A difference between the two representations
//!
//! # Example
//!
//! ```
//! use repint_testkit::{check_equivalence, report};
//!
//! let run = check_equivalence(7, 5);
//! assert!(run.passed(), "{}", report(&run.mismatches));
//! ```

mod diff;
mod oracle;
mod runner;
mod scenario;

pub use diff::{report, Mismatch};
pub use oracle::NaiveVec;
pub use runner::{check_equivalence, run_scenario, Observation, Op, ScenarioRun};
pub use scenario::{Scenario, Step};

/// Re-export repint_core for convenience in tests.
pub use repint_core;

//! Test scenario definitions.

use std::path::Path;

use anyhow::{Context, Result};
use fs_err as fs;
use repint_core::{Int, State};
use serde::{Deserialize, Serialize};

use crate::runner::Op;

/// A repeat vector plus the operations to replay on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,

    /// Description of what this scenario tests.
    #[serde(default)]
    pub description: String,

    /// Repeated element (`null` for missing).
    pub value: Int,

    /// Number of elements.
    pub length: u64,

    /// Steps: operations to run in order.
    pub steps: Vec<Step>,
}

/// A step in a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// Step name/description.
    pub name: String,

    /// Operation to run.
    pub op: Op,

    /// Expected handle state after the step.
    #[serde(default)]
    pub expect_state: Option<State>,
}

impl Step {
    /// Create a new step.
    pub fn new(name: &str, op: Op) -> Self {
        Self {
            name: name.to_string(),
            op,
            expect_state: None,
        }
    }

    /// Create a step that also checks the resulting state.
    pub fn expect_state(name: &str, op: Op, state: State) -> Self {
        Self {
            name: name.to_string(),
            op,
            expect_state: Some(state),
        }
    }
}

impl Scenario {
    /// Create an empty scenario.
    pub fn new(name: &str, value: impl Into<Int>, length: u64) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            value: value.into(),
            length,
            steps: Vec::new(),
        }
    }

    /// Append a step.
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Every read-only query, then materialization and duplication.
    pub fn standard(value: impl Into<Int>, length: u64) -> Self {
        let mut scenario = Self::new("standard", value, length);
        scenario.description = "all queries before and after materialization".to_string();
        scenario.steps = read_steps("lazy", length, State::Lazy);
        scenario
            .steps
            .push(Step::expect_state("realize", Op::Realize, State::Materialized));
        scenario
            .steps
            .extend(read_steps("materialized", length, State::Materialized));
        scenario
            .steps
            .push(Step::expect_state("duplicate", Op::Duplicate, State::Lazy));
        scenario.steps.extend(read_steps("duplicated", length, State::Lazy));
        scenario
    }

    /// Load a scenario from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse scenario {}", path.display()))
    }
}

fn read_steps(prefix: &str, length: u64, state: State) -> Vec<Step> {
    let mut ops = vec![
        Op::Len,
        Op::Elt { index: 0 },
        Op::Elt {
            index: length.saturating_sub(1),
        },
        Op::Elt { index: length },
        Op::Region {
            start: 0,
            count: length,
            buf_len: 8,
        },
        Op::Region {
            start: length / 2,
            count: length + 3,
            buf_len: 16,
        },
        Op::IsSorted,
        Op::NoNa,
    ];
    for na_rm in [false, true] {
        ops.push(Op::Sum { na_rm });
        ops.push(Op::Min { na_rm });
        ops.push(Op::Max { na_rm });
    }
    ops.into_iter()
        .map(|op| Step::expect_state(&format!("{} {:?}", prefix, op), op, state))
        .collect()
}

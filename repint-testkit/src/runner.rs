//! Replay scenarios on a lazy handle and the reference vector side by side.

use repint_core::{Config, Descriptor, Int, RepInt, State};
use serde::{Deserialize, Serialize};

use crate::diff::Mismatch;
use crate::oracle::NaiveVec;
use crate::scenario::Scenario;

/// Operation replayed on both representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Number of elements.
    Len,
    /// Read one element.
    Elt { index: u64 },
    /// Copy a region into a buffer of `buf_len` slots.
    Region { start: u64, count: u64, buf_len: usize },
    /// Sum of all elements.
    Sum {
        #[serde(default)]
        na_rm: bool,
    },
    /// Smallest element.
    Min {
        #[serde(default)]
        na_rm: bool,
    },
    /// Largest element.
    Max {
        #[serde(default)]
        na_rm: bool,
    },
    /// Sortedness.
    IsSorted,
    /// Absence of missing values.
    NoNa,
    /// Materialize the buffer read-only.
    Realize,
    /// Overwrite one element through a writable buffer.
    Write { index: u64, value: Int },
    /// Replace the handle with its duplicate.
    Duplicate,
}

impl Op {
    /// True if the operation must leave the handle's state alone.
    pub fn is_read_only(&self) -> bool {
        !matches!(self, Op::Realize | Op::Write { .. } | Op::Duplicate)
    }
}

/// Outcome of one step on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub step: String,
    pub lazy: String,
    pub naive: String,
    pub state: State,
}

/// Everything recorded while replaying a scenario.
#[derive(Debug, Clone, Default)]
pub struct ScenarioRun {
    pub observations: Vec<Observation>,
    pub mismatches: Vec<Mismatch>,
}

impl ScenarioRun {
    /// True if no mismatch was recorded.
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Replay every step of `scenario` and collect mismatches.
pub fn run_scenario(scenario: &Scenario) -> ScenarioRun {
    let desc = Descriptor::new(scenario.value, scenario.length);
    let mut lazy = RepInt::from_descriptor(desc, &Config::default());
    let mut naive = NaiveVec::from_descriptor(desc);
    let mut run = ScenarioRun::default();

    for step in &scenario.steps {
        let before = lazy.state();
        let (lazy_out, naive_out) = apply(&mut lazy, &mut naive, step.op);
        let after = lazy.state();

        if lazy_out != naive_out && !is_allowed_divergence(&lazy, &naive, step.op) {
            run.mismatches.push(Mismatch::Observation {
                step: step.name.clone(),
                lazy: lazy_out.clone(),
                naive: naive_out.clone(),
            });
        }
        if step.op.is_read_only() && before != after {
            run.mismatches.push(Mismatch::StateChanged {
                step: step.name.clone(),
                before,
                after,
            });
        }
        if let Some(expected) = step.expect_state {
            if expected != after {
                run.mismatches.push(Mismatch::UnexpectedState {
                    step: step.name.clone(),
                    expected,
                    actual: after,
                });
            }
        }
        run.observations.push(Observation {
            step: step.name.clone(),
            lazy: lazy_out,
            naive: naive_out,
            state: after,
        });
    }
    run
}

/// Run the standard scenario for one descriptor.
pub fn check_equivalence(value: impl Into<Int>, length: u64) -> ScenarioRun {
    run_scenario(&Scenario::standard(value, length))
}

/// `no_na` on an empty, undetached handle reports the descriptor value.
fn is_allowed_divergence(lazy: &RepInt, naive: &NaiveVec, op: Op) -> bool {
    op == Op::NoNa && naive.is_empty() && !lazy.is_detached()
}

fn apply(lazy: &mut RepInt, naive: &mut NaiveVec, op: Op) -> (String, String) {
    match op {
        Op::Len => (lazy.len().to_string(), naive.len().to_string()),
        Op::Elt { index } => (
            render(lazy.elt(index).map_err(|e| e.error_type())),
            render(naive.elt(index)),
        ),
        Op::Region {
            start,
            count,
            buf_len,
        } => {
            let mut a = vec![0; buf_len];
            let mut b = vec![0; buf_len];
            let ka = lazy.get_region(start, count, &mut a);
            let kb = naive.get_region(start, count, &mut b);
            (format!("{} {:?}", ka, a), format!("{} {:?}", kb, b))
        }
        Op::Sum { na_rm } => (
            render(lazy.sum(na_rm).map_err(|e| e.error_type())),
            render(naive.sum(na_rm)),
        ),
        Op::Min { na_rm } => (
            render(lazy.min(na_rm).map_err(|e| e.error_type())),
            render(naive.min(na_rm)),
        ),
        Op::Max { na_rm } => (
            render(lazy.max(na_rm).map_err(|e| e.error_type())),
            render(naive.max(na_rm)),
        ),
        Op::IsSorted => (lazy.is_sorted().to_string(), naive.is_sorted().to_string()),
        Op::NoNa => (lazy.no_na().to_string(), naive.no_na().to_string()),
        Op::Realize => (
            render(lazy.realize().map(|buf| buf.to_vec()).map_err(|e| e.error_type())),
            format!("ok {:?}", naive.as_raw()),
        ),
        Op::Write { index, value } => {
            let lazy_out = match lazy.realize_mut() {
                Ok(buf) => match usize::try_from(index).ok().and_then(|i| buf.get_mut(i)) {
                    Some(slot) => {
                        *slot = value.to_raw();
                        Ok(())
                    }
                    None => Err("index_out_of_range"),
                },
                Err(e) => Err(e.error_type()),
            };
            let naive_out = if naive.set(index, value) {
                Ok(())
            } else {
                Err("index_out_of_range")
            };
            (render(lazy_out), render(naive_out))
        }
        Op::Duplicate => {
            *lazy = lazy.duplicate();
            *naive = naive.clone();
            (lazy.len().to_string(), naive.len().to_string())
        }
    }
}

fn render<T: std::fmt::Debug>(result: Result<T, &'static str>) -> String {
    match result {
        Ok(v) => format!("ok {:?}", v),
        Err(e) => format!("err {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Step;

    #[test]
    fn test_standard_scenario_passes() {
        let run = check_equivalence(7, 5);
        assert!(run.passed(), "{}", crate::diff::report(&run.mismatches));
        assert!(!run.observations.is_empty());
    }

    #[test]
    fn test_empty_missing_no_na_is_tolerated() {
        let run = check_equivalence(Int::Na, 0);
        assert!(run.passed(), "{}", crate::diff::report(&run.mismatches));
    }

    #[test]
    fn test_write_detaches_and_stays_equivalent() {
        let scenario = Scenario::new("write", 3, 4)
            .step(Step::expect_state(
                "write",
                Op::Write {
                    index: 1,
                    value: Int::Na,
                },
                State::Detached,
            ))
            .step(Step::new("sum", Op::Sum { na_rm: true }))
            .step(Step::new("no_na", Op::NoNa))
            .step(Step::new("elt", Op::Elt { index: 1 }))
            .step(Step::expect_state("dup", Op::Duplicate, State::Detached))
            .step(Step::new("max", Op::Max { na_rm: false }));
        let run = run_scenario(&scenario);
        assert!(run.passed(), "{}", crate::diff::report(&run.mismatches));
        assert_eq!(run.observations[1].lazy, "ok Some(9)");
    }

    #[test]
    fn test_wrong_expected_state_is_reported() {
        let scenario = Scenario::new("bad", 1, 2).step(Step::expect_state(
            "len",
            Op::Len,
            State::Materialized,
        ));
        let run = run_scenario(&scenario);
        assert_eq!(run.mismatches.len(), 1);
        assert!(matches!(
            run.mismatches[0],
            Mismatch::UnexpectedState {
                actual: State::Lazy,
                ..
            }
        ));
    }

    #[test]
    fn test_op_json_shape() {
        let op: Op = serde_json::from_str(r#"{"op": "region", "start": 1, "count": 2, "buf_len": 4}"#).unwrap();
        assert_eq!(
            op,
            Op::Region {
                start: 1,
                count: 2,
                buf_len: 4
            }
        );
        let op: Op = serde_json::from_str(r#"{"op": "sum"}"#).unwrap();
        assert_eq!(op, Op::Sum { na_rm: false });
    }
}

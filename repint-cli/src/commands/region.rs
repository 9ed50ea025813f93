//! repint region command.

use repint_core::helpers::region::region_len;
use repint_core::{Config, Int, RepError};
use serde::Serialize;

use super::Result;
use crate::output::Output;

/// JSON output for the region command.
#[derive(Serialize)]
struct RegionOutput {
    start: u64,
    requested: u64,
    copied: usize,
    values: Vec<Int>,
}

/// Run the region command.
pub fn run(output: &Output, config: &Config, spec: &str, start: u64, count: u64) -> Result<()> {
    let vector = super::build(spec, config)?;

    let mut buf = output_buffer(config, region_len(start, count, vector.len(), usize::MAX))?;
    let copied = vector.get_region(start, count, &mut buf);
    let values: Vec<Int> = buf[..copied].iter().map(|&raw| Int::from_raw(raw)).collect();

    if output.is_json() {
        output.json(&RegionOutput {
            start,
            requested: count,
            copied,
            values,
        });
    } else {
        let line: Vec<String> = values.iter().map(Int::to_string).collect();
        output.println(&line.join(" "));
        if (copied as u64) < count {
            output.warn(&format!(
                "Requested {} elements from index {}, only {} available",
                count, start, copied
            ));
        }
    }
    Ok(())
}

/// Allocate room for `k` elements, within the configured limit.
fn output_buffer(config: &Config, k: usize) -> Result<Vec<i32>> {
    let wanted = k as u64;
    if let Some(limit) = config.max_materialize_len {
        if wanted > limit {
            return Err(RepError::materialize_limit(wanted, limit).into());
        }
    }
    let mut buf = Vec::new();
    buf.try_reserve_exact(k)
        .map_err(|_| RepError::length_overflow(wanted))?;
    buf.resize(k, 0);
    Ok(buf)
}

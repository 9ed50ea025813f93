//! repint materialize command.

use repint_core::{Config, Int};

use super::Result;
use crate::output::Output;

/// Run the materialize command.
pub fn run(output: &Output, config: &Config, spec: &str) -> Result<()> {
    let vector = super::build(spec, config)?;
    let buf = vector.realize()?;
    let values: Vec<Int> = buf.iter().map(|&raw| Int::from_raw(raw)).collect();

    if output.is_json() {
        output.json(&values);
    } else {
        let line: Vec<String> = values.iter().map(Int::to_string).collect();
        output.println(&line.join(" "));
        output.info(&format!("Materialized {} elements ({})", buf.len(), vector.state()));
    }
    Ok(())
}

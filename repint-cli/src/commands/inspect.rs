//! repint inspect command.

use repint_core::Config;

use super::Result;
use crate::output::Output;

/// Run the inspect command.
pub fn run(output: &Output, config: &Config, spec: &str, materialize: bool) -> Result<()> {
    let vector = super::build(spec, config)?;
    if materialize {
        vector.realize()?;
    }

    let report = vector.inspect();
    if output.is_json() {
        output.json(&report);
    } else {
        output.println(report.to_string().trim_end());
    }
    Ok(())
}

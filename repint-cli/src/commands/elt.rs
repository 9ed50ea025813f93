//! repint elt command.

use repint_core::Config;
use serde_json::json;

use super::Result;
use crate::output::Output;

/// Run the elt command.
pub fn run(output: &Output, config: &Config, spec: &str, index: u64) -> Result<()> {
    let vector = super::build(spec, config)?;
    let value = vector.elt(index)?;

    if output.is_json() {
        output.json(&json!({ "index": index, "value": value }));
    } else {
        output.println(&value.to_string());
    }
    Ok(())
}

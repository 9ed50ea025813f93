//! repint summary command.

use repint_core::Config;
use tabled::Tabled;

use super::Result;
use crate::output::Output;

/// Table row for summary output.
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Reduction")]
    name: &'static str,
    #[tabled(rename = "Result")]
    value: String,
}

fn show<T: ToString>(result: &std::result::Result<T, &'static str>) -> String {
    match result {
        Ok(v) => v.to_string(),
        Err(error_type) => format!("<{}>", error_type),
    }
}

/// Run the summary command.
pub fn run(output: &Output, config: &Config, spec: &str, na_rm: bool) -> Result<()> {
    let vector = super::build(spec, config)?;
    let summary = vector.summarize(na_rm);

    if output.is_json() {
        output.json(&summary);
        return Ok(());
    }

    let sum = match &summary.sum {
        Ok(Some(v)) => v.to_string(),
        Ok(None) => "NA".to_string(),
        Err(error_type) => format!("<{}>", error_type),
    };
    let rows = vec![
        SummaryRow { name: "length", value: summary.length.to_string() },
        SummaryRow { name: "sum", value: sum },
        SummaryRow { name: "min", value: show(&summary.min) },
        SummaryRow { name: "max", value: show(&summary.max) },
        SummaryRow { name: "sorted", value: summary.sorted.to_string() },
        SummaryRow { name: "no_na", value: summary.no_na.to_string() },
    ];

    if output.is_table() {
        output.table(&rows);
    } else {
        for row in rows {
            output.println(&format!("{:>7}: {}", row.name, row.value));
        }
    }
    Ok(())
}

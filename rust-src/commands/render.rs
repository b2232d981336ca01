//! Render command - dashboard straight from a file, without the library.

use std::path::Path;

use anyhow::Result;

use crate::aggregation::summarize;
use crate::data::{load_records, load_summary};
use crate::visualization::{compose, compose_derived, render_dashboard, render_summary, render_table};


/// Run the render command.
///
/// Without a summary file the summary is derived from the records.
pub fn run(file: &Path, summary_file: Option<&Path>, table: bool, colored: bool) -> Result<()> {
    let records = load_records(file)?;

    let (summary, dashboard) = match summary_file {
        Some(path) => {
            let summary = load_summary(path)?;
            let dashboard = compose(&records, &summary);
            (summary, dashboard)
        }
        None => {
            if records.is_empty() {
                log::info!("No records in {}, nothing to summarize", file.display());
            }
            (summarize(&records).unwrap_or_default(), compose_derived(&records))
        }
    };

    let mut panels = vec![render_summary(&summary)];
    if table {
        panels.push(render_table(&records));
    }
    panels.extend(dashboard);

    render_dashboard(&panels, colored, false);

    Ok(())
}

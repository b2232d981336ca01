//! Show command - dashboard for a stored dataset.

use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};

use crate::config::DEFAULT_REFRESH_INTERVAL;
use crate::models::{EquipmentRecord, SummaryStatistics};
use crate::storage::{get_dataset, get_summary, load_equipment};
use crate::visualization::{render_dashboard, render_summary, render_table, Dashboard, Panel};

use super::status::{paint, Tone};


/// Run the show command.
pub fn run(db_path: &Path, dataset_id: i64, table: bool, live: bool, colored: bool) -> Result<()> {
    let Some(info) = get_dataset(db_path, dataset_id)? else {
        bail!("Dataset #{} not found. Run 'eqv list' to see stored datasets.", dataset_id);
    };

    log::debug!("Showing dataset {} ({})", info.id, info.name);

    let mut dashboard = Dashboard::new();

    if !live {
        let (records, summary) = load_dataset(db_path, dataset_id)?;
        dashboard.rebuild(&records, &summary);
        print_view(&records, &summary, &dashboard, table, colored, false);
        return Ok(());
    }

    loop {
        let (records, summary) = load_dataset(db_path, dataset_id)?;
        dashboard.rebuild(&records, &summary);
        print_view(&records, &summary, &dashboard, table, colored, true);

        let footer = format!(
            "Dataset #{} ({}) - refreshing every {} seconds. Press Ctrl+C to exit.",
            info.id, info.name, DEFAULT_REFRESH_INTERVAL
        );
        println!("{}", paint(&footer, Tone::Muted, colored));
        thread::sleep(Duration::from_secs(DEFAULT_REFRESH_INTERVAL));
    }
}


/// Records and stored summary; a dataset without equipment has an empty summary.
fn load_dataset(db_path: &Path, dataset_id: i64) -> Result<(Vec<EquipmentRecord>, SummaryStatistics)> {
    let records = load_equipment(db_path, dataset_id)?;
    let summary = get_summary(db_path, dataset_id)?.unwrap_or_default();
    Ok((records, summary))
}


/// Print the summary header, optional table and dashboard panels.
pub fn print_view(
    records: &[EquipmentRecord],
    summary: &SummaryStatistics,
    dashboard: &Dashboard,
    table: bool,
    colored: bool,
    clear_screen: bool,
) {
    let mut panels: Vec<Panel> = vec![render_summary(summary)];
    if table {
        panels.push(render_table(records));
    }
    panels.extend(dashboard.panels().iter().cloned());

    render_dashboard(&panels, colored, clear_screen);
}

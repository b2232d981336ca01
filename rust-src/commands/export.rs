//! Export command for SVG/PNG dashboards.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::config::get_data_dir;
use crate::storage::{get_dataset, get_summary, load_equipment};
use crate::visualization::{export_dashboard_png, export_dashboard_svg, open_file};

use super::status::{paint, Tone};


/// Run the export command.
pub fn run(
    db_path: &Path,
    dataset_id: i64,
    svg: bool,
    should_open: bool,
    output: Option<PathBuf>,
    colored: bool,
) -> Result<()> {
    let Some(info) = get_dataset(db_path, dataset_id)? else {
        bail!("Dataset #{} not found. Run 'eqv list' to see stored datasets.", dataset_id);
    };

    let format_type = if svg { "svg" } else { "png" };
    let output_path = match output {
        Some(path) => path,
        None => {
            let default_dir = get_data_dir().join("exports");
            std::fs::create_dir_all(&default_dir)
                .with_context(|| format!("Failed to create directory: {}", default_dir.display()))?;
            default_dir.join(format!("dataset-{}.{}", dataset_id, format_type))
        }
    };

    let records = load_equipment(db_path, dataset_id)?;
    let summary = get_summary(db_path, dataset_id)?.unwrap_or_default();

    if records.is_empty() {
        let message = format!("Dataset #{} has no equipment; exporting an empty dashboard.", dataset_id);
        println!("{}", paint(&message, Tone::Warning, colored));
    }

    println!("Exporting to {}...", format_type.to_uppercase());

    let title = format!("Equipment Analysis: {}", info.name);
    if svg {
        export_dashboard_svg(&records, &summary, &output_path, Some(&title))?;
    } else {
        export_dashboard_png(&records, &summary, &output_path, Some(&title))?;
    }

    let message = format!("+ Exported to: {}", output_path.display());
    println!("{}", paint(&message, Tone::Success, colored));

    if should_open {
        println!("Opening {}...", format_type.to_uppercase());
        open_file(&output_path)?;
    }

    Ok(())
}

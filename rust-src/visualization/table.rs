//! Dataset summary header and equipment table panels.

use crate::models::{EquipmentRecord, SummaryStatistics};

use super::panel::{Panel, PanelLine};


pub const SUMMARY_TITLE: &str = "Dataset Analysis Summary";
pub const TABLE_TITLE: &str = "Data Table";

const HEADERS: [&str; 5] = ["Equipment Name", "Type", "Flowrate", "Pressure", "Temperature"];


/// Headline numbers for a dataset.
pub fn render_summary(summary: &SummaryStatistics) -> Panel {
    if summary.is_empty() {
        return Panel::no_data(SUMMARY_TITLE);
    }

    Panel::rendered(
        SUMMARY_TITLE,
        vec![
            PanelLine::text(format!("Total Equipment: {} items", summary.total_count)),
            PanelLine::text(format!("Average Flowrate: {:.2}", summary.avg_flowrate)),
            PanelLine::text(format!("Average Pressure: {:.2}", summary.avg_pressure)),
            PanelLine::text(format!("Average Temperature: {:.2}", summary.avg_temperature)),
            PanelLine::blank(),
            PanelLine::text(format!("Equipment Types: {}", summary.distribution_text())),
        ],
    )
}


/// Records as a fixed-width table, in input order.
pub fn render_table(records: &[EquipmentRecord]) -> Panel {
    if records.is_empty() {
        return Panel::no_data(TABLE_TITLE);
    }

    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                r.name.clone(),
                r.equipment_type.clone(),
                format!("{:.2}", r.flowrate),
                format!("{:.2}", r.pressure),
                format!("{:.2}", r.temperature),
            ]
        })
        .collect();

    // Fit each column to its widest cell
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: [String; 5] = HEADERS.map(String::from);
    let mut lines = vec![format_row(&header, &widths)];
    lines.push(PanelLine::text(
        widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    ));
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));

    Panel::rendered(TABLE_TITLE, lines)
}


/// Text columns left-aligned, numeric columns right-aligned.
fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> PanelLine {
    let text = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            if i < 2 {
                format!("{:<width$}", cell, width = width)
            } else {
                format!("{:>width$}", cell, width = width)
            }
        })
        .collect::<Vec<_>>()
        .join("  ");

    PanelLine::text(text)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::summarize;

    #[test]
    fn test_summary_panel() {
        let records = vec![
            EquipmentRecord::new("P-1", "Pump", 100.0, 5.0, 110.0),
            EquipmentRecord::new("V-1", "Valve", 50.0, 3.0, 90.0),
        ];
        let panel = render_summary(&summarize(&records).unwrap());
        let lines = panel.plain_lines();

        assert_eq!(lines[0], "Total Equipment: 2 items");
        assert_eq!(lines[1], "Average Flowrate: 75.00");
        assert_eq!(lines[5], "Equipment Types: Pump: 1, Valve: 1");
    }

    #[test]
    fn test_table_columns_align() {
        let records = vec![
            EquipmentRecord::new("Pump-1", "Pump", 120.0, 5.2, 110.0),
            EquipmentRecord::new("Heat Exchanger-12", "HeatExchanger", 7.5, 12.25, 95.0),
        ];
        let lines = render_table(&records).plain_lines();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Equipment Name   "));
        assert!(lines[2].starts_with("Pump-1           "));
        assert!(lines[3].contains("HeatExchanger"));

        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
        assert!(lines[2].ends_with("110.00"));
        assert!(lines[3].ends_with(" 95.00"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(render_table(&[]).is_no_data());
        assert!(render_summary(&SummaryStatistics::default()).is_no_data());
    }
}

//! Dashboard composition and terminal output.

use crate::aggregation::{describe, summarize};
use crate::models::{EquipmentRecord, SummaryStatistics};

use super::bar_chart::render_bar_chart;
use super::palette::PARAMETER_COLORS;
use super::panel::{Panel, PanelLine};
use super::pie_chart::render_pie_chart;
use super::scatter::render_scatter;


const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub const DASHBOARD_TITLE: &str = "Charts & Analysis";
pub const AVERAGES_TITLE: &str = "Average Parameters";
pub const DISTRIBUTION_TITLE: &str = "Equipment Type Distribution";
pub const SCATTER_TITLE: &str = "Flowrate vs Pressure Analysis";
pub const TEMPERATURE_TITLE: &str = "Temperature Statistics";


/// Build the dashboard panels for one dataset.
///
/// Returns a single no-data panel when there are no records or the summary
/// is empty.
pub fn compose(records: &[EquipmentRecord], summary: &SummaryStatistics) -> Vec<Panel> {
    if records.is_empty() || summary.is_empty() {
        return vec![no_data_panel()];
    }

    let averages = [summary.avg_flowrate, summary.avg_pressure, summary.avg_temperature];
    let flowrates: Vec<f64> = records.iter().map(|r| r.flowrate).collect();
    let pressures: Vec<f64> = records.iter().map(|r| r.pressure).collect();
    let temperatures: Vec<f64> = records.iter().map(|r| r.temperature).collect();

    vec![
        render_bar_chart(
            AVERAGES_TITLE,
            &averages,
            &["Flowrate", "Pressure", "Temperature"],
            Some(&PARAMETER_COLORS[..]),
        ),
        render_pie_chart(DISTRIBUTION_TITLE, &summary.type_distribution),
        render_scatter(SCATTER_TITLE, &flowrates, &pressures, "Flowrate", "Pressure"),
        render_temperature_stats(&temperatures),
    ]
}


/// Summarize `records` locally, then compose.
pub fn compose_derived(records: &[EquipmentRecord]) -> Vec<Panel> {
    match summarize(records) {
        Ok(summary) => compose(records, &summary),
        Err(_) => vec![no_data_panel()],
    }
}


fn no_data_panel() -> Panel {
    Panel::no_data_with(DASHBOARD_TITLE, "No data available for visualization")
}


/// Descriptive statistics block for temperatures.
pub fn render_temperature_stats(temperatures: &[f64]) -> Panel {
    let Ok(stats) = describe(temperatures) else {
        return Panel::no_data(TEMPERATURE_TITLE);
    };

    Panel::rendered(
        TEMPERATURE_TITLE,
        vec![
            PanelLine::text("Temperature Distribution Analysis:"),
            PanelLine::blank(),
            PanelLine::text(format!("Count: {}", stats.count)),
            PanelLine::text(format!("Minimum: {:.2}°", stats.min)),
            PanelLine::text(format!("Maximum: {:.2}°", stats.max)),
            PanelLine::text(format!("Average: {:.2}°", stats.mean)),
            PanelLine::text(format!("Range: {:.2}°", stats.range)),
        ],
    )
}


/// The panel sequence currently on display.
///
/// Each rebuild discards the previous panels entirely.
#[derive(Debug, Default)]
pub struct Dashboard {
    panels: Vec<Panel>,
}


impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuild(&mut self, records: &[EquipmentRecord], summary: &SummaryStatistics) {
        self.panels = compose(records, summary);
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }
}


/// Print panels to stdout, separated by blank lines.
pub fn render_dashboard(panels: &[Panel], colored: bool, clear_screen: bool) {
    if clear_screen {
        print!("{}", CLEAR_SCREEN);
    }

    for panel in panels {
        println!("{}", panel.render(colored));
        println!();
    }
}

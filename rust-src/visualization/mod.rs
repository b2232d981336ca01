//! Visualization layer: text panels, dashboards and chart export.

mod bar_chart;
mod dashboard;
mod export;
mod palette;
mod panel;
mod pie_chart;
mod scatter;
mod table;

#[allow(unused_imports)]
pub use bar_chart::{render_bar_chart, BAR_WIDTH};
#[allow(unused_imports)]
pub use dashboard::{compose, compose_derived, render_dashboard, Dashboard};
pub use export::{export_dashboard_png, export_dashboard_svg, open_file};
#[allow(unused_imports)]
pub use palette::{palette_color, Rgb, PALETTE};
pub use panel::Panel;
#[allow(unused_imports)]
pub use pie_chart::render_pie_chart;
#[allow(unused_imports)]
pub use scatter::render_scatter;
pub use table::{render_summary, render_table};

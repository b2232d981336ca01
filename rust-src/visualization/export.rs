//! SVG and PNG rendering of the dashboard charts.

use std::f64::consts::PI;
use std::path::Path;

use anyhow::{Context, Result};

use crate::aggregation::describe;
use crate::models::{EquipmentRecord, SummaryStatistics};

use super::bar_chart::filled_cells;
use super::dashboard::{AVERAGES_TITLE, DISTRIBUTION_TITLE, SCATTER_TITLE, TEMPERATURE_TITLE};
use super::palette::{Rgb, PALETTE, PARAMETER_COLORS};
use super::pie_chart::pie_slices;
use super::scatter::{correlation_sign, AxisBounds};


// Page colors
const PAGE_BG: &str = "#FFFFFF";
const TEXT: &str = "#212529";
const TEXT_SECONDARY: &str = "#6C757D";
const AXIS: &str = "#ADB5BD";
const PANEL_BG: &str = "#F8F9FA";

// Layout
const WIDTH: i32 = 900;
const MARGIN: i32 = 40;
const SECTION_GAP: i32 = 30;
const BAR_PIXELS: usize = 500;
const BAR_HEIGHT: i32 = 26;
const PIE_RADIUS: f64 = 110.0;
const PLOT_WIDTH: f64 = 700.0;
const PLOT_HEIGHT: f64 = 260.0;
const POINT_RADIUS: f64 = 5.0;

const DEFAULT_TITLE: &str = "Equipment Dataset Analysis";


/// Export the dashboard as SVG.
pub fn export_dashboard_svg(
    records: &[EquipmentRecord],
    summary: &SummaryStatistics,
    output_path: &Path,
    title: Option<&str>,
) -> Result<()> {
    let svg_content = generate_svg(records, summary, title);

    std::fs::write(output_path, svg_content)
        .with_context(|| format!("Failed to write SVG to {}", output_path.display()))?;

    Ok(())
}


/// Export the dashboard as PNG.
pub fn export_dashboard_png(
    records: &[EquipmentRecord],
    summary: &SummaryStatistics,
    output_path: &Path,
    title: Option<&str>,
) -> Result<()> {
    let svg_content = generate_svg(records, summary, title);

    let tree = resvg::usvg::Tree::from_str(
        &svg_content,
        &resvg::usvg::Options::default(),
    ).context("Failed to parse SVG")?;

    let size = tree.size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width() as u32, size.height() as u32)
        .context("Failed to create pixmap")?;

    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap.save_png(output_path)
        .with_context(|| format!("Failed to save PNG to {}", output_path.display()))?;

    Ok(())
}


/// Generate the SVG document for a dataset.
fn generate_svg(
    records: &[EquipmentRecord],
    summary: &SummaryStatistics,
    title: Option<&str>,
) -> String {
    let display_title = escape_xml(title.unwrap_or(DEFAULT_TITLE));

    let mut body = Vec::new();
    let mut y = 70;

    if records.is_empty() || summary.is_empty() {
        body.push(format!(
            r#"<text x="{}" y="{}" class="label">No data available for visualization</text>"#,
            MARGIN, y + 20
        ));
        y += 60;
    } else {
        y = draw_averages(&mut body, summary, y) + SECTION_GAP;
        y = draw_distribution(&mut body, summary, y) + SECTION_GAP;
        y = draw_scatter(&mut body, records, y) + SECTION_GAP;
        y = draw_temperature(&mut body, records, y);
    }

    let height = y + MARGIN;

    let mut svg_parts = vec![
        format!(r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#, WIDTH, height),
        "<style>".to_string(),
        format!("  .title {{ fill: {}; font: bold 20px sans-serif; }}", TEXT),
        format!("  .heading {{ fill: {}; font: bold 15px sans-serif; }}", TEXT),
        format!("  .label {{ fill: {}; font: 12px sans-serif; }}", TEXT),
        format!("  .muted {{ fill: {}; font: 11px sans-serif; }}", TEXT_SECONDARY),
        "</style>".to_string(),
        format!(r#"<rect width="{}" height="{}" fill="{}"/>"#, WIDTH, height, PAGE_BG),
        format!(r#"<text x="{}" y="40" class="title">{}</text>"#, MARGIN, display_title),
    ];
    svg_parts.extend(body);
    svg_parts.push("</svg>".to_string());

    svg_parts.join("\n")
}


/// Horizontal bars for the three parameter averages. Returns the next free y.
fn draw_averages(parts: &mut Vec<String>, summary: &SummaryStatistics, top: i32) -> i32 {
    parts.push(heading(AVERAGES_TITLE, top));

    let values = [summary.avg_flowrate, summary.avg_pressure, summary.avg_temperature];
    let labels = ["Flowrate", "Pressure", "Temperature"];
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut y = top + 15;
    for ((label, value), color) in labels.iter().zip(values).zip(PARAMETER_COLORS) {
        let width = filled_cells(value, max_value, BAR_PIXELS);

        parts.push(format!(
            r#"<text x="{}" y="{}" class="label">{}</text>"#,
            MARGIN, y + 18, label
        ));
        parts.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            MARGIN + 110, y, BAR_PIXELS, BAR_HEIGHT, PANEL_BG
        ));
        parts.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            MARGIN + 110, y, width, BAR_HEIGHT, color
        ));
        parts.push(format!(
            r#"<text x="{}" y="{}" class="label">{:.2}</text>"#,
            MARGIN + 120 + BAR_PIXELS as i32, y + 18, value
        ));

        y += BAR_HEIGHT + 8;
    }

    y
}


/// Pie of the type distribution with a legend. Returns the next free y.
fn draw_distribution(parts: &mut Vec<String>, summary: &SummaryStatistics, top: i32) -> i32 {
    parts.push(heading(DISTRIBUTION_TITLE, top));

    let slices = pie_slices(&summary.type_distribution);
    let cx = MARGIN as f64 + PIE_RADIUS + 10.0;
    let cy = top as f64 + 20.0 + PIE_RADIUS;

    let mut start = -PI / 2.0;
    for slice in &slices {
        let fraction = slice.percentage / 100.0;
        if fraction <= 0.0 {
            continue;
        }

        if fraction >= 0.9999 {
            parts.push(format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
                cx, cy, PIE_RADIUS, slice.color
            ));
            continue;
        }

        let end = start + fraction * 2.0 * PI;
        parts.push(arc_path(cx, cy, PIE_RADIUS, start, end, slice.color));
        start = end;
    }

    // Legend
    let legend_x = MARGIN + (2.0 * PIE_RADIUS) as i32 + 60;
    let mut legend_y = top + 40;
    for slice in &slices {
        parts.push(format!(
            r#"<rect x="{}" y="{}" width="12" height="12" fill="{}"/>"#,
            legend_x, legend_y - 10, slice.color
        ));
        parts.push(format!(
            r#"<text x="{}" y="{}" class="label">{}: {} ({:.1}%)</text>"#,
            legend_x + 20, legend_y, escape_xml(&slice.category), slice.value, slice.percentage
        ));
        legend_y += 22;
    }

    (top + 40 + (2.0 * PIE_RADIUS) as i32).max(legend_y)
}


/// Flowrate vs pressure scatter plot. Returns the next free y.
fn draw_scatter(parts: &mut Vec<String>, records: &[EquipmentRecord], top: i32) -> i32 {
    parts.push(heading(SCATTER_TITLE, top));

    let xs: Vec<f64> = records.iter().map(|r| r.flowrate).collect();
    let ys: Vec<f64> = records.iter().map(|r| r.pressure).collect();

    let left = MARGIN as f64 + 50.0;
    let plot_top = top as f64 + 20.0;
    let bottom = plot_top + PLOT_HEIGHT;

    parts.push(format!(
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="1"/>"#,
        left, bottom, left + PLOT_WIDTH, bottom, AXIS
    ));
    parts.push(format!(
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="1"/>"#,
        left, plot_top, left, bottom, AXIS
    ));

    if let (Some(xb), Some(yb)) = (AxisBounds::from_values(&xs), AxisBounds::from_values(&ys)) {
        if !xb.is_degenerate() && !yb.is_degenerate() {
            for (&x, &y) in xs.iter().zip(&ys) {
                let px = left + xb.normalize(x) * PLOT_WIDTH;
                let py = bottom - yb.normalize(y) * PLOT_HEIGHT;
                parts.push(format!(
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" fill-opacity="0.8"/>"#,
                    px, py, POINT_RADIUS, PALETTE[1]
                ));
            }
        }

        parts.push(format!(
            r#"<text x="{:.2}" y="{:.2}" class="muted">{:.2}</text>"#,
            left, bottom + 16.0, xb.min
        ));
        parts.push(format!(
            r#"<text x="{:.2}" y="{:.2}" class="muted" text-anchor="end">{:.2}</text>"#,
            left + PLOT_WIDTH, bottom + 16.0, xb.max
        ));
        parts.push(format!(
            r#"<text x="{:.2}" y="{:.2}" class="muted" text-anchor="end">{:.2}</text>"#,
            left - 6.0, bottom, yb.min
        ));
        parts.push(format!(
            r#"<text x="{:.2}" y="{:.2}" class="muted" text-anchor="end">{:.2}</text>"#,
            left - 6.0, plot_top + 10.0, yb.max
        ));
    }

    parts.push(format!(
        r#"<text x="{:.2}" y="{:.2}" class="label" text-anchor="middle">Flowrate</text>"#,
        left + PLOT_WIDTH / 2.0, bottom + 32.0
    ));
    parts.push(format!(
        r#"<text x="{:.2}" y="{:.2}" class="label">Pressure</text>"#,
        left, plot_top - 4.0
    ));
    parts.push(format!(
        r#"<text x="{:.2}" y="{:.2}" class="label" text-anchor="end">Data Points: {} | Correlation: {}</text>"#,
        left + PLOT_WIDTH, bottom + 32.0, xs.len(), correlation_sign(&xs, &ys)
    ));

    (bottom + 40.0) as i32
}


/// Temperature statistics as text lines. Returns the next free y.
fn draw_temperature(parts: &mut Vec<String>, records: &[EquipmentRecord], top: i32) -> i32 {
    parts.push(heading(TEMPERATURE_TITLE, top));

    let temperatures: Vec<f64> = records.iter().map(|r| r.temperature).collect();
    let Ok(stats) = describe(&temperatures) else {
        return top + 20;
    };

    let lines = [
        format!("Count: {}", stats.count),
        format!("Minimum: {:.2}°", stats.min),
        format!("Maximum: {:.2}°", stats.max),
        format!("Average: {:.2}°", stats.mean),
        format!("Range: {:.2}°", stats.range),
    ];

    let mut y = top + 25;
    for line in lines {
        parts.push(format!(r#"<text x="{}" y="{}" class="label">{}</text>"#, MARGIN, y, line));
        y += 18;
    }

    y
}


fn heading(text: &str, y: i32) -> String {
    format!(r#"<text x="{}" y="{}" class="heading">{}</text>"#, MARGIN, y, text)
}


/// Pie wedge from angle `start` to `end` (radians, clockwise from +x).
fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64, color: Rgb) -> String {
    let (x0, y0) = (cx + r * start.cos(), cy + r * start.sin());
    let (x1, y1) = (cx + r * end.cos(), cy + r * end.sin());
    let large_arc = if end - start > PI { 1 } else { 0 };

    format!(
        r#"<path d="M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z" fill="{}" stroke="{}" stroke-width="1"/>"#,
        cx, cy, x0, y0, r, r, large_arc, x1, y1, color, PAGE_BG
    )
}


/// Escape text for inclusion in SVG markup.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}


/// Open file with default application.
pub fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.to_string_lossy()])
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::summarize;
    use tempfile::TempDir;

    fn sample_records() -> Vec<EquipmentRecord> {
        vec![
            EquipmentRecord::new("P-1", "Pump", 120.0, 5.2, 110.0),
            EquipmentRecord::new("P-2", "Pump", 130.0, 5.6, 115.0),
            EquipmentRecord::new("V-1", "Valve & Fitting", 60.0, 4.1, 105.0),
        ]
    }

    #[test]
    fn test_svg_contains_every_chart() {
        let records = sample_records();
        let summary = summarize(&records).unwrap();
        let svg = generate_svg(&records, &summary, None);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(AVERAGES_TITLE));
        assert!(svg.contains(DISTRIBUTION_TITLE));
        assert!(svg.contains(SCATTER_TITLE));
        assert!(svg.contains("Average: 110.00°"));
        assert_eq!(svg.matches("<path").count(), 2);
        assert_eq!(svg.matches(r#"fill-opacity="0.8""#).count(), 3);
        assert!(svg.contains("Valve &amp; Fitting"));
    }

    #[test]
    fn test_svg_degenerate_axis_skips_points() {
        let records = vec![
            EquipmentRecord::new("A", "Pump", 10.0, 1.0, 50.0),
            EquipmentRecord::new("B", "Pump", 10.0, 2.0, 60.0),
        ];
        let summary = summarize(&records).unwrap();
        let svg = generate_svg(&records, &summary, Some("Plant"));

        assert!(!svg.contains(r#"fill-opacity="0.8""#));
        // single category is drawn as a full circle, not a wedge
        assert_eq!(svg.matches("<path").count(), 0);
        assert!(svg.contains("Plant"));
    }

    #[test]
    fn test_svg_no_data() {
        let svg = generate_svg(&[], &SummaryStatistics::default(), None);
        assert!(svg.contains("No data available for visualization"));
        assert!(!svg.contains(AVERAGES_TITLE));
    }

    #[test]
    fn test_export_svg_writes_file() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("dashboard.svg");
        let records = sample_records();
        let summary = summarize(&records).unwrap();

        export_dashboard_svg(&records, &summary, &path, None).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains(DEFAULT_TITLE));
    }

    #[test]
    fn test_export_png_writes_file() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("dashboard.png");
        let records = sample_records();
        let summary = summarize(&records).unwrap();

        export_dashboard_png(&records, &summary, &path, None).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}

//! Categorical distribution chart drawn as percentage bars.

use std::collections::BTreeMap;

use crate::aggregation::safe_ratio;

use super::bar_chart::FULL_GLYPH;
use super::palette::{palette_color, Rgb};
use super::panel::{Panel, PanelLine, Span};


pub const MARKER_GLYPH: char = '●';


/// One category of a distribution with its share of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: String,
    pub value: u64,
    pub percentage: f64,
    pub color: Rgb,
}


/// Percentages and palette colors for each category, in iteration order.
pub fn pie_slices(distribution: &BTreeMap<String, u64>) -> Vec<PieSlice> {
    // Summed as f64: counts read from a summary file may not fit a u64 total
    let total: f64 = distribution.values().map(|&v| v as f64).sum();

    distribution
        .iter()
        .enumerate()
        .map(|(i, (category, &value))| PieSlice {
            category: category.clone(),
            value,
            percentage: safe_ratio(value as f64, total, 0.0) * 100.0,
            color: palette_color(i),
        })
        .collect()
}


/// Render a distribution as one marker, label and bar per category.
///
/// A category holding 100% of the total gets a 50-glyph bar.
pub fn render_pie_chart(title: &str, distribution: &BTreeMap<String, u64>) -> Panel {
    if distribution.is_empty() {
        return Panel::no_data(title);
    }

    let lines = pie_slices(distribution)
        .into_iter()
        .map(|slice| {
            let bar_length = (slice.percentage / 2.0).floor().max(0.0) as usize;

            PanelLine::new(vec![
                Span::colored(MARKER_GLYPH.to_string(), Some(slice.color)),
                Span::plain(format!(
                    " {}: {} ({:.1}%) ",
                    slice.category, slice.value, slice.percentage
                )),
                Span::colored(FULL_GLYPH.to_string().repeat(bar_length), Some(slice.color)),
            ])
        })
        .collect();

    Panel::rendered(title, lines)
}

//! Scatter plots on a fixed character grid.

use crate::aggregation::safe_ratio;

use super::panel::{Panel, PanelLine};


pub const GRID_SIZE: usize = 10;
pub const BACKGROUND_GLYPH: char = '·';
pub const POINT_GLYPH: char = '●';


/// Observed range of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}


impl AxisBounds {
    /// Bounds of `values`, or `None` when empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        Some(Self {
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// An axis with no spread cannot be normalized.
    pub fn is_degenerate(&self) -> bool {
        !(self.max > self.min)
    }

    /// Position of `value` within the bounds as a fraction in `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        safe_ratio(value - self.min, self.span(), 0.0)
    }
}


/// Raw dot-product sign used as the correlation indicator.
///
/// No mean-centering is applied, so this is not a Pearson correlation.
pub fn correlation_sign(xs: &[f64], ys: &[f64]) -> &'static str {
    let dot: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
    if dot > 0.0 {
        "Positive"
    } else {
        "Negative"
    }
}


/// Grid cell `(row, col)` for a point, with row 0 at the top.
///
/// Returns `None` when either axis is degenerate.
pub fn grid_cell(x: f64, y: f64, x_bounds: AxisBounds, y_bounds: AxisBounds) -> Option<(usize, usize)> {
    if x_bounds.is_degenerate() || y_bounds.is_degenerate() {
        return None;
    }

    let last = (GRID_SIZE - 1) as f64;
    let col = (x_bounds.normalize(x) * last).floor().clamp(0.0, last) as usize;
    let row_from_bottom = (y_bounds.normalize(y) * last).floor().clamp(0.0, last) as usize;

    Some((GRID_SIZE - 1 - row_from_bottom, col))
}


/// A square character grid with points plotted onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGrid {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
}


impl Default for ScatterGrid {
    fn default() -> Self {
        Self {
            cells: [[BACKGROUND_GLYPH; GRID_SIZE]; GRID_SIZE],
        }
    }
}


impl ScatterGrid {
    /// Plot every `(x, y)` pair; later points overwrite earlier ones.
    pub fn plot(xs: &[f64], ys: &[f64]) -> Self {
        let mut grid = Self::default();

        let (Some(x_bounds), Some(y_bounds)) = (AxisBounds::from_values(xs), AxisBounds::from_values(ys)) else {
            return grid;
        };

        for (&x, &y) in xs.iter().zip(ys) {
            if let Some((row, col)) = grid_cell(x, y, x_bounds, y_bounds) {
                grid.cells[row][col] = POINT_GLYPH;
            }
        }

        grid
    }

    #[allow(dead_code)]
    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == POINT_GLYPH
    }

    #[allow(dead_code)]
    pub fn marked_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == POINT_GLYPH)
            .count()
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.iter().collect()).collect()
    }
}


/// Render a summary block followed by the scatter grid.
pub fn render_scatter(title: &str, xs: &[f64], ys: &[f64], x_label: &str, y_label: &str) -> Panel {
    let (Some(x_bounds), Some(y_bounds)) = (AxisBounds::from_values(xs), AxisBounds::from_values(ys)) else {
        return Panel::no_data(title);
    };
    if xs.len() != ys.len() {
        return Panel::no_data(title);
    }

    let mut lines = vec![
        PanelLine::text(format!("{} vs {} Analysis:", x_label, y_label)),
        PanelLine::blank(),
        PanelLine::text(format!("Data Points: {}", xs.len())),
        PanelLine::text(format!("{} Range: {:.2} - {:.2}", x_label, x_bounds.min, x_bounds.max)),
        PanelLine::text(format!("{} Range: {:.2} - {:.2}", y_label, y_bounds.min, y_bounds.max)),
        PanelLine::blank(),
        PanelLine::text(format!("Correlation: {}", correlation_sign(xs, ys))),
        PanelLine::blank(),
        PanelLine::text("Scatter Plot Visualization:"),
        PanelLine::blank(),
    ];

    lines.extend(ScatterGrid::plot(xs, ys).rows().into_iter().map(PanelLine::text));

    Panel::rendered(title, lines)
}

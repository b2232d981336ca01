//! Horizontal proportional bar charts.

use crate::aggregation::safe_ratio;

use super::palette::Rgb;
use super::panel::{Panel, PanelLine, Span};


pub const BAR_WIDTH: usize = 40;
pub const FULL_GLYPH: char = '█';
pub const EMPTY_GLYPH: char = '░';


/// Number of filled cells for `value` on a bar scaled to `max_value`.
///
/// A non-positive maximum yields an empty bar.
pub fn filled_cells(value: f64, max_value: f64, width: usize) -> usize {
    let ratio = safe_ratio(value, max_value, 0.0);
    let filled = (ratio * width as f64).floor();

    if filled <= 0.0 {
        0
    } else {
        (filled as usize).min(width)
    }
}


/// Render `values` as labeled bars scaled to the largest value.
///
/// `colors` apply per index; bars past the end of `colors` are unstyled.
pub fn render_bar_chart(
    title: &str,
    values: &[f64],
    labels: &[&str],
    colors: Option<&[Rgb]>,
) -> Panel {
    if values.is_empty() || labels.is_empty() || values.len() != labels.len() {
        return Panel::no_data(title);
    }

    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let lines = labels
        .iter()
        .zip(values)
        .enumerate()
        .map(|(i, (label, &value))| {
            let filled = filled_cells(value, max_value, BAR_WIDTH);
            let color = colors.and_then(|c| c.get(i).copied());

            PanelLine::new(vec![
                Span::plain(format!("{:>width$}: ", label, width = label_width)),
                Span::colored(FULL_GLYPH.to_string().repeat(filled), color),
                Span::plain(EMPTY_GLYPH.to_string().repeat(BAR_WIDTH - filled)),
                Span::plain(format!(" {:.2}", value)),
            ])
        })
        .collect();

    Panel::rendered(title, lines)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn count_full(line: &str) -> usize {
        line.chars().filter(|&c| c == FULL_GLYPH).count()
    }

    #[test]
    fn test_one_line_per_value() {
        let panel = render_bar_chart("Avg", &[10.0, 20.0, 40.0], &["A", "B", "C"], None);
        let lines = panel.plain_lines();

        assert_eq!(lines.len(), 3);
        assert_eq!(count_full(&lines[0]), 10);
        assert_eq!(count_full(&lines[1]), 20);
        assert_eq!(count_full(&lines[2]), 40);
        assert!(lines[2].ends_with(" 40.00"));
        assert_eq!(lines[0], format!("A: {}{} 10.00", "█".repeat(10), "░".repeat(30)));
    }

    #[test]
    fn test_fill_is_monotonic() {
        let mut previous = 0;
        for step in 0..=20 {
            let value = step as f64 * 5.0;
            let panel = render_bar_chart("Avg", &[value, 100.0], &["x", "max"], None);
            let filled = count_full(&panel.plain_lines()[0]);
            assert!(filled >= previous);
            previous = filled;
        }
        assert_eq!(previous, BAR_WIDTH);
    }

    #[test]
    fn test_labels_are_right_aligned() {
        let panel = render_bar_chart("Avg", &[1.0, 2.0], &["Flowrate", "Temp"], None);
        let lines = panel.plain_lines();
        assert!(lines[0].starts_with("Flowrate: "));
        assert!(lines[1].starts_with("    Temp: "));
    }

    #[test]
    fn test_empty_and_mismatched() {
        assert!(render_bar_chart("Avg", &[], &[], None).is_no_data());
        assert!(render_bar_chart("Avg", &[1.0], &[], None).is_no_data());
        assert!(render_bar_chart("Avg", &[1.0, 2.0], &["a"], None).is_no_data());
    }

    #[test]
    fn test_non_positive_max() {
        let panel = render_bar_chart("Avg", &[0.0, -3.0], &["a", "b"], None);
        for line in panel.plain_lines() {
            assert_eq!(count_full(&line), 0);
            assert_eq!(line.chars().filter(|&c| c == EMPTY_GLYPH).count(), BAR_WIDTH);
        }
    }

    #[test]
    fn test_negative_value_with_positive_max() {
        assert_eq!(filled_cells(-5.0, 10.0, BAR_WIDTH), 0);
        assert_eq!(filled_cells(10.0, 10.0, BAR_WIDTH), BAR_WIDTH);
        assert_eq!(filled_cells(3.0, 4.0, BAR_WIDTH), 30);
    }

    #[test]
    fn test_colors_apply_per_index() {
        let red = Rgb::new(255, 0, 0);
        let panel = render_bar_chart("Avg", &[1.0, 2.0], &["a", "b"], Some(&[red][..]));

        let lines = panel.lines();
        assert_eq!(lines[0].spans[1].color, Some(red));
        assert_eq!(lines[1].spans[1].color, None);
    }
}

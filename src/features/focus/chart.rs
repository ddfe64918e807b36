//! Bar chart of time spent per task.
//!
//! This is display glue: it shapes task totals into bars and renders them
//! as text. Placeholder bars shown for an empty history live here and only
//! here, never in the session store.

use serde::{Deserialize, Serialize};

use super::store::TaskTotals;

/// Demo bars shown when there is no history yet.
pub const PLACEHOLDER_BARS: [(&str, f64); 3] = [("Email", 15.0), ("Coding", 45.0), ("Meetings", 30.0)];

const FULL_BLOCK: char = '█';

/// A single bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    /// Task label
    pub label: String,
    /// Time spent in minutes
    pub minutes: f64,
}

/// Data for one rendering of the chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Bars in display order
    pub bars: Vec<ChartBar>,
    /// True when the bars are demo values, not recorded history
    pub placeholder: bool,
}

impl ChartData {
    /// Bars for real task totals, in the totals' order.
    #[must_use]
    pub fn from_totals(totals: &TaskTotals) -> Self {
        Self {
            bars: totals
                .iter()
                .map(|t| ChartBar {
                    label: t.task.clone(),
                    minutes: t.minutes(),
                })
                .collect(),
            placeholder: false,
        }
    }

    /// The demo chart.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            bars: PLACEHOLDER_BARS
                .iter()
                .map(|(label, minutes)| ChartBar {
                    label: (*label).to_string(),
                    minutes: *minutes,
                })
                .collect(),
            placeholder: true,
        }
    }

    /// Swap in the demo chart if there are no bars.
    #[must_use]
    pub fn with_placeholder_fallback(self) -> Self {
        if self.bars.is_empty() {
            Self::placeholder()
        } else {
            self
        }
    }

    /// Largest bar value, at least 1 so scaling never divides by zero.
    #[must_use]
    pub fn max_minutes(&self) -> f64 {
        self.bars
            .iter()
            .map(|b| b.minutes)
            .fold(0.0_f64, f64::max)
            .max(1.0)
    }
}

/// Render a horizontal bar chart.
///
/// Labels are padded or truncated to `label_width`; bars are scaled so the
/// largest value fills `bar_width` cells.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_bar_chart(data: &ChartData, label_width: usize, bar_width: usize) -> String {
    if data.bars.is_empty() {
        return String::new();
    }

    let label_width = label_width.max(4);
    let max_value = data.max_minutes();
    let mut lines = Vec::new();

    for bar in &data.bars {
        let label = truncate_label(&bar.label, label_width);
        let bar_length = ((bar.minutes / max_value) * bar_width as f64).round() as usize;
        let bar_length = bar_length.min(bar_width);
        let filled = FULL_BLOCK.to_string().repeat(bar_length);
        let padding = " ".repeat(bar_width - bar_length);

        lines.push(format!("{label} |{filled}{padding} {:.1}m", bar.minutes));
    }

    if data.placeholder {
        lines.push("(sample data: no sessions recorded yet)".to_string());
    }

    lines.join("\n")
}

fn truncate_label(label: &str, width: usize) -> String {
    let count = label.chars().count();
    if count > width {
        let kept: String = label.chars().take(width - 3).collect();
        format!("{kept}...")
    } else {
        format!("{label}{}", " ".repeat(width - count))
    }
}

/// The chart as currently shown.
///
/// Any change to the data destroys the old chart and builds a new one; a
/// chart is never patched in place.
#[derive(Debug, Default)]
pub struct ChartView {
    current: Option<ChartData>,
    #[cfg(test)]
    generation: u64,
}

impl ChartView {
    /// Create a view with nothing rendered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Throw away the current chart and show `data` instead.
    pub fn rebuild(&mut self, data: ChartData) {
        self.destroy();
        self.current = Some(data);
        #[cfg(test)]
        {
            self.generation += 1;
        }
    }

    /// Throw away the current chart.
    pub fn destroy(&mut self) {
        self.current = None;
    }

    /// The chart on screen, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&ChartData> {
        self.current.as_ref()
    }

    /// How many times the chart has been built.
    #[cfg(test)]
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(bars: &[(&str, f64)]) -> ChartData {
        ChartData {
            bars: bars
                .iter()
                .map(|(l, m)| ChartBar {
                    label: (*l).to_string(),
                    minutes: *m,
                })
                .collect(),
            placeholder: false,
        }
    }

    #[test]
    fn test_placeholder_values() {
        let chart = ChartData::default().with_placeholder_fallback();

        assert!(chart.placeholder);
        let labels: Vec<_> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Email", "Coding", "Meetings"]);
        assert!((chart.bars[1].minutes - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fallback_keeps_real_data() {
        let chart = data(&[("Write", 3.0)]).with_placeholder_fallback();
        assert!(!chart.placeholder);
        assert_eq!(chart.bars.len(), 1);
    }

    #[test]
    fn test_render_bar_chart_scales_to_max() {
        let output = render_bar_chart(&data(&[("Write", 3.0), ("Read", 1.5)]), 6, 10);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Write  |██████████ 3.0m"));
        assert!(lines[1].starts_with("Read   |█████      1.5m"));
    }

    #[test]
    fn test_render_bar_chart_truncates_labels() {
        let output = render_bar_chart(&data(&[("A very long task name", 1.0)]), 8, 4);
        assert!(output.starts_with("A ver... |"));
    }

    #[test]
    fn test_render_marks_placeholder() {
        let output = render_bar_chart(&ChartData::placeholder(), 10, 10);
        assert!(output.contains("sample data"));
    }

    #[test]
    fn test_render_empty() {
        assert!(render_bar_chart(&ChartData::default(), 10, 10).is_empty());
    }

    #[test]
    fn test_small_values_scale_against_one_minute() {
        let output = render_bar_chart(&data(&[("Tiny", 0.5)]), 4, 10);
        assert!(output.contains("|█████      0.5m"));
    }

    #[test]
    fn test_chart_view_rebuild_replaces() {
        let mut view = ChartView::new();
        assert!(view.current().is_none());

        view.rebuild(data(&[("Write", 1.0)]));
        view.rebuild(data(&[("Read", 2.0)]));

        assert_eq!(view.generation(), 2);
        assert_eq!(view.current().unwrap().bars[0].label, "Read");

        view.destroy();
        assert!(view.current().is_none());
    }
}

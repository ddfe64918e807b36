use colored::Colorize;

use crate::features::focus::{render_bar_chart, ChartData, Session, SessionStats, TaskTotals};

/// Width of the task column in the chart.
const CHART_LABEL_WIDTH: usize = 16;

/// Format recent sessions, newest first
pub fn format_history_pretty(sessions: &[Session], total: usize) -> String {
    if sessions.is_empty() {
        return format!("{}\n  No sessions yet", "Recent Sessions".bold());
    }

    let mut output = format!(
        "{} ({} of {})\n",
        "Recent Sessions".bold(),
        sessions.len(),
        total
    );
    output.push_str(&"─".repeat(50));
    output.push('\n');

    for session in sessions {
        let when = session.date_local().format("%Y-%m-%d %H:%M");
        output.push_str(&format!(
            "  {}  {}  {}\n",
            when.to_string().dimmed(),
            session.format_duration().cyan(),
            session.task().bold()
        ));
    }

    output
}

/// Format total focus time, session count and per-task breakdown
pub fn format_stats_pretty(stats: &SessionStats, totals: &TaskTotals) -> String {
    let mut lines = vec![
        format!("{}", "Focus Statistics".bold()),
        "─".repeat(30),
        format!("  Total time: {}", stats.format_total().green()),
        format!("  Sessions: {}", stats.count.to_string().cyan()),
    ];

    if !totals.is_empty() {
        lines.push(String::new());
        lines.push(format!("{}", "By task".bold()));
        for total in totals.iter() {
            lines.push(format!("  {:.1}m  {}", total.minutes(), total.task));
        }
    }

    lines.join("\n")
}

/// Format the per-task bar chart
pub fn format_chart_pretty(data: &ChartData, bar_width: usize) -> String {
    if data.bars.is_empty() {
        return format!("{}\n  No sessions yet", "Time by Task".bold());
    }

    format!(
        "{}\n{}",
        "Time by Task".bold(),
        render_bar_chart(data, CHART_LABEL_WIDTH, bar_width)
    )
}

/// Confirmation line for a newly recorded session
pub fn format_session_recorded_pretty(session: &Session) -> String {
    format!(
        "{} Recorded {} on {}",
        "✓".green(),
        session.format_duration().cyan(),
        session.task().bold()
    )
}

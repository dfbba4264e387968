//! Hover text for one chart row, and the tick labels for the log-log axis.

use strum::IntoEnumIterator;

use crate::domain::DateIndex;
use crate::models::{Scale, SeriesRow, Trace};
use crate::utils::TimeUtils;
use crate::utils::format_utils::usd;

/// dayth values labelled on the log-log x axis
pub const DEFAULT_LOGLOG_TICKS: [i64; 8] = [1, 10, 100, 1000, 2000, 3000, 4000, 5000];

fn format_value(value: f64, scale: Scale) -> String {
    match scale {
        Scale::Linear => usd(value),
        Scale::Log2 | Scale::LogLog => format!("{:.1}", value),
    }
}

/// `"<date>: <observed> (pred: ..) (plus bias: ..) (minus bias: ..)"`
/// On `LogLog` the x value is a dayth, so it is mapped back to a date first.
pub fn hover_summary(row: &SeriesRow, scale: Scale, index: &DateIndex) -> String {
    let x_label = match scale {
        Scale::LogLog => index
            .to_date(row.dayth)
            .map(TimeUtils::format_date)
            .unwrap_or_else(|| row.dayth.to_string()),
        Scale::Linear | Scale::Log2 => TimeUtils::format_date(row.date),
    };

    let mut text = format!("{}: ", x_label);
    for trace in Trace::iter() {
        let Some(value) = row.value(trace, scale) else {
            continue;
        };
        match trace.hover_label() {
            Some(label) => text.push_str(&format!(" ({}: {})", label, format_value(value, scale))),
            None => text.push_str(&format_value(value, scale)),
        }
    }
    text
}

/// `(dayth, date label)` per tick. Ticks outside the calendar are dropped.
pub fn loglog_ticks(index: &DateIndex, tickvals: &[i64]) -> Vec<(i64, String)> {
    tickvals
        .iter()
        .filter_map(|&dayth| {
            index
                .to_date(dayth)
                .map(|date| (dayth, TimeUtils::format_date(date)))
        })
        .collect()
}

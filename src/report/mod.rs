// Text presentation of the forecast (stands in for the charts of a dashboard)
pub mod hover;
pub mod live;
pub mod query;
pub mod text;

pub use hover::{DEFAULT_LOGLOG_TICKS, hover_summary, loglog_ticks};
pub use live::LiveSignal;
pub use query::{PredictionQuery, QueryOutcome};
pub use text::REPORT_TEXT;

use chrono::NaiveDate;
use strum::IntoEnumIterator;

use crate::domain::DateIndex;
use crate::models::{ForecastSeries, Scale};
use crate::utils::TimeUtils;

/// Everything the report shows, borrowed from one run
pub struct Report<'a> {
    pub series: &'a ForecastSeries,
    pub index: &'a DateIndex,
    pub live: Option<LiveSignal>,
    /// Row to describe in the per-scale hover lines (usually today)
    pub focus_date: NaiveDate,
}

impl Report<'_> {
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = vec![REPORT_TEXT.title.to_string(), String::new()];

        if let Some(live) = &self.live {
            lines.extend(live.lines());
            lines.push(String::new());
        }

        lines.push(REPORT_TEXT.series_heading.to_string());
        lines.extend(self.series_lines());
        lines.push(String::new());

        if let Some(row) = self.series.row_at(self.focus_date) {
            for scale in Scale::iter() {
                lines.push(format!("[{}] {}", scale, hover_summary(row, scale, self.index)));
            }
            lines.push(String::new());
        }

        lines.push(format!("{}:", REPORT_TEXT.ticks_heading));
        for (dayth, label) in loglog_ticks(self.index, &DEFAULT_LOGLOG_TICKS) {
            lines.push(format!("  {:>5} -> {}", dayth, label));
        }
        lines.push(String::new());
        lines.push(REPORT_TEXT.footer.to_string());

        lines.join("\n")
    }

    fn series_lines(&self) -> Vec<String> {
        let show = |d: Option<NaiveDate>| d.map(TimeUtils::format_date).unwrap_or_default();
        vec![
            format!(
                "  {} rows from {} to {} ({} observed)",
                self.series.len(),
                show(self.series.first_date()),
                show(self.series.last_date()),
                self.series.observed_count()
            ),
            format!(
                "  last observation {}, horizon {}",
                show(self.series.last_known_date()),
                TimeUtils::format_date(self.series.horizon())
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FORECAST;
    use crate::config::forecast::ymd;
    use crate::domain::PricePoint;
    use crate::models::{ModelParameters, SeriesAssembler, SignalEvaluator};

    #[test]
    fn test_render_contains_sections() {
        let assembler = SeriesAssembler::new(ModelParameters::new(-17.01593313, 5.84509376), &FORECAST);
        let history = vec![
            PricePoint::new(ymd(2025, 1, 1), 94_419.8),
            PricePoint::new(ymd(2025, 1, 2), 96_886.9),
        ];
        let series = assembler.assemble(&history, ymd(2025, 1, 10)).unwrap();
        let live = LiveSignal::evaluate(
            history[1],
            assembler.model(),
            &SignalEvaluator::new(FORECAST.signal),
        )
        .unwrap();

        let report = Report {
            series: &series,
            index: assembler.date_index(),
            live: Some(live),
            focus_date: ymd(2025, 1, 5),
        };
        let text = report.render();

        assert!(text.contains("Live Price 2025-01-02"));
        assert!(text.contains("10 rows from 2025-01-01 to 2025-01-10 (2 observed)"));
        assert!(text.contains("[Linear Scale] 2025-01-05: "));
        assert!(text.contains("[Log-Log Scale] 2025-01-05: "));
        assert!(text.contains("    1 -> 2009-01-05"));
        assert!(text.contains(live.signal().description()));
    }
}

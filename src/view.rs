//! View-model builders
//!
//! Turns the raw report documents into what the dialogs actually show:
//! an ordered KPI map, a sanitized HTML summary, and (for the queue
//! report) the covered date range. Built fresh per render, synchronous,
//! no error path — bad data degrades to less data.

use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::warn;

use crate::markdown::render_summary_html;
use crate::models::{CallReport, DisplayKpi, LongestCall, QueueMetrics, QueueReport};

/// Placeholder when neither interval datetime can be parsed.
pub const UNKNOWN_PERIOD: &str = "Unknown period";

/// Display projection of the call-history report.
#[derive(Debug, Clone)]
pub struct CallReportView {
    pub display_kpi: DisplayKpi,
    pub summary_html: String,
}

impl CallReportView {
    /// Flatten the raw KPI map for display.
    ///
    /// Scalar entries are copied verbatim. A structured `longest` entry
    /// is collapsed to `"<duration> (<from> → <to>)"` with the duration
    /// left raw — the presentation layer runs it through
    /// [`crate::format::format_duration`]. A scalar `longest` stays
    /// untouched.
    pub fn build(report: &CallReport) -> Self {
        let mut display_kpi = report.kpi.values.clone();

        match &report.kpi.longest {
            Some(LongestCall::Detail {
                duration,
                from_name,
                to_name,
                ..
            }) => {
                display_kpi.insert(
                    "longest".to_string(),
                    Value::String(format!("{} ({} → {})", duration, from_name, to_name)),
                );
            }
            Some(LongestCall::Scalar(value)) => {
                display_kpi.insert("longest".to_string(), value.clone());
            }
            None => {}
        }

        Self {
            display_kpi,
            summary_html: render_summary_html(&report.summary),
        }
    }
}

/// Display projection of the queue analytics report.
#[derive(Debug, Clone)]
pub struct QueueReportView {
    pub display_kpi: DisplayKpi,
    pub summary_html: String,
    pub date_range: String,
}

impl QueueReportView {
    /// Build the curated eight-entry KPI map plus summary and date range.
    ///
    /// Unlike the call report this is not a passthrough: the entries and
    /// their order are fixed, and the keys are already display labels.
    pub fn build(report: &QueueReport) -> Self {
        let m = &report.queue_metrics;

        let mut display_kpi = DisplayKpi::new();
        display_kpi.insert("Total Offered".to_string(), Value::from(m.total_offered));
        display_kpi.insert("Total Answered".to_string(), Value::from(m.total_answered));
        display_kpi.insert("Total Abandoned".to_string(), Value::from(m.total_abandoned));
        display_kpi.insert(
            "Answer Rate".to_string(),
            Value::String(format!("{}%", m.answer_rate)),
        );
        display_kpi.insert(
            "Abandonment Rate".to_string(),
            Value::String(format!("{}%", m.abandonment_rate)),
        );
        display_kpi.insert(
            "Avg Wait Time".to_string(),
            Value::String(format!("{}s", m.avg_wait_time_sec)),
        );
        display_kpi.insert(
            "Max Wait Time".to_string(),
            Value::String(format!("{}s", m.max_wait_time_sec)),
        );
        display_kpi.insert(
            "Avg Handle Time".to_string(),
            Value::String(format!("{:.1}s", m.avg_handle_time_sec)),
        );

        Self {
            display_kpi,
            summary_html: render_summary_html(&report.summary),
            date_range: date_range_of(m),
        }
    }
}

/// Date range covered by the report, derived from the two highlighted
/// intervals.
fn date_range_of(metrics: &QueueMetrics) -> String {
    calculate_date_range(
        metrics.peak_interval.as_ref().map(|i| i.datetime.as_str()),
        metrics
            .worst_abandon_interval
            .as_ref()
            .map(|i| i.datetime.as_str()),
    )
}

/// Compute a human date range from two interval timestamps.
///
/// The earlier timestamp becomes the start regardless of argument order;
/// equal timestamps land on the same calendar day and collapse to a
/// single date. Unparseable or missing datetimes never error: with one
/// usable timestamp the range is that single date, with none it is
/// [`UNKNOWN_PERIOD`].
pub fn calculate_date_range(first: Option<&str>, second: Option<&str>) -> String {
    let a = parse_interval_datetime(first);
    let b = parse_interval_datetime(second);

    match (a, b) {
        (Some(a), Some(b)) => {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            if start.date() == end.date() {
                format_report_date(start)
            } else {
                format!(
                    "{} - {}",
                    format_report_date(start),
                    format_report_date(end)
                )
            }
        }
        (Some(only), None) | (None, Some(only)) => format_report_date(only),
        (None, None) => UNKNOWN_PERIOD.to_string(),
    }
}

// The producer emits `str(pd.Timestamp)` — space separated, sometimes
// with fractional seconds — while hand-edited fixtures use the ISO "T".
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

fn parse_interval_datetime(raw: Option<&str>) -> Option<NaiveDateTime> {
    let raw = raw?;
    let parsed = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw.trim(), fmt).ok());
    if parsed.is_none() {
        warn!(raw = %raw, "Unparseable interval datetime in queue report");
    }
    parsed
}

fn format_report_date(dt: NaiveDateTime) -> String {
    dt.format("%b %-d, %Y").to_string()
}

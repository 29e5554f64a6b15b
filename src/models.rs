//! Data model for the pre-computed report documents
//!
//! Shapes mirror the JSON emitted by the offline generators. Numeric
//! fields are tolerated in string form since the producer serializes
//! through `json.dumps(default=str)` and may stringify numpy scalars.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flattened, human-facing KPI projection. Built fresh per render,
/// never persisted; insertion order is the display order.
pub type DisplayKpi = IndexMap<String, Value>;

/// Deserialize a count that may arrive as a number or a string.
fn count_from_any<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().map(|f| f.round() as u64))
            .ok_or_else(|| D::Error::custom(format!("expected count, got {}", n))),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<u64>()
                .or_else(|_| trimmed.parse::<f64>().map(|f| f.round() as u64))
                .map_err(|_| D::Error::custom(format!("expected count, got {:?}", s)))
        }
        Value::Null => Ok(0),
        other => Err(D::Error::custom(format!(
            "expected number or string, got {:?}",
            other
        ))),
    }
}

/// Deserialize a rate/duration that may arrive as a number or a string.
fn float_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("expected float, got {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected float, got {:?}", s))),
        Value::Null => Ok(0.0),
        other => Err(D::Error::custom(format!(
            "expected number or string, got {:?}",
            other
        ))),
    }
}

// ---------------------------------------------------------------------------
// Call report (report.json)
// ---------------------------------------------------------------------------

/// The `kpi.longest` entry is polymorphic: older reports carry a plain
/// scalar, newer ones a structured record of the longest call.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LongestCall {
    Detail {
        duration: String,
        from_name: String,
        to_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<String>,
    },
    Scalar(Value),
}

/// Raw KPI aggregates. `longest` is split out for its polymorphism;
/// every other metric stays an open-ended scalar entry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CallKpi {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longest: Option<LongestCall>,

    #[serde(flatten)]
    pub values: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TalkTimeOwner {
    pub owner: String,
    pub talk_time: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallerCount {
    #[serde(rename = "From Number")]
    pub from_number: String,
    #[serde(deserialize_with = "count_from_any")]
    pub calls: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationCount {
    pub location: String,
    #[serde(deserialize_with = "count_from_any")]
    pub calls: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MissByOwner {
    pub owner: String,
    #[serde(deserialize_with = "count_from_any")]
    pub total: u64,
    #[serde(deserialize_with = "count_from_any")]
    pub missed: u64,
    #[serde(deserialize_with = "float_from_any")]
    pub missed_pct: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MissDay {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(deserialize_with = "count_from_any")]
    pub total: u64,
    #[serde(deserialize_with = "count_from_any")]
    pub missed: u64,
    #[serde(deserialize_with = "float_from_any")]
    pub missed_pct: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CallCharts {
    #[serde(default)]
    pub call_result: String,
    #[serde(default)]
    pub daily_volume: String,
}

/// The call-history report document (`report.json`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CallReport {
    #[serde(default)]
    pub kpi: CallKpi,
    #[serde(default)]
    pub top_talk: Vec<TalkTimeOwner>,
    #[serde(default)]
    pub top_numbers: Vec<CallerCount>,
    #[serde(default)]
    pub top_locations: Vec<LocationCount>,
    #[serde(default)]
    pub miss_by_owner: Vec<MissByOwner>,
    #[serde(default)]
    pub miss_days: Vec<MissDay>,
    #[serde(default)]
    pub charts: CallCharts,
    /// Executive summary in Markdown.
    #[serde(default)]
    pub summary: String,
}

// ---------------------------------------------------------------------------
// Queue report (queue_report.json)
// ---------------------------------------------------------------------------

/// A 15-minute interval singled out by the generator (peak volume or
/// worst abandonment).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IntervalStat {
    pub datetime: String,
    #[serde(default, deserialize_with = "count_from_any")]
    pub answered_calls: u64,
    #[serde(default, deserialize_with = "count_from_any")]
    pub abandoned_calls: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QueueMetrics {
    #[serde(default, deserialize_with = "count_from_any")]
    pub total_offered: u64,
    #[serde(default, deserialize_with = "count_from_any")]
    pub total_answered: u64,
    #[serde(default, deserialize_with = "count_from_any")]
    pub total_abandoned: u64,
    #[serde(default, deserialize_with = "count_from_any")]
    pub total_overflowed: u64,

    // Percentages, 0-100
    #[serde(default, deserialize_with = "float_from_any")]
    pub answer_rate: f64,
    #[serde(default, deserialize_with = "float_from_any")]
    pub abandonment_rate: f64,
    #[serde(default, deserialize_with = "float_from_any")]
    pub overflow_rate: f64,

    // Durations in seconds
    #[serde(default, deserialize_with = "float_from_any")]
    pub avg_wait_time_sec: f64,
    #[serde(default, deserialize_with = "float_from_any")]
    pub max_wait_time_sec: f64,
    #[serde(default, deserialize_with = "float_from_any")]
    pub avg_handle_time_sec: f64,

    #[serde(default)]
    pub peak_interval: Option<IntervalStat>,
    #[serde(default)]
    pub worst_abandon_interval: Option<IntervalStat>,
}

/// One hourly service-level bucket. Column names come straight from the
/// generator's uppercased CSV headers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HourBucket {
    #[serde(rename = "HOUR")]
    pub hour: u32,
    #[serde(rename = "ANSWERED CALLS", deserialize_with = "count_from_any")]
    pub answered_calls: u64,
    #[serde(rename = "ABANDONED CALLS", deserialize_with = "count_from_any")]
    pub abandoned_calls: u64,
    #[serde(rename = "OVERFLOWED CALLS", deserialize_with = "count_from_any")]
    pub overflowed_calls: u64,
    #[serde(rename = "TOTAL_OFFERED", deserialize_with = "count_from_any")]
    pub total_offered: u64,
    #[serde(rename = "ABANDONMENT_RATE", deserialize_with = "float_from_any")]
    pub abandonment_rate: f64,
}

/// Per-agent aggregate. The `top_volume` projection carries only a
/// subset of the columns, so everything beyond name and volume is
/// optional.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentStat {
    #[serde(rename = "AGENT")]
    pub agent: String,
    #[serde(rename = "ANSWERED CALLS", deserialize_with = "count_from_any")]
    pub answered_calls: u64,
    #[serde(rename = "TOTAL_HANDLE_SEC", default)]
    pub total_handle_sec: Option<f64>,
    #[serde(rename = "AVG_HANDLE_SEC", default)]
    pub avg_handle_sec: Option<f64>,
    #[serde(rename = "MAX_HANDLE_SEC", default)]
    pub max_handle_sec: Option<f64>,
    #[serde(rename = "AVG_HANDLE_TIME", default)]
    pub avg_handle_time: Option<f64>,
    #[serde(rename = "EFFICIENCY", default)]
    pub efficiency: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AgentPerformance {
    #[serde(default)]
    pub all_agents: Vec<AgentStat>,
    #[serde(default)]
    pub top_volume: Vec<AgentStat>,
    #[serde(default)]
    pub most_efficient: Vec<AgentStat>,
}

/// The call-queue analytics document (`queue_report.json`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QueueReport {
    #[serde(default)]
    pub queue_name: Option<String>,
    #[serde(default)]
    pub queue_metrics: QueueMetrics,
    #[serde(default)]
    pub service_trends: Vec<HourBucket>,
    #[serde(default)]
    pub agent_performance: AgentPerformance,
    #[serde(default)]
    pub charts: IndexMap<String, String>,
    /// Executive summary in Markdown.
    #[serde(default)]
    pub summary: String,
}

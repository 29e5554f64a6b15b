//! Chart data adapters for the queue report
//!
//! The widgets want parallel arrays; the document carries arrays of
//! records. Everything here produces fresh copies — input slices are
//! never mutated.

use crate::format::hour_label;
use crate::models::{AgentStat, HourBucket};

/// Hourly series sorted ascending by hour. Stable, fresh copy.
pub fn hourly_series(trends: &[HourBucket]) -> Vec<HourBucket> {
    let mut series = trends.to_vec();
    series.sort_by_key(|bucket| bucket.hour);
    series
}

/// Parallel arrays for the hourly volume/abandonment chart.
#[derive(Debug, Clone, Default)]
pub struct HourlyChartData {
    pub labels: Vec<String>,
    pub total_offered: Vec<u64>,
    pub abandonment_rate: Vec<f64>,
}

/// Derive chart-ready label/value arrays from the hourly trends.
pub fn hourly_chart_data(trends: &[HourBucket]) -> HourlyChartData {
    let series = hourly_series(trends);
    HourlyChartData {
        labels: series.iter().map(|b| hour_label(b.hour)).collect(),
        total_offered: series.iter().map(|b| b.total_offered).collect(),
        abandonment_rate: series.iter().map(|b| b.abandonment_rate).collect(),
    }
}

/// One point of the volume-vs-efficiency scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentPoint {
    pub agent: String,
    pub answered_calls: u64,
    pub efficiency: f64,
}

/// Scatter series pairing each agent's call volume with its efficiency
/// score. Input order is preserved — no sort.
pub fn agent_scatter(agents: &[AgentStat]) -> Vec<AgentPoint> {
    agents
        .iter()
        .map(|a| AgentPoint {
            agent: a.agent.clone(),
            answered_calls: a.answered_calls,
            efficiency: a.efficiency.unwrap_or(0.0),
        })
        .collect()
}

//! Call-Intel Dashboard Core
//!
//! This library consumes the JSON documents produced by the offline
//! call-center report generators and turns them into display-ready
//! view models:
//! - Fetch `report.json` / `queue_report.json` over HTTP
//! - Flatten raw KPI aggregates into ordered display maps
//! - Render Markdown executive summaries to sanitized HTML
//! - Normalize durations and derive date ranges
//! - Reshape hourly/agent aggregates into chart-ready series

pub mod charts;
pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod kpi;
pub mod markdown;
pub mod models;
pub mod view;

// Re-export common types
pub use config::{Config, CALL_REPORT_FILE, QUEUE_REPORT_FILE};
pub use error::{Error, Result};
pub use fetch::ReportClient;
pub use models::{CallReport, DisplayKpi, LongestCall, QueueReport};
pub use view::{CallReportView, QueueReportView};

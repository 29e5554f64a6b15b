//! Call report viewer - fetches report.json and renders the KPI dialog content

use anyhow::Result;
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use call_intel::format::format_duration;
use call_intel::kpi::{call_icon, label};
use call_intel::{CallReportView, Config, ReportClient};

#[derive(Parser)]
#[command(name = "call_report_view")]
#[command(about = "Fetch the call-history report and render it in the terminal")]
struct Cli {
    /// Base URL where the report documents are published
    #[arg(long, env = "REPORT_BASE_URL")]
    base_url: Option<String>,

    /// Print the flattened KPI map as JSON instead of tables
    #[arg(long, default_value = "false")]
    json: bool,
}

fn render_value(value: &Value) -> String {
    match value {
        // Duration-shaped strings get normalized at display time
        Value::String(s) => format_duration(s),
        other => other.to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = Config::new();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let client = ReportClient::new(&config)?;
    let report = client.fetch_call_report().await?;
    let view = CallReportView::build(&report);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view.display_kpi)?);
        return Ok(());
    }

    println!("=== Key Metrics ===\n");
    println!("{:<20} {:<20} {}", "Icon", "Metric", "Value");
    println!("{}", "-".repeat(60));
    for (key, value) in &view.display_kpi {
        println!(
            "{:<20} {:<20} {}",
            call_icon(key),
            label(key),
            render_value(value)
        );
    }

    if !report.top_talk.is_empty() {
        println!("\n=== Top Talk-Time Owners ===\n");
        for row in &report.top_talk {
            println!("{:<25} {}", row.owner, format_duration(&row.talk_time));
        }
    }

    if !report.top_numbers.is_empty() {
        println!("\n=== Top External Inbound Numbers ===\n");
        for row in &report.top_numbers {
            println!("{:<20} {:>6}", row.from_number, row.calls);
        }
    }

    if !report.top_locations.is_empty() {
        println!("\n=== Top Inbound Locations ===\n");
        for row in &report.top_locations {
            println!("{:<25} {:>6}", row.location, row.calls);
        }
    }

    if !report.miss_by_owner.is_empty() {
        println!("\n=== High-Miss Owners ===\n");
        for row in &report.miss_by_owner {
            println!(
                "{:<25} {:>6} missed of {:<6} ({}%)",
                row.owner, row.missed, row.total, row.missed_pct
            );
        }
    }

    if !report.miss_days.is_empty() {
        println!("\n=== Days Over 30% Missed ===\n");
        for row in &report.miss_days {
            println!(
                "{:<12} {:>6} missed of {:<6} ({}%)",
                row.date, row.missed, row.total, row.missed_pct
            );
        }
    }

    if !view.summary_html.is_empty() {
        println!("\n=== Executive Summary (HTML) ===\n");
        println!("{}", view.summary_html);
    }

    Ok(())
}

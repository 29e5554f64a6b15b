//! Queue report viewer - fetches queue_report.json and renders the queue dialog content

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use call_intel::charts::{agent_scatter, hourly_series};
use call_intel::format::{hour_label, seconds_to_clock};
use call_intel::kpi::queue_icon;
use call_intel::{Config, QueueReportView, ReportClient};

#[derive(Parser)]
#[command(name = "queue_report_view")]
#[command(about = "Fetch the queue analytics report and render it in the terminal")]
struct Cli {
    /// Base URL where the report documents are published
    #[arg(long, env = "REPORT_BASE_URL")]
    base_url: Option<String>,

    /// Skip the per-hour service level table
    #[arg(long, default_value = "false")]
    skip_hourly: bool,
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
    let report = client.fetch_queue_report().await?;
    let view = QueueReportView::build(&report);

    let queue_name = report.queue_name.as_deref().unwrap_or("Call Queue");
    println!("=== {} — {} ===\n", queue_name, view.date_range);

    println!("{:<20} {:<20} {}", "Icon", "Metric", "Value");
    println!("{}", "-".repeat(60));
    for (key, value) in &view.display_kpi {
        let rendered = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        println!("{:<20} {:<20} {}", queue_icon(key), key, rendered);
    }

    if !cli.skip_hourly && !report.service_trends.is_empty() {
        println!("\n=== Service Level by Hour ===\n");
        println!(
            "{:<8} {:>8} {:>9} {:>10} {:>10}",
            "Hour", "Offered", "Answered", "Abandoned", "Abandon %"
        );
        println!("{}", "-".repeat(50));
        for bucket in hourly_series(&report.service_trends) {
            println!(
                "{:<8} {:>8} {:>9} {:>10} {:>9.2}%",
                hour_label(bucket.hour),
                bucket.total_offered,
                bucket.answered_calls,
                bucket.abandoned_calls,
                bucket.abandonment_rate
            );
        }
    }

    let agents = &report.agent_performance;
    if !agents.top_volume.is_empty() {
        println!("\n=== Top Agents by Call Volume ===\n");
        for agent in &agents.top_volume {
            println!(
                "{:<25} {:>6} calls  avg handle {:>6}",
                agent.agent,
                agent.answered_calls,
                seconds_to_clock(agent.avg_handle_time.unwrap_or(0.0))
            );
        }
    }

    if !agents.most_efficient.is_empty() {
        println!("\n=== Most Efficient Agents ===\n");
        for point in agent_scatter(&agents.most_efficient) {
            println!(
                "{:<25} {:>6} calls  efficiency {:>7.3}",
                point.agent, point.answered_calls, point.efficiency
            );
        }
    }

    if !view.summary_html.is_empty() {
        println!("\n=== Executive Summary (HTML) ===\n");
        println!("{}", view.summary_html);
    }

    Ok(())
}

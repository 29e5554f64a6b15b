use criterion::{black_box, criterion_group, criterion_main, Criterion};

use call_intel::charts::hourly_series;
use call_intel::format::format_duration;
use call_intel::markdown::render_summary_html;
use call_intel::models::HourBucket;

fn duration_benchmark(c: &mut Criterion) {
    let samples: Vec<String> = (0..512)
        .map(|i| format!("{} days {}:{:02}:{:02}", i % 3, i % 24, i % 60, (i * 7) % 60))
        .collect();

    c.bench_function("format_duration_batch", |b| {
        b.iter(|| {
            for raw in &samples {
                black_box(format_duration(black_box(raw)));
            }
        });
    });
}

fn hourly_sort_benchmark(c: &mut Criterion) {
    let buckets: Vec<HourBucket> = (0..24)
        .rev()
        .map(|hour| HourBucket {
            hour,
            answered_calls: 40,
            abandoned_calls: 3,
            overflowed_calls: 1,
            total_offered: 44,
            abandonment_rate: 6.8,
        })
        .collect();

    c.bench_function("hourly_series_full_day", |b| {
        b.iter(|| {
            let sorted = hourly_series(black_box(&buckets));
            black_box(sorted.len());
        });
    });
}

fn summary_render_benchmark(c: &mut Criterion) {
    let summary = "## Executive Summary\n- Answer rate held above 90%\n- Abandonment spiked at 11:30\n\n| Metric | Value |\n|---|---|\n| Total Offered | 312 |\n| Answer Rate | 89.74% |\n"
        .repeat(8);

    c.bench_function("render_summary_html_typical", |b| {
        b.iter(|| {
            black_box(render_summary_html(black_box(&summary)));
        });
    });
}

criterion_group!(
    report_shaping,
    duration_benchmark,
    hourly_sort_benchmark,
    summary_render_benchmark
);
criterion_main!(report_shaping);

// Dweve RingBench - Container Benchmark Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Text report renderer.
//!
//! Renders an [`Analysis`] without making any decisions of its own: winners,
//! ratios and insights all come from the comparison engine and aggregator.

use crate::aggregate::Aggregate;
use crate::analysis::Analysis;
use crate::comparison::{Bucket, OperationComparison, RatioSet};
use crate::config::AnalysisConfig;
use crate::container::Container;
use crate::document::BenchmarkContext;
use crate::parser::ParseSummary;
use crate::policy::Metric;

/// Report title.
pub const TITLE: &str = "CIRCULAR BUFFER PERFORMANCE ANALYSIS";

/// Marker for metadata or values that are not available.
pub const NOT_AVAILABLE: &str = "N/A";

const BANNER_WIDTH: usize = 80;
const SECTION_WIDTH: usize = 60;
const SIZE_COLUMN: usize = 10;
const VALUE_COLUMN: usize = 18;
const LABEL_COLUMN: usize = 15;

/// Renders the full report.
pub fn render_report(analysis: &Analysis) -> String {
    let mut out = String::new();

    render_header(
        &mut out,
        &analysis.context,
        &analysis.config,
        &analysis.parse_summary,
    );

    for comparison in &analysis.comparisons {
        render_operation(&mut out, comparison, &analysis.config);
        out.push('\n');
    }

    render_summary(&mut out, &analysis.aggregate);
    out
}

fn context_field(context: &BenchmarkContext, key: &str) -> String {
    context
        .field(key)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn render_header(
    out: &mut String,
    context: &BenchmarkContext,
    config: &AnalysisConfig,
    summary: &ParseSummary,
) {
    out.push_str(&format!("{}\n", "=".repeat(BANNER_WIDTH)));
    out.push_str(&format!("{}\n", TITLE));
    out.push_str(&format!("{}\n\n", "=".repeat(BANNER_WIDTH)));

    out.push_str(&format!(
        "System: {} CPUs @ {} MHz\n",
        context_field(context, "num_cpus"),
        context_field(context, "mhz_per_cpu")
    ));
    out.push_str(&format!("Host: {}\n", context_field(context, "host_name")));
    out.push_str(&format!(
        "Executable: {}\n",
        context_field(context, "executable")
    ));
    out.push_str(&format!("Date: {}\n", context_field(context, "date")));
    out.push_str(&format!(
        "Build: {}\n",
        context_field(context, "library_build_type")
    ));
    out.push_str(&format!(
        "CPU scaling: {}\n",
        context_field(context, "cpu_scaling_enabled")
    ));
    out.push_str(&format!(
        "Ranking: {}, subject: {}\n",
        config.policy, config.subject
    ));
    out.push_str(&format!(
        "Benchmarks: {} parsed, {} skipped\n\n",
        summary.parsed,
        summary.skipped()
    ));
}

/// Formats a metric value with its unit.
pub fn format_metric(metric: Metric, value: f64) -> String {
    match metric {
        Metric::CpuTime | Metric::RealTime => format!("{:.1} ns", value),
        Metric::Iterations => format!("{} iter", group_thousands(value.round() as u64)),
        Metric::ItemsPerSecond => format!("{}/s", format_si(value)),
    }
}

/// Inserts `,` every three digits: `1234567` → `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn format_si(value: f64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e9, "G"), (1e6, "M"), (1e3, "k")];
    for (scale, suffix) in UNITS {
        if value >= scale {
            return format!("{:.2}{}", value / scale, suffix);
        }
    }
    format!("{:.2}", value)
}

fn cell(bucket: &Bucket, container: Container, metric: Metric) -> String {
    let Some(value) = bucket.records.get(&container).and_then(|r| metric.value(r)) else {
        return NOT_AVAILABLE.to_string();
    };
    let text = format_metric(metric, value);
    if bucket.is_winner(container) {
        format!("*{}*", text)
    } else {
        text
    }
}

fn render_operation(out: &mut String, comparison: &OperationComparison, config: &AnalysisConfig) {
    let metric = config.policy.metric();

    out.push_str(&format!(
        "[ANALYSIS] {}\n",
        comparison.operation.to_uppercase()
    ));
    out.push_str(&format!("{}\n", "-".repeat(SECTION_WIDTH)));

    if let Some(single) = &comparison.single {
        render_single(out, single, metric);
    }

    if !comparison.sized.is_empty() {
        if comparison.single.is_some() {
            out.push('\n');
        }
        render_sized(out, comparison, config);
    }

    if let Some(ratios) = &comparison.ratios {
        out.push('\n');
        render_ratios(out, ratios);
    }
}

fn render_single(out: &mut String, bucket: &Bucket, metric: Metric) {
    out.push_str(&format!("Single benchmark comparison ({}):\n", metric));

    for (container, record) in &bucket.records {
        let value = metric
            .value(record)
            .map(|v| format_metric(metric, v))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        out.push_str(&format!(
            "  {:<width$}: {}\n",
            container.label(),
            value,
            width = LABEL_COLUMN
        ));
    }

    if let Some(winner) = &bucket.winner {
        let tie_note = if winner.tied { " (tie)" } else { "" };
        out.push_str(&format!("  [WINNER]: {}{}\n", winner.container, tie_note));
    }
}

fn render_sized(out: &mut String, comparison: &OperationComparison, config: &AnalysisConfig) {
    let metric = config.policy.metric();

    out.push_str(&format!(
        "Performance by input size ({}):\n",
        config.policy
    ));

    let mut header = format!("{:<width$}", "Size", width = SIZE_COLUMN);
    for container in &comparison.containers {
        header.push_str(&format!(" {:<width$}", container.label(), width = VALUE_COLUMN));
    }
    header.push_str(" Winner");
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&format!("{}\n", "-".repeat(SECTION_WIDTH)));

    for bucket in &comparison.sized {
        let mut row = format!("{:<width$}", bucket.key, width = SIZE_COLUMN);
        for &container in &comparison.containers {
            row.push_str(&format!(
                " {:<width$}",
                cell(bucket, container, metric),
                width = VALUE_COLUMN
            ));
        }
        let winner = bucket
            .winner
            .map(|w| {
                if w.tied {
                    format!("{} (tie)", w.container)
                } else {
                    w.container.to_string()
                }
            })
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        row.push(' ');
        row.push_str(&winner);
        out.push_str(&row);
        out.push('\n');
    }
}

fn render_ratios(out: &mut String, ratios: &RatioSet) {
    out.push_str(&format!("Performance ratios at size {}:\n", ratios.size));

    for ratio in &ratios.ratios {
        let (faster, slower) = if ratio.subject_is_faster() {
            (ratios.subject, ratio.baseline)
        } else {
            (ratio.baseline, ratios.subject)
        };
        out.push_str(&format!(
            "  {} is {:.2}x faster than {}\n",
            faster,
            ratio.speedup(),
            slower
        ));
    }
}

fn render_summary(out: &mut String, aggregate: &Aggregate) {
    let tally = &aggregate.tally;

    out.push_str("[OVERALL PERFORMANCE SUMMARY]\n");
    out.push_str(&format!("{}\n", "=".repeat(SECTION_WIDTH)));

    if tally.is_empty() {
        out.push_str("No head-to-head comparisons (0 comparisons).\n");
    } else {
        out.push_str(&format!(
            "Performance wins out of {} comparisons:\n",
            tally.total_comparisons
        ));
        for (container, wins) in tally.ranked() {
            let percentage = tally.percentage(container).unwrap_or(0.0);
            out.push_str(&format!(
                "  {:<width$}: {:3} wins ({:5.1}%)\n",
                container.label(),
                wins,
                percentage,
                width = LABEL_COLUMN
            ));
        }
        if tally.tied_comparisons > 0 {
            out.push_str(&format!(
                "  Tied comparisons (no win credited): {}\n",
                tally.tied_comparisons
            ));
        }
    }

    let insights = &aggregate.insights;
    out.push_str("\nKEY INSIGHTS:\n");
    if !insights.strengths.is_empty() {
        out.push_str(&format!(
            "  [+] {} excels at: {}\n",
            insights.subject,
            insights.strengths.join(", ")
        ));
    }
    if !insights.weaknesses.is_empty() {
        out.push_str(&format!(
            "  [-] {} slower at: {}\n",
            insights.subject,
            insights.weaknesses.join(", ")
        ));
    }
    if insights.strengths.is_empty() && insights.weaknesses.is_empty() {
        out.push_str(&format!(
            "  [=] No operation where {} clearly leads or trails\n",
            insights.subject
        ));
    }
}

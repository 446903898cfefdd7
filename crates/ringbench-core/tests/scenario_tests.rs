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

//! End-to-end scenarios over full benchmark documents.

use ringbench_core::{
    AnalysisConfig, AnalysisError, Analyzer, BenchmarkDocument, Container, Metric, SizeKey,
};

// =============================================================================
// Helpers
// =============================================================================

fn analyze(json: &str) -> ringbench_core::Analysis {
    Analyzer::default().analyze_json(json).unwrap()
}

fn entry(name: &str, cpu_time: f64, iterations: u64) -> String {
    format!(
        r#"{{"name": "{}", "iterations": {}, "real_time": {}, "cpu_time": {}, "time_unit": "ns"}}"#,
        name, iterations, cpu_time, cpu_time
    )
}

fn document(entries: &[String]) -> String {
    format!(
        r#"{{"context": {{"date": "2025-03-01T10:00:00", "num_cpus": 8, "mhz_per_cpu": 3600, "library_build_type": "release"}},
            "benchmarks": [{}]}}"#,
        entries.join(",\n")
    )
}

// =============================================================================
// Winners and Ratios
// =============================================================================

#[test]
fn test_push_back_two_containers() {
    let analysis = analyze(&document(&[
        entry("CircularBuffer_PushBack/1000", 200.0, 500_000),
        entry("StdDeque_PushBack/1000", 350.0, 300_000),
    ]));

    let cmp = analysis.comparison("PushBack").unwrap();
    assert_eq!(cmp.sized.len(), 1);
    assert!(cmp.sized[0].is_winner(Container::CircularBuffer));

    let ratios = cmp.ratios.as_ref().unwrap();
    assert_eq!(ratios.size, 1000);
    assert_eq!(ratios.ratios.len(), 1);
    assert_eq!(ratios.ratios[0].baseline, Container::StdDeque);
    assert!((ratios.ratios[0].factor - 1.75).abs() < 1e-12);

    assert_eq!(analysis.aggregate.tally.total_comparisons, 1);
    assert_eq!(analysis.aggregate.tally.percentage(Container::CircularBuffer), Some(100.0));

    let report = analysis.render_report();
    assert!(report.contains("  CircularBuffer is 1.75x faster than std::deque"));
    assert!(report.contains("System: 8 CPUs @ 3600 MHz"));
    assert!(report.contains("Date: 2025-03-01T10:00:00"));
    assert!(report.contains("Build: release"));
    assert!(report.contains("CircularBuffer :   1 wins (100.0%)"));
}

#[test]
fn test_three_containers_multiple_sizes() {
    let analysis = analyze(&document(&[
        entry("CircularBuffer_PushFront/10", 5.0, 1),
        entry("StdDeque_PushFront/10", 4.0, 1),
        entry("StdVector_PushFront/10", 50.0, 1),
        entry("CircularBuffer_PushFront/10000", 3.0, 1),
        entry("StdDeque_PushFront/10000", 6.0, 1),
        entry("StdVector_PushFront/10000", 900.0, 1),
    ]));

    let cmp = analysis.comparison("PushFront").unwrap();
    let keys: Vec<SizeKey> = cmp.sized.iter().map(|b| b.key).collect();
    assert_eq!(keys, vec![SizeKey::Sized(10), SizeKey::Sized(10_000)]);
    assert!(cmp.sized[0].is_winner(Container::StdDeque));
    assert!(cmp.sized[1].is_winner(Container::CircularBuffer));

    // ratios only at the largest size
    let ratios = cmp.ratios.as_ref().unwrap();
    assert_eq!(ratios.size, 10_000);
    let baselines: Vec<Container> = ratios.ratios.iter().map(|r| r.baseline).collect();
    assert_eq!(baselines, vec![Container::StdDeque, Container::StdVector]);
    assert!((ratios.ratios[0].factor - 2.0).abs() < 1e-12);
    assert!((ratios.ratios[1].factor - 300.0).abs() < 1e-9);

    assert_eq!(analysis.aggregate.tally.total_comparisons, 2);
    assert_eq!(analysis.aggregate.tally.wins(Container::StdDeque), 1);
    assert_eq!(analysis.aggregate.tally.wins(Container::CircularBuffer), 1);
}

#[test]
fn test_construction_unsized() {
    let analysis = analyze(&document(&[
        entry("CircularBuffer_Construction", 12.0, 1_000),
        entry("StdDeque_Construction", 40.0, 1_000),
        entry("StdVector_Construction", 9.0, 1_000),
    ]));

    let cmp = analysis.comparison("Construction").unwrap();
    assert!(cmp.sized.is_empty());
    assert!(cmp.ratios.is_none());
    let single = cmp.single.as_ref().unwrap();
    assert!(single.is_winner(Container::StdVector));

    let report = analysis.render_report();
    assert!(report.contains("Single benchmark comparison"));
    assert!(report.contains("[WINNER]: std::vector"));
    assert!(!report.contains("Performance ratios"));
    assert!(!report.contains("slower at"));
}

#[test]
fn test_single_container_operation() {
    let analysis = analyze(&document(&[
        entry("CircularBuffer_Rotate/64", 10.0, 1),
        entry("CircularBuffer_Rotate/128", 20.0, 1),
    ]));

    let cmp = analysis.comparison("Rotate").unwrap();
    assert_eq!(cmp.sized.len(), 2);
    assert!(cmp.ratios.is_none());
    assert!(!cmp.sized[0].is_contested());
    assert!(analysis.aggregate.tally.is_empty());

    let report = analysis.render_report();
    assert!(report.contains("[ANALYSIS] ROTATE"));
    assert!(report.contains("0 comparisons"));
}

#[test]
fn test_subject_missing_at_largest_size() {
    let analysis = analyze(&document(&[
        entry("CircularBuffer_Erase/10", 1.0, 1),
        entry("StdDeque_Erase/10", 2.0, 1),
        entry("StdDeque_Erase/100", 20.0, 1),
        entry("StdVector_Erase/100", 10.0, 1),
    ]));
    assert!(analysis.comparison("Erase").unwrap().ratios.is_none());
}

// =============================================================================
// Input Handling
// =============================================================================

#[test]
fn test_empty_benchmarks() {
    let analysis = analyze(r#"{"benchmarks": []}"#);
    assert!(analysis.comparisons.is_empty());
    let report = analysis.render_report();
    assert!(report.contains("CIRCULAR BUFFER PERFORMANCE ANALYSIS"));
    assert!(report.contains("System: N/A CPUs @ N/A MHz"));
    assert!(report.contains("0 comparisons"));
}

#[test]
fn test_missing_benchmarks_key() {
    let analysis = analyze(r#"{"context": {"num_cpus": 4}}"#);
    assert!(analysis.records.is_empty());
}

#[test]
fn test_structural_skips() {
    let analysis = analyze(&document(&[
        entry("CircularBuffer_PushBack/10", 1.0, 1),
        entry("Foo_PushBack/10", 1.0, 1),
        entry("CircularBuffer_PushBack/10/4", 1.0, 1),
        entry("CircularBuffer_/10", 1.0, 1),
        r#"{"name": "StdDeque_PushBack/10_mean", "run_type": "aggregate", "iterations": 3, "real_time": 1, "cpu_time": 1}"#.to_string(),
    ]));
    assert_eq!(analysis.parse_summary.parsed, 1);
    assert_eq!(analysis.parse_summary.unknown_containers, 1);
    assert_eq!(analysis.parse_summary.malformed_names, 2);
    assert_eq!(analysis.parse_summary.aggregate_rows, 1);
    assert!(analysis.render_report().contains("1 parsed, 4 skipped"));
}

#[test]
fn test_time_units_normalized() {
    let analysis = analyze(
        r#"{"benchmarks": [
            {"name": "CircularBuffer_Clear/8", "iterations": 1, "real_time": 2, "cpu_time": 2, "time_unit": "us"},
            {"name": "StdVector_Clear/8", "iterations": 1, "real_time": 1500, "cpu_time": 1500, "time_unit": "ns"}
        ]}"#,
    );
    let cmp = analysis.comparison("Clear").unwrap();
    assert_eq!(cmp.sized[0].records[&Container::CircularBuffer].cpu_time, 2000.0);
    assert!(cmp.sized[0].is_winner(Container::StdVector));
}

#[test]
fn test_corrupt_size_is_error() {
    let err = Analyzer::default()
        .analyze_json(&document(&[entry("StdDeque_PushBack/lots", 1.0, 1)]))
        .unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidSize { .. }));
    assert!(err.is_entry_error());
}

#[test]
fn test_negative_time_is_error() {
    let err = Analyzer::default()
        .analyze_json(&document(&[entry("StdDeque_PushBack/1", -1.0, 1)]))
        .unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidMeasurement { field: "cpu_time", .. }));
}

#[test]
fn test_unknown_time_unit_is_error() {
    let err = Analyzer::default()
        .analyze_json(
            r#"{"benchmarks": [{"name": "StdDeque_PushBack/1", "iterations": 1, "real_time": 1, "cpu_time": 1, "time_unit": "fortnights"}]}"#,
        )
        .unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidTimeUnit { .. }));
}

#[test]
fn test_malformed_json_is_document_error() {
    let err = Analyzer::default().analyze_json("{ not json").unwrap_err();
    assert!(matches!(err, AnalysisError::Document { .. }));
    assert!(!err.is_entry_error());

    let err = BenchmarkDocument::from_json(r#"{"benchmarks": 7}"#).unwrap_err();
    assert!(matches!(err, AnalysisError::Document { .. }));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_higher_is_better_metric() {
    let json = document(&[
        entry("CircularBuffer_Iterate/100", 10.0, 900),
        entry("StdVector_Iterate/100", 5.0, 300),
    ]);
    let config = AnalysisConfig::default().with_metric(Metric::Iterations);
    let analysis = Analyzer::new(config).analyze_json(&json).unwrap();

    let cmp = analysis.comparison("Iterate").unwrap();
    assert!(cmp.sized[0].is_winner(Container::CircularBuffer));
    assert!((cmp.ratios.as_ref().unwrap().ratios[0].factor - 3.0).abs() < 1e-12);
    assert!(analysis.render_report().contains("iterations (higher is better)"));
}

#[test]
fn test_alternate_subject() {
    let json = document(&[
        entry("CircularBuffer_PopBack/100", 10.0, 1),
        entry("StdDeque_PopBack/100", 5.0, 1),
    ]);
    let config = AnalysisConfig::default().with_subject(Container::StdDeque);
    let analysis = Analyzer::new(config).analyze_json(&json).unwrap();

    let ratios = analysis.comparison("PopBack").unwrap().ratios.clone().unwrap();
    assert_eq!(ratios.subject, Container::StdDeque);
    assert_eq!(ratios.ratios[0].baseline, Container::CircularBuffer);
    assert!((ratios.ratios[0].factor - 2.0).abs() < 1e-12);
    assert_eq!(analysis.aggregate.insights.strengths, vec!["PopBack".to_string()]);
    assert!(analysis.render_report().contains("std::deque is 2.00x faster than CircularBuffer"));
}

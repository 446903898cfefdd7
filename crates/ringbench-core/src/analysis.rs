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

//! End-to-end analysis pipeline.
//!
//! ```text
//! BenchmarkDocument ─► parser ─► records ─► GroupedIndex ─┬─► comparisons ─┐
//!                                                         └─► aggregate ───┴─► report
//! ```

use crate::aggregate::{aggregate, Aggregate};
use crate::comparison::{compare_all, OperationComparison};
use crate::config::AnalysisConfig;
use crate::document::{BenchmarkContext, BenchmarkDocument};
use crate::error::Result;
use crate::index::GroupedIndex;
use crate::parser::{parse_entries, ParseSummary};
use crate::record::BenchmarkRecord;
use crate::report;
use tracing::info;

/// Everything computed for one benchmark document.
///
/// All fields are derived once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Configuration the analysis ran with.
    pub config: AnalysisConfig,
    /// Environment metadata (empty if the input had none).
    pub context: BenchmarkContext,
    /// Parsed records in input order.
    pub records: Vec<BenchmarkRecord>,
    /// Skip accounting from the parser.
    pub parse_summary: ParseSummary,
    /// Records grouped by operation and container.
    pub index: GroupedIndex,
    /// Per-operation comparisons, in lexicographic operation order.
    pub comparisons: Vec<OperationComparison>,
    /// Win tally and subject insights.
    pub aggregate: Aggregate,
}

impl Analysis {
    /// Runs grouping, comparison and aggregation over parsed records.
    pub fn from_records(
        records: Vec<BenchmarkRecord>,
        context: BenchmarkContext,
        config: AnalysisConfig,
    ) -> Self {
        let parse_summary = ParseSummary {
            parsed: records.len(),
            ..ParseSummary::default()
        };
        Self::build(records, parse_summary, context, config)
    }

    fn build(
        records: Vec<BenchmarkRecord>,
        parse_summary: ParseSummary,
        context: BenchmarkContext,
        config: AnalysisConfig,
    ) -> Self {
        let index = GroupedIndex::build(&records);
        let comparisons = compare_all(&index, &config);
        let aggregate = aggregate(&comparisons, &index, &config);

        info!(
            records = records.len(),
            operations = index.len(),
            comparisons = aggregate.tally.total_comparisons,
            "analysis complete"
        );

        Self {
            config,
            context,
            records,
            parse_summary,
            index,
            comparisons,
            aggregate,
        }
    }

    /// Returns the comparison of one operation.
    pub fn comparison(&self, operation: &str) -> Option<&OperationComparison> {
        self.comparisons.iter().find(|c| c.operation == operation)
    }

    /// Renders the text report.
    pub fn render_report(&self) -> String {
        report::render_report(self)
    }
}

/// Analyzes benchmark documents with a fixed configuration.
///
/// # Examples
///
/// ```
/// use ringbench_core::{Analyzer, Container};
///
/// let json = r#"{
///     "benchmarks": [
///         {"name": "CircularBuffer_PushBack/1000", "iterations": 500000, "cpu_time": 200, "real_time": 200},
///         {"name": "StdDeque_PushBack/1000", "iterations": 300000, "cpu_time": 350, "real_time": 350}
///     ]
/// }"#;
///
/// let analysis = Analyzer::default().analyze_json(json).unwrap();
/// assert_eq!(analysis.aggregate.tally.wins(Container::CircularBuffer), 1);
/// assert!(analysis.render_report().contains("CircularBuffer is 1.75x faster than std::deque"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Creates an analyzer.
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// The configuration every analysis uses.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Parses and analyzes a decoded document.
    ///
    /// # Errors
    ///
    /// Fails if any entry carries corrupt data; see [`crate::parser`].
    pub fn analyze(&self, document: BenchmarkDocument) -> Result<Analysis> {
        let parsed = parse_entries(&document.benchmarks)?;
        if parsed.summary.skipped() > 0 {
            info!(
                skipped = parsed.summary.skipped(),
                malformed = parsed.summary.malformed_names,
                unknown_container = parsed.summary.unknown_containers,
                aggregate = parsed.summary.aggregate_rows,
                "dropped benchmark entries"
            );
        }

        Ok(Analysis::build(
            parsed.records,
            parsed.summary,
            document.context.unwrap_or_default(),
            self.config,
        ))
    }

    /// Decodes JSON text and analyzes it.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, an unexpected document shape, or corrupt
    /// entry data.
    pub fn analyze_json(&self, text: &str) -> Result<Analysis> {
        self.analyze(BenchmarkDocument::from_json(text)?)
    }
}

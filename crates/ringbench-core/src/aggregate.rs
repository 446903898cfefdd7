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

//! Cross-operation aggregation.
//!
//! Tallies bucket wins per container and classifies each operation as a
//! strength or weakness of the subject container.

use crate::comparison::OperationComparison;
use crate::config::AnalysisConfig;
use crate::container::Container;
use crate::index::GroupedIndex;
use crate::policy::{Metric, WinnerPolicy};
use crate::record::BenchmarkRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Win counts across every contested bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WinTally {
    /// Number of buckets where at least two containers competed.
    pub total_comparisons: usize,
    /// Contested buckets where the best value was shared; no container is
    /// credited for these.
    pub tied_comparisons: usize,
    wins: BTreeMap<Container, usize>,
}

impl WinTally {
    /// Wins credited to `container`.
    pub fn wins(&self, container: Container) -> usize {
        self.wins.get(&container).copied().unwrap_or(0)
    }

    /// Share of comparisons won by `container`, in percent.
    ///
    /// Returns `None` when there were no comparisons.
    pub fn percentage(&self, container: Container) -> Option<f64> {
        if self.total_comparisons == 0 {
            return None;
        }
        Some(self.wins(container) as f64 / self.total_comparisons as f64 * 100.0)
    }

    /// Containers with at least one win, most wins first; equal counts keep
    /// container order.
    pub fn ranked(&self) -> Vec<(Container, usize)> {
        let mut ranked: Vec<(Container, usize)> =
            self.wins.iter().map(|(&c, &wins)| (c, wins)).collect();
        // stable sort keeps container order for equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Returns `true` if no bucket was contested.
    pub fn is_empty(&self) -> bool {
        self.total_comparisons == 0
    }

    fn credit(&mut self, container: Container) {
        *self.wins.entry(container).or_insert(0) += 1;
        self.total_comparisons += 1;
    }

    fn record_tie(&mut self) {
        self.tied_comparisons += 1;
        self.total_comparisons += 1;
    }
}

/// Operations where the subject clearly leads or trails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insights {
    /// Container the classification is about.
    pub subject: Container,
    /// Operations where the subject's mean beats every other container's mean.
    pub strengths: Vec<String>,
    /// Operations where every other container's mean beats the subject's.
    pub weaknesses: Vec<String>,
}

/// Classification of the subject for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    /// Strictly better than the best of the others.
    Strength,
    /// Strictly worse than the worst of the others.
    Weakness,
    /// Neither.
    Neutral,
}

/// Aggregated outcome of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    /// Win counts.
    pub tally: WinTally,
    /// Subject strengths and weaknesses.
    pub insights: Insights,
}

/// Tallies winners of every contested bucket.
///
/// A tied bucket counts as a comparison but credits no container, so the
/// percentages only reach 100% when every bucket has an unambiguous winner.
pub fn tally_wins(comparisons: &[OperationComparison]) -> WinTally {
    let mut tally = WinTally::default();

    for comparison in comparisons {
        for bucket in comparison.buckets() {
            match bucket.winner.filter(|w| w.is_contested()) {
                Some(winner) if winner.tied => tally.record_tie(),
                Some(winner) => tally.credit(winner.container),
                None => {}
            }
        }
    }

    tally
}

/// Mean of `metric` over the records that carry it.
pub fn mean_metric(records: &[BenchmarkRecord], metric: Metric) -> Option<f64> {
    let values: Vec<f64> = records.iter().filter_map(|r| metric.value(r)).collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Classifies the subject against the other containers of one operation.
///
/// Means are taken over every record of a container, across all sizes.
/// Returns `None` when the subject or every other container lacks data.
pub fn classify(
    containers: &BTreeMap<Container, Vec<BenchmarkRecord>>,
    subject: Container,
    policy: &WinnerPolicy,
) -> Option<Standing> {
    let metric = policy.metric();
    let subject_mean = mean_metric(containers.get(&subject)?, metric)?;

    let others: Vec<f64> = containers
        .iter()
        .filter(|(&container, _)| container != subject)
        .filter_map(|(_, records)| mean_metric(records, metric))
        .collect();

    let best_other = others
        .iter()
        .copied()
        .reduce(|a, b| if policy.is_better(b, a) { b } else { a })?;
    let worst_other = others
        .iter()
        .copied()
        .reduce(|a, b| if policy.is_better(a, b) { b } else { a })?;

    if policy.is_better(subject_mean, best_other) {
        Some(Standing::Strength)
    } else if policy.is_better(worst_other, subject_mean) {
        Some(Standing::Weakness)
    } else {
        Some(Standing::Neutral)
    }
}

/// Classifies every operation for the configured subject.
pub fn collect_insights(index: &GroupedIndex, config: &AnalysisConfig) -> Insights {
    let mut insights = Insights {
        subject: config.subject,
        strengths: Vec::new(),
        weaknesses: Vec::new(),
    };

    for (operation, containers) in index.iter() {
        match classify(containers, config.subject, &config.policy) {
            Some(Standing::Strength) => insights.strengths.push(operation.to_string()),
            Some(Standing::Weakness) => insights.weaknesses.push(operation.to_string()),
            Some(Standing::Neutral) | None => {}
        }
    }

    insights
}

/// Runs the aggregator over all comparisons.
pub fn aggregate(
    comparisons: &[OperationComparison],
    index: &GroupedIndex,
    config: &AnalysisConfig,
) -> Aggregate {
    Aggregate {
        tally: tally_wins(comparisons),
        insights: collect_insights(index, config),
    }
}

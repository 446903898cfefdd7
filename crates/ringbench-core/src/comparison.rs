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

//! Comparison engine.
//!
//! For one operation, re-keys records by size, picks a winner per size
//! bucket and computes subject-vs-baseline ratios at the largest size.

use crate::config::AnalysisConfig;
use crate::container::Container;
use crate::index::{ContainerRecords, GroupedIndex};
use crate::policy::{Winner, WinnerPolicy};
use crate::record::{BenchmarkRecord, SizeKey};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Size bucket → container → the single record kept for that pair.
pub type SizeComparison = BTreeMap<SizeKey, BTreeMap<Container, BenchmarkRecord>>;

/// Re-keys an operation's records by size bucket.
///
/// When a container reports the same bucket more than once the last record
/// wins. Repeated size-independent records are logged as a warning since
/// the input is expected to carry exactly one.
pub fn build_size_comparison(operation: &str, containers: &ContainerRecords) -> SizeComparison {
    let mut buckets = SizeComparison::new();

    for (&container, records) in containers {
        for record in records {
            let key = record.size_key();
            let replaced = buckets
                .entry(key)
                .or_default()
                .insert(container, record.clone());

            if replaced.is_some() {
                match key {
                    SizeKey::Unsized => warn!(
                        operation,
                        container = %container,
                        "multiple size-independent records, keeping the last"
                    ),
                    SizeKey::Sized(size) => debug!(
                        operation,
                        container = %container,
                        size,
                        "duplicate sized record, keeping the last"
                    ),
                }
            }
        }
    }

    buckets
}

/// One size bucket of an operation with its winner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    /// Bucket key.
    pub key: SizeKey,
    /// Record per container present in the bucket.
    pub records: BTreeMap<Container, BenchmarkRecord>,
    /// Best container under the run's policy.
    pub winner: Option<Winner>,
}

impl Bucket {
    fn new(key: SizeKey, records: BTreeMap<Container, BenchmarkRecord>, policy: &WinnerPolicy) -> Self {
        let winner = policy.select_winner(records.iter().map(|(&c, r)| (c, r)));
        Self {
            key,
            records,
            winner,
        }
    }

    /// Returns `true` if at least two containers competed in this bucket.
    pub fn is_contested(&self) -> bool {
        self.winner.as_ref().is_some_and(Winner::is_contested)
    }

    /// Returns `true` if `container` won this bucket.
    pub fn is_winner(&self, container: Container) -> bool {
        self.winner.as_ref().is_some_and(|w| w.container == container)
    }
}

/// Subject advantage over one baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ratio {
    /// Baseline container.
    pub baseline: Container,
    /// Subject advantage; see [`WinnerPolicy::ratio`].
    pub factor: f64,
}

impl Ratio {
    /// Returns `true` if the subject is better than the baseline.
    pub fn subject_is_faster(&self) -> bool {
        self.factor > 1.0
    }

    /// Speedup of whichever side is faster (always ≥ 1).
    pub fn speedup(&self) -> f64 {
        if self.subject_is_faster() {
            self.factor
        } else {
            1.0 / self.factor
        }
    }
}

/// Ratios of the subject against every baseline at one size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioSet {
    /// Size the ratios were computed at (the largest observed).
    pub size: u64,
    /// Subject container.
    pub subject: Container,
    /// One entry per baseline present at `size`, in container order.
    pub ratios: Vec<Ratio>,
}

/// Full comparison of one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationComparison {
    /// Operation name.
    pub operation: String,
    /// Containers that reported this operation, in container order.
    pub containers: Vec<Container>,
    /// Size-independent bucket, if any container reported one.
    pub single: Option<Bucket>,
    /// Sized buckets in ascending size order.
    pub sized: Vec<Bucket>,
    /// Subject ratios at the largest size, when computable.
    pub ratios: Option<RatioSet>,
}

impl OperationComparison {
    /// All buckets: the size-independent one first, then sizes ascending.
    pub fn buckets(&self) -> impl Iterator<Item = &Bucket> {
        self.single.iter().chain(self.sized.iter())
    }

    /// Largest sized bucket.
    pub fn largest(&self) -> Option<&Bucket> {
        self.sized.last()
    }
}

/// Compares one operation's records.
///
/// # Examples
///
/// ```
/// use ringbench_core::comparison::compare_operation;
/// use ringbench_core::parser::parse_entries;
/// use ringbench_core::{AnalysisConfig, Container, GroupedIndex, RawEntry};
///
/// let parsed = parse_entries(&[
///     RawEntry::new("CircularBuffer_PushBack/1000", 200.0, 200.0, 500_000),
///     RawEntry::new("StdDeque_PushBack/1000", 350.0, 350.0, 300_000),
/// ])
/// .unwrap();
/// let index = GroupedIndex::build(&parsed.records);
///
/// let cmp = compare_operation("PushBack", index.get("PushBack").unwrap(), &AnalysisConfig::default());
/// assert!(cmp.sized[0].is_winner(Container::CircularBuffer));
/// let ratios = cmp.ratios.unwrap();
/// assert_eq!(ratios.size, 1000);
/// assert!((ratios.ratios[0].factor - 1.75).abs() < 1e-12);
/// ```
pub fn compare_operation(
    operation: &str,
    containers: &ContainerRecords,
    config: &AnalysisConfig,
) -> OperationComparison {
    let policy = &config.policy;
    let mut buckets = build_size_comparison(operation, containers);

    let single = buckets
        .remove(&SizeKey::Unsized)
        .map(|records| Bucket::new(SizeKey::Unsized, records, policy));
    let sized: Vec<Bucket> = buckets
        .into_iter()
        .map(|(key, records)| Bucket::new(key, records, policy))
        .collect();

    let ratios = sized
        .last()
        .and_then(|largest| subject_ratios(largest, config));

    OperationComparison {
        operation: operation.to_string(),
        containers: containers.keys().copied().collect(),
        single,
        sized,
        ratios,
    }
}

fn subject_ratios(bucket: &Bucket, config: &AnalysisConfig) -> Option<RatioSet> {
    let size = bucket.key.size()?;
    if bucket.records.len() < 2 {
        return None;
    }
    let subject = bucket.records.get(&config.subject)?;

    let ratios: Vec<Ratio> = bucket
        .records
        .iter()
        .filter(|(&container, _)| container != config.subject)
        .filter_map(|(&baseline, record)| {
            config
                .policy
                .ratio(subject, record)
                .map(|factor| Ratio { baseline, factor })
        })
        .collect();

    if ratios.is_empty() {
        return None;
    }

    Some(RatioSet {
        size,
        subject: config.subject,
        ratios,
    })
}

/// Compares every operation of the index, in lexicographic order.
pub fn compare_all(index: &GroupedIndex, config: &AnalysisConfig) -> Vec<OperationComparison> {
    index
        .iter()
        .map(|(operation, containers)| compare_operation(operation, containers, config))
        .collect()
}

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

//! Winner policy: which metric decides "better", and in which direction.
//!
//! Every better/worse decision in an analysis run goes through a single
//! [`WinnerPolicy`]. The direction is a property of the metric, so a run can
//! never rank by time in one place and by iteration count in another.
//!
//! | Metric | Direction | Ratio (subject advantage) |
//! |--------|-----------|---------------------------|
//! | `cpu_time` | lower is better | `other / subject` |
//! | `real_time` | lower is better | `other / subject` |
//! | `iterations` | higher is better | `subject / other` |
//! | `items_per_second` | higher is better | `subject / other` |

use crate::container::Container;
use crate::record::BenchmarkRecord;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Better/worse direction of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// Smaller values win (timings).
    LowerIsBetter,
    /// Larger values win (counts, throughput).
    HigherIsBetter,
}

impl Direction {
    /// Description used in report headings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::LowerIsBetter => "lower is better",
            Direction::HigherIsBetter => "higher is better",
        }
    }
}

/// The record field a policy ranks by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    /// `cpu_time` in nanoseconds.
    CpuTime,
    /// `real_time` in nanoseconds.
    RealTime,
    /// Iteration count.
    Iterations,
    /// `items_per_second` counter.
    ItemsPerSecond,
}

impl Metric {
    /// Field name as it appears in benchmark documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::CpuTime => "cpu_time",
            Metric::RealTime => "real_time",
            Metric::Iterations => "iterations",
            Metric::ItemsPerSecond => "items_per_second",
        }
    }

    /// Direction implied by the metric.
    pub fn direction(&self) -> Direction {
        match self {
            Metric::CpuTime | Metric::RealTime => Direction::LowerIsBetter,
            Metric::Iterations | Metric::ItemsPerSecond => Direction::HigherIsBetter,
        }
    }

    /// Extracts the metric from a record; `None` if the record lacks it.
    pub fn value(&self, record: &BenchmarkRecord) -> Option<f64> {
        match self {
            Metric::CpuTime => Some(record.cpu_time),
            Metric::RealTime => Some(record.real_time),
            Metric::Iterations => Some(record.iterations as f64),
            Metric::ItemsPerSecond => record.items_per_second,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Winner of one size bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Winner {
    /// Winning container.
    pub container: Container,
    /// Its metric value.
    pub value: f64,
    /// Number of containers that had a value for the metric.
    pub participants: usize,
    /// Another participant matched the winning value exactly.
    pub tied: bool,
}

impl Winner {
    /// Returns `true` if the bucket was a head-to-head comparison.
    pub fn is_contested(&self) -> bool {
        self.participants >= 2
    }
}

/// Engine-wide ranking policy.
///
/// # Examples
///
/// ```
/// use ringbench_core::{Direction, Metric, WinnerPolicy};
///
/// let policy = WinnerPolicy::default();
/// assert_eq!(policy.metric(), Metric::CpuTime);
/// assert_eq!(policy.direction(), Direction::LowerIsBetter);
/// assert!(policy.is_better(200.0, 350.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinnerPolicy {
    metric: Metric,
}

impl WinnerPolicy {
    /// Creates a policy ranking by `metric`.
    pub const fn new(metric: Metric) -> Self {
        Self { metric }
    }

    /// The ranked metric.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The metric's direction.
    pub fn direction(&self) -> Direction {
        self.metric.direction()
    }

    /// Orders two metric values so that `Ordering::Greater` means `a` is better.
    pub fn rank(&self, a: f64, b: f64) -> Ordering {
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self.direction() {
            Direction::LowerIsBetter => ord.reverse(),
            Direction::HigherIsBetter => ord,
        }
    }

    /// Returns `true` if `a` is strictly better than `b`.
    pub fn is_better(&self, a: f64, b: f64) -> bool {
        self.rank(a, b) == Ordering::Greater
    }

    /// Picks the best of `candidates`.
    ///
    /// Candidates without a value for the metric are ignored. On an exact tie
    /// the first candidate in iteration order keeps the win, so callers that
    /// iterate in [`Container`] order get the earliest container.
    pub fn select_winner<'a, I>(&self, candidates: I) -> Option<Winner>
    where
        I: IntoIterator<Item = (Container, &'a BenchmarkRecord)>,
    {
        let values: Vec<(Container, f64)> = candidates
            .into_iter()
            .filter_map(|(container, record)| {
                self.metric.value(record).map(|value| (container, value))
            })
            .collect();

        let mut best: Option<(Container, f64)> = None;
        for &(container, value) in &values {
            match best {
                Some((_, best_value)) if !self.is_better(value, best_value) => {}
                _ => best = Some((container, value)),
            }
        }

        best.map(|(container, value)| Winner {
            container,
            value,
            participants: values.len(),
            tied: values
                .iter()
                .any(|&(other, v)| other != container && self.rank(v, value) == Ordering::Equal),
        })
    }

    /// Relative advantage of `subject` over `other`.
    ///
    /// A factor above 1 means the subject is better by that factor; at or
    /// below 1 the other container is better by the reciprocal. Returns
    /// `None` when either record lacks the metric or either value is zero,
    /// so `ratio(a, b)` exists exactly when `ratio(b, a)` does.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbench_core::{BenchmarkRecord, Container, WinnerPolicy};
    ///
    /// let record = |container: Container, cpu_time: f64| BenchmarkRecord {
    ///     name: String::new(),
    ///     container,
    ///     operation: "PushBack".to_string(),
    ///     size: Some(1000),
    ///     cpu_time,
    ///     real_time: cpu_time,
    ///     items_per_second: None,
    ///     iterations: 1,
    /// };
    /// let subject = record(Container::CircularBuffer, 200.0);
    /// let deque = record(Container::StdDeque, 350.0);
    ///
    /// let factor = WinnerPolicy::default().ratio(&subject, &deque).unwrap();
    /// assert!((factor - 1.75).abs() < 1e-12);
    /// ```
    pub fn ratio(&self, subject: &BenchmarkRecord, other: &BenchmarkRecord) -> Option<f64> {
        let subject_value = self.metric.value(subject)?;
        let other_value = self.metric.value(other)?;
        let (numerator, denominator) = match self.direction() {
            Direction::LowerIsBetter => (other_value, subject_value),
            Direction::HigherIsBetter => (subject_value, other_value),
        };
        if numerator == 0.0 || denominator == 0.0 {
            return None;
        }
        Some(numerator / denominator)
    }
}

impl Default for WinnerPolicy {
    fn default() -> Self {
        Self::new(Metric::CpuTime)
    }
}

impl fmt::Display for WinnerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.metric, self.direction().as_str())
    }
}

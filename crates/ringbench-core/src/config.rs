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

//! Analysis configuration.
//!
//! One [`AnalysisConfig`] is fixed for the whole run: the subject container
//! whose ratios and strengths are reported, and the [`WinnerPolicy`] used
//! for every comparison.

use crate::container::Container;
use crate::policy::{Metric, WinnerPolicy};

/// Default subject container.
pub const DEFAULT_SUBJECT: Container = Container::CircularBuffer;

/// Default ranking metric.
pub const DEFAULT_METRIC: Metric = Metric::CpuTime;

/// Configuration for an analysis run.
///
/// # Example
///
/// ```
/// use ringbench_core::{AnalysisConfig, Container, Metric};
///
/// let config = AnalysisConfig::default()
///     .with_subject(Container::StdDeque)
///     .with_metric(Metric::Iterations);
/// assert_eq!(config.subject, Container::StdDeque);
/// assert_eq!(config.policy.metric(), Metric::Iterations);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Container compared against every baseline.
    pub subject: Container,
    /// Ranking policy applied to every comparison.
    pub policy: WinnerPolicy,
}

impl AnalysisConfig {
    /// Creates a configuration with an explicit subject and policy.
    pub fn new(subject: Container, policy: WinnerPolicy) -> Self {
        Self { subject, policy }
    }

    /// Sets the subject container.
    pub fn with_subject(mut self, subject: Container) -> Self {
        self.subject = subject;
        self
    }

    /// Sets the ranking metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.policy = WinnerPolicy::new(metric);
        self
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SUBJECT, WinnerPolicy::new(DEFAULT_METRIC))
    }
}

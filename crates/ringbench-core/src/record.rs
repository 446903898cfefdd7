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

//! Normalized benchmark records.

use crate::container::Container;
use serde::Serialize;
use std::fmt;

/// One measured (container, operation, size) combination.
///
/// Records are built once by the parser and never mutated. Timings are
/// always in nanoseconds regardless of the unit the harness reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    /// Full benchmark name as reported by the harness.
    pub name: String,
    /// Implementation under test.
    pub container: Container,
    /// Logical operation, independent of the container.
    pub operation: String,
    /// Input size, absent for size-independent operations.
    pub size: Option<u64>,
    /// CPU time per iteration in nanoseconds.
    pub cpu_time: f64,
    /// Wall-clock time per iteration in nanoseconds.
    pub real_time: f64,
    /// Reported throughput, if the benchmark set one.
    pub items_per_second: Option<f64>,
    /// Number of iterations backing the timings.
    pub iterations: u64,
}

impl BenchmarkRecord {
    /// Returns the size bucket this record belongs to.
    pub fn size_key(&self) -> SizeKey {
        SizeKey::from(self.size)
    }
}

/// Typed bucket key for size comparisons.
///
/// `Unsized` orders before every sized bucket; sized buckets order by
/// ascending size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SizeKey {
    /// Size-independent operations (e.g. construction).
    Unsized,
    /// Operations parameterized by input size.
    Sized(u64),
}

impl SizeKey {
    /// Returns the numeric size, if any.
    pub fn size(&self) -> Option<u64> {
        match self {
            SizeKey::Unsized => None,
            SizeKey::Sized(size) => Some(*size),
        }
    }
}

impl From<Option<u64>> for SizeKey {
    fn from(size: Option<u64>) -> Self {
        size.map_or(SizeKey::Unsized, SizeKey::Sized)
    }
}

impl fmt::Display for SizeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeKey::Unsized => f.write_str("single"),
            SizeKey::Sized(size) => write!(f, "{}", size),
        }
    }
}

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

//! Core analysis for container benchmark results.
//!
//! This crate turns a Google Benchmark style JSON document into per-operation
//! comparisons of `CircularBuffer`, `std::deque` and `std::vector`:
//!
//! - [`parser`] decodes benchmark names into container, operation and size
//! - [`index`] groups records by operation and container
//! - [`comparison`] picks a winner per size bucket and computes ratios
//! - [`aggregate`] tallies wins and classifies the subject container
//! - [`report`] renders the human-readable text report
//!
//! # Examples
//!
//! ```
//! use ringbench_core::{AnalysisConfig, Analyzer, Container, Metric};
//!
//! let json = r#"{"benchmarks": [
//!     {"name": "StdDeque_PopFront/64", "iterations": 1000, "cpu_time": 12.5, "real_time": 12.9},
//!     {"name": "StdVector_PopFront/64", "iterations": 1000, "cpu_time": 80.0, "real_time": 81.0}
//! ]}"#;
//!
//! let config = AnalysisConfig::default().with_metric(Metric::RealTime);
//! let analysis = Analyzer::new(config).analyze_json(json).unwrap();
//!
//! let cmp = analysis.comparison("PopFront").unwrap();
//! assert!(cmp.sized[0].is_winner(Container::StdDeque));
//! // the subject did not run PopFront, so no ratios
//! assert!(cmp.ratios.is_none());
//! ```

pub mod aggregate;
pub mod analysis;
pub mod comparison;
pub mod config;
pub mod container;
pub mod document;
mod error;
pub mod index;
pub mod parser;
pub mod policy;
pub mod record;
pub mod report;

pub use aggregate::{Aggregate, Insights, WinTally};
pub use analysis::{Analysis, Analyzer};
pub use comparison::{Bucket, OperationComparison, Ratio, RatioSet};
pub use config::AnalysisConfig;
pub use container::Container;
pub use document::{BenchmarkContext, BenchmarkDocument, RawEntry};
pub use error::{AnalysisError, Result};
pub use index::GroupedIndex;
pub use parser::{ParseSummary, ParsedRecords, SkipReason};
pub use policy::{Direction, Metric, Winner, WinnerPolicy};
pub use record::{BenchmarkRecord, SizeKey};

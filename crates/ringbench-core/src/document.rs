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

//! Raw benchmark documents as emitted by the benchmark harness.
//!
//! The layout follows Google Benchmark's `--benchmark_format=json` output:
//!
//! ```json
//! {
//!   "context": { "num_cpus": 8, "mhz_per_cpu": 3600, "library_build_type": "release" },
//!   "benchmarks": [
//!     { "name": "CircularBuffer_PushBack/1000", "iterations": 500000,
//!       "real_time": 201.3, "cpu_time": 200.0, "time_unit": "ns" }
//!   ]
//! }
//! ```

use crate::error::Result;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A decoded benchmark document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BenchmarkDocument {
    /// Environment metadata, if the harness recorded any.
    #[serde(default)]
    pub context: Option<BenchmarkContext>,
    /// Raw benchmark entries in input order.
    #[serde(default)]
    pub benchmarks: Vec<RawEntry>,
}

impl BenchmarkDocument {
    /// Decodes a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Document`](crate::AnalysisError::Document) if
    /// the text is not JSON or does not have the expected shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbench_core::BenchmarkDocument;
    ///
    /// let doc = BenchmarkDocument::from_json(r#"{"benchmarks": []}"#).unwrap();
    /// assert!(doc.benchmarks.is_empty());
    /// assert!(doc.context.is_none());
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// One benchmark entry before normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEntry {
    /// Benchmark name, e.g. `CircularBuffer_PushBack/1000`.
    pub name: String,
    /// CPU time per iteration in `time_unit`.
    pub cpu_time: f64,
    /// Wall-clock time per iteration in `time_unit`.
    pub real_time: f64,
    /// Iteration count.
    pub iterations: u64,
    /// Optional throughput counter.
    #[serde(default)]
    pub items_per_second: Option<f64>,
    /// Unit of `cpu_time`/`real_time`; nanoseconds when absent.
    #[serde(default)]
    pub time_unit: Option<String>,
    /// `iteration` for measured runs, `aggregate` for mean/median/stddev rows.
    #[serde(default)]
    pub run_type: Option<String>,
}

impl RawEntry {
    /// Creates a measured entry with nanosecond timings.
    pub fn new(name: impl Into<String>, cpu_time: f64, real_time: f64, iterations: u64) -> Self {
        Self {
            name: name.into(),
            cpu_time,
            real_time,
            iterations,
            items_per_second: None,
            time_unit: None,
            run_type: None,
        }
    }

    /// Sets the throughput counter.
    pub fn with_items_per_second(mut self, items_per_second: f64) -> Self {
        self.items_per_second = Some(items_per_second);
        self
    }

    /// Sets the time unit.
    pub fn with_time_unit(mut self, unit: impl Into<String>) -> Self {
        self.time_unit = Some(unit.into());
        self
    }

    /// Sets the run type.
    pub fn with_run_type(mut self, run_type: impl Into<String>) -> Self {
        self.run_type = Some(run_type.into());
        self
    }
}

/// Free-form environment metadata.
///
/// Every field is optional and looked up best-effort; values of any JSON type
/// render as text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkContext {
    fields: Map<String, Value>,
}

impl BenchmarkContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns a field rendered as text, or `None` if absent or null.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbench_core::BenchmarkContext;
    ///
    /// let ctx = BenchmarkContext::new().with_field("num_cpus", 8);
    /// assert_eq!(ctx.field("num_cpus").as_deref(), Some("8"));
    /// assert_eq!(ctx.field("date"), None);
    /// ```
    pub fn field(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Returns `true` if no fields are present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

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

//! Error types for benchmark analysis.
//!
//! Structural mismatches (unknown containers, malformed names) are never
//! errors: the parser drops those entries and counts them. The variants here
//! cover data that looks like a benchmark entry but carries corrupt values,
//! plus documents that cannot be decoded at all.

use thiserror::Error;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that abort the analysis of a benchmark document.
///
/// # Examples
///
/// ```
/// use ringbench_core::AnalysisError;
///
/// let err = AnalysisError::InvalidSize {
///     name: "CircularBuffer_PushBack/abc".to_string(),
///     value: "abc".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Invalid size 'abc' in benchmark 'CircularBuffer_PushBack/abc'"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The size segment of a two-part name is not a non-negative integer.
    #[error("Invalid size '{value}' in benchmark '{name}'")]
    InvalidSize {
        /// Full benchmark name.
        name: String,
        /// The offending size segment.
        value: String,
    },

    /// The entry declares a time unit that cannot be normalized to nanoseconds.
    #[error("Unknown time unit '{unit}' in benchmark '{name}'")]
    InvalidTimeUnit {
        /// Full benchmark name.
        name: String,
        /// The declared unit.
        unit: String,
    },

    /// A timing or throughput figure is negative, NaN or infinite.
    #[error("Invalid {field} value {value} in benchmark '{name}'")]
    InvalidMeasurement {
        /// Full benchmark name.
        name: String,
        /// Field that carried the bad value.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The input is not a benchmark document (bad JSON or wrong shape).
    #[error("Invalid benchmark document: {message}")]
    Document {
        /// Decoder error message.
        message: String,
    },
}

impl AnalysisError {
    /// Returns `true` for errors caused by a single corrupt benchmark entry,
    /// as opposed to a document that could not be decoded.
    pub fn is_entry_error(&self) -> bool {
        !matches!(self, AnalysisError::Document { .. })
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(source: serde_json::Error) -> Self {
        Self::Document {
            message: source.to_string(),
        }
    }
}

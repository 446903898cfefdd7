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

//! Error types for CSV export.

use thiserror::Error;

/// Result type for CSV export operations.
pub type Result<T> = std::result::Result<T, CsvError>;

/// CSV export error types.
///
/// # Examples
///
/// ```
/// use ringbench_csv::CsvError;
///
/// let err = CsvError::Write {
///     row: 3,
///     message: "broken pipe".to_string(),
/// };
/// assert_eq!(err.to_string(), "Failed to write CSV row 3: broken pipe");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// The header row could not be written.
    #[error("Failed to write CSV header: {0}")]
    Header(String),

    /// A record row could not be written.
    #[error("Failed to write CSV row {row}: {message}")]
    Write {
        /// Row number, 1-based, not counting the header.
        row: usize,
        /// Underlying writer message.
        message: String,
    },

    /// Flushing the underlying writer failed.
    #[error("Failed to flush CSV writer: {0}")]
    Flush(String),

    /// The in-memory buffer was not valid UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// What was being produced.
        context: String,
    },
}

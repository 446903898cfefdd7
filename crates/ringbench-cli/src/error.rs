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

//! Structured error types for the RingBench CLI.
//!
//! Every failure maps to one process exit code through [`CliError::exit_code`].

use ringbench_core::AnalysisError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for failures without a more specific category.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code when the input file does not exist.
///
/// Distinct from the `2` clap uses for usage errors.
pub const EXIT_NOT_FOUND: u8 = 4;
/// Exit code when the input cannot be decoded or carries corrupt data.
pub const EXIT_INVALID_INPUT: u8 = 3;

/// The main error type for RingBench CLI operations.
///
/// # Examples
///
/// ```
/// use ringbench_cli::error::CliError;
///
/// let err = CliError::not_found("results.json");
/// assert_eq!(err.to_string(), "File 'results.json' not found");
/// assert_eq!(err.exit_code(), 4);
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// The input file does not exist.
    #[error("File '{}' not found", path.display())]
    NotFound {
        /// The missing input path
        path: PathBuf,
    },

    /// The input file is not valid UTF-8 text.
    #[error("Invalid input in '{}': {message}", path.display())]
    InvalidInput {
        /// The input path
        path: PathBuf,
        /// What was wrong with it
        message: String,
    },

    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{}': {message}", path.display())]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Input file exceeds the configured size limit.
    #[error(
        "File '{}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)",
        path.display()
    )]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// The benchmark document could not be analyzed.
    #[error("Invalid benchmark data in '{}': {source}", path.display())]
    Analysis {
        /// The input path
        path: PathBuf,
        /// The analysis failure
        source: AnalysisError,
    },

    /// CSV export failed before anything was written.
    #[error("CSV export error: {0}")]
    Export(String),
}

impl CliError {
    /// Creates a not-found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates an I/O error.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Creates an error for a failed input read; a missing file maps to
    /// [`CliError::NotFound`].
    pub fn input_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return Self::not_found(path);
        }
        Self::io_error(path, source)
    }

    /// Creates a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Creates an invalid-input error.
    pub fn invalid_input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Wraps an analysis failure for `path`.
    pub fn analysis(path: impl Into<PathBuf>, source: AnalysisError) -> Self {
        Self::Analysis {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::NotFound { .. } => EXIT_NOT_FOUND,
            CliError::InvalidInput { .. } | CliError::Analysis { .. } => EXIT_INVALID_INPUT,
            CliError::Io { .. } | CliError::FileTooLarge { .. } | CliError::Export(_) => {
                EXIT_FAILURE
            }
        }
    }
}

impl From<ringbench_csv::CsvError> for CliError {
    fn from(err: ringbench_csv::CsvError) -> Self {
        CliError::Export(err.to_string())
    }
}

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

//! Command implementations and shared file helpers.

mod analyze;

pub use analyze::analyze;

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Default maximum input size (1 GB)
/// Can be overridden via RINGBENCH_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable holding the input size limit in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "RINGBENCH_MAX_FILE_SIZE";

/// Get the maximum file size from environment or use default.
///
/// Falls back to [`DEFAULT_MAX_FILE_SIZE`] if the variable is not set or
/// contains an invalid value.
fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read an input file from disk with size validation.
///
/// Files larger than the configured maximum are rejected before reading.
///
/// # Errors
///
/// - [`CliError::NotFound`] if the file does not exist
/// - [`CliError::FileTooLarge`] if it exceeds the size limit
/// - [`CliError::InvalidInput`] if it is not UTF-8 text
/// - [`CliError::Io`] for any other read failure
pub fn read_file(path: &Path) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::input_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    let bytes = fs::read(path).map_err(|e| CliError::input_error(path, e))?;
    String::from_utf8(bytes).map_err(|e| CliError::invalid_input(path, e.to_string()))
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

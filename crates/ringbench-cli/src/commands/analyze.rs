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

//! Analyze command - benchmark report and optional CSV export

use super::{read_file, write_output};
use crate::error::CliError;
use ringbench_core::{AnalysisConfig, Analyzer};
use std::path::Path;
use tracing::debug;

/// Analyze a benchmark results file.
///
/// The report and the CSV (if requested) are rendered in full before
/// anything is written, so a failing input never leaves partial output.
///
/// # Arguments
///
/// * `input` - Path to the benchmark JSON file
/// * `output` - Report destination; stdout if `None`
/// * `csv` - Optional CSV destination
/// * `config` - Subject and winner policy
///
/// # Examples
///
/// ```no_run
/// use ringbench_cli::commands::analyze;
/// use ringbench_core::AnalysisConfig;
/// use std::path::Path;
///
/// # fn main() -> Result<(), ringbench_cli::error::CliError> {
/// analyze(
///     Path::new("results.json"),
///     Some(Path::new("summary.txt")),
///     Some(Path::new("results.csv")),
///     AnalysisConfig::default(),
/// )?;
/// # Ok(())
/// # }
/// ```
pub fn analyze(
    input: &Path,
    output: Option<&Path>,
    csv: Option<&Path>,
    config: AnalysisConfig,
) -> Result<(), CliError> {
    let content = read_file(input)?;
    debug!(path = %input.display(), bytes = content.len(), "read benchmark file");

    let analysis = Analyzer::new(config)
        .analyze_json(&content)
        .map_err(|e| CliError::analysis(input, e))?;

    let report = analysis.render_report();
    let table = csv
        .map(|_| ringbench_csv::to_csv(&analysis.records))
        .transpose()?;

    write_output(&report, output)?;
    if let Some(path) = output {
        println!("Summary written to {}", path.display());
    }

    if let (Some(path), Some(table)) = (csv, table) {
        write_output(&table, Some(path))?;
        println!("CSV data exported to {}", path.display());
    }

    Ok(())
}

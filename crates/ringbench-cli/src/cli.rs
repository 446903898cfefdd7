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

//! Command-line argument definitions.

use crate::commands;
use crate::error::CliError;
use clap::{Parser, ValueEnum};
use ringbench_core::{AnalysisConfig, Container, Metric};
use std::path::PathBuf;

/// Metric used to decide every winner in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    /// CPU time per iteration (lower is better)
    CpuTime,
    /// Wall-clock time per iteration (lower is better)
    RealTime,
    /// Iteration count (higher is better)
    Iterations,
    /// Throughput counter (higher is better)
    ItemsPerSecond,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::CpuTime => Metric::CpuTime,
            MetricArg::RealTime => Metric::RealTime,
            MetricArg::Iterations => Metric::Iterations,
            MetricArg::ItemsPerSecond => Metric::ItemsPerSecond,
        }
    }
}

/// Container whose ratios and strengths are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SubjectArg {
    /// CircularBuffer
    CircularBuffer,
    /// std::deque
    StdDeque,
    /// std::vector
    StdVector,
}

impl From<SubjectArg> for Container {
    fn from(arg: SubjectArg) -> Self {
        match arg {
            SubjectArg::CircularBuffer => Container::CircularBuffer,
            SubjectArg::StdDeque => Container::StdDeque,
            SubjectArg::StdVector => Container::StdVector,
        }
    }
}

/// RingBench - container benchmark analysis
///
/// Compares CircularBuffer, std::deque and std::vector benchmark results
/// from a Google Benchmark JSON file and prints a performance report.
///
/// # Examples
///
/// ```bash
/// # Print the report
/// ringbench results.json
///
/// # Write the report and a CSV of all parsed records
/// ringbench results.json --output summary.txt --csv results.csv
///
/// # Rank by throughput, from std::deque's point of view
/// ringbench results.json --metric items-per-second --subject std-deque
/// ```
#[derive(Debug, Parser)]
#[command(name = "ringbench")]
#[command(author, version, about = "RingBench - container benchmark analysis", long_about = None)]
pub struct Cli {
    /// Path to benchmark JSON results file
    pub input: PathBuf,

    /// Export parsed records to CSV file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Metric that decides winners
    #[arg(long, value_enum, default_value_t = MetricArg::CpuTime)]
    pub metric: MetricArg,

    /// Container to report ratios and insights for
    #[arg(long, value_enum, default_value_t = SubjectArg::CircularBuffer)]
    pub subject: SubjectArg,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Analysis configuration selected by the flags.
    pub fn config(&self) -> AnalysisConfig {
        AnalysisConfig::default()
            .with_subject(self.subject.into())
            .with_metric(self.metric.into())
    }

    /// Default log directive for this invocation.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "ringbench=debug"
        } else {
            "ringbench=warn"
        }
    }

    /// Runs the analysis.
    pub fn execute(&self) -> Result<(), CliError> {
        commands::analyze(
            &self.input,
            self.output.as_deref(),
            self.csv.as_deref(),
            self.config(),
        )
    }
}

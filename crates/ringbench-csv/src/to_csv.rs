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

//! Convert parsed benchmark records to CSV.

use crate::error::{CsvError, Result};
use ringbench_core::BenchmarkRecord;
use std::io::Write;

/// Column names, in output order.
pub const HEADER: [&str; 7] = [
    "Operation",
    "Container",
    "Size",
    "CPU_Time_ns",
    "Real_Time_ns",
    "Items_Per_Second",
    "Iterations",
];

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
        }
    }
}

/// Converts one record into its CSV fields.
///
/// Times are already normalized to nanoseconds. Absent size and throughput
/// render as empty fields.
pub fn record_row(record: &BenchmarkRecord) -> [String; 7] {
    [
        record.operation.clone(),
        record.container.label().to_string(),
        record.size.map(|s| s.to_string()).unwrap_or_default(),
        format!("{:?}", record.cpu_time),
        format!("{:?}", record.real_time),
        record
            .items_per_second
            .map(|ips| format!("{:?}", ips))
            .unwrap_or_default(),
        record.iterations.to_string(),
    ]
}

/// Converts records to a CSV string.
///
/// # Example
/// ```
/// use ringbench_core::{BenchmarkRecord, Container};
/// use ringbench_csv::to_csv;
///
/// let record = BenchmarkRecord {
///     name: "CircularBuffer_PushBack/1000".to_string(),
///     container: Container::CircularBuffer,
///     operation: "PushBack".to_string(),
///     size: Some(1000),
///     cpu_time: 200.0,
///     real_time: 201.5,
///     items_per_second: None,
///     iterations: 500_000,
/// };
///
/// let csv = to_csv(&[record]).unwrap();
/// assert_eq!(
///     csv,
///     "Operation,Container,Size,CPU_Time_ns,Real_Time_ns,Items_Per_Second,Iterations\n\
///      PushBack,CircularBuffer,1000,200.0,201.5,,500000\n"
/// );
/// ```
pub fn to_csv(records: &[BenchmarkRecord]) -> Result<String> {
    to_csv_with_config(records, ExportConfig::default())
}

/// Converts records to a CSV string with custom configuration.
pub fn to_csv_with_config(records: &[BenchmarkRecord], config: ExportConfig) -> Result<String> {
    // roughly 64 bytes per row
    let mut buffer = Vec::with_capacity((records.len() + 1) * 64);

    to_csv_writer_with_config(records, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Writes records as CSV to any writer.
pub fn to_csv_writer<W: Write>(records: &[BenchmarkRecord], writer: W) -> Result<()> {
    to_csv_writer_with_config(records, writer, ExportConfig::default())
}

/// Writes records as CSV to any writer with custom configuration.
///
/// Rows follow input order; no grouping or sorting is applied.
pub fn to_csv_writer_with_config<W: Write>(
    records: &[BenchmarkRecord],
    writer: W,
    config: ExportConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(writer);

    if config.include_headers {
        wtr.write_record(HEADER)
            .map_err(|e| CsvError::Header(e.to_string()))?;
    }

    for (i, record) in records.iter().enumerate() {
        wtr.write_record(&record_row(record))
            .map_err(|e| CsvError::Write {
                row: i + 1,
                message: e.to_string(),
            })?;
    }

    wtr.flush().map_err(|e| CsvError::Flush(e.to_string()))?;

    Ok(())
}

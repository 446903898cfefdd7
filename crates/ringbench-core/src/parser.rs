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

//! Record parser.
//!
//! Decodes raw benchmark entries into [`BenchmarkRecord`]s. Benchmark names
//! follow `<Container>_<Operation>[/<Size>]`:
//!
//! | Name | Container | Operation | Size |
//! |------|-----------|-----------|------|
//! | `CircularBuffer_PushBack/1000` | `CircularBuffer` | `PushBack` | `1000` |
//! | `StdDeque_Construction` | `std::deque` | `Construction` | none |
//! | `StdVector_Insert/8/real_time` | skipped | | |
//! | `BoostRing_PushBack/8` | skipped | | |
//!
//! # Error policy
//!
//! Entries whose shape does not match (wrong number of `/` segments, unknown
//! container, aggregate rows) are skipped and counted in a [`ParseSummary`].
//! Entries that match the shape but carry corrupt data (a non-integer size,
//! an unknown time unit, a negative or non-finite timing) fail the whole
//! parse with an [`AnalysisError`].

use crate::container::Container;
use crate::document::RawEntry;
use crate::error::{AnalysisError, Result};
use crate::record::BenchmarkRecord;
use tracing::debug;

/// Why an entry was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Not one or two `/`-separated segments, or an empty operation.
    MalformedName,
    /// The name does not start with a known `<Token>_` prefix.
    UnknownContainer,
    /// A mean/median/stddev row produced by repetitions.
    AggregateRow,
}

impl SkipReason {
    /// Short description for diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MalformedName => "malformed name",
            SkipReason::UnknownContainer => "unknown container",
            SkipReason::AggregateRow => "aggregate row",
        }
    }
}

/// Result of decoding one entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryOutcome<T> {
    /// The entry was decoded.
    Parsed(T),
    /// The entry was dropped.
    Skipped(SkipReason),
}

/// The structural parts of a benchmark name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameParts<'a> {
    /// Resolved container.
    pub container: Container,
    /// Operation name (after the first `_`).
    pub operation: &'a str,
    /// Size segment, if the name had one.
    pub size: Option<u64>,
}

/// Counts of dropped entries by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Entries that decoded into records.
    pub parsed: usize,
    /// Entries dropped for a malformed name.
    pub malformed_names: usize,
    /// Entries dropped for an unknown container prefix.
    pub unknown_containers: usize,
    /// Aggregate rows dropped.
    pub aggregate_rows: usize,
}

impl ParseSummary {
    /// Total number of dropped entries.
    pub fn skipped(&self) -> usize {
        self.malformed_names + self.unknown_containers + self.aggregate_rows
    }

    fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::MalformedName => self.malformed_names += 1,
            SkipReason::UnknownContainer => self.unknown_containers += 1,
            SkipReason::AggregateRow => self.aggregate_rows += 1,
        }
    }
}

/// Parsed records in input order plus skip accounting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRecords {
    /// Records that survived parsing.
    pub records: Vec<BenchmarkRecord>,
    /// What was dropped and why.
    pub summary: ParseSummary,
}

/// Splits a benchmark name into container, operation and size.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidSize`] when a two-segment name with a
/// known container has a size segment that is not a non-negative integer.
///
/// # Examples
///
/// ```
/// use ringbench_core::parser::{decompose_name, EntryOutcome, SkipReason};
/// use ringbench_core::Container;
///
/// let EntryOutcome::Parsed(parts) = decompose_name("CircularBuffer_PushBack/1000").unwrap() else {
///     panic!("expected a parsed name");
/// };
/// assert_eq!(parts.container, Container::CircularBuffer);
/// assert_eq!(parts.operation, "PushBack");
/// assert_eq!(parts.size, Some(1000));
///
/// assert_eq!(
///     decompose_name("CircularBuffer_PushBack/8/real_time").unwrap(),
///     EntryOutcome::Skipped(SkipReason::MalformedName)
/// );
/// ```
pub fn decompose_name(name: &str) -> Result<EntryOutcome<NameParts<'_>>> {
    let segments: Vec<&str> = name.split('/').collect();
    let (head, size_segment) = match segments.as_slice() {
        [head] => (*head, None),
        [head, size] => (*head, Some(*size)),
        _ => return Ok(EntryOutcome::Skipped(SkipReason::MalformedName)),
    };

    let Some(container) = Container::resolve(head) else {
        return Ok(EntryOutcome::Skipped(SkipReason::UnknownContainer));
    };

    // resolve() guarantees the separator is present
    let operation = head.split_once('_').map_or("", |(_, op)| op);
    if operation.is_empty() {
        return Ok(EntryOutcome::Skipped(SkipReason::MalformedName));
    }

    let size = match size_segment {
        None => None,
        Some(raw) => Some(raw.parse::<u64>().map_err(|_| AnalysisError::InvalidSize {
            name: name.to_string(),
            value: raw.to_string(),
        })?),
    };

    Ok(EntryOutcome::Parsed(NameParts {
        container,
        operation,
        size,
    }))
}

/// Nanoseconds per unit for the time units the harness emits.
fn unit_scale(unit: &str) -> Option<f64> {
    match unit {
        "ns" => Some(1.0),
        "us" => Some(1_000.0),
        "ms" => Some(1_000_000.0),
        "s" => Some(1_000_000_000.0),
        _ => None,
    }
}

fn check_measurement(name: &str, field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AnalysisError::InvalidMeasurement {
            name: name.to_string(),
            field,
            value,
        })
    }
}

/// Decodes a single raw entry.
///
/// # Errors
///
/// Returns an error for corrupt data inside a structurally valid entry; see
/// the module documentation.
pub fn parse_entry(entry: &RawEntry) -> Result<EntryOutcome<BenchmarkRecord>> {
    if entry.run_type.as_deref() == Some("aggregate") {
        return Ok(EntryOutcome::Skipped(SkipReason::AggregateRow));
    }

    let parts = match decompose_name(&entry.name)? {
        EntryOutcome::Parsed(parts) => parts,
        EntryOutcome::Skipped(reason) => return Ok(EntryOutcome::Skipped(reason)),
    };

    let unit = entry.time_unit.as_deref().unwrap_or("ns");
    let scale = unit_scale(unit).ok_or_else(|| AnalysisError::InvalidTimeUnit {
        name: entry.name.clone(),
        unit: unit.to_string(),
    })?;

    let cpu_time = check_measurement(&entry.name, "cpu_time", entry.cpu_time)?;
    let real_time = check_measurement(&entry.name, "real_time", entry.real_time)?;
    let items_per_second = entry
        .items_per_second
        .map(|ips| check_measurement(&entry.name, "items_per_second", ips))
        .transpose()?;

    Ok(EntryOutcome::Parsed(BenchmarkRecord {
        name: entry.name.clone(),
        container: parts.container,
        operation: parts.operation.to_string(),
        size: parts.size,
        cpu_time: cpu_time * scale,
        real_time: real_time * scale,
        items_per_second,
        iterations: entry.iterations,
    }))
}

/// Decodes every entry, keeping input order.
///
/// # Errors
///
/// Fails on the first corrupt entry; no partial record set is returned.
pub fn parse_entries(entries: &[RawEntry]) -> Result<ParsedRecords> {
    let mut parsed = ParsedRecords::default();

    for entry in entries {
        match parse_entry(entry)? {
            EntryOutcome::Parsed(record) => {
                parsed.summary.parsed += 1;
                parsed.records.push(record);
            }
            EntryOutcome::Skipped(reason) => {
                debug!(name = %entry.name, reason = reason.as_str(), "skipping benchmark entry");
                parsed.summary.record_skip(reason);
            }
        }
    }

    Ok(parsed)
}

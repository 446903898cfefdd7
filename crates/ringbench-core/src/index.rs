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

//! Grouping index: operation → container → records.

use crate::container::Container;
use crate::record::BenchmarkRecord;
use std::collections::BTreeMap;

/// Records of one operation, per container, in input order.
pub type ContainerRecords = BTreeMap<Container, Vec<BenchmarkRecord>>;

/// Two-level grouping of parsed records.
///
/// Operations iterate in lexicographic order and containers in declaration
/// order. Records with the same (operation, container, size) are all kept;
/// deduplication happens when size buckets are built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedIndex {
    operations: BTreeMap<String, ContainerRecords>,
}

impl GroupedIndex {
    /// Groups `records` by operation and container.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbench_core::parser::parse_entries;
    /// use ringbench_core::{Container, GroupedIndex, RawEntry};
    ///
    /// let parsed = parse_entries(&[
    ///     RawEntry::new("StdDeque_PushBack/10", 5.0, 5.0, 100),
    ///     RawEntry::new("CircularBuffer_PushBack/10", 3.0, 3.0, 100),
    ///     RawEntry::new("CircularBuffer_Construction", 1.0, 1.0, 100),
    /// ])
    /// .unwrap();
    ///
    /// let index = GroupedIndex::build(&parsed.records);
    /// assert_eq!(index.operation_names().collect::<Vec<_>>(), ["Construction", "PushBack"]);
    /// assert_eq!(index.get("PushBack").unwrap().len(), 2);
    /// assert!(index.get("PushBack").unwrap().contains_key(&Container::StdDeque));
    /// ```
    pub fn build(records: &[BenchmarkRecord]) -> Self {
        let mut operations: BTreeMap<String, ContainerRecords> = BTreeMap::new();

        for record in records {
            operations
                .entry(record.operation.clone())
                .or_default()
                .entry(record.container)
                .or_default()
                .push(record.clone());
        }

        Self { operations }
    }

    /// Returns the per-container records of an operation.
    pub fn get(&self, operation: &str) -> Option<&ContainerRecords> {
        self.operations.get(operation)
    }

    /// Iterates operations in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContainerRecords)> {
        self.operations
            .iter()
            .map(|(operation, containers)| (operation.as_str(), containers))
    }

    /// Iterates operation names in lexicographic order.
    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    /// Number of distinct operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if no records were grouped.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

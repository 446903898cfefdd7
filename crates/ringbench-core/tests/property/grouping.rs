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

//! Property-based tests for the grouping index.

use proptest::prelude::*;
use ringbench_core::{BenchmarkRecord, Container, GroupedIndex};

fn record() -> impl Strategy<Value = BenchmarkRecord> {
    (
        prop::sample::select(Container::ALL.to_vec()),
        prop::sample::select(vec!["PushBack", "PopFront", "Insert", "Construction"]),
        prop::option::of(1_u64..5),
        0.0_f64..1000.0,
    )
        .prop_map(|(container, operation, size, cpu_time)| BenchmarkRecord {
            name: format!("{}_{}", container.token(), operation),
            container,
            operation: operation.to_string(),
            size,
            cpu_time,
            real_time: cpu_time,
            items_per_second: None,
            iterations: 1,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: Every record lands in exactly one group matching its keys.
    #[test]
    fn prop_grouping_preserves_records(records in prop::collection::vec(record(), 0..40)) {
        let index = GroupedIndex::build(&records);

        let mut grouped = 0;
        for (operation, containers) in index.iter() {
            for (container, group) in containers {
                prop_assert!(!group.is_empty());
                for record in group {
                    prop_assert_eq!(record.operation.as_str(), operation);
                    prop_assert_eq!(record.container, *container);
                }
                grouped += group.len();
            }
        }
        prop_assert_eq!(grouped, records.len());
    }

    /// Property: Operations iterate in lexicographic order.
    #[test]
    fn prop_operations_sorted(records in prop::collection::vec(record(), 0..40)) {
        let index = GroupedIndex::build(&records);
        let names: Vec<&str> = index.operation_names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        prop_assert_eq!(names, sorted);
    }

    /// Property: Building twice from the same input yields the same index.
    #[test]
    fn prop_grouping_is_pure(records in prop::collection::vec(record(), 0..40)) {
        prop_assert_eq!(GroupedIndex::build(&records), GroupedIndex::build(&records));
    }
}

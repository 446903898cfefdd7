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

//! Property-based tests for benchmark name decomposition.

use proptest::prelude::*;
use ringbench_core::parser::{decompose_name, EntryOutcome, SkipReason};
use ringbench_core::Container;

fn container() -> impl Strategy<Value = Container> {
    prop::sample::select(Container::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: A well-formed sized name decomposes into its parts.
    #[test]
    fn prop_sized_name_decomposes(
        container in container(),
        operation in "[A-Z][a-zA-Z0-9_]{0,20}",
        size in any::<u64>()
    ) {
        let name = format!("{}_{}/{}", container.token(), operation, size);
        let outcome = decompose_name(&name);
        prop_assert!(outcome.is_ok(), "Failed to decompose: {:?}", outcome.err());

        match outcome.unwrap() {
            EntryOutcome::Parsed(parts) => {
                prop_assert_eq!(parts.container, container);
                prop_assert_eq!(parts.operation, operation.as_str());
                prop_assert_eq!(parts.size, Some(size));
            }
            EntryOutcome::Skipped(reason) => {
                prop_assert!(false, "Unexpected skip: {:?}", reason);
            }
        }
    }

    /// Property: A name without a size segment has no size.
    #[test]
    fn prop_unsized_name_decomposes(
        container in container(),
        operation in "[A-Z][a-zA-Z0-9]{0,20}"
    ) {
        let name = format!("{}_{}", container.token(), operation);
        match decompose_name(&name).unwrap() {
            EntryOutcome::Parsed(parts) => {
                prop_assert_eq!(parts.container, container);
                prop_assert_eq!(parts.size, None);
            }
            EntryOutcome::Skipped(reason) => {
                prop_assert!(false, "Unexpected skip: {:?}", reason);
            }
        }
    }

    /// Property: More than one `/` is always a malformed name, never an error.
    #[test]
    fn prop_extra_segments_are_malformed(
        container in container(),
        operation in "[A-Z][a-zA-Z0-9]{0,10}",
        tail in prop::collection::vec("[a-z0-9]{0,6}", 2..5)
    ) {
        let name = format!("{}_{}/{}", container.token(), operation, tail.join("/"));
        prop_assert_eq!(
            decompose_name(&name).unwrap(),
            EntryOutcome::Skipped(SkipReason::MalformedName)
        );
    }

    /// Property: Names without a known container prefix are skipped, whatever
    /// follows the slash.
    #[test]
    fn prop_unknown_prefix_is_skipped(
        prefix in "[a-z][a-zA-Z]{0,10}",
        operation in "[A-Z][a-zA-Z]{0,10}",
        size in "[a-z0-9]{0,6}"
    ) {
        let name = format!("{}_{}/{}", prefix, operation, size);
        prop_assert_eq!(
            decompose_name(&name).unwrap(),
            EntryOutcome::Skipped(SkipReason::UnknownContainer)
        );
    }

    /// Property: A non-numeric size is an error for known containers.
    #[test]
    fn prop_non_numeric_size_is_error(
        container in container(),
        size in "[a-zA-Z][a-zA-Z0-9]{0,8}"
    ) {
        let name = format!("{}_PushBack/{}", container.token(), size);
        prop_assert!(decompose_name(&name).is_err());
    }
}

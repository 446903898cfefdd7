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

//! Property-based tests for winner selection and ratios.

use proptest::prelude::*;
use ringbench_core::{BenchmarkRecord, Container, Metric, WinnerPolicy};

fn record(container: Container, cpu_time: f64, iterations: u64) -> BenchmarkRecord {
    BenchmarkRecord {
        name: format!("{}_Op/1", container.token()),
        container,
        operation: "Op".to_string(),
        size: Some(1),
        cpu_time,
        real_time: cpu_time,
        items_per_second: None,
        iterations,
    }
}

fn metric() -> impl Strategy<Value = Metric> {
    prop::sample::select(vec![
        Metric::CpuTime,
        Metric::RealTime,
        Metric::Iterations,
        Metric::ItemsPerSecond,
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: No participant is strictly better than the winner.
    #[test]
    fn prop_winner_dominates(
        metric in metric(),
        times in prop::collection::vec(0.0_f64..1e6, 3),
        iterations in prop::collection::vec(1_u64..1_000_000, 3)
    ) {
        let records: Vec<BenchmarkRecord> = Container::ALL
            .iter()
            .zip(times.iter().zip(iterations.iter()))
            .map(|(&c, (&t, &i))| {
                let mut r = record(c, t, i);
                r.items_per_second = Some(t * 2.0);
                r
            })
            .collect();

        let policy = WinnerPolicy::new(metric);
        let winner = policy
            .select_winner(records.iter().map(|r| (r.container, r)))
            .unwrap();

        prop_assert_eq!(winner.participants, 3);
        for r in &records {
            let value = metric.value(r).unwrap();
            prop_assert!(!policy.is_better(value, winner.value));
        }
    }

    /// Property: Ties go to the earliest container.
    #[test]
    fn prop_tie_goes_to_earliest(time in 0.0_f64..1e6) {
        let records = [
            record(Container::StdVector, time, 1),
            record(Container::StdDeque, time, 1),
        ];
        // candidates supplied in container order
        let mut sorted: Vec<&BenchmarkRecord> = records.iter().collect();
        sorted.sort_by_key(|r| r.container);

        let winner = WinnerPolicy::default()
            .select_winner(sorted.into_iter().map(|r| (r.container, r)))
            .unwrap();
        prop_assert_eq!(winner.container, Container::StdDeque);
        prop_assert!(winner.tied);
    }

    /// Property: ratio(a, b) * ratio(b, a) == 1 whenever both exist.
    #[test]
    fn prop_ratio_reciprocal(
        metric in metric(),
        a in 0.001_f64..1e6,
        b in 0.001_f64..1e6,
        ia in 1_u64..1_000_000,
        ib in 1_u64..1_000_000
    ) {
        let mut ra = record(Container::CircularBuffer, a, ia);
        let mut rb = record(Container::StdDeque, b, ib);
        ra.items_per_second = Some(a);
        rb.items_per_second = Some(b);

        let policy = WinnerPolicy::new(metric);
        let forward = policy.ratio(&ra, &rb).unwrap();
        let backward = policy.ratio(&rb, &ra).unwrap();
        prop_assert!((forward * backward - 1.0).abs() < 1e-9);
    }

    /// Property: The better side has a ratio above 1.
    #[test]
    fn prop_ratio_agrees_with_ranking(a in 0.001_f64..1e6, b in 0.001_f64..1e6) {
        prop_assume!((a - b).abs() > 1e-6);
        let ra = record(Container::CircularBuffer, a, 1);
        let rb = record(Container::StdDeque, b, 1);
        let policy = WinnerPolicy::default();
        let factor = policy.ratio(&ra, &rb).unwrap();
        prop_assert_eq!(factor > 1.0, policy.is_better(a, b));
    }
}

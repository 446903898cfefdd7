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

//! Known container implementations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A container implementation that participates in comparisons.
///
/// The declaration order is significant: it is the iteration order of every
/// per-container map and the tie-break order for winner selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Container {
    /// The fixed-capacity ring buffer under test.
    CircularBuffer,
    /// `std::deque` baseline.
    StdDeque,
    /// `std::vector` baseline.
    StdVector,
}

impl Container {
    /// All known containers, in tie-break order.
    pub const ALL: [Container; 3] = [
        Container::CircularBuffer,
        Container::StdDeque,
        Container::StdVector,
    ];

    /// Human-readable label used in reports and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Container::CircularBuffer => "CircularBuffer",
            Container::StdDeque => "std::deque",
            Container::StdVector => "std::vector",
        }
    }

    /// Token that prefixes benchmark names for this container.
    pub fn token(&self) -> &'static str {
        match self {
            Container::CircularBuffer => "CircularBuffer",
            Container::StdDeque => "StdDeque",
            Container::StdVector => "StdVector",
        }
    }

    /// Resolves the container from the first segment of a benchmark name.
    ///
    /// Matches `<Token>_` exactly; `CircularBufferX_PushBack` or a bare
    /// `CircularBuffer` resolve to `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbench_core::Container;
    ///
    /// assert_eq!(Container::resolve("StdDeque_PushBack"), Some(Container::StdDeque));
    /// assert_eq!(Container::resolve("BoostCircular_PushBack"), None);
    /// ```
    pub fn resolve(segment: &str) -> Option<Container> {
        Container::ALL.into_iter().find(|container| {
            segment
                .strip_prefix(container.token())
                .is_some_and(|rest| rest.starts_with('_'))
        })
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

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

//! Flat CSV export of parsed benchmark records.
//!
//! One row per record, in input order, before any grouping or comparison:
//!
//! ```text
//! Operation,Container,Size,CPU_Time_ns,Real_Time_ns,Items_Per_Second,Iterations
//! PushBack,CircularBuffer,1000,200.0,200.0,,500000
//! Construction,std::vector,,9.0,9.2,,1000
//! ```
//!
//! Missing sizes and throughput render as empty fields.

mod error;
mod to_csv;

pub use error::{CsvError, Result};
pub use to_csv::{
    record_row, to_csv, to_csv_with_config, to_csv_writer, to_csv_writer_with_config,
    ExportConfig, HEADER,
};

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

//! RingBench CLI library.
//!
//! Argument parsing lives in [`cli`], the analyze command and file helpers
//! in [`commands`], and exit-code mapping in [`error`].
//!
//! # Examples
//!
//! ```no_run
//! use clap::Parser;
//! use ringbench_cli::cli::Cli;
//!
//! let cli = Cli::parse_from(["ringbench", "results.json", "--csv", "results.csv"]);
//! if let Err(e) = cli.execute() {
//!     eprintln!("Error: {}", e);
//!     std::process::exit(e.exit_code().into());
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;

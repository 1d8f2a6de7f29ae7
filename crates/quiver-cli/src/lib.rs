// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Quiver developer CLI.
//!
//! ```text
//! quiver field-key <name> [--args <json-object>]
//! quiver refs --schema <ir.json> --rules <rules.json> [--input <file>]
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG`.
#![forbid(unsafe_code)]

pub mod cli;
pub mod refs;

pub use cli::{entrypoint, field_key_command, load_schema, parse_arguments, run, Cli, Commands};
pub use refs::{collect_references, ReferenceHit};

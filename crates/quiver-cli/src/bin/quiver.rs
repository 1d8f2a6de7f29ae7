// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! CLI entry point for `quiver`.

use anyhow::Result;
use quiver_cli::entrypoint;

fn main() -> Result<()> {
    entrypoint()
}

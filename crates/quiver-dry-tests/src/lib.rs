// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared fixture schema and mock types for Quiver crates.
//!
//! # Modules
//!
//! - [`schema`] - The animals schema: types, registry, IR text, identity rules
//! - [`animals`] - `Dog`/`Cat`/`Height` mock markers and field descriptors
#![forbid(unsafe_code)]

pub mod animals;
pub mod schema;

// Re-export commonly used items at crate root for convenience
pub use animals::{cat_named, dog_named, Cat, Dog, Height};
pub use schema::{
    fixture_registry, fixture_schema, pet_key_rules, ANIMAL, ANIMALS_IR, PET, PET_RULES_JSON,
};

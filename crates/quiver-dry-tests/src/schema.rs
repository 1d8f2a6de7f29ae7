// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The animals fixture schema: `Dog` and `Cat` implement `Animal` and `Pet`;
//! `Height` implements nothing.

use std::sync::LazyLock;

use quiver_schema::{Interface, KeyRule, KeyRules, ObjectType, Schema, TypeRegistry};

/// `Animal` interface.
pub const ANIMAL: Interface = Interface::new("Animal");
/// `Pet` interface.
pub const PET: Interface = Interface::new("Pet");

/// `Dog` object type.
pub static DOG_TYPE: ObjectType = ObjectType::new("Dog", &[ANIMAL, PET]);
/// `Cat` object type.
pub static CAT_TYPE: ObjectType = ObjectType::new("Cat", &[ANIMAL, PET]);
/// `Height` object type.
pub static HEIGHT_TYPE: ObjectType = ObjectType::new("Height", &[]);

/// The same schema as a JSON IR document.
pub const ANIMALS_IR: &str = r#"{
  "ir_version": "quiver-ir/v1",
  "types": [
    { "name": "Animal", "kind": "INTERFACE" },
    { "name": "Pet", "kind": "INTERFACE" },
    { "name": "Dog", "kind": "OBJECT", "interfaces": ["Animal", "Pet"] },
    { "name": "Cat", "kind": "OBJECT", "interfaces": ["Animal", "Pet"] },
    { "name": "Height", "kind": "OBJECT" }
  ]
}"#;

/// Identity rules as JSON, equivalent to [`pet_key_rules`].
pub const PET_RULES_JSON: &str = r#"{
  "by_type": [{ "typename": "Dog", "field": "petName", "group": "Pet" }],
  "by_interface": [{ "interface": "Pet", "field": "name", "group": "Pet" }],
  "default": { "field": "id" }
}"#;

static REGISTRY: LazyLock<TypeRegistry> = LazyLock::new(|| {
    // Static names are distinct, so this cannot fail.
    TypeRegistry::from_types([DOG_TYPE.clone(), CAT_TYPE.clone(), HEIGHT_TYPE.clone()])
        .unwrap_or_default()
});

/// Process-wide registry of the fixture types.
pub fn fixture_registry() -> &'static TypeRegistry {
    &REGISTRY
}

/// Dogs key on `petName`, other pets on `name`, both in group `Pet`;
/// everything else keys on `id`.
pub fn pet_key_rules() -> KeyRules {
    KeyRules::new()
        .for_type("Dog", KeyRule::field("petName").in_group("Pet"))
        .for_interface("Pet", KeyRule::field("name").in_group("Pet"))
        .or_default(KeyRule::field("id"))
}

/// Fixture registry paired with [`pet_key_rules`].
pub fn fixture_schema() -> Schema<KeyRules> {
    Schema::new(fixture_registry().clone(), pet_key_rules())
}

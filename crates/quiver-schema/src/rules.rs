// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Declarative identity rules.
//!
//! [`KeyRules`] is a ready-made [`CacheKeyResolver`] for schemas whose
//! identity logic is "read one field, optionally share a group". Rules can be
//! built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "by_type": [{ "typename": "Dog", "field": "petName", "group": "Pet" }],
//!   "by_interface": [{ "interface": "Pet", "field": "name", "group": "Pet" }],
//!   "default": { "field": "id" }
//! }
//! ```
//!
//! Dispatch: exact registered type, then the first interface rule (in
//! declaration order) the type implements, then the default. Unknown types go
//! straight to the default.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::reference::{CacheKeyInfo, CacheKeyResolver};
use crate::registry::SchemaError;
use crate::types::ResolvedType;
use crate::JsonObject;

/// Read identity from `field`, optionally inside a shared `group`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRule {
    /// Raw field holding the key.
    pub field: String,
    /// Identity group replacing the typename prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl KeyRule {
    /// Key on `field` with the typename as prefix.
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            group: None,
        }
    }

    /// Put keys produced by this rule in `group`.
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    fn apply(&self, ty: &ResolvedType<'_>, object: &JsonObject) -> Option<CacheKeyInfo> {
        match CacheKeyInfo::from_json(object.get(&self.field)) {
            Ok(info) => Some(info.with_group(self.group.as_deref())),
            Err(err) => {
                debug!(
                    typename = ty.typename(),
                    field = %self.field,
                    %err,
                    "identity field unusable; anonymous"
                );
                None
            }
        }
    }
}

/// Rule for one concrete type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeKeyRule {
    /// Concrete typename.
    pub typename: String,
    /// Identity rule.
    #[serde(flatten)]
    pub rule: KeyRule,
}

/// Rule for every type implementing an interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceKeyRule {
    /// Interface name.
    pub interface: String,
    /// Identity rule.
    #[serde(flatten)]
    pub rule: KeyRule,
}

/// Ordered identity rules; see the module docs for dispatch order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRules {
    /// Per-type rules.
    #[serde(default)]
    pub by_type: Vec<TypeKeyRule>,
    /// Per-interface rules, first match wins.
    #[serde(default)]
    pub by_interface: Vec<InterfaceKeyRule>,
    /// Fallback for everything else, including unknown types.
    #[serde(default)]
    pub default: Option<KeyRule>,
}

impl KeyRules {
    /// No rules: nothing has identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse rules from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a rule for a concrete type.
    pub fn for_type(mut self, typename: impl Into<String>, rule: KeyRule) -> Self {
        self.by_type.push(TypeKeyRule {
            typename: typename.into(),
            rule,
        });
        self
    }

    /// Add a rule for an interface.
    pub fn for_interface(mut self, interface: impl Into<String>, rule: KeyRule) -> Self {
        self.by_interface.push(InterfaceKeyRule {
            interface: interface.into(),
            rule,
        });
        self
    }

    /// Set the fallback rule.
    pub fn or_default(mut self, rule: KeyRule) -> Self {
        self.default = Some(rule);
        self
    }

    /// Pick the rule that applies to `ty`.
    pub fn select(&self, ty: &ResolvedType<'_>) -> Option<&KeyRule> {
        if let ResolvedType::Object(object_type) = ty {
            let typename = object_type.typename();
            if let Some(r) = self.by_type.iter().find(|r| r.typename == typename) {
                return Some(&r.rule);
            }
            if let Some(r) = self
                .by_interface
                .iter()
                .find(|r| object_type.implements_name(&r.interface))
            {
                return Some(&r.rule);
            }
        }
        self.default.as_ref()
    }
}

impl CacheKeyResolver for KeyRules {
    fn cache_key_info(&self, ty: &ResolvedType<'_>, object: &JsonObject) -> Option<CacheKeyInfo> {
        self.select(ty)?.apply(ty, object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Interface, ObjectType};
    use serde_json::json;

    const PET: Interface = Interface::new("Pet");
    static DOG: ObjectType = ObjectType::new("Dog", &[PET]);
    static CAT: ObjectType = ObjectType::new("Cat", &[PET]);
    static HEIGHT: ObjectType = ObjectType::new("Height", &[]);

    fn rules() -> KeyRules {
        KeyRules::new()
            .for_type("Dog", KeyRule::field("petName").in_group("Pet"))
            .for_interface("Pet", KeyRule::field("name").in_group("Pet"))
            .or_default(KeyRule::field("id"))
    }

    fn obj(v: serde_json::Value) -> JsonObject {
        match v {
            serde_json::Value::Object(m) => m,
            _ => JsonObject::new(),
        }
    }

    #[test]
    fn exact_type_beats_interface() {
        let r = rules();
        assert_eq!(r.select(&ResolvedType::Object(&DOG)).unwrap().field, "petName");
        assert_eq!(r.select(&ResolvedType::Object(&CAT)).unwrap().field, "name");
        assert_eq!(r.select(&ResolvedType::Object(&HEIGHT)).unwrap().field, "id");
    }

    #[test]
    fn unknown_types_use_default() {
        let r = rules();
        assert_eq!(r.select(&ResolvedType::Unknown("Dog")).unwrap().field, "id");
        assert!(KeyRules::new().select(&ResolvedType::Unknown("X")).is_none());
    }

    #[test]
    fn unusable_field_is_no_identity() {
        let r = rules();
        let o = obj(json!({ "__typename": "Height", "id": false }));
        assert_eq!(r.cache_key_info(&ResolvedType::Object(&HEIGHT), &o), None);
    }

    #[test]
    fn loads_from_json() {
        let r = KeyRules::from_json(
            r#"{
                "by_type": [{ "typename": "Dog", "field": "petName", "group": "Pet" }],
                "by_interface": [{ "interface": "Pet", "field": "name", "group": "Pet" }],
                "default": { "field": "id" }
            }"#,
        )
        .unwrap();
        assert_eq!(r, rules());
    }
}

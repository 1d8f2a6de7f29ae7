// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Name → type lookup, built once and read-only afterwards.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::ir::{SchemaIr, TypeKind};
use crate::types::{ObjectType, ResolvedType};
use crate::SchemaConfiguration;

/// Errors raised while building a [`TypeRegistry`].
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Two types share a name.
    #[error("duplicate type: {0}")]
    DuplicateType(String),
    /// An object names an interface the schema never declares.
    #[error("type {object} implements undeclared interface {interface}")]
    UnknownInterface {
        /// Implementing type.
        object: String,
        /// Missing interface name.
        interface: String,
    },
    /// An object names something that exists but is not an interface.
    #[error("type {object} implements {interface}, which is not an interface")]
    NotAnInterface {
        /// Implementing type.
        object: String,
        /// Offending type name.
        interface: String,
    },
    /// The IR or rules document is not valid JSON for its shape.
    #[error("schema json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fixed mapping from `__typename` to [`ObjectType`].
///
/// Populate once before concurrent use; all lookups take `&self`, so a
/// registry in a `static` (e.g. behind `LazyLock`) can be shared freely.
///
/// # Determinism Invariant
///
/// No public API exposes map iteration order; [`TypeRegistry::typenames`] is
/// sorted.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: FxHashMap<String, ObjectType>,
}

impl TypeRegistry {
    /// Build a registry from object type descriptors.
    pub fn from_types(types: impl IntoIterator<Item = ObjectType>) -> Result<Self, SchemaError> {
        let mut map = FxHashMap::default();
        for ty in types {
            let name = ty.typename().to_owned();
            if map.insert(name.clone(), ty).is_some() {
                return Err(SchemaError::DuplicateType(name));
            }
        }
        debug!(types = map.len(), "type registry built");
        Ok(Self { types: map })
    }

    /// Build a registry from a parsed IR document.
    ///
    /// Every `OBJECT` becomes a registered type. Interfaces an object claims
    /// must be declared in the same document with kind `INTERFACE`.
    pub fn from_ir(ir: &SchemaIr) -> Result<Self, SchemaError> {
        let mut seen = FxHashSet::default();
        let mut interfaces = FxHashSet::default();
        for def in &ir.types {
            if !seen.insert(def.name.as_str()) {
                return Err(SchemaError::DuplicateType(def.name.clone()));
            }
            if def.kind == TypeKind::Interface {
                interfaces.insert(def.name.as_str());
            }
        }

        let mut objects = Vec::new();
        for def in ir.types.iter().filter(|d| d.kind == TypeKind::Object) {
            for iface in &def.interfaces {
                if !interfaces.contains(iface.as_str()) {
                    return Err(if seen.contains(iface.as_str()) {
                        SchemaError::NotAnInterface {
                            object: def.name.clone(),
                            interface: iface.clone(),
                        }
                    } else {
                        SchemaError::UnknownInterface {
                            object: def.name.clone(),
                            interface: iface.clone(),
                        }
                    });
                }
            }
            objects.push(ObjectType::dynamic(def.name.clone(), def.interfaces.iter().cloned()));
        }
        Self::from_types(objects)
    }

    /// Parse an IR document from JSON text and build a registry from it.
    pub fn from_ir_json(json: &str) -> Result<Self, SchemaError> {
        let ir: SchemaIr = serde_json::from_str(json)?;
        Self::from_ir(&ir)
    }

    /// Look up a registered type.
    pub fn get(&self, typename: &str) -> Option<&ObjectType> {
        self.types.get(typename)
    }

    /// Resolve a name, falling back to [`ResolvedType::Unknown`].
    pub fn resolve<'a>(&'a self, typename: &'a str) -> ResolvedType<'a> {
        self.get(typename)
            .map_or(ResolvedType::Unknown(typename), ResolvedType::Object)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered type names, sorted.
    pub fn typenames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl SchemaConfiguration for TypeRegistry {
    fn object_type(&self, typename: &str) -> Option<&ObjectType> {
        self.get(typename)
    }
}

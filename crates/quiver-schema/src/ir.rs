// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Minimal schema IR (JSON) consumed by [`TypeRegistry::from_ir`](crate::TypeRegistry::from_ir).
//!
//! Only the parts needed to resolve a type from its name are read: type names,
//! kinds, and implemented interfaces. Everything else in the document (fields,
//! ops, enum values) is ignored.

use serde::Deserialize;

/// Top-level IR document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaIr {
    /// IR format tag, informational only.
    #[serde(default)]
    pub ir_version: Option<String>,
    /// All named types in the schema.
    #[serde(default)]
    pub types: Vec<TypeDefinition>,
}

/// One named type.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDefinition {
    /// Type name (`__typename` for objects).
    pub name: String,
    /// Kind of type.
    pub kind: TypeKind,
    /// Interfaces implemented (objects and interfaces only).
    #[serde(default)]
    pub interfaces: Vec<String>,
}

/// GraphQL type kinds.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    /// Concrete object type.
    Object,
    /// Interface.
    Interface,
    /// Union.
    Union,
    /// Enum.
    Enum,
    /// Scalar.
    Scalar,
    /// Input object.
    InputObject,
}

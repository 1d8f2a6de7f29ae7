// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Type registry and cache-reference resolution for Quiver schemas.
//!
//! The schema layer (generated or hand-written) supplies two things through
//! [`SchemaConfiguration`]:
//!
//! - a lookup from `__typename` to an [`ObjectType`], usually backed by a
//!   [`TypeRegistry`];
//! - optionally, a [`CacheKeyResolver`] deciding which field(s) identify an
//!   object. Without one, nothing has identity.
//!
//! [`cache_reference`] combines the two into a [`CacheReference`] token used by
//! the normalized store to de-duplicate objects.
//!
//! Polymorphism is capability-based: each type carries the set of interfaces
//! it implements, and identity logic dispatches on set membership. Adding a new
//! type that implements an existing interface needs no resolver changes.
#![forbid(unsafe_code)]

pub mod ir;
mod reference;
mod registry;
mod rules;
mod types;

pub use reference::{
    cache_reference, resolver_fn, CacheKeyInfo, CacheKeyResolver, CacheReference, KeyInfoError,
    ResolverFn,
};
pub use registry::{SchemaError, TypeRegistry};
pub use rules::{InterfaceKeyRule, KeyRule, KeyRules, TypeKeyRule};
pub use types::{Interface, ObjectType, ResolvedType};

/// A raw response object: field storage key → JSON value.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Reserved field naming an object's concrete type.
pub const TYPENAME_FIELD: &str = "__typename";

/// The `__typename` of a raw object, if present and a string.
pub fn typename_of(object: &JsonObject) -> Option<&str> {
    object.get(TYPENAME_FIELD).and_then(serde_json::Value::as_str)
}

/// Schema-supplied type lookup and identity rules.
///
/// Implemented by the schema layer. Lookups take `&self` only; implementors
/// must be safe to share across threads once built.
pub trait SchemaConfiguration: Sync {
    /// Look up a registered object type by name.
    fn object_type(&self, typename: &str) -> Option<&ObjectType>;

    /// Identity logic, if this schema has any.
    fn cache_key_resolver(&self) -> Option<&dyn CacheKeyResolver> {
        None
    }

    /// Total type lookup: unregistered names resolve to [`ResolvedType::Unknown`].
    fn graphql_type<'a>(&'a self, typename: &'a str) -> ResolvedType<'a> {
        self.object_type(typename)
            .map_or(ResolvedType::Unknown(typename), ResolvedType::Object)
    }

    /// Resolve the type of a raw object via its `__typename`.
    fn graphql_type_for<'a>(&'a self, object: &'a JsonObject) -> Option<ResolvedType<'a>> {
        typename_of(object).map(|typename| self.graphql_type(typename))
    }

    /// Cache reference for `object`; see [`cache_reference`].
    fn cache_reference(&self, object: &JsonObject) -> Option<CacheReference> {
        cache_reference(self, object)
    }
}

/// A [`TypeRegistry`] paired with identity rules.
#[derive(Debug, Clone)]
pub struct Schema<R> {
    registry: TypeRegistry,
    resolver: R,
}

impl<R: CacheKeyResolver> Schema<R> {
    /// Pair `registry` with `resolver`.
    pub fn new(registry: TypeRegistry, resolver: R) -> Self {
        Self { registry, resolver }
    }

    /// The backing registry.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// The identity rules.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}

impl<R: CacheKeyResolver> SchemaConfiguration for Schema<R> {
    fn object_type(&self, typename: &str) -> Option<&ObjectType> {
        self.registry.get(typename)
    }

    fn cache_key_resolver(&self) -> Option<&dyn CacheKeyResolver> {
        Some(&self.resolver)
    }
}

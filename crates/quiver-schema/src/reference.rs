// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Cache references: stable identity tokens for response objects.
//!
//! A reference is `<group-or-typename>:<key>`. The key and optional group come
//! from the schema's [`CacheKeyResolver`], which dispatches on the object's
//! resolved type.
//!
//! # Absence Semantics
//!
//! [`cache_reference`] returns `None` whenever identity cannot be derived: no
//! `__typename`, no resolver, no matching rule, unusable key field. This is
//! **not** an error. Objects without a reference are anonymous and are never
//! de-duplicated by the normalized store.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::types::ResolvedType;
use crate::{typename_of, JsonObject, SchemaConfiguration};

/// Opaque identity token for one logical entity.
///
/// Only [`cache_reference`] constructs these. The text is not meant to be
/// parsed; neither segment is escaped.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CacheReference(String);

impl CacheReference {
    /// Token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the token text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CacheReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Why a JSON value could not serve as an identity key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyInfoError {
    /// The key field is absent or null.
    #[error("identity field missing")]
    Missing,
    /// The key field holds a value with no text form.
    #[error("identity field is a {0}, not text or a number")]
    NotConvertible(&'static str),
}

/// Key descriptor produced by a schema for one object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKeyInfo {
    /// Identity key within the group (or type).
    pub key: String,
    /// Shared identity space; when set it replaces the typename prefix.
    pub unique_key_group: Option<String>,
}

impl CacheKeyInfo {
    /// Key scoped to the object's own typename.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            unique_key_group: None,
        }
    }

    /// Key scoped to a shared identity group.
    pub fn grouped(key: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            unique_key_group: Some(group.into()),
        }
    }

    /// Derive a key from a raw JSON field value.
    ///
    /// Strings are used as-is and numbers by their JSON text. Missing or null
    /// values, booleans, lists and objects are rejected.
    pub fn from_json(value: Option<&Value>) -> Result<Self, KeyInfoError> {
        match value {
            None | Some(Value::Null) => Err(KeyInfoError::Missing),
            Some(Value::String(s)) => Ok(Self::new(s.clone())),
            Some(Value::Number(n)) => Ok(Self::new(n.to_string())),
            Some(Value::Bool(_)) => Err(KeyInfoError::NotConvertible("boolean")),
            Some(Value::Array(_)) => Err(KeyInfoError::NotConvertible("list")),
            Some(Value::Object(_)) => Err(KeyInfoError::NotConvertible("object")),
        }
    }

    /// Replace the identity group.
    pub fn with_group(mut self, group: Option<impl Into<String>>) -> Self {
        self.unique_key_group = group.map(Into::into);
        self
    }
}

/// Schema-supplied identity logic.
///
/// Implementations dispatch on the resolved type: an exact type match first,
/// then interface membership, then a default. Returning `None` means the object
/// has no identity.
pub trait CacheKeyResolver: Sync {
    /// Compute the key descriptor for `object`, whose type resolved to `ty`.
    fn cache_key_info(&self, ty: &ResolvedType<'_>, object: &JsonObject) -> Option<CacheKeyInfo>;
}

/// Adapter that lets a closure act as a [`CacheKeyResolver`].
///
/// Build with [`resolver_fn`] so the closure's argument lifetimes are inferred.
#[derive(Clone, Copy)]
pub struct ResolverFn<F>(F);

impl<F> fmt::Debug for ResolverFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResolverFn(..)")
    }
}

/// Wrap a closure as a [`CacheKeyResolver`].
pub fn resolver_fn<F>(f: F) -> ResolverFn<F>
where
    F: Fn(&ResolvedType<'_>, &JsonObject) -> Option<CacheKeyInfo> + Sync,
{
    ResolverFn(f)
}

impl<F> CacheKeyResolver for ResolverFn<F>
where
    F: Fn(&ResolvedType<'_>, &JsonObject) -> Option<CacheKeyInfo> + Sync,
{
    fn cache_key_info(&self, ty: &ResolvedType<'_>, object: &JsonObject) -> Option<CacheKeyInfo> {
        (self.0)(ty, object)
    }
}

/// Derive the cache reference for a raw response object.
///
/// Deterministic and read-only: the same schema and object always give the
/// same result.
pub fn cache_reference<S>(schema: &S, object: &JsonObject) -> Option<CacheReference>
where
    S: SchemaConfiguration + ?Sized,
{
    let Some(typename) = typename_of(object) else {
        trace!("object has no string __typename; anonymous");
        return None;
    };
    let Some(resolver) = schema.cache_key_resolver() else {
        trace!(typename, "schema has no cache key resolver; anonymous");
        return None;
    };
    let ty = schema.graphql_type(typename);
    let Some(info) = resolver.cache_key_info(&ty, object) else {
        trace!(typename, unknown = ty.is_unknown(), "no identity rule matched; anonymous");
        return None;
    };
    let prefix = info.unique_key_group.as_deref().unwrap_or(typename);
    Some(CacheReference(format!("{prefix}:{}", info.key)))
}

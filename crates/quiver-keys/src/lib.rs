// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Canonical field keys for GraphQL fields.
//!
//! A field with no arguments is stored under its bare name. A field invoked
//! with arguments is stored under `name(arg1:val1,arg2:val2,...)`, with the
//! entries sorted ascending by argument name. The sort is byte-wise over UTF-8,
//! so it is total and does not depend on locale.
//!
//! # Determinism Invariant
//!
//! Two argument maps with the same names and values produce the same key no
//! matter what order the arguments were supplied in. Any differing value
//! produces a different key, and therefore a different storage slot.
//!
//! Distinctness holds between maps that differ in one value. Text values are
//! written unquoted and unescaped, so maps that differ in more than that can
//! still collide: `{a: "10"}` and `{a: 10}` both give `f(a:10)`, and
//! `{a: "1,b:2"}` gives the same key as `{a: "1", b: "2"}`. Callers that
//! need an injective key must keep `,` `:` `(` `)` out of text arguments and
//! must not mix text and numbers under one name.
//!
//! The key text is a compatibility surface: anything that persists or indexes
//! by these keys breaks if the sort rule or separators change.
#![forbid(unsafe_code)]

mod value;
pub use value::ArgValue;

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

/// Errors raised while assembling an argument map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// The same argument name was supplied twice.
    #[error("duplicate argument: {0}")]
    DuplicateArgument(String),
}

/// Argument name → value map for one field invocation.
///
/// Backed by a sorted map, so iteration is always in canonical order.
/// [`Arguments::insert`] is last-write-wins; use [`Arguments::try_from_pairs`]
/// to reject duplicate names instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arguments(BTreeMap<String, ArgValue>);

impl Arguments {
    /// Create an empty argument map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from pairs, rejecting duplicate names.
    pub fn try_from_pairs<I, K, V>(pairs: I) -> Result<Self, KeyError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ArgValue>,
    {
        let mut map = BTreeMap::new();
        for (name, value) in pairs {
            match map.entry(name.into()) {
                btree_map::Entry::Occupied(e) => {
                    return Err(KeyError::DuplicateArgument(e.key().clone()));
                }
                btree_map::Entry::Vacant(e) => {
                    e.insert(value.into());
                }
            }
        }
        Ok(Self(map))
    }

    /// Insert an argument. Returns the previous value if `name` was present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Option<ArgValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up an argument by name.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.0.get(name)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no arguments are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate arguments in canonical (ascending name) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<ArgValue>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

/// Compute the canonical storage key for `field_name` invoked with `arguments`.
///
/// Pure and total. Empty text values are valid and encode as empty segments
/// (`f(a:)`).
///
/// Text is not quoted or escaped, so it can mimic other values or extra
/// arguments; see the crate docs for the colliding cases.
pub fn field_key(field_name: &str, arguments: &Arguments) -> String {
    if arguments.is_empty() {
        return field_name.to_owned();
    }
    let mut out = String::with_capacity(field_name.len() + 2 + arguments.len() * 8);
    out.push_str(field_name);
    out.push('(');
    for (i, (name, value)) in arguments.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(name);
        out.push(':');
        out.push_str(&value.to_string());
    }
    out.push(')');
    out
}

/// Build an [`Arguments`] map from `name => value` pairs.
///
/// Later pairs overwrite earlier ones with the same name.
///
/// ```
/// use quiver_keys::{args, field_key};
///
/// let key = field_key("scalarMultipleArgNonAlphabeticalField", &args! { "bArg" => "B", "aArg" => 10 });
/// assert_eq!(key, "scalarMultipleArgNonAlphabeticalField(aArg:10,bArg:B)");
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Arguments::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut arguments = $crate::Arguments::new();
        $( arguments.insert($name, $value); )+
        arguments
    }};
}

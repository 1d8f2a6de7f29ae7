// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Depth-first reference extraction from a JSON response.

use quiver_schema::{CacheReference, SchemaConfiguration};
use serde_json::Value;
use tracing::trace;

/// One object in a response that resolved to a cache reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceHit {
    /// RFC 6901 pointer to the object; `""` is the root.
    pub pointer: String,
    /// The object's reference.
    pub reference: CacheReference,
}

/// Walk `response` depth-first and resolve every object it contains.
///
/// Parents come before their children; object members are visited in key
/// order and array items in index order. Objects without a reference are
/// skipped but still descended into.
pub fn collect_references<S>(schema: &S, response: &Value) -> Vec<ReferenceHit>
where
    S: SchemaConfiguration + ?Sized,
{
    let mut hits = Vec::new();
    let mut pointer = String::new();
    walk(schema, response, &mut pointer, &mut hits);
    hits
}

fn walk<S>(schema: &S, value: &Value, pointer: &mut String, hits: &mut Vec<ReferenceHit>)
where
    S: SchemaConfiguration + ?Sized,
{
    match value {
        Value::Object(object) => {
            if let Some(reference) = schema.cache_reference(object) {
                trace!(pointer = %pointer, reference = %reference, "resolved");
                hits.push(ReferenceHit {
                    pointer: pointer.clone(),
                    reference,
                });
            }
            for (key, child) in object {
                let len = pointer.len();
                push_token(pointer, key);
                walk(schema, child, pointer, hits);
                pointer.truncate(len);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let len = pointer.len();
                push_token(pointer, &index.to_string());
                walk(schema, child, pointer, hits);
                pointer.truncate(len);
            }
        }
        _ => {}
    }
}

fn push_token(pointer: &mut String, token: &str) {
    pointer.push('/');
    for c in token.chars() {
        match c {
            '~' => pointer.push_str("~0"),
            '/' => pointer.push_str("~1"),
            c => pointer.push(c),
        }
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Record graph → plain JSON.
//!
//! Each record on the current path is remembered; meeting one again means the
//! graph is cyclic and materialization stops with [`MockError::Cycle`]. A
//! record shared by two parents (not on one path) is simply emitted twice.
//!
//! Nesting (records and lists alike) is capped at [`MAX_DEPTH`]; deeper
//! graphs fail with [`MockError::TooDeep`] instead of exhausting the stack.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::mock::AnyMock;
use crate::value::MockValue;
use crate::MockError;

/// Deepest nesting `to_json` will descend into, counting records and lists.
pub const MAX_DEPTH: usize = 256;

pub(crate) fn to_json(root: &AnyMock) -> Result<Value, MockError> {
    trace!(typename = root.typename(), "materializing mock");
    let mut path = Vec::new();
    object_to_json(root, &mut path, 0)
}

fn object_to_json(
    mock: &AnyMock,
    path: &mut Vec<AnyMock>,
    depth: usize,
) -> Result<Value, MockError> {
    if path.iter().any(|m| m.ptr_eq(mock)) {
        let path: Vec<&str> = path
            .iter()
            .map(AnyMock::typename)
            .chain(std::iter::once(mock.typename()))
            .collect();
        debug!(path = %path.join(" -> "), "cyclic mock graph");
        return Err(MockError::Cycle {
            typename: mock.typename().to_owned(),
            path: path.join(" -> "),
        });
    }

    // Snapshot first so this record's lock is released before recursing.
    let entries = mock.snapshot();
    path.push(mock.clone());
    let mut out = Map::new();
    for (key, value) in entries {
        out.insert(key, value_to_json(&value, path, depth + 1)?);
    }
    path.pop();
    Ok(Value::Object(out))
}

fn value_to_json(
    value: &MockValue,
    path: &mut Vec<AnyMock>,
    depth: usize,
) -> Result<Value, MockError> {
    if depth > MAX_DEPTH && matches!(value, MockValue::Object(_) | MockValue::List(_)) {
        let typename = path.last().map_or("", AnyMock::typename).to_owned();
        debug!(depth, typename = %typename, "mock graph too deep");
        return Err(MockError::TooDeep { depth, typename });
    }
    match value {
        MockValue::Null => Ok(Value::Null),
        MockValue::Scalar(v) => Ok(v.clone()),
        MockValue::Object(mock) => object_to_json(mock, path, depth),
        MockValue::List(items) => items
            .iter()
            .map(|item| value_to_json(item, path, depth + 1))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stored values and the typed shapes projected over them.

use serde_json::Value;

use crate::mock::{AnyMock, Mock};
use crate::Mockable;

/// A value held in a mock's field map.
///
/// Equality compares scalars by value and records by identity.
#[derive(Debug, Clone, PartialEq)]
pub enum MockValue {
    /// Explicitly absent entry (only meaningful inside lists).
    Null,
    /// Scalar (or custom scalar) JSON value.
    Scalar(Value),
    /// Shared handle to another record.
    Object(AnyMock),
    /// Ordered list of values.
    List(Vec<MockValue>),
}

impl MockValue {
    /// Short name of this value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Scalar(Value::String(_)) => "string",
            Self::Scalar(Value::Number(_)) => "number",
            Self::Scalar(Value::Bool(_)) => "boolean",
            Self::Scalar(_) => "json",
            Self::Object(_) => "object",
            Self::List(_) => "list",
        }
    }
}

impl From<Value> for MockValue {
    fn from(value: Value) -> Self {
        Self::Scalar(value)
    }
}

impl From<AnyMock> for MockValue {
    fn from(mock: AnyMock) -> Self {
        Self::Object(mock)
    }
}

/// A Rust type that can be stored in, and read back from, a mock field.
///
/// Implementations define the field's *shape*. Reading a stored value whose
/// kind does not fit the shape yields `None` from [`from_mock_value`], which
/// accessors surface as [`MockError::ShapeMismatch`](crate::MockError::ShapeMismatch).
///
/// [`from_mock_value`]: MockFieldValue::from_mock_value
pub trait MockFieldValue: Sized {
    /// Human-readable shape, e.g. `[Cat?]`.
    fn shape() -> String;

    /// Convert into the stored representation.
    fn into_mock_value(self) -> MockValue;

    /// Project a stored value onto this shape.
    fn from_mock_value(value: &MockValue) -> Option<Self>;
}

impl MockFieldValue for String {
    fn shape() -> String {
        "String".into()
    }

    fn into_mock_value(self) -> MockValue {
        MockValue::Scalar(Value::String(self))
    }

    fn from_mock_value(value: &MockValue) -> Option<Self> {
        match value {
            MockValue::Scalar(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }
}

impl MockFieldValue for bool {
    fn shape() -> String {
        "Boolean".into()
    }

    fn into_mock_value(self) -> MockValue {
        MockValue::Scalar(Value::Bool(self))
    }

    fn from_mock_value(value: &MockValue) -> Option<Self> {
        match value {
            MockValue::Scalar(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }
}

impl MockFieldValue for i64 {
    fn shape() -> String {
        "Int".into()
    }

    fn into_mock_value(self) -> MockValue {
        MockValue::Scalar(Value::from(self))
    }

    fn from_mock_value(value: &MockValue) -> Option<Self> {
        match value {
            MockValue::Scalar(Value::Number(n)) => n.as_i64(),
            _ => None,
        }
    }
}

impl MockFieldValue for i32 {
    fn shape() -> String {
        "Int".into()
    }

    fn into_mock_value(self) -> MockValue {
        MockValue::Scalar(Value::from(self))
    }

    fn from_mock_value(value: &MockValue) -> Option<Self> {
        i64::from_mock_value(value).and_then(|n| i32::try_from(n).ok())
    }
}

impl MockFieldValue for f64 {
    fn shape() -> String {
        "Float".into()
    }

    // Non-finite floats have no JSON form; they are stored as null and read
    // back as absent.
    fn into_mock_value(self) -> MockValue {
        if self.is_finite() {
            MockValue::Scalar(Value::from(self))
        } else {
            MockValue::Null
        }
    }

    fn from_mock_value(value: &MockValue) -> Option<Self> {
        match value {
            MockValue::Scalar(Value::Number(n)) => n.as_f64(),
            _ => None,
        }
    }
}

/// Raw JSON for custom scalars.
impl MockFieldValue for Value {
    fn shape() -> String {
        "JSON".into()
    }

    fn into_mock_value(self) -> MockValue {
        MockValue::Scalar(self)
    }

    fn from_mock_value(value: &MockValue) -> Option<Self> {
        match value {
            MockValue::Scalar(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl<T: Mockable> MockFieldValue for Mock<T> {
    fn shape() -> String {
        T::object_type().typename().to_owned()
    }

    fn into_mock_value(self) -> MockValue {
        MockValue::Object(self.into_any())
    }

    fn from_mock_value(value: &MockValue) -> Option<Self> {
        match value {
            MockValue::Object(any) => any.downcast::<T>(),
            _ => None,
        }
    }
}

/// Interface-typed fields: any record is accepted at store time.
impl MockFieldValue for AnyMock {
    fn shape() -> String {
        "Object".into()
    }

    fn into_mock_value(self) -> MockValue {
        MockValue::Object(self)
    }

    fn from_mock_value(value: &MockValue) -> Option<Self> {
        match value {
            MockValue::Object(any) => Some(any.clone()),
            _ => None,
        }
    }
}

impl<V: MockFieldValue> MockFieldValue for Vec<V> {
    fn shape() -> String {
        format!("[{}]", V::shape())
    }

    fn into_mock_value(self) -> MockValue {
        MockValue::List(self.into_iter().map(V::into_mock_value).collect())
    }

    fn from_mock_value(value: &MockValue) -> Option<Self> {
        match value {
            MockValue::List(items) => items.iter().map(V::from_mock_value).collect(),
            _ => None,
        }
    }
}

/// Optional entries: `None` is stored as [`MockValue::Null`].
impl<V: MockFieldValue> MockFieldValue for Option<V> {
    fn shape() -> String {
        format!("{}?", V::shape())
    }

    fn into_mock_value(self) -> MockValue {
        self.map_or(MockValue::Null, V::into_mock_value)
    }

    fn from_mock_value(value: &MockValue) -> Option<Self> {
        match value {
            MockValue::Null => Some(None),
            other => V::from_mock_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_round_trip_through_stored_form() {
        assert_eq!(String::from_mock_value(&"a".to_owned().into_mock_value()), Some("a".into()));
        assert_eq!(i32::from_mock_value(&7_i32.into_mock_value()), Some(7));
        assert_eq!(f64::from_mock_value(&1.5_f64.into_mock_value()), Some(1.5));
        assert_eq!(bool::from_mock_value(&true.into_mock_value()), Some(true));
    }

    #[test]
    fn mismatched_kinds_do_not_project() {
        let s = "x".to_owned().into_mock_value();
        assert_eq!(i64::from_mock_value(&s), None);
        assert_eq!(Vec::<String>::from_mock_value(&s), None);
        assert_eq!(i32::from_mock_value(&i64::MAX.into_mock_value()), None);
    }

    #[test]
    fn null_entries_need_optional_shape() {
        let list = MockValue::List(vec!["a".to_owned().into_mock_value(), MockValue::Null]);
        assert_eq!(Vec::<String>::from_mock_value(&list), None);
        assert_eq!(
            Vec::<Option<String>>::from_mock_value(&list),
            Some(vec![Some("a".to_owned()), None])
        );
    }

    #[test]
    fn shapes_describe_nesting() {
        assert_eq!(Vec::<Vec<Option<String>>>::shape(), "[[String?]]");
    }

    #[test]
    fn kinds() {
        assert_eq!(MockValue::from(json!("s")).kind(), "string");
        assert_eq!(MockValue::from(json!({"a": 1})).kind(), "json");
        assert_eq!(MockValue::List(vec![]).kind(), "list");
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Record handles: untyped [`AnyMock`] and typed [`Mock<T>`].

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use quiver_keys::Arguments;
use quiver_schema::{Interface, ObjectType, TYPENAME_FIELD};
use serde_json::Value;
use tracing::debug;

use crate::field::{ArgumentField, Field};
use crate::value::{MockFieldValue, MockValue};
use crate::{materialize, MockError, Mockable};

/// Shared handle to a mock record of any type.
///
/// Cloning a handle never copies the record: every clone reads and writes the
/// same field map. Equality is identity.
///
/// Each record guards its map with its own mutex, so handles may cross
/// threads. No lock is held while another record is touched.
#[derive(Clone)]
pub struct AnyMock {
    object_type: &'static ObjectType,
    fields: Arc<Mutex<HashMap<String, MockValue>>>,
}

impl AnyMock {
    /// Create an empty record of `object_type`; only `__typename` is set.
    pub fn of_type(object_type: &'static ObjectType) -> Self {
        let mut fields = HashMap::new();
        fields.insert(
            TYPENAME_FIELD.to_owned(),
            MockValue::Scalar(Value::String(object_type.typename().to_owned())),
        );
        Self {
            object_type,
            fields: Arc::new(Mutex::new(fields)),
        }
    }

    fn data(&self) -> MutexGuard<'_, HashMap<String, MockValue>> {
        self.fields.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Declared type.
    pub fn object_type(&self) -> &'static ObjectType {
        self.object_type
    }

    /// Declared `__typename`.
    pub fn typename(&self) -> &'static str {
        let ty: &'static ObjectType = self.object_type;
        ty.typename()
    }

    /// True if the declared type implements `interface`.
    pub fn implements(&self, interface: &Interface) -> bool {
        self.object_type.implements(interface)
    }

    /// True if both handles refer to the same record.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.fields, &other.fields)
    }

    /// Typed view of this record, if its declared type is `T`.
    pub fn downcast<T: Mockable>(&self) -> Option<Mock<T>> {
        (self.typename() == T::object_type().typename()).then(|| Mock {
            any: self.clone(),
            _ty: PhantomData,
        })
    }

    /// Raw read of a storage key.
    pub fn get_raw(&self, key: &str) -> Option<MockValue> {
        self.data().get(key).cloned()
    }

    /// Raw write of a storage key; `None` removes the key.
    ///
    /// `__typename` always holds the declared type; writes to it are ignored.
    pub fn set_raw(&self, key: impl Into<String>, value: Option<MockValue>) {
        let key = key.into();
        if key == TYPENAME_FIELD {
            debug!(typename = self.typename(), "ignoring write to __typename");
            return;
        }
        let mut data = self.data();
        match value {
            Some(v) => {
                data.insert(key, v);
            }
            None => {
                data.remove(&key);
            }
        }
    }

    /// Read `key` projected onto shape `V`.
    ///
    /// A stored value of the wrong kind is a [`MockError::ShapeMismatch`]. A
    /// stored null that `V` cannot hold reads as absent.
    pub fn get_as<V: MockFieldValue>(&self, key: &str) -> Result<Option<V>, MockError> {
        let Some(value) = self.get_raw(key) else {
            return Ok(None);
        };
        match V::from_mock_value(&value) {
            Some(v) => Ok(Some(v)),
            None if matches!(value, MockValue::Null) => Ok(None),
            None => Err(MockError::ShapeMismatch {
                field: key.to_owned(),
                expected: V::shape(),
                found: value.kind(),
            }),
        }
    }

    /// Write `key` from shape `V`; `None` removes the key.
    pub fn set_as<V: MockFieldValue>(&self, key: impl Into<String>, value: Option<V>) {
        self.set_raw(key, value.map(V::into_mock_value));
    }

    /// Storage keys currently set, sorted.
    pub fn field_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.data().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    pub(crate) fn snapshot(&self) -> Vec<(String, MockValue)> {
        self.data()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Materialize this record into plain JSON.
    ///
    /// Nested records become JSON objects, lists keep their order, absent
    /// list entries become `null`. A record reachable from itself is a
    /// [`MockError::Cycle`]; nesting past [`MAX_DEPTH`](crate::MAX_DEPTH) is
    /// [`MockError::TooDeep`].
    pub fn to_json(&self) -> Result<Value, MockError> {
        materialize::to_json(self)
    }
}

impl PartialEq for AnyMock {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for AnyMock {}

impl fmt::Debug for AnyMock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field values are omitted: records may be shared or cyclic.
        f.debug_struct("AnyMock")
            .field("typename", &self.typename())
            .field("fields", &self.field_keys())
            .finish()
    }
}

/// Typed handle to a mock record of type `T`.
///
/// Derefs to [`AnyMock`] for raw access.
pub struct Mock<T> {
    any: AnyMock,
    _ty: PhantomData<fn() -> T>,
}

impl<T: Mockable> Mock<T> {
    /// Create an empty record; only `__typename` is set.
    pub fn new() -> Self {
        Self {
            any: AnyMock::of_type(T::object_type()),
            _ty: PhantomData,
        }
    }

    /// Read a field.
    pub fn get<V: MockFieldValue>(&self, field: &Field<T, V>) -> Result<Option<V>, MockError> {
        self.any.get_as(field.name())
    }

    /// Write a field; `None` unsets it.
    pub fn set<V: MockFieldValue>(&self, field: &Field<T, V>, value: impl Into<Option<V>>) {
        self.any.set_as(field.name(), value.into());
    }

    /// Read an argument field for one argument map.
    pub fn get_with<V: MockFieldValue>(
        &self,
        field: &ArgumentField<T, V>,
        arguments: &Arguments,
    ) -> Result<Option<V>, MockError> {
        self.any.get_as(&field.key(arguments))
    }

    /// Write an argument field for one argument map; `None` unsets that slot only.
    pub fn set_with<V: MockFieldValue>(
        &self,
        field: &ArgumentField<T, V>,
        arguments: &Arguments,
        value: impl Into<Option<V>>,
    ) {
        self.any.set_as(field.key(arguments), value.into());
    }
}

impl<T> Mock<T> {
    /// Untyped view.
    pub fn as_any(&self) -> &AnyMock {
        &self.any
    }

    /// Untyped handle to the same record.
    pub fn to_any(&self) -> AnyMock {
        self.any.clone()
    }

    /// Convert into an untyped handle to the same record.
    pub fn into_any(self) -> AnyMock {
        self.any
    }
}

impl<T: Mockable> Default for Mock<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Mock<T> {
    fn clone(&self) -> Self {
        Self {
            any: self.any.clone(),
            _ty: PhantomData,
        }
    }
}

impl<T> PartialEq for Mock<T> {
    fn eq(&self, other: &Self) -> bool {
        self.any.ptr_eq(&other.any)
    }
}

impl<T> Eq for Mock<T> {}

impl<T> fmt::Debug for Mock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.any, f)
    }
}

impl<T> Deref for Mock<T> {
    type Target = AnyMock;

    fn deref(&self) -> &AnyMock {
        &self.any
    }
}

impl<T> From<Mock<T>> for AnyMock {
    fn from(mock: Mock<T>) -> Self {
        mock.any
    }
}

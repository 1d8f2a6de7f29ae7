// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Typed field descriptors.
//!
//! Declare one descriptor per schema field, usually as an associated const on
//! the [`Mockable`](crate::Mockable) marker type:
//!
//! ```
//! use quiver_mock::{Field, Mockable};
//! use quiver_schema::ObjectType;
//!
//! pub struct Height;
//! static HEIGHT: ObjectType = ObjectType::new("Height", &[]);
//! impl Mockable for Height {
//!     fn object_type() -> &'static ObjectType {
//!         &HEIGHT
//!     }
//! }
//! impl Height {
//!     pub const METERS: Field<Height, i32> = Field::new("meters");
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;

use quiver_keys::{field_key, Arguments};

/// A field of record type `O` holding values of shape `V`.
pub struct Field<O, V> {
    name: &'static str,
    _marker: PhantomData<fn() -> (O, V)>,
}

impl<O, V> Field<O, V> {
    /// Declare a field stored under `name`.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Storage key (the bare field name).
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<O, V> Clone for Field<O, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, V> Copy for Field<O, V> {}

impl<O, V> fmt::Debug for Field<O, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.name).finish()
    }
}

/// A field of record type `O` that takes arguments.
///
/// Each distinct argument map addresses its own storage slot, keyed by
/// [`quiver_keys::field_key`].
pub struct ArgumentField<O, V> {
    name: &'static str,
    _marker: PhantomData<fn() -> (O, V)>,
}

impl<O, V> ArgumentField<O, V> {
    /// Declare an argument-taking field with base name `name`.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Base field name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Storage key for this field invoked with `arguments`.
    pub fn key(&self, arguments: &Arguments) -> String {
        field_key(self.name, arguments)
    }
}

impl<O, V> Clone for ArgumentField<O, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, V> Copy for ArgumentField<O, V> {}

impl<O, V> fmt::Debug for ArgumentField<O, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ArgumentField").field(&self.name).finish()
    }
}

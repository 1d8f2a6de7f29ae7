// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Dynamic, schema-shaped mock records for GraphQL test fixtures.
//!
//! A mock is an untyped field map (storage key → [`MockValue`]) behind a
//! shared handle, with a typed façade on top:
//!
//! - [`Field<O, V>`] reads and writes one field of record type `O` as shape
//!   `V` (scalars, [`Mock<R>`], [`AnyMock`] for interface-typed fields,
//!   `Vec<_>` and `Option<_>` nested to any depth);
//! - [`ArgumentField<O, V>`] does the same for fields taking arguments, keyed
//!   by the canonical field key so each argument map gets its own slot.
//!
//! Storage stays untyped; shape errors surface at the accessor as
//! [`MockError::ShapeMismatch`]. Assigning a record stores a handle, never a
//! copy, so later mutations are visible through every parent.
//!
//! ```
//! use quiver_keys::args;
//! use quiver_mock::{ArgumentField, Field, Mock, Mockable};
//! use quiver_schema::ObjectType;
//!
//! struct Cat;
//! static CAT: ObjectType = ObjectType::new("Cat", &[]);
//! impl Mockable for Cat {
//!     fn object_type() -> &'static ObjectType {
//!         &CAT
//!     }
//! }
//! impl Cat {
//!     const SPECIES: Field<Cat, String> = Field::new("species");
//!     const SCALAR_ARG_FIELD: ArgumentField<Cat, String> = ArgumentField::new("scalarArgField");
//! }
//!
//! let cat = Mock::<Cat>::new();
//! cat.set(&Cat::SPECIES, "Feline".to_owned());
//! cat.set_with(&Cat::SCALAR_ARG_FIELD, &args! { "arg" => "1" }, "Test".to_owned());
//!
//! let json = cat.to_json().unwrap();
//! assert_eq!(json["species"], "Feline");
//! assert_eq!(json["scalarArgField(arg:1)"], "Test");
//! assert_eq!(json["__typename"], "Cat");
//! ```
//!
//! Records that reference each other in a cycle keep each other alive; such
//! graphs also fail to materialize, as do graphs nested deeper than
//! [`MAX_DEPTH`].
#![forbid(unsafe_code)]

mod field;
mod materialize;
mod mock;
mod value;

pub use field::{ArgumentField, Field};
pub use materialize::MAX_DEPTH;
pub use mock::{AnyMock, Mock};
pub use value::{MockFieldValue, MockValue};

use quiver_schema::ObjectType;

/// Marker for schema object types that can be mocked.
pub trait Mockable: 'static {
    /// The object type records of this kind are declared with.
    fn object_type() -> &'static ObjectType;
}

/// Errors raised by typed access and materialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MockError {
    /// The stored value does not fit the accessor's declared shape.
    #[error("field {field}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Storage key that was read.
        field: String,
        /// Declared shape.
        expected: String,
        /// Kind of the stored value.
        found: &'static str,
    },
    /// The record graph reaches a record from itself.
    #[error("cyclic mock graph at {typename}: {path}")]
    Cycle {
        /// Record met twice on one path.
        typename: String,
        /// Typenames along the path, `A -> B -> A`.
        path: String,
    },
    /// The graph nests deeper than [`MAX_DEPTH`].
    #[error("mock graph deeper than {depth} levels below {typename}")]
    TooDeep {
        /// Nesting depth reached.
        depth: usize,
        /// Record whose field crossed the limit.
        typename: String,
    },
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Type descriptors: concrete object types, interfaces, and resolution results.

use std::borrow::Cow;
use std::fmt;

/// A named interface (capability) that object types may implement.
///
/// Interfaces carry no structure here; membership is decided purely by name.
/// Declared statically so they can be listed in `static` type tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interface {
    name: &'static str,
}

impl Interface {
    /// Declare an interface.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Interface name.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[derive(Debug, Clone)]
enum InterfaceSet {
    Static(&'static [Interface]),
    Named(Vec<String>),
}

impl InterfaceSet {
    fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = match self {
            Self::Static(list) => list.iter().map(Interface::name).collect(),
            Self::Named(list) => list.iter().map(String::as_str).collect(),
        };
        names.sort_unstable();
        names.dedup();
        names
    }

    fn contains(&self, name: &str) -> bool {
        match self {
            Self::Static(list) => list.iter().any(|i| i.name == name),
            Self::Named(list) => list.iter().any(|n| n == name),
        }
    }
}

/// Immutable descriptor for a concrete object type.
///
/// Invariants
/// - `typename` is the value servers put in `__typename`.
/// - The implemented interfaces form a set. Equality ignores how the type
///   was declared (static table or schema IR) and the listing order.
#[derive(Debug, Clone)]
pub struct ObjectType {
    typename: Cow<'static, str>,
    interfaces: InterfaceSet,
}

impl ObjectType {
    /// Declare an object type from static tables.
    ///
    /// ```
    /// use quiver_schema::{Interface, ObjectType};
    ///
    /// const PET: Interface = Interface::new("Pet");
    /// static DOG: ObjectType = ObjectType::new("Dog", &[PET]);
    /// assert!(DOG.implements(&PET));
    /// ```
    pub const fn new(typename: &'static str, interfaces: &'static [Interface]) -> Self {
        Self {
            typename: Cow::Borrowed(typename),
            interfaces: InterfaceSet::Static(interfaces),
        }
    }

    /// Build an object type at runtime from names (schema IR, tests).
    pub fn dynamic<I, S>(typename: impl Into<String>, interfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = interfaces.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        Self {
            typename: Cow::Owned(typename.into()),
            interfaces: InterfaceSet::Named(names),
        }
    }

    /// The `__typename` of this type.
    pub fn typename(&self) -> &str {
        &self.typename
    }

    /// Names of the interfaces this type implements, sorted.
    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces.names()
    }

    /// True if this type implements `interface`.
    pub fn implements(&self, interface: &Interface) -> bool {
        self.implements_name(interface.name())
    }

    /// True if this type implements an interface called `name`.
    pub fn implements_name(&self, name: &str) -> bool {
        self.interfaces.contains(name)
    }
}

impl PartialEq for ObjectType {
    fn eq(&self, other: &Self) -> bool {
        self.typename == other.typename && self.interface_names() == other.interface_names()
    }
}

impl Eq for ObjectType {}

/// Result of looking a `__typename` up in a schema.
///
/// Resolution never fails: names absent from the registry come back as
/// [`ResolvedType::Unknown`] carrying the raw name, so identity rules can still
/// route them through a default path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedType<'a> {
    /// A registered object type.
    Object(&'a ObjectType),
    /// A type name the registry does not know.
    Unknown(&'a str),
}

impl<'a> ResolvedType<'a> {
    /// The type name, registered or not.
    pub fn typename(&self) -> &'a str {
        match *self {
            Self::Object(ty) => ty.typename(),
            Self::Unknown(name) => name,
        }
    }

    /// The registered descriptor, if any.
    pub fn object_type(&self) -> Option<&'a ObjectType> {
        match *self {
            Self::Object(ty) => Some(ty),
            Self::Unknown(_) => None,
        }
    }

    /// True for names the registry does not know.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// Capability check. Unknown types implement nothing.
    pub fn implements(&self, interface: &Interface) -> bool {
        self.object_type().is_some_and(|ty| ty.implements(interface))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANIMAL: Interface = Interface::new("Animal");
    const PET: Interface = Interface::new("Pet");
    static DOG: ObjectType = ObjectType::new("Dog", &[ANIMAL, PET]);
    static HEIGHT: ObjectType = ObjectType::new("Height", &[]);

    #[test]
    fn static_types_answer_membership() {
        assert!(DOG.implements(&ANIMAL));
        assert!(DOG.implements(&PET));
        assert!(!HEIGHT.implements(&PET));
        assert_eq!(DOG.typename(), "Dog");
    }

    #[test]
    fn dynamic_types_dedup_interfaces() {
        let cat = ObjectType::dynamic("Cat", ["Pet", "Animal", "Pet"]);
        assert_eq!(cat.interface_names(), ["Animal", "Pet"]);
        assert!(cat.implements(&PET));
    }

    #[test]
    fn static_and_dynamic_types_compare_by_content() {
        static PET_DOG: ObjectType = ObjectType::new("Dog", &[PET, ANIMAL]);
        assert_eq!(DOG, ObjectType::dynamic("Dog", ["Animal", "Pet"]));
        assert_eq!(DOG, PET_DOG);
        assert_ne!(DOG, ObjectType::dynamic("Dog", ["Animal"]));
    }

    #[test]
    fn unknown_types_implement_nothing() {
        let unknown = ResolvedType::Unknown("Ghost");
        assert!(unknown.is_unknown());
        assert_eq!(unknown.typename(), "Ghost");
        assert!(!unknown.implements(&PET));
        assert!(ResolvedType::Object(&DOG).implements(&PET));
    }
}

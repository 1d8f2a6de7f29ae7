// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mockable fixture types and their field descriptors.
//!
//! Interface-typed fields (`Animal`) use [`AnyMock`]; any record may be stored
//! there and callers check [`AnyMock::implements`] when it matters.

use quiver_mock::{AnyMock, ArgumentField, Field, Mock, Mockable};
use quiver_schema::ObjectType;

use crate::schema::{CAT_TYPE, DOG_TYPE, HEIGHT_TYPE};

/// Mock marker for `Dog`.
#[derive(Debug)]
pub struct Dog;

impl Mockable for Dog {
    fn object_type() -> &'static ObjectType {
        &DOG_TYPE
    }
}

impl Dog {
    /// `id: String`
    pub const ID: Field<Dog, String> = Field::new("id");
    /// `petName: String`
    pub const PET_NAME: Field<Dog, String> = Field::new("petName");
    /// `species: String`
    pub const SPECIES: Field<Dog, String> = Field::new("species");
    /// `height: Height`
    pub const HEIGHT: Field<Dog, Mock<Height>> = Field::new("height");
    /// `listOfStrings: [String]`
    pub const LIST_OF_STRINGS: Field<Dog, Vec<String>> = Field::new("listOfStrings");
    /// `bestFriend: Animal`
    pub const BEST_FRIEND: Field<Dog, AnyMock> = Field::new("bestFriend");
    /// `listOfObjects: [Cat]`
    pub const LIST_OF_OBJECTS: Field<Dog, Vec<Mock<Cat>>> = Field::new("listOfObjects");
    /// `nestedListOfObjects: [[Cat]]`
    pub const NESTED_LIST_OF_OBJECTS: Field<Dog, Vec<Vec<Mock<Cat>>>> =
        Field::new("nestedListOfObjects");
    /// `listOfOptionalObjects: [Cat?]`
    pub const LIST_OF_OPTIONAL_OBJECTS: Field<Dog, Vec<Option<Mock<Cat>>>> =
        Field::new("listOfOptionalObjects");
    /// `listOfInterfaces: [Animal]`
    pub const LIST_OF_INTERFACES: Field<Dog, Vec<AnyMock>> = Field::new("listOfInterfaces");
    /// `nestedListOfInterfaces: [[Animal]]`
    pub const NESTED_LIST_OF_INTERFACES: Field<Dog, Vec<Vec<AnyMock>>> =
        Field::new("nestedListOfInterfaces");
    /// `listOfOptionalInterfaces: [Animal?]`
    pub const LIST_OF_OPTIONAL_INTERFACES: Field<Dog, Vec<Option<AnyMock>>> =
        Field::new("listOfOptionalInterfaces");
}

/// Mock marker for `Cat`.
#[derive(Debug)]
pub struct Cat;

impl Mockable for Cat {
    fn object_type() -> &'static ObjectType {
        &CAT_TYPE
    }
}

impl Cat {
    /// `id: String`
    pub const ID: Field<Cat, String> = Field::new("id");
    /// `name: String`
    pub const NAME: Field<Cat, String> = Field::new("name");
    /// `species: String`
    pub const SPECIES: Field<Cat, String> = Field::new("species");
    /// `height: Height`
    pub const HEIGHT: Field<Cat, Mock<Height>> = Field::new("height");
    /// `bestFriend: Animal`
    pub const BEST_FRIEND: Field<Cat, AnyMock> = Field::new("bestFriend");
    /// `predators: [Animal]`
    pub const PREDATORS: Field<Cat, Vec<AnyMock>> = Field::new("predators");
    /// `scalarArgField(arg: String): String`
    pub const SCALAR_ARG_FIELD: ArgumentField<Cat, String> = ArgumentField::new("scalarArgField");
    /// `scalarMultipleArgNonAlphabeticalField(bArg: String, aArg: Int): Int`
    pub const SCALAR_MULTIPLE_ARG_NON_ALPHABETICAL_FIELD: ArgumentField<Cat, i32> =
        ArgumentField::new("scalarMultipleArgNonAlphabeticalField");
}

/// Mock marker for `Height`.
#[derive(Debug)]
pub struct Height;

impl Mockable for Height {
    fn object_type() -> &'static ObjectType {
        &HEIGHT_TYPE
    }
}

impl Height {
    /// `meters: Int`
    pub const METERS: Field<Height, i32> = Field::new("meters");
    /// `feet: Int`
    pub const FEET: Field<Height, i32> = Field::new("feet");
    /// `yards: Int`
    pub const YARDS: Field<Height, i32> = Field::new("yards");
    /// `inches: Int`
    pub const INCHES: Field<Height, i32> = Field::new("inches");
}

/// A `Dog` with `petName` set.
pub fn dog_named(pet_name: &str) -> Mock<Dog> {
    let dog = Mock::<Dog>::new();
    dog.set(&Dog::PET_NAME, pet_name.to_owned());
    dog
}

/// A `Cat` with `name` set.
pub fn cat_named(name: &str) -> Mock<Cat> {
    let cat = Mock::<Cat>::new();
    cat.set(&Cat::NAME, name.to_owned());
    cat
}

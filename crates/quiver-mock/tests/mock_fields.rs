// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Typed field accessors over the animals fixture schema.

#![allow(missing_docs)]
use quiver_dry_tests::{Cat, Dog, Height, ANIMAL};
use quiver_keys::{args, Arguments};
use quiver_mock::{AnyMock, Mock, MockError, MockValue};
use serde_json::Value;

#[test]
fn new_mock_has_typename_set() {
    let mock = Mock::<Dog>::new();
    assert_eq!(mock.get_raw("__typename"), Some(MockValue::Scalar(Value::from("Dog"))));
    assert_eq!(mock.typename(), "Dog");
}

#[test]
fn scalar_field_is_set() {
    let mock = Mock::<Dog>::new();
    mock.set(&Dog::SPECIES, "Canine".to_owned());
    assert_eq!(mock.get_as::<String>("species").unwrap().as_deref(), Some("Canine"));
    assert_eq!(mock.get(&Dog::SPECIES).unwrap().as_deref(), Some("Canine"));
}

#[test]
fn scalar_field_set_to_none_is_removed() {
    let mock = Mock::<Dog>::new();
    mock.set(&Dog::SPECIES, "Canine".to_owned());
    mock.set(&Dog::SPECIES, None);
    assert_eq!(mock.get_raw("species"), None);
    assert_eq!(mock.get(&Dog::SPECIES).unwrap(), None);
    assert!(!mock.field_keys().contains(&"species".to_owned()));
}

#[test]
fn list_of_scalars_is_set() {
    let mock = Mock::<Dog>::new();
    let list = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
    mock.set(&Dog::LIST_OF_STRINGS, list.clone());
    assert_eq!(mock.get_as::<Vec<String>>("listOfStrings").unwrap(), Some(list.clone()));
    assert_eq!(mock.get(&Dog::LIST_OF_STRINGS).unwrap(), Some(list));
}

#[test]
fn object_field_shares_the_assigned_record() {
    let mock = Mock::<Dog>::new();
    let height = Mock::<Height>::new();

    height.set(&Height::METERS, 1);
    mock.set(&Dog::HEIGHT, height.clone());
    height.set(&Height::FEET, 2);
    mock.get(&Dog::HEIGHT)
        .unwrap()
        .unwrap()
        .set(&Height::YARDS, 3);

    let stored = mock.get_as::<AnyMock>("height").unwrap().unwrap();
    assert!(stored.ptr_eq(height.as_any()));
    let read = mock.get(&Dog::HEIGHT).unwrap().unwrap();
    assert_eq!(read.get(&Height::METERS).unwrap(), Some(1));
    assert_eq!(read.get(&Height::FEET).unwrap(), Some(2));
    assert_eq!(read.get(&Height::YARDS).unwrap(), Some(3));
    assert_eq!(height.get(&Height::YARDS).unwrap(), Some(3));
}

#[test]
fn list_of_objects_is_set() {
    let mock = Mock::<Dog>::new();
    let cats = vec![Mock::<Cat>::new(), Mock::<Cat>::new(), Mock::<Cat>::new()];
    mock.set(&Dog::LIST_OF_OBJECTS, cats.clone());
    assert_eq!(mock.get(&Dog::LIST_OF_OBJECTS).unwrap(), Some(cats));
}

#[test]
fn nested_list_of_objects_is_set() {
    let mock = Mock::<Dog>::new();
    let cats = vec![vec![Mock::<Cat>::new(), Mock::<Cat>::new(), Mock::<Cat>::new()]];
    mock.set(&Dog::NESTED_LIST_OF_OBJECTS, cats.clone());
    assert_eq!(mock.get(&Dog::NESTED_LIST_OF_OBJECTS).unwrap(), Some(cats));
}

#[test]
fn list_of_optional_objects_keeps_positions() {
    let mock = Mock::<Dog>::new();
    let cat1 = Mock::<Cat>::new();
    let cat2 = Mock::<Cat>::new();
    let list = vec![Some(cat1.clone()), None, Some(cat2.clone()), None];

    mock.set(&Dog::LIST_OF_OPTIONAL_OBJECTS, list.clone());

    let read = mock.get(&Dog::LIST_OF_OPTIONAL_OBJECTS).unwrap().unwrap();
    assert_eq!(read, list);
    assert_eq!(read.len(), 4);
    assert!(read[1].is_none() && read[3].is_none());
    match mock.get_raw("listOfOptionalObjects") {
        Some(MockValue::List(items)) => {
            assert_eq!(items[1], MockValue::Null);
            assert_eq!(items[0], MockValue::Object(cat1.to_any()));
        }
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn interface_field_accepts_any_implementing_record() {
    let mock = Mock::<Dog>::new();
    let cat = Mock::<Cat>::new();

    mock.set(&Dog::BEST_FRIEND, cat.to_any());

    let friend = mock.get(&Dog::BEST_FRIEND).unwrap().unwrap();
    assert!(friend.ptr_eq(cat.as_any()));
    assert!(friend.implements(&ANIMAL));
    assert_eq!(friend.downcast::<Cat>(), Some(cat));
    assert!(friend.downcast::<Dog>().is_none());
}

#[test]
fn list_of_interfaces_is_set() {
    let mock = Mock::<Dog>::new();
    let list = vec![
        Mock::<Cat>::new().into_any(),
        Mock::<Cat>::new().into_any(),
        Mock::<Dog>::new().into_any(),
    ];
    mock.set(&Dog::LIST_OF_INTERFACES, list.clone());
    let read = mock.get(&Dog::LIST_OF_INTERFACES).unwrap().unwrap();
    assert_eq!(read, list);
    let names: Vec<&str> = read.iter().map(AnyMock::typename).collect();
    assert_eq!(names, ["Cat", "Cat", "Dog"]);
}

#[test]
fn nested_list_of_interfaces_is_set() {
    let mock = Mock::<Dog>::new();
    let list = vec![vec![
        Mock::<Cat>::new().into_any(),
        Mock::<Cat>::new().into_any(),
        Mock::<Dog>::new().into_any(),
    ]];
    mock.set(&Dog::NESTED_LIST_OF_INTERFACES, list.clone());
    assert_eq!(mock.get(&Dog::NESTED_LIST_OF_INTERFACES).unwrap(), Some(list));
}

#[test]
fn list_of_optional_interfaces_is_set() {
    let mock = Mock::<Dog>::new();
    let list = vec![
        Some(Mock::<Cat>::new().into_any()),
        None,
        Some(Mock::<Cat>::new().into_any()),
        None,
    ];
    mock.set(&Dog::LIST_OF_OPTIONAL_INTERFACES, list.clone());
    assert_eq!(mock.get(&Dog::LIST_OF_OPTIONAL_INTERFACES).unwrap(), Some(list));
}

#[test]
fn reading_with_the_wrong_shape_fails_at_the_accessor() {
    let mock = Mock::<Dog>::new();
    mock.set_raw("listOfObjects", Some(MockValue::List(vec![MockValue::Null])));
    let err = mock.get(&Dog::LIST_OF_OBJECTS).unwrap_err();
    assert_eq!(
        err,
        MockError::ShapeMismatch {
            field: "listOfObjects".into(),
            expected: "[Cat]".into(),
            found: "list",
        }
    );
    assert!(mock.get(&Dog::LIST_OF_OPTIONAL_OBJECTS).unwrap().is_none());
}

// Argument fields

#[test]
fn scalar_argument_field_is_set_for_argument() {
    let mock = Mock::<Cat>::new();
    mock.set_with(&Cat::SCALAR_ARG_FIELD, &args! { "arg" => "1" }, "Test".to_owned());

    assert_eq!(
        mock.get_as::<String>("scalarArgField(arg:1)").unwrap().as_deref(),
        Some("Test")
    );
    assert_eq!(
        mock.get_with(&Cat::SCALAR_ARG_FIELD, &args! { "arg" => "1" })
            .unwrap()
            .as_deref(),
        Some("Test")
    );
}

#[test]
fn scalar_argument_field_is_not_set_for_other_argument() {
    let mock = Mock::<Cat>::new();
    mock.set_with(&Cat::SCALAR_ARG_FIELD, &args! { "arg" => "1" }, "Test".to_owned());
    assert_eq!(mock.get_with(&Cat::SCALAR_ARG_FIELD, &args! { "arg" => "2" }).unwrap(), None);
}

#[test]
fn multiple_argument_field_is_order_independent() {
    let mock = Mock::<Cat>::new();
    mock.set_with(
        &Cat::SCALAR_MULTIPLE_ARG_NON_ALPHABETICAL_FIELD,
        &args! { "bArg" => "B", "aArg" => 10 },
        12345,
    );

    assert_eq!(
        mock.get_as::<i32>("scalarMultipleArgNonAlphabeticalField(aArg:10,bArg:B)")
            .unwrap(),
        Some(12345)
    );
    assert_eq!(
        mock.get_with(
            &Cat::SCALAR_MULTIPLE_ARG_NON_ALPHABETICAL_FIELD,
            &args! { "aArg" => 10, "bArg" => "B" }
        )
        .unwrap(),
        Some(12345)
    );
}

#[test]
fn clearing_one_argument_slot_leaves_others() {
    let mock = Mock::<Cat>::new();
    let one = args! { "arg" => "1" };
    let two = args! { "arg" => "2" };
    mock.set_with(&Cat::SCALAR_ARG_FIELD, &one, "one".to_owned());
    mock.set_with(&Cat::SCALAR_ARG_FIELD, &two, "two".to_owned());
    mock.set_with(&Cat::SCALAR_ARG_FIELD, &one, None);

    assert_eq!(mock.get_with(&Cat::SCALAR_ARG_FIELD, &one).unwrap(), None);
    assert_eq!(mock.get_with(&Cat::SCALAR_ARG_FIELD, &two).unwrap().as_deref(), Some("two"));
}

#[test]
fn argument_field_without_arguments_uses_bare_name() {
    let mock = Mock::<Cat>::new();
    mock.set_with(&Cat::SCALAR_ARG_FIELD, &Arguments::new(), "bare".to_owned());
    assert_eq!(mock.get_as::<String>("scalarArgField").unwrap().as_deref(), Some("bare"));
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Order-independence and distinctness of canonical field keys.

#![allow(missing_docs)]
use proptest::prelude::*;
use quiver_keys::{field_key, ArgValue, Arguments};

fn arg_value() -> impl Strategy<Value = ArgValue> {
    prop_oneof![
        any::<i64>().prop_map(ArgValue::Int),
        "[a-z0-9,:()]{0,8}".prop_map(ArgValue::String),
        any::<bool>().prop_map(ArgValue::Bool),
    ]
}

fn arg_pairs() -> impl Strategy<Value = Vec<(String, ArgValue)>> {
    prop::collection::btree_map("[a-zA-Z][a-zA-Z0-9]{0,6}", arg_value(), 1..6)
        .prop_map(|m| m.into_iter().collect::<Vec<_>>())
}

/// Produce a value guaranteed to render differently from `v`.
fn perturb(v: &ArgValue) -> ArgValue {
    match v {
        ArgValue::Int(n) => ArgValue::Int(n.wrapping_add(1)),
        ArgValue::String(s) => ArgValue::String(format!("{s}x")),
        ArgValue::Bool(b) => ArgValue::Bool(!b),
        other => ArgValue::String(format!("{other}~")),
    }
}

proptest! {
    #[test]
    fn set_equal_maps_encode_identically(
        field in "[a-z][a-zA-Z]{0,10}",
        (pairs, shuffled) in arg_pairs().prop_flat_map(|p| (Just(p.clone()), Just(p).prop_shuffle())),
    ) {
        let a: Arguments = pairs.into_iter().collect();
        let b: Arguments = shuffled.into_iter().collect();
        prop_assert_eq!(field_key(&field, &a), field_key(&field, &b));
    }

    #[test]
    fn differing_values_encode_differently(
        field in "[a-z][a-zA-Z]{0,10}",
        (pairs, idx) in arg_pairs().prop_flat_map(|p| { let n = p.len(); (Just(p), 0..n) }),
    ) {
        let a: Arguments = pairs.iter().cloned().collect();
        let mut changed = pairs;
        changed[idx].1 = perturb(&changed[idx].1);
        let b: Arguments = changed.into_iter().collect();
        prop_assert_ne!(field_key(&field, &a), field_key(&field, &b));
    }

    #[test]
    fn key_entries_are_sorted_by_name(pairs in arg_pairs()) {
        let a: Arguments = pairs.iter().rev().cloned().collect();
        let key = field_key("f", &a);
        let mut names: Vec<&str> = pairs.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        let expected: Vec<String> = names
            .iter()
            .map(|n| format!("{n}:{}", a.get(n).map(ToString::to_string).unwrap_or_default()))
            .collect();
        prop_assert_eq!(key, format!("f({})", expected.join(",")));
    }
}

#[test]
fn mixed_types_sort_invariance_example() {
    let a = quiver_keys::args! { "b" => "B", "a" => 10 };
    let b = quiver_keys::args! { "a" => 10, "b" => "B" };
    assert_eq!(field_key("f", &a), "f(a:10,b:B)");
    assert_eq!(field_key("f", &b), "f(a:10,b:B)");
}

#[test]
fn unescaped_text_can_collide_with_other_values() {
    let text = quiver_keys::args! { "a" => "10" };
    let number = quiver_keys::args! { "a" => 10 };
    assert_eq!(field_key("f", &text), field_key("f", &number));

    let smuggled = quiver_keys::args! { "a" => "1,b:2" };
    let split = quiver_keys::args! { "a" => "1", "b" => "2" };
    assert_eq!(field_key("f", &smuggled), "f(a:1,b:2)");
    assert_eq!(field_key("f", &smuggled), field_key("f", &split));
}

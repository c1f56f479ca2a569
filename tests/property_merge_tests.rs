use ods_charts::core::{deep_clone, key_of, merge_objects};
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z#0-9]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn sequences_accumulate(
        first in prop::collection::vec(any::<i32>(), 0..8),
        second in prop::collection::vec(any::<i32>(), 0..8),
        third in prop::collection::vec(any::<i32>(), 0..8)
    ) {
        let mut target = json!({ "a": first.clone() });
        merge_objects(&mut target, json!({ "a": second.clone() }));
        merge_objects(&mut target, json!({ "a": third.clone() }));

        let expected: Vec<i32> = first.into_iter().chain(second).chain(third).collect();
        prop_assert_eq!(target["a"].clone(), json!(expected));
    }

    #[test]
    fn later_scalar_always_wins(x in any::<i64>(), y in any::<i64>()) {
        let mut target = json!({ "x": x, "nested": { "x": x } });
        merge_objects(&mut target, json!({ "x": y, "nested": { "x": y } }));
        prop_assert_eq!(target["x"].clone(), json!(y));
        prop_assert_eq!(target["nested"]["x"].clone(), json!(y));
    }

    #[test]
    fn target_only_keys_survive(target in arb_json(), source in arb_json()) {
        let mut merged = deep_clone(&target);
        merge_objects(&mut merged, source.clone());

        if let (Value::Object(before), Value::Object(after), Value::Object(incoming)) =
            (&target, &merged, &source)
        {
            for (key, value) in before {
                if !incoming.contains_key(key) {
                    prop_assert_eq!(after.get(key), Some(value));
                }
            }
        }
    }

    #[test]
    fn merge_never_mutates_the_cloned_source(target in arb_json(), source in arb_json()) {
        let pristine = deep_clone(&source);
        let mut merged = target;
        merge_objects(&mut merged, deep_clone(&source));
        prop_assert_eq!(source, pristine);
    }

    #[test]
    fn key_of_is_pure(value in arb_json()) {
        prop_assert_eq!(key_of(&value), key_of(&deep_clone(&value)));
    }
}

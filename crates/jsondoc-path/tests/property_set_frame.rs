use jsondoc_path::{get, with_value, Path, PathStep};
use proptest::prelude::*;
use serde_json::Value;

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite non-zero", |f| f.is_finite() && *f != 0.0)
            .prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Every scalar and every empty container, with its path.
fn leaves(val: &Value) -> Vec<(Path, Value)> {
    fn walk(val: &Value, prefix: &mut Path, out: &mut Vec<(Path, Value)>) {
        match val {
            Value::Object(map) if !map.is_empty() => {
                for (key, child) in map {
                    prefix.push(PathStep::Key(key.clone()));
                    walk(child, prefix, out);
                    prefix.pop();
                }
            }
            Value::Array(arr) if !arr.is_empty() => {
                for (idx, child) in arr.iter().enumerate() {
                    prefix.push(PathStep::Index(idx));
                    walk(child, prefix, out);
                    prefix.pop();
                }
            }
            _ => out.push((prefix.clone(), val.clone())),
        }
    }
    let mut out = Vec::new();
    walk(val, &mut Vec::new(), &mut out);
    out
}

proptest! {
    #[test]
    fn set_at_existing_leaf_keeps_other_leaves(
        doc in arb_json(),
        pick in any::<prop::sample::Index>(),
        text in "[a-z]{0,6}",
    ) {
        let all = leaves(&doc);
        let (target, _) = &all[pick.index(all.len())];
        let next = with_value(doc.clone(), target, Value::String(text.clone())).unwrap();

        prop_assert_eq!(get(&next, target), Some(&Value::String(text)));
        for (path, val) in &all {
            if path != target {
                prop_assert_eq!(get(&next, path), Some(val));
            }
        }
    }

    #[test]
    fn set_new_key_appends_after_existing_keys(
        doc in prop::collection::btree_map("[a-z]{1,3}", any::<i64>(), 0..6),
        n in any::<i64>(),
    ) {
        let doc = Value::Object(doc.into_iter().map(|(k, v)| (k, Value::from(v))).collect());
        let before: Vec<String> = doc.as_object().unwrap().keys().cloned().collect();
        let next = with_value(doc, &[PathStep::from("NEW")], Value::from(n)).unwrap();
        let after: Vec<String> = next.as_object().unwrap().keys().cloned().collect();

        prop_assert_eq!(&after[..before.len()], &before[..]);
        prop_assert_eq!(after.last().map(String::as_str), Some("NEW"));
    }
}

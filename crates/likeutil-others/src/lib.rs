//! Structural equality of nested maps and sequences.

#![forbid(unsafe_code)]

use serde::Serialize;
use serde_json::{Number, Value};

/// True if `a` and `b` have the same shape and contents.
///
/// Values of different JSON types are never equal. Arrays must have the same length and equal
/// elements in the same order. Objects must have the same key set, key order is ignored, and
/// equal values under each key. Numbers compare by value, so `1` equals `1.0`.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        _ => false,
    }
}

/// [`deep_equal`] on the JSON representations of two serializable values.
pub fn deep_equal_serialized<A, B>(a: &A, b: &B) -> Result<bool, serde_json::Error>
where
    A: Serialize + ?Sized,
    B: Serialize + ?Sized,
{
    Ok(deep_equal(
        &serde_json::to_value(a)?,
        &serde_json::to_value(b)?,
    ))
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
        return x == y;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use serde::Serialize;
    use serde_json::json;

    use super::*;

    #[test]
    fn equal_nested_structures() {
        assert!(deep_equal(&json!({"a": 1, "b": [1, 2]}), &json!({"a": 1, "b": [1, 2]})));
        assert!(deep_equal(
            &json!({"user": {"name": "lucas", "tags": ["a", {"b": null}]}}),
            &json!({"user": {"tags": ["a", {"b": null}], "name": "lucas"}})
        ));
    }

    #[test]
    fn key_set_mismatch() {
        assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!deep_equal(&json!({"a": 1, "b": 2}), &json!({"a": 1})));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"b": 1})));
    }

    #[test]
    fn sequence_order_matters() {
        assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!deep_equal(&json!([1, 2]), &json!([1, 2, 3])));
    }

    #[test]
    fn type_mismatch() {
        assert!(!deep_equal(&json!(1), &json!("1")));
        assert!(!deep_equal(&json!([]), &json!({})));
        assert!(!deep_equal(&json!(null), &json!(false)));
        assert!(!deep_equal(&json!({"a": [1]}), &json!({"a": {"0": 1}})));
    }

    #[test]
    fn nested_difference_is_found() {
        assert!(!deep_equal(
            &json!({"a": {"b": {"c": [1, 2, 3]}}}),
            &json!({"a": {"b": {"c": [1, 2, 4]}}})
        ));
    }

    #[test]
    fn numbers_compare_by_value() {
        assert!(deep_equal(&json!(1), &json!(1.0)));
        assert!(deep_equal(&json!(u64::MAX), &json!(u64::MAX)));
        assert!(deep_equal(&json!(-3), &json!(-3)));
        assert!(!deep_equal(&json!(-1), &json!(u64::MAX)));
        assert!(!deep_equal(&json!(0.1), &json!(0.2)));
    }

    #[test]
    fn empty_containers() {
        assert!(deep_equal(&json!([]), &json!([])));
        assert!(deep_equal(&json!({}), &json!({})));
    }

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn serializable_values() {
        let mut map = HashMap::new();
        map.insert("x", 1);
        map.insert("y", 2);

        assert!(deep_equal_serialized(&Point { x: 1, y: 2 }, &map).unwrap());
        assert!(!deep_equal_serialized(&Point { x: 1, y: 3 }, &map).unwrap());

        let ordered: BTreeMap<&str, i32> = map.clone().into_iter().collect();
        assert!(deep_equal_serialized(&ordered, &map).unwrap());

        assert!(deep_equal_serialized(&vec![1, 2], &[1, 2]).unwrap());
        assert!(!deep_equal_serialized("a", &["a"]).unwrap());
    }
}

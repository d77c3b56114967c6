use serde_json::Value;

/// 攤平任意深度的巢狀陣列；空陣列直接消失，物件視為葉節點
pub fn steamroll(input: &Value) -> Vec<Value> {
    let mut flat = Vec::new();
    flatten_into(input, &mut flat);
    flat
}

fn flatten_into(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        other => out.push(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deep_nesting() {
        assert_eq!(steamroll(&json!([[["a"]], [["b"]]])), vec![json!("a"), json!("b")]);
        assert_eq!(
            steamroll(&json!([1, [2], [3, [[4]]]])),
            vec![json!(1), json!(2), json!(3), json!(4)]
        );
    }

    #[test]
    fn test_empty_arrays_vanish() {
        assert_eq!(
            steamroll(&json!([1, [], [3, [[4]]]])),
            vec![json!(1), json!(3), json!(4)]
        );
        assert!(steamroll(&json!([[], [[]]])).is_empty());
    }

    #[test]
    fn test_objects_and_scalars_are_leaves() {
        assert_eq!(
            steamroll(&json!([1, {}, [3, [[{"a": [1]}]]]])),
            vec![json!(1), json!({}), json!(3), json!({"a": [1]})]
        );
        assert_eq!(steamroll(&json!("solo")), vec![json!("solo")]);
    }
}

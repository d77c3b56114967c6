use serde_json::Value;

/// JavaScript 的真值規則：null、false、0、NaN、"" 為假，其餘（包含空陣列與空物件）為真
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 集合中每個物件的 `predicate` 屬性都存在且為真時回傳 true
pub fn truth_check(collection: &[Value], predicate: &str) -> bool {
    collection.iter().all(|item| {
        item.as_object()
            .and_then(|obj| obj.get(predicate))
            .map(is_truthy)
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn users() -> Vec<Value> {
        vec![
            json!({"user": "Tinky-Winky", "sex": "male"}),
            json!({"user": "Dipsy", "sex": "male"}),
            json!({"user": "Laa-Laa", "sex": "female"}),
            json!({"user": "Po", "sex": "female"}),
        ]
    }

    #[test]
    fn test_all_have_truthy_property() {
        assert!(truth_check(&users(), "sex"));
    }

    #[test]
    fn test_missing_property() {
        let mut list = users();
        list[3] = json!({"user": "Po"});
        assert!(!truth_check(&list, "sex"));
    }

    #[test]
    fn test_falsy_values() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&falsy), "{} should be falsy", falsy);
            assert!(!truth_check(&[json!({"onBoat": falsy})], "onBoat"));
        }
        for truthy in [json!(true), json!(-1), json!("0"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{} should be truthy", truthy);
        }
    }

    #[test]
    fn test_empty_collection_and_non_objects() {
        assert!(truth_check(&[], "anything"));
        assert!(!truth_check(&[json!(1)], "anything"));
    }
}

// Bridges between `Value` and the serde ecosystem.

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::ser::{Serialize, Serializer, SerializeSeq, SerializeMap};

    use super::super::Value;

    /// Hands a value to any serde data format. Object entries keep their insertion order.
    ///
    /// Unlike [`Value::dump`], serde formats apply their own escaping rules to strings.
    impl Serialize for Value {
        #[inline]
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where S: Serializer
        {
            match *self {
                Value::Null => serializer.serialize_unit(),
                Value::String(ref s) => serializer.serialize_str(s),
                Value::Int(n) => serializer.serialize_i64(n),
                Value::Double(f) => serializer.serialize_f64(f),
                Value::Bool(b) => serializer.serialize_bool(b),
                Value::Array(ref v) => {
                    let mut s = serializer.serialize_seq(Some(v.len()))?;
                    for inner in v {
                        s.serialize_element(inner)?;
                    }
                    s.end()
                }
                Value::Object(ref m) => {
                    let mut s = serializer.serialize_map(Some(m.len()))?;
                    for (key, value) in m {
                        s.serialize_entry(key, value)?;
                    }
                    s.end()
                }
            }
        }
    }
}

#[cfg(feature = "serde_json")]
mod serde_json_impl {
    use super::super::Value;

    /// Builds a value tree from a parsed `serde_json::Value`.
    ///
    /// Numbers that fit into an `i64` become `Value::Int`, all other numbers become
    /// `Value::Double`. Object entries are taken in the iteration order of the source map.
    impl From<serde_json::Value> for Value {
        fn from(value: serde_json::Value) -> Self {
            match value {
                serde_json::Value::Null => Value::Null,
                serde_json::Value::Bool(b) => Value::Bool(b),
                serde_json::Value::Number(num) => match num.as_i64() {
                    Some(n) => Value::Int(n),
                    None => Value::Double(num.as_f64().unwrap_or(0.0)),
                },
                serde_json::Value::String(s) => Value::String(s),
                serde_json::Value::Array(old) => {
                    Value::Array(old.into_iter().map(Value::from).collect())
                }
                serde_json::Value::Object(old) => {
                    Value::Object(old.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
                }
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::super::super::{Kind, Value};

        use serde_json::json;

        #[test]
        fn converts_parsed_documents() {
            let v = Value::from(json!({
                "int": -4,
                "big": 18446744073709551615u64,
                "float": 0.5,
                "list": [true, null, "s"]
            }));

            assert_eq!(v.get_object()["int"], Value::Int(-4));
            assert_eq!(v.get_object()["big"].value_type(), Kind::Double);
            assert_eq!(v.get_object()["float"], Value::Double(0.5));
            assert_eq!(v.get_object()["list"].dump_to_string(), r#"[true,null,"s"]"#);
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::super::Value;

    #[test]
    fn serializes_through_serde_in_insertion_order() {
        let v: Value = vec![
            ("b".to_string(), Value::from(1)),
            ("a".to_string(), vec![Value::from(1.5), Value::Null].into_iter().collect()),
        ]
        .into_iter()
        .collect();

        assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"b":1,"a":[1.5,null]}"#);
    }

    #[test]
    fn serde_escapes_strings() {
        let v = Value::from("a\"b");
        assert_eq!(serde_json::to_string(&v).unwrap(), r#""a\"b""#);
        assert_eq!(v.dump_to_string(), "\"a\"b\"");
    }
}

// tests/property/command_args_test.rs

//! Property-based tests for the wire layout of the `JSON.*` request builders

use bytes::Bytes;
use proptest::prelude::*;
use rejson::core::commands::CommandSpec;
use rejson::core::commands::json::{
    JsonArrAppend, JsonArrLen, JsonMGet, JsonNumIncrBy, JsonSet, JsonType, SetCondition,
};
use serde_json::Value;

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 _\\-\"\\\\]{0,20}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,8}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn test_key_path_commands_keep_key_first(
        key in "[a-zA-Z0-9:_]{1,40}",
        path in prop_oneof![Just(String::new()), "[.$][a-z.\\[\\]0-9]{0,20}"],
    ) {
        for args in [
            JsonType::new(&key, &path).to_resp_args(),
            JsonArrLen::new(&key, &path).to_resp_args(),
        ] {
            prop_assert_eq!(&args[0], &Bytes::copy_from_slice(key.as_bytes()));
            if path.is_empty() {
                prop_assert_eq!(args.len(), 1);
            } else {
                prop_assert_eq!(args.len(), 2);
                prop_assert_eq!(&args[1], &Bytes::copy_from_slice(path.as_bytes()));
            }
        }
    }

    #[test]
    fn test_json_set_value_parses_back(
        key in "[a-zA-Z0-9:_]{1,40}",
        value in json_value(),
    ) {
        let cmd = JsonSet::new(&key, ".", &value, SetCondition::None).unwrap();
        let args = cmd.to_resp_args();
        prop_assert_eq!(args.len(), 3);
        let parsed: Value = serde_json::from_slice(&args[2]).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn test_arr_append_keeps_value_order(
        values in prop::collection::vec(json_value(), 1..8),
    ) {
        let args = JsonArrAppend::new("k", ".", &values).unwrap().to_resp_args();
        prop_assert_eq!(args.len(), values.len() + 2);
        for (arg, value) in args[2..].iter().zip(&values) {
            let parsed: Value = serde_json::from_slice(arg).unwrap();
            prop_assert_eq!(&parsed, value);
        }
    }

    #[test]
    fn test_mget_path_is_last(
        keys in prop::collection::vec("[a-z0-9]{1,10}", 1..10),
        path in "[.$][a-z]{0,10}",
    ) {
        let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        let args = JsonMGet::new(&path, &key_refs).to_resp_args();
        prop_assert_eq!(args.len(), keys.len() + 1);
        prop_assert_eq!(args.last().unwrap(), &Bytes::copy_from_slice(path.as_bytes()));
    }

    #[test]
    fn test_numeric_argument_is_decimal(number in any::<i64>()) {
        let args = JsonNumIncrBy::new("k", ".n", number).to_resp_args();
        let text = std::str::from_utf8(&args[2]).unwrap();
        prop_assert_eq!(text.parse::<i64>().unwrap(), number);
    }
}

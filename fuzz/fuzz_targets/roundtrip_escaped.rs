#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate json_value_dump;
extern crate serde_json;

use json_value_dump::{json::to_string_escaped, Value};

fuzz_target!(|data: &[u8]| {
    // This comment keeps rustfmt from breaking the fuzz macro...
    if let Ok(parsed) = serde_json::from_slice::<serde_json::Value>(data) {
        let val = Value::from(parsed);
        let text = to_string_escaped(&val);
        let redecoded = Value::from(serde_json::from_str::<serde_json::Value>(&text).unwrap());
        assert_eq!(val, redecoded);
        assert!(val.dump_msgpack_to_vec().is_ok());
    }
});

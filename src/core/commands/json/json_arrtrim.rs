// src/core/commands/json/json_arrtrim.rs

//! `JSON.ARRTRIM <key> <path> <start> <stop>`: keeps only the inclusive range.

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonArrTrim {
    pub key: Bytes,
    pub path: String,
    pub start: i64,
    pub stop: i64,
}

impl JsonArrTrim {
    pub fn new(key: &str, path: &str, start: i64, stop: i64) -> Self {
        JsonArrTrim {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
            start,
            stop,
        }
    }
}

impl CommandSpec for JsonArrTrim {
    fn name(&self) -> &'static str {
        "JSON.ARRTRIM"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            self.path.clone().into(),
            helpers::int_arg(self.start),
            helpers::int_arg(self.stop),
        ]
    }
}

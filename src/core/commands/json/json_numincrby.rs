// src/core/commands/json/json_numincrby.rs

//! `JSON.NUMINCRBY <key> <path> <number>`

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonNumIncrBy {
    pub key: Bytes,
    pub path: String,
    pub number: i64,
}

impl JsonNumIncrBy {
    pub fn new(key: &str, path: &str, number: i64) -> Self {
        JsonNumIncrBy {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
            number,
        }
    }
}

impl CommandSpec for JsonNumIncrBy {
    fn name(&self) -> &'static str {
        "JSON.NUMINCRBY"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            self.path.clone().into(),
            helpers::int_arg(self.number),
        ]
    }
}

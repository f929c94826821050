// src/core/commands/json/json_nummultby.rs

//! `JSON.NUMMULTBY <key> <path> <number>`

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonNumMultBy {
    pub key: Bytes,
    pub path: String,
    pub number: i64,
}

impl JsonNumMultBy {
    pub fn new(key: &str, path: &str, number: i64) -> Self {
        JsonNumMultBy {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
            number,
        }
    }
}

impl CommandSpec for JsonNumMultBy {
    fn name(&self) -> &'static str {
        "JSON.NUMMULTBY"
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

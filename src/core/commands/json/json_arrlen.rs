// src/core/commands/json/json_arrlen.rs

//! `JSON.ARRLEN <key> [path]`

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonArrLen {
    pub key: Bytes,
    pub path: String,
}

impl JsonArrLen {
    pub fn new(key: &str, path: &str) -> Self {
        JsonArrLen {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
        }
    }
}

impl CommandSpec for JsonArrLen {
    fn name(&self) -> &'static str {
        "JSON.ARRLEN"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        helpers::key_and_optional_path(&self.key, &self.path)
    }
}

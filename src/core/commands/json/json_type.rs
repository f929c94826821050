// src/core/commands/json/json_type.rs

//! `JSON.TYPE <key> [path]`

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonType {
    pub key: Bytes,
    pub path: String,
}

impl JsonType {
    pub fn new(key: &str, path: &str) -> Self {
        JsonType {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
        }
    }
}

impl CommandSpec for JsonType {
    fn name(&self) -> &'static str {
        "JSON.TYPE"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        helpers::key_and_optional_path(&self.key, &self.path)
    }
}

// src/core/commands/json/json_strlen.rs

//! `JSON.STRLEN <key> [path]`: length of the JSON string at path.

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonStrLen {
    pub key: Bytes,
    pub path: String,
}

impl JsonStrLen {
    pub fn new(key: &str, path: &str) -> Self {
        JsonStrLen {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
        }
    }
}

impl CommandSpec for JsonStrLen {
    fn name(&self) -> &'static str {
        "JSON.STRLEN"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        helpers::key_and_optional_path(&self.key, &self.path)
    }
}

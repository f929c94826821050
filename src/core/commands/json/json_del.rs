// src/core/commands/json/json_del.rs

//! `JSON.DEL <key> [path]`: deletes the value at path, or the whole key.

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonDel {
    pub key: Bytes,
    pub path: String,
}

impl JsonDel {
    pub fn new(key: &str, path: &str) -> Self {
        JsonDel {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
        }
    }
}

impl CommandSpec for JsonDel {
    fn name(&self) -> &'static str {
        "JSON.DEL"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        helpers::key_and_optional_path(&self.key, &self.path)
    }
}

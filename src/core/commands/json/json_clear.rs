// src/core/commands/json/json_clear.rs

//! `JSON.CLEAR <key> [path]`: empties containers and zeroes numbers.

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonClear {
    pub key: Bytes,
    pub path: String,
}

impl JsonClear {
    pub fn new(key: &str, path: &str) -> Self {
        JsonClear {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
        }
    }
}

impl CommandSpec for JsonClear {
    fn name(&self) -> &'static str {
        "JSON.CLEAR"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        helpers::key_and_optional_path(&self.key, &self.path)
    }
}

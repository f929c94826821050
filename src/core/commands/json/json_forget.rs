// src/core/commands/json/json_forget.rs

//! `JSON.FORGET <key> [path]`, an alias of `JSON.DEL` kept as its own command on the wire.

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonForget {
    pub key: Bytes,
    pub path: String,
}

impl JsonForget {
    pub fn new(key: &str, path: &str) -> Self {
        JsonForget {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
        }
    }
}

impl CommandSpec for JsonForget {
    fn name(&self) -> &'static str {
        "JSON.FORGET"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        helpers::key_and_optional_path(&self.key, &self.path)
    }
}

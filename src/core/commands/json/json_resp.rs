// src/core/commands/json/json_resp.rs

//! `JSON.RESP <key> [path]`: the value at path rendered as nested RESP.

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonResp {
    pub key: Bytes,
    pub path: String,
}

impl JsonResp {
    pub fn new(key: &str, path: &str) -> Self {
        JsonResp {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
        }
    }
}

impl CommandSpec for JsonResp {
    fn name(&self) -> &'static str {
        "JSON.RESP"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        helpers::key_and_optional_path(&self.key, &self.path)
    }
}

// src/core/commands/json/json_objlen.rs

//! `JSON.OBJLEN <key> [path]`

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonObjLen {
    pub key: Bytes,
    pub path: String,
}

impl JsonObjLen {
    pub fn new(key: &str, path: &str) -> Self {
        JsonObjLen {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
        }
    }
}

impl CommandSpec for JsonObjLen {
    fn name(&self) -> &'static str {
        "JSON.OBJLEN"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        helpers::key_and_optional_path(&self.key, &self.path)
    }
}

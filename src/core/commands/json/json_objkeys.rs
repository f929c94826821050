// src/core/commands/json/json_objkeys.rs

//! `JSON.OBJKEYS <key> [path]`: the keys of the object at path.

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonObjKeys {
    pub key: Bytes,
    pub path: String,
}

impl JsonObjKeys {
    pub fn new(key: &str, path: &str) -> Self {
        JsonObjKeys {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
        }
    }
}

impl CommandSpec for JsonObjKeys {
    fn name(&self) -> &'static str {
        "JSON.OBJKEYS"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        helpers::key_and_optional_path(&self.key, &self.path)
    }
}

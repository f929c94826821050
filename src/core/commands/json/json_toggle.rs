// src/core/commands/json/json_toggle.rs

//! `JSON.TOGGLE <key> <path>`: flips the boolean at path.

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonToggle {
    pub key: Bytes,
    pub path: String,
}

impl JsonToggle {
    pub fn new(key: &str, path: &str) -> Self {
        JsonToggle {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
        }
    }
}

impl CommandSpec for JsonToggle {
    fn name(&self) -> &'static str {
        "JSON.TOGGLE"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![self.key.clone(), self.path.clone().into()]
    }
}

// src/core/commands/json/json_mget.rs

//! Implements `JSON.MGET`, retrieving one path from multiple JSON documents.

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonMGet {
    pub keys: Vec<Bytes>,
    pub path: String,
}

impl JsonMGet {
    pub fn new(path: &str, keys: &[&str]) -> Self {
        JsonMGet {
            keys: keys
                .iter()
                .map(|k| Bytes::copy_from_slice(k.as_bytes()))
                .collect(),
            path: path.to_string(),
        }
    }
}

impl CommandSpec for JsonMGet {
    fn name(&self) -> &'static str {
        "JSON.MGET"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        self.keys.clone()
    }
    // Keys first, the path is always the last argument.
    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = self.keys.clone();
        args.push(self.path.clone().into());
        args
    }
}

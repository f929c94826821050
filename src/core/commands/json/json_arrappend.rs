// src/core/commands/json/json_arrappend.rs

//! `JSON.ARRAPPEND <key> <path> <json> [json ...]`

use super::helpers;
use crate::core::ReJsonError;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct JsonArrAppend {
    pub key: Bytes,
    pub path: String,
    /// Each value already serialized to JSON text.
    pub values: Vec<Bytes>,
}

impl JsonArrAppend {
    pub fn new(key: &str, path: &str, values: &[Value]) -> Result<Self, ReJsonError> {
        Ok(JsonArrAppend {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
            values: values
                .iter()
                .map(helpers::to_json_bytes)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl CommandSpec for JsonArrAppend {
    fn name(&self) -> &'static str {
        "JSON.ARRAPPEND"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = vec![self.key.clone(), self.path.clone().into()];
        args.extend(self.values.iter().cloned());
        args
    }
}

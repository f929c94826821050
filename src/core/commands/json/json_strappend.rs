// src/core/commands/json/json_strappend.rs

//! `JSON.STRAPPEND <key> [path] <json-string>`

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonStrAppend {
    pub key: Bytes,
    pub path: String,
    /// Already a JSON string literal (quotes included); sent verbatim.
    pub value_json_str: Bytes,
}

impl JsonStrAppend {
    pub fn new(key: &str, path: &str, json_string: &str) -> Self {
        JsonStrAppend {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
            value_json_str: Bytes::copy_from_slice(json_string.as_bytes()),
        }
    }
}

impl CommandSpec for JsonStrAppend {
    fn name(&self) -> &'static str {
        "JSON.STRAPPEND"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = helpers::key_and_optional_path(&self.key, &self.path);
        args.push(self.value_json_str.clone());
        args
    }
}

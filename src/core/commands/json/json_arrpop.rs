// src/core/commands/json/json_arrpop.rs

//! `JSON.ARRPOP <key> [path [index]]`

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// The index that pops the last element of an array.
pub const POP_ARR_LAST: i64 = -1;

#[derive(Debug, Clone)]
pub struct JsonArrPop {
    pub key: Bytes,
    pub path: String,
    pub index: i64,
}

impl Default for JsonArrPop {
    fn default() -> Self {
        Self {
            key: Bytes::new(),
            path: String::new(),
            index: POP_ARR_LAST,
        }
    }
}

impl JsonArrPop {
    pub fn new(key: &str, path: &str, index: i64) -> Self {
        JsonArrPop {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
            index,
        }
    }
}

impl CommandSpec for JsonArrPop {
    fn name(&self) -> &'static str {
        "JSON.ARRPOP"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        vec![
            self.key.clone(),
            self.path.clone().into(),
            helpers::int_arg(self.index),
        ]
    }
}

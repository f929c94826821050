// src/core/commands/json/json_arrinsert.rs

//! `JSON.ARRINSERT <key> <path> <index> <json> [json ...]`: inserts before
//! `index`, shifting later elements to the right.

use super::helpers;
use crate::core::ReJsonError;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct JsonArrInsert {
    pub key: Bytes,
    pub path: String,
    pub index: i64,
    pub values: Vec<Bytes>,
}

impl JsonArrInsert {
    pub fn new(key: &str, path: &str, index: i64, values: &[Value]) -> Result<Self, ReJsonError> {
        Ok(JsonArrInsert {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
            index,
            values: values
                .iter()
                .map(helpers::to_json_bytes)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl CommandSpec for JsonArrInsert {
    fn name(&self) -> &'static str {
        "JSON.ARRINSERT"
    }

    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = vec![
            self.key.clone(),
            self.path.clone().into(),
            helpers::int_arg(self.index),
        ];
        args.extend(self.values.iter().cloned());
        args
    }
}

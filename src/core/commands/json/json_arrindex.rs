// src/core/commands/json/json_arrindex.rs

//! `JSON.ARRINDEX <key> <path> <json-scalar> [start [stop]]`

use super::helpers;
use crate::core::ReJsonError;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;
use serde_json::Value;

/// The optional search window of `JSON.ARRINDEX`. A `stop` can only be given
/// together with a `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrIndexRange {
    pub start: i64,
    pub stop: Option<i64>,
}

impl ArrIndexRange {
    pub fn new(start: i64, stop: i64) -> Self {
        Self {
            start,
            stop: Some(stop),
        }
    }

    pub fn from_start(start: i64) -> Self {
        Self { start, stop: None }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JsonArrIndex {
    pub key: Bytes,
    pub path: String,
    pub value_json_str: Bytes,
    pub range: Option<ArrIndexRange>,
}

impl JsonArrIndex {
    pub fn new(
        key: &str,
        path: &str,
        value: &Value,
        range: Option<ArrIndexRange>,
    ) -> Result<Self, ReJsonError> {
        Ok(JsonArrIndex {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
            value_json_str: helpers::to_json_bytes(value)?,
            range,
        })
    }
}

impl CommandSpec for JsonArrIndex {
    fn name(&self) -> &'static str {
        "JSON.ARRINDEX"
    }
    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = vec![
            self.key.clone(),
            self.path.clone().into(),
            self.value_json_str.clone(),
        ];
        if let Some(range) = self.range {
            args.push(helpers::int_arg(range.start));
            if let Some(stop) = range.stop {
                args.push(helpers::int_arg(stop));
            }
        }
        args
    }
}

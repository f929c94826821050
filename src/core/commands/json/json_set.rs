// src/core/commands/json/json_set.rs

//! `JSON.SET <key> <path> <json> [NX | XX]`

use super::helpers;
use crate::core::ReJsonError;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;
use serde_json::Value;

/// The optional condition of a `JSON.SET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetCondition {
    #[default]
    None,
    IfExists,    // XX
    IfNotExists, // NX
}

impl SetCondition {
    fn as_arg(self) -> Option<&'static str> {
        match self {
            SetCondition::None => None,
            SetCondition::IfExists => Some("XX"),
            SetCondition::IfNotExists => Some("NX"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JsonSet {
    pub key: Bytes,
    pub path: String,
    pub value_json_str: Bytes,
    pub condition: SetCondition,
}

impl JsonSet {
    pub fn new(
        key: &str,
        path: &str,
        value: &Value,
        condition: SetCondition,
    ) -> Result<Self, ReJsonError> {
        Ok(JsonSet {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
            value_json_str: helpers::to_json_bytes(value)?,
            condition,
        })
    }
}

impl CommandSpec for JsonSet {
    fn name(&self) -> &'static str {
        "JSON.SET"
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
        if let Some(flag) = self.condition.as_arg() {
            args.push(Bytes::from_static(flag.as_bytes()));
        }
        args
    }
}

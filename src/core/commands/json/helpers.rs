// src/core/commands/json/helpers.rs

//! Argument helpers shared by the `JSON.*` command builders.

use crate::core::ReJsonError;
use bytes::Bytes;
use serde_json::Value;

/// Serializes a JSON value into the compact text form the server expects.
pub(crate) fn to_json_bytes(value: &Value) -> Result<Bytes, ReJsonError> {
    Ok(serde_json::to_vec(value)?.into())
}

pub(crate) fn int_arg(n: i64) -> Bytes {
    n.to_string().into()
}

/// Appends `path` unless it is empty. Commands whose path is optional fall
/// back to the document root on the server.
pub(crate) fn push_optional_path(args: &mut Vec<Bytes>, path: &str) {
    if !path.is_empty() {
        args.push(Bytes::copy_from_slice(path.as_bytes()));
    }
}

/// `key` followed by the optional path, the layout of most read commands.
pub(crate) fn key_and_optional_path(key: &Bytes, path: &str) -> Vec<Bytes> {
    let mut args = vec![key.clone()];
    push_optional_path(&mut args, path);
    args
}

// src/core/protocol/resp_value.rs

//! The reply type surfaced to callers of the handler.

use crate::core::ReJsonError;
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// A decoded server reply.
///
/// Its shape depends on the command: `JSON.SET` answers with a simple string,
/// `JSON.GET` with a bulk string holding serialized JSON, the length commands
/// with integers, and `JSON.MGET`/`JSON.OBJKEYS`/`JSON.RESP` with arrays.
#[derive(Debug, Clone, PartialEq)]
pub enum RespValue {
    SimpleString(String),
    BulkString(Bytes),
    Integer(i64),
    Array(Vec<RespValue>),
    Null,
    NullArray,
    Error(String),
}

impl RespValue {
    /// Returns true for the `+OK` status reply.
    pub fn is_ok(&self) -> bool {
        matches!(self, RespValue::SimpleString(s) if s.eq_ignore_ascii_case("OK"))
    }

    /// Deserializes a bulk-string reply holding JSON text (what `JSON.GET`
    /// returns). `Null` decodes as JSON `null`.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ReJsonError> {
        match self {
            RespValue::BulkString(b) => Ok(serde_json::from_slice(&b)?),
            RespValue::SimpleString(s) => Ok(serde_json::from_str(&s)?),
            RespValue::Null | RespValue::NullArray => Ok(serde_json::from_value(
                serde_json::Value::Null,
            )?),
            other => Err(ReJsonError::UnexpectedReply(format!(
                "expected a JSON bulk string, got {other:?}"
            ))),
        }
    }
}

impl From<super::RespFrame> for RespValue {
    fn from(frame: super::RespFrame) -> Self {
        match frame {
            super::RespFrame::SimpleString(s) => RespValue::SimpleString(s),
            super::RespFrame::BulkString(b) => RespValue::BulkString(b),
            super::RespFrame::Integer(i) => RespValue::Integer(i),
            // Nested errors (e.g. per-path failures) stay inside the array.
            super::RespFrame::Array(arr) => {
                RespValue::Array(arr.into_iter().map(Into::into).collect())
            }
            super::RespFrame::Null => RespValue::Null,
            super::RespFrame::NullArray => RespValue::NullArray,
            super::RespFrame::Error(s) => RespValue::Error(s),
        }
    }
}

// src/core/backend/mod.rs

//! The capability set every ReJSON backend implements, and the RESP backend.

pub mod resp_client;

pub use resp_client::RespClient;

use crate::core::commands::json::{ArrIndexRange, DebugSubcommand, GetOptions, SetCondition};
use crate::core::{ReJsonError, RespValue};
use async_trait::async_trait;
use serde_json::Value;

/// One method per ReJSON command.
///
/// Implementations turn the typed arguments into a command and return the
/// server's reply. The `Handler` implements this trait as well and forwards
/// each call to the attached backend.
#[async_trait]
pub trait ReJson: Send + Sync {
    /// `JSON.SET <key> <path> <json> [NX | XX]`
    async fn json_set(
        &self,
        key: &str,
        path: &str,
        obj: &Value,
        condition: SetCondition,
    ) -> Result<RespValue, ReJsonError>;

    /// `JSON.GET <key> [INDENT s] [NEWLINE s] [SPACE s] [NOESCAPE] [path]`
    async fn json_get(
        &self,
        key: &str,
        path: &str,
        options: &GetOptions,
    ) -> Result<RespValue, ReJsonError>;

    /// `JSON.MGET <key> [key ...] <path>`
    async fn json_mget(&self, path: &str, keys: &[&str]) -> Result<RespValue, ReJsonError>;

    async fn json_del(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError>;

    async fn json_type(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError>;

    async fn json_num_incr_by(
        &self,
        key: &str,
        path: &str,
        number: i64,
    ) -> Result<RespValue, ReJsonError>;

    async fn json_num_mult_by(
        &self,
        key: &str,
        path: &str,
        number: i64,
    ) -> Result<RespValue, ReJsonError>;

    /// `json_string` must already be a JSON string literal, quotes included.
    async fn json_str_append(
        &self,
        key: &str,
        path: &str,
        json_string: &str,
    ) -> Result<RespValue, ReJsonError>;

    async fn json_str_len(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError>;

    async fn json_arr_append(
        &self,
        key: &str,
        path: &str,
        values: &[Value],
    ) -> Result<RespValue, ReJsonError>;

    async fn json_arr_len(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError>;

    /// Pass `POP_ARR_LAST` as `index` to pop the last element.
    async fn json_arr_pop(
        &self,
        key: &str,
        path: &str,
        index: i64,
    ) -> Result<RespValue, ReJsonError>;

    async fn json_arr_index(
        &self,
        key: &str,
        path: &str,
        value: &Value,
        range: Option<ArrIndexRange>,
    ) -> Result<RespValue, ReJsonError>;

    async fn json_arr_trim(
        &self,
        key: &str,
        path: &str,
        start: i64,
        stop: i64,
    ) -> Result<RespValue, ReJsonError>;

    async fn json_arr_insert(
        &self,
        key: &str,
        path: &str,
        index: i64,
        values: &[Value],
    ) -> Result<RespValue, ReJsonError>;

    async fn json_obj_keys(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError>;

    async fn json_obj_len(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError>;

    /// For `DebugSubcommand::Help` the key and path are ignored.
    async fn json_debug(
        &self,
        subcommand: DebugSubcommand,
        key: &str,
        path: &str,
    ) -> Result<RespValue, ReJsonError>;

    async fn json_forget(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError>;

    async fn json_resp(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError>;

    async fn json_toggle(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError>;

    async fn json_clear(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError>;
}

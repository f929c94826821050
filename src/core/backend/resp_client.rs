// src/core/backend/resp_client.rs

//! The RESP backend: builds each `JSON.*` command and runs it on a
//! caller-supplied `Connection`.

use super::ReJson;
use crate::connection::Connection;
use crate::core::commands::CommandSpec;
use crate::core::commands::json::*;
use crate::core::{ReJsonError, RespValue};
use async_trait::async_trait;
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::sync::Mutex;

/// Runs ReJSON commands over one RESP connection.
///
/// Requests are serialized: a caller holds the connection from the moment its
/// command is written until its reply is read, so replies can never be handed
/// to the wrong caller.
#[derive(Debug)]
pub struct RespClient<S = TcpStream> {
    conn: Mutex<Connection<S>>,
}

impl<S> RespClient<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    pub fn new(conn: Connection<S>) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    async fn run<C>(&self, command: C) -> Result<RespValue, ReJsonError>
    where
        C: CommandSpec + Send + Sync,
    {
        let mut conn = self.conn.lock().await;
        conn.execute(&command).await
    }

    /// Returns the wrapped connection.
    pub fn into_inner(self) -> Connection<S> {
        self.conn.into_inner()
    }
}

#[async_trait]
impl<S> ReJson for RespClient<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    async fn json_set(
        &self,
        key: &str,
        path: &str,
        obj: &Value,
        condition: SetCondition,
    ) -> Result<RespValue, ReJsonError> {
        self.run(JsonSet::new(key, path, obj, condition)?).await
    }

    async fn json_get(
        &self,
        key: &str,
        path: &str,
        options: &GetOptions,
    ) -> Result<RespValue, ReJsonError> {
        self.run(JsonGet::new(key, path, options)).await
    }

    async fn json_mget(&self, path: &str, keys: &[&str]) -> Result<RespValue, ReJsonError> {
        self.run(JsonMGet::new(path, keys)).await
    }

    async fn json_del(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.run(JsonDel::new(key, path)).await
    }

    async fn json_type(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.run(JsonType::new(key, path)).await
    }

    async fn json_num_incr_by(
        &self,
        key: &str,
        path: &str,
        number: i64,
    ) -> Result<RespValue, ReJsonError> {
        self.run(JsonNumIncrBy::new(key, path, number)).await
    }

    async fn json_num_mult_by(
        &self,
        key: &str,
        path: &str,
        number: i64,
    ) -> Result<RespValue, ReJsonError> {
        self.run(JsonNumMultBy::new(key, path, number)).await
    }

    async fn json_str_append(
        &self,
        key: &str,
        path: &str,
        json_string: &str,
    ) -> Result<RespValue, ReJsonError> {
        self.run(JsonStrAppend::new(key, path, json_string)).await
    }

    async fn json_str_len(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.run(JsonStrLen::new(key, path)).await
    }

    async fn json_arr_append(
        &self,
        key: &str,
        path: &str,
        values: &[Value],
    ) -> Result<RespValue, ReJsonError> {
        self.run(JsonArrAppend::new(key, path, values)?).await
    }

    async fn json_arr_len(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.run(JsonArrLen::new(key, path)).await
    }

    async fn json_arr_pop(
        &self,
        key: &str,
        path: &str,
        index: i64,
    ) -> Result<RespValue, ReJsonError> {
        self.run(JsonArrPop::new(key, path, index)).await
    }

    async fn json_arr_index(
        &self,
        key: &str,
        path: &str,
        value: &Value,
        range: Option<ArrIndexRange>,
    ) -> Result<RespValue, ReJsonError> {
        self.run(JsonArrIndex::new(key, path, value, range)?).await
    }

    async fn json_arr_trim(
        &self,
        key: &str,
        path: &str,
        start: i64,
        stop: i64,
    ) -> Result<RespValue, ReJsonError> {
        self.run(JsonArrTrim::new(key, path, start, stop)).await
    }

    async fn json_arr_insert(
        &self,
        key: &str,
        path: &str,
        index: i64,
        values: &[Value],
    ) -> Result<RespValue, ReJsonError> {
        self.run(JsonArrInsert::new(key, path, index, values)?).await
    }

    async fn json_obj_keys(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.run(JsonObjKeys::new(key, path)).await
    }

    async fn json_obj_len(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.run(JsonObjLen::new(key, path)).await
    }

    async fn json_debug(
        &self,
        subcommand: DebugSubcommand,
        key: &str,
        path: &str,
    ) -> Result<RespValue, ReJsonError> {
        self.run(JsonDebug::new(subcommand, key, path)).await
    }

    async fn json_forget(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.run(JsonForget::new(key, path)).await
    }

    async fn json_resp(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.run(JsonResp::new(key, path)).await
    }

    async fn json_toggle(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.run(JsonToggle::new(key, path)).await
    }

    async fn json_clear(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.run(JsonClear::new(key, path)).await
    }
}

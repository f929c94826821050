// src/core/handler/dispatcher.rs

//! The `Handler`: checks that a backend is attached and forwards every
//! ReJSON call to it unchanged.

use crate::core::backend::ReJson;
use crate::core::commands::json::{ArrIndexRange, DebugSubcommand, GetOptions, SetCondition};
use crate::core::{ReJsonError, RespValue};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Identifies which backend is attached to a `Handler`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClientName {
    #[default]
    Inactive,
    /// The built-in `RespClient`.
    Resp,
    /// A backend attached through `ClientSelector::set_client`.
    Custom(String),
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientName::Inactive => f.write_str("inactive"),
            ClientName::Resp => f.write_str("resp"),
            ClientName::Custom(name) => f.write_str(name),
        }
    }
}

#[derive(Default)]
struct Attachment {
    name: ClientName,
    backend: Option<Arc<dyn ReJson>>,
}

/// Dispatches ReJSON calls to the attached backend.
///
/// A handler starts inactive, and every call then fails with
/// `ReJsonError::NoClientSet` without touching any backend. Once a backend is
/// attached, calls are forwarded verbatim and its result or error is returned
/// as is.
///
/// The name and backend live behind one lock that is held only while the
/// backend's `Arc` is cloned, never across an `.await`. Attaching or
/// detaching while calls are in flight is therefore safe: a running call
/// finishes on the backend it started with, and calls made after a detach
/// see `NoClientSet`.
#[derive(Default)]
pub struct Handler {
    attachment: RwLock<Attachment>,
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("client_name", &self.client_name())
            .finish()
    }
}

impl Handler {
    /// Creates an inactive handler.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client_name(&self) -> ClientName {
        self.attachment.read().name.clone()
    }

    pub fn is_active(&self) -> bool {
        self.attachment.read().backend.is_some()
    }

    /// Replaces name and backend in one step.
    pub(super) fn attach(&self, name: ClientName, backend: Arc<dyn ReJson>) {
        let mut attachment = self.attachment.write();
        attachment.name = name;
        attachment.backend = Some(backend);
    }

    pub(super) fn detach(&self) {
        *self.attachment.write() = Attachment::default();
    }

    fn backend(&self, command: &'static str) -> Result<Arc<dyn ReJson>, ReJsonError> {
        let attachment = self.attachment.read();
        match &attachment.backend {
            Some(backend) => {
                trace!(client = %attachment.name, command, "dispatching");
                Ok(Arc::clone(backend))
            }
            None => {
                trace!(command, "rejected: no client set");
                Err(ReJsonError::NoClientSet)
            }
        }
    }
}

#[async_trait]
impl ReJson for Handler {
    async fn json_set(
        &self,
        key: &str,
        path: &str,
        obj: &Value,
        condition: SetCondition,
    ) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.SET")?
            .json_set(key, path, obj, condition)
            .await
    }

    async fn json_get(
        &self,
        key: &str,
        path: &str,
        options: &GetOptions,
    ) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.GET")?.json_get(key, path, options).await
    }

    async fn json_mget(&self, path: &str, keys: &[&str]) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.MGET")?.json_mget(path, keys).await
    }

    async fn json_del(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.DEL")?.json_del(key, path).await
    }

    async fn json_type(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.TYPE")?.json_type(key, path).await
    }

    async fn json_num_incr_by(
        &self,
        key: &str,
        path: &str,
        number: i64,
    ) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.NUMINCRBY")?
            .json_num_incr_by(key, path, number)
            .await
    }

    async fn json_num_mult_by(
        &self,
        key: &str,
        path: &str,
        number: i64,
    ) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.NUMMULTBY")?
            .json_num_mult_by(key, path, number)
            .await
    }

    async fn json_str_append(
        &self,
        key: &str,
        path: &str,
        json_string: &str,
    ) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.STRAPPEND")?
            .json_str_append(key, path, json_string)
            .await
    }

    async fn json_str_len(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.STRLEN")?.json_str_len(key, path).await
    }

    async fn json_arr_append(
        &self,
        key: &str,
        path: &str,
        values: &[Value],
    ) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.ARRAPPEND")?
            .json_arr_append(key, path, values)
            .await
    }

    async fn json_arr_len(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.ARRLEN")?.json_arr_len(key, path).await
    }

    async fn json_arr_pop(
        &self,
        key: &str,
        path: &str,
        index: i64,
    ) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.ARRPOP")?
            .json_arr_pop(key, path, index)
            .await
    }

    async fn json_arr_index(
        &self,
        key: &str,
        path: &str,
        value: &Value,
        range: Option<ArrIndexRange>,
    ) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.ARRINDEX")?
            .json_arr_index(key, path, value, range)
            .await
    }

    async fn json_arr_trim(
        &self,
        key: &str,
        path: &str,
        start: i64,
        stop: i64,
    ) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.ARRTRIM")?
            .json_arr_trim(key, path, start, stop)
            .await
    }

    async fn json_arr_insert(
        &self,
        key: &str,
        path: &str,
        index: i64,
        values: &[Value],
    ) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.ARRINSERT")?
            .json_arr_insert(key, path, index, values)
            .await
    }

    async fn json_obj_keys(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.OBJKEYS")?.json_obj_keys(key, path).await
    }

    async fn json_obj_len(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.OBJLEN")?.json_obj_len(key, path).await
    }

    async fn json_debug(
        &self,
        subcommand: DebugSubcommand,
        key: &str,
        path: &str,
    ) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.DEBUG")?
            .json_debug(subcommand, key, path)
            .await
    }

    async fn json_forget(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.FORGET")?.json_forget(key, path).await
    }

    async fn json_resp(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.RESP")?.json_resp(key, path).await
    }

    async fn json_toggle(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.TOGGLE")?.json_toggle(key, path).await
    }

    async fn json_clear(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.backend("JSON.CLEAR")?.json_clear(key, path).await
    }
}

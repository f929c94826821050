// tests/integration/test_helpers.rs

//! Test helpers: a recording backend, a scripted in-memory RESP server, and
//! a driver that calls every ReJSON operation once.

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use parking_lot::Mutex;
use rejson::core::protocol::{RespFrame, RespFrameCodec};
use rejson::{
    ArrIndexRange, Connection, DebugSubcommand, GetOptions, ReJson, ReJsonError, RespValue,
    SetCondition,
};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite, DuplexStream};
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio_util::codec::Framed;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_test_writer()
        .try_init();
}

/// One recorded backend invocation, arguments owned.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Set {
        key: String,
        path: String,
        obj: Value,
        condition: SetCondition,
    },
    Get {
        key: String,
        path: String,
        options: GetOptions,
    },
    MGet {
        path: String,
        keys: Vec<String>,
    },
    /// Every command whose only arguments are a key and a path.
    KeyPath {
        command: &'static str,
        key: String,
        path: String,
    },
    Number {
        command: &'static str,
        key: String,
        path: String,
        number: i64,
    },
    StrAppend {
        key: String,
        path: String,
        json_string: String,
    },
    ArrAppend {
        key: String,
        path: String,
        values: Vec<Value>,
    },
    ArrPop {
        key: String,
        path: String,
        index: i64,
    },
    ArrIndex {
        key: String,
        path: String,
        value: Value,
        range: Option<ArrIndexRange>,
    },
    ArrTrim {
        key: String,
        path: String,
        start: i64,
        stop: i64,
    },
    ArrInsert {
        key: String,
        path: String,
        index: i64,
        values: Vec<Value>,
    },
    Debug {
        subcommand: DebugSubcommand,
        key: String,
        path: String,
    },
}

fn key_path(command: &'static str, key: &str, path: &str) -> Call {
    Call::KeyPath {
        command,
        key: key.to_string(),
        path: path.to_string(),
    }
}

/// A backend that records each call and answers with a fixed reply.
pub struct RecordingBackend {
    calls: Mutex<Vec<Call>>,
    reply: Result<RespValue, ReJsonError>,
    // When set, each call waits for a notification before answering.
    gate: Option<Arc<Notify>>,
}

impl RecordingBackend {
    pub fn replying(reply: Result<RespValue, ReJsonError>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply,
            gate: None,
        }
    }

    pub fn ok() -> Self {
        Self::replying(Ok(RespValue::SimpleString("OK".into())))
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::ok()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    async fn answer(&self, call: Call) -> Result<RespValue, ReJsonError> {
        self.calls.lock().push(call);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.reply.clone()
    }
}

#[async_trait]
impl ReJson for RecordingBackend {
    async fn json_set(
        &self,
        key: &str,
        path: &str,
        obj: &Value,
        condition: SetCondition,
    ) -> Result<RespValue, ReJsonError> {
        self.answer(Call::Set {
            key: key.into(),
            path: path.into(),
            obj: obj.clone(),
            condition,
        })
        .await
    }

    async fn json_get(
        &self,
        key: &str,
        path: &str,
        options: &GetOptions,
    ) -> Result<RespValue, ReJsonError> {
        self.answer(Call::Get {
            key: key.into(),
            path: path.into(),
            options: options.clone(),
        })
        .await
    }

    async fn json_mget(&self, path: &str, keys: &[&str]) -> Result<RespValue, ReJsonError> {
        self.answer(Call::MGet {
            path: path.into(),
            keys: keys.iter().map(|k| k.to_string()).collect(),
        })
        .await
    }

    async fn json_del(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.answer(key_path("JSON.DEL", key, path)).await
    }

    async fn json_type(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.answer(key_path("JSON.TYPE", key, path)).await
    }

    async fn json_num_incr_by(
        &self,
        key: &str,
        path: &str,
        number: i64,
    ) -> Result<RespValue, ReJsonError> {
        self.answer(Call::Number {
            command: "JSON.NUMINCRBY",
            key: key.into(),
            path: path.into(),
            number,
        })
        .await
    }

    async fn json_num_mult_by(
        &self,
        key: &str,
        path: &str,
        number: i64,
    ) -> Result<RespValue, ReJsonError> {
        self.answer(Call::Number {
            command: "JSON.NUMMULTBY",
            key: key.into(),
            path: path.into(),
            number,
        })
        .await
    }

    async fn json_str_append(
        &self,
        key: &str,
        path: &str,
        json_string: &str,
    ) -> Result<RespValue, ReJsonError> {
        self.answer(Call::StrAppend {
            key: key.into(),
            path: path.into(),
            json_string: json_string.into(),
        })
        .await
    }

    async fn json_str_len(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.answer(key_path("JSON.STRLEN", key, path)).await
    }

    async fn json_arr_append(
        &self,
        key: &str,
        path: &str,
        values: &[Value],
    ) -> Result<RespValue, ReJsonError> {
        self.answer(Call::ArrAppend {
            key: key.into(),
            path: path.into(),
            values: values.to_vec(),
        })
        .await
    }

    async fn json_arr_len(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.answer(key_path("JSON.ARRLEN", key, path)).await
    }

    async fn json_arr_pop(
        &self,
        key: &str,
        path: &str,
        index: i64,
    ) -> Result<RespValue, ReJsonError> {
        self.answer(Call::ArrPop {
            key: key.into(),
            path: path.into(),
            index,
        })
        .await
    }

    async fn json_arr_index(
        &self,
        key: &str,
        path: &str,
        value: &Value,
        range: Option<ArrIndexRange>,
    ) -> Result<RespValue, ReJsonError> {
        self.answer(Call::ArrIndex {
            key: key.into(),
            path: path.into(),
            value: value.clone(),
            range,
        })
        .await
    }

    async fn json_arr_trim(
        &self,
        key: &str,
        path: &str,
        start: i64,
        stop: i64,
    ) -> Result<RespValue, ReJsonError> {
        self.answer(Call::ArrTrim {
            key: key.into(),
            path: path.into(),
            start,
            stop,
        })
        .await
    }

    async fn json_arr_insert(
        &self,
        key: &str,
        path: &str,
        index: i64,
        values: &[Value],
    ) -> Result<RespValue, ReJsonError> {
        self.answer(Call::ArrInsert {
            key: key.into(),
            path: path.into(),
            index,
            values: values.to_vec(),
        })
        .await
    }

    async fn json_obj_keys(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.answer(key_path("JSON.OBJKEYS", key, path)).await
    }

    async fn json_obj_len(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.answer(key_path("JSON.OBJLEN", key, path)).await
    }

    async fn json_debug(
        &self,
        subcommand: DebugSubcommand,
        key: &str,
        path: &str,
    ) -> Result<RespValue, ReJsonError> {
        self.answer(Call::Debug {
            subcommand,
            key: key.into(),
            path: path.into(),
        })
        .await
    }

    async fn json_forget(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.answer(key_path("JSON.FORGET", key, path)).await
    }

    async fn json_resp(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.answer(key_path("JSON.RESP", key, path)).await
    }

    async fn json_toggle(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.answer(key_path("JSON.TOGGLE", key, path)).await
    }

    async fn json_clear(&self, key: &str, path: &str) -> Result<RespValue, ReJsonError> {
        self.answer(key_path("JSON.CLEAR", key, path)).await
    }
}

/// Calls every operation once, in the order of `expected_calls`.
pub async fn call_every_operation(api: &dyn ReJson) -> Vec<Result<RespValue, ReJsonError>> {
    let options = GetOptions::new().indent("\t").space(" ");
    vec![
        api.json_set("k", ".", &json!({"a": 1}), SetCondition::IfNotExists)
            .await,
        api.json_get("k", ".a", &options).await,
        api.json_mget(".a", &["k1", "k2"]).await,
        api.json_del("k", ".a").await,
        api.json_type("k", ".").await,
        api.json_num_incr_by("k", ".n", 5).await,
        api.json_num_mult_by("k", ".n", -2).await,
        api.json_str_append("k", ".s", "\"tail\"").await,
        api.json_str_len("k", ".s").await,
        api.json_arr_append("k", ".arr", &[json!(1), json!("two")])
            .await,
        api.json_arr_len("k", ".arr").await,
        api.json_arr_pop("k", ".arr", -1).await,
        api.json_arr_index("k", ".arr", &json!(3), Some(ArrIndexRange::new(0, 4)))
            .await,
        api.json_arr_trim("k", ".arr", 1, 3).await,
        api.json_arr_insert("k", ".arr", 0, &[json!(null)]).await,
        api.json_obj_keys("k", ".").await,
        api.json_obj_len("k", ".").await,
        api.json_debug(DebugSubcommand::Memory, "k", ".").await,
        api.json_forget("k", ".a").await,
        api.json_resp("k", ".").await,
        api.json_toggle("k", ".flag").await,
        api.json_clear("k", ".arr").await,
    ]
}

/// The calls a recording backend sees after `call_every_operation`.
pub fn expected_calls() -> Vec<Call> {
    vec![
        Call::Set {
            key: "k".into(),
            path: ".".into(),
            obj: json!({"a": 1}),
            condition: SetCondition::IfNotExists,
        },
        Call::Get {
            key: "k".into(),
            path: ".a".into(),
            options: GetOptions::new().indent("\t").space(" "),
        },
        Call::MGet {
            path: ".a".into(),
            keys: vec!["k1".into(), "k2".into()],
        },
        key_path("JSON.DEL", "k", ".a"),
        key_path("JSON.TYPE", "k", "."),
        Call::Number {
            command: "JSON.NUMINCRBY",
            key: "k".into(),
            path: ".n".into(),
            number: 5,
        },
        Call::Number {
            command: "JSON.NUMMULTBY",
            key: "k".into(),
            path: ".n".into(),
            number: -2,
        },
        Call::StrAppend {
            key: "k".into(),
            path: ".s".into(),
            json_string: "\"tail\"".into(),
        },
        key_path("JSON.STRLEN", "k", ".s"),
        Call::ArrAppend {
            key: "k".into(),
            path: ".arr".into(),
            values: vec![json!(1), json!("two")],
        },
        key_path("JSON.ARRLEN", "k", ".arr"),
        Call::ArrPop {
            key: "k".into(),
            path: ".arr".into(),
            index: -1,
        },
        Call::ArrIndex {
            key: "k".into(),
            path: ".arr".into(),
            value: json!(3),
            range: Some(ArrIndexRange::new(0, 4)),
        },
        Call::ArrTrim {
            key: "k".into(),
            path: ".arr".into(),
            start: 1,
            stop: 3,
        },
        Call::ArrInsert {
            key: "k".into(),
            path: ".arr".into(),
            index: 0,
            values: vec![json!(null)],
        },
        key_path("JSON.OBJKEYS", "k", "."),
        key_path("JSON.OBJLEN", "k", "."),
        Call::Debug {
            subcommand: DebugSubcommand::Memory,
            key: "k".into(),
            path: ".".into(),
        },
        key_path("JSON.FORGET", "k", ".a"),
        key_path("JSON.RESP", "k", "."),
        key_path("JSON.TOGGLE", "k", ".flag"),
        key_path("JSON.CLEAR", "k", ".arr"),
    ]
}

/// Serves scripted replies: reads one request per reply, records its
/// arguments, answers, and returns the recorded requests once the script ends.
pub async fn serve_script<S>(stream: S, replies: Vec<RespFrame>) -> Vec<Vec<Bytes>>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut framed = Framed::new(stream, RespFrameCodec);
    let mut requests = Vec::new();
    for reply in replies {
        let Some(Ok(RespFrame::Array(parts))) = framed.next().await else {
            break;
        };
        let args = parts
            .into_iter()
            .map(|part| match part {
                RespFrame::BulkString(b) => b,
                other => panic!("request argument is not a bulk string: {other:?}"),
            })
            .collect();
        requests.push(args);
        framed.send(reply).await.unwrap();
    }
    requests
}

/// A connection to an in-memory server running `serve_script`.
pub fn scripted_connection(
    replies: Vec<RespFrame>,
) -> (Connection<DuplexStream>, JoinHandle<Vec<Vec<Bytes>>>) {
    let (client, server) = tokio::io::duplex(64 * 1024);
    let handle = tokio::spawn(serve_script(server, replies));
    (Connection::new(client, Duration::from_secs(2)), handle)
}

/// Turns string literals into the argument vector of a request.
pub fn args(parts: &[&str]) -> Vec<Bytes> {
    parts
        .iter()
        .map(|p| Bytes::copy_from_slice(p.as_bytes()))
        .collect()
}

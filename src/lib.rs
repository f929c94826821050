// src/lib.rs

//! Typed access to the Redis ReJSON commands.
//!
//! A [`Handler`] exposes one method per `JSON.*` command and forwards each call
//! to whichever backend is attached to it. The crate ships one backend,
//! [`RespClient`], which speaks RESP over a caller-supplied [`Connection`].
//!
//! ```no_run
//! use rejson::{ClientConfig, ClientSelector, Connection, Handler, ReJson, SetCondition};
//! use serde_json::json;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let handler = Handler::new();
//! handler.set_resp_client(Connection::connect(&ClientConfig::default()).await?);
//! handler
//!     .json_set("user:1", ".", &json!({"name": "Ada"}), SetCondition::None)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod connection;
pub mod core;

pub use crate::config::ClientConfig;
pub use crate::connection::Connection;
pub use crate::core::commands::json::{
    ArrIndexRange, DebugSubcommand, GetOptions, POP_ARR_LAST, SetCondition,
};
pub use crate::core::{
    ClientName, ClientSelector, Handler, ReJson, ReJsonError, RespClient, RespValue,
};

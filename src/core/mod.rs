// src/core/mod.rs

//! The handler, its backend trait, the command builders, and the RESP types
//! they share.

pub mod backend;
pub mod commands;
pub mod errors;
pub mod handler;
pub mod protocol;

pub use backend::{ReJson, RespClient};
pub use errors::ReJsonError;
pub use handler::{ClientName, ClientSelector, Handler};
pub use protocol::RespValue;

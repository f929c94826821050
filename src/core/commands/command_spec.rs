// src/core/commands/command_spec.rs

//! Defines the `CommandSpec` trait, which describes how a typed command is
//! laid out on the wire.

use crate::core::protocol::RespFrame;
use bytes::Bytes;

/// A trait for describing a command's name, its keys, and its arguments.
pub trait CommandSpec {
    /// The command name as sent to the server, e.g. `JSON.SET`.
    fn name(&self) -> &'static str;

    /// Extracts the key(s) the command touches.
    fn get_keys(&self) -> Vec<Bytes>;

    /// The arguments following the command name, in wire order.
    fn to_resp_args(&self) -> Vec<Bytes>;

    /// The full request frame: the name followed by every argument.
    fn to_frame(&self) -> RespFrame {
        let args = self.to_resp_args();
        let mut parts = Vec::with_capacity(args.len() + 1);
        parts.push(Bytes::from_static(self.name().as_bytes()));
        parts.extend(args);
        RespFrame::command(parts)
    }
}

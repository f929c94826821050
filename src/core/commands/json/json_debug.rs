// src/core/commands/json/json_debug.rs

//! `JSON.DEBUG <subcommand & arguments>`
//!
//! - `JSON.DEBUG MEMORY <key> [path]` reports the memory usage in bytes of a
//!   value; the path defaults to the root.
//! - `JSON.DEBUG HELP` replies with a help message and takes no key.

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebugSubcommand {
    #[default]
    Memory,
    Help,
}

impl DebugSubcommand {
    pub fn as_str(self) -> &'static str {
        match self {
            DebugSubcommand::Memory => "MEMORY",
            DebugSubcommand::Help => "HELP",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JsonDebug {
    pub subcommand: DebugSubcommand,
    pub key: Bytes,
    pub path: String,
}

impl JsonDebug {
    pub fn new(subcommand: DebugSubcommand, key: &str, path: &str) -> Self {
        JsonDebug {
            subcommand,
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
        }
    }
}

impl CommandSpec for JsonDebug {
    fn name(&self) -> &'static str {
        "JSON.DEBUG"
    }

    fn get_keys(&self) -> Vec<Bytes> {
        match self.subcommand {
            DebugSubcommand::Memory => vec![self.key.clone()],
            DebugSubcommand::Help => vec![],
        }
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = vec![Bytes::from_static(self.subcommand.as_str().as_bytes())];
        if self.subcommand == DebugSubcommand::Memory {
            args.extend(helpers::key_and_optional_path(&self.key, &self.path));
        }
        args
    }
}

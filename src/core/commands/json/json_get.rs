// src/core/commands/json/json_get.rs

//! Implements the `JSON.GET` request builder and its formatting options.

use super::helpers;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// Formatting options of `JSON.GET`.
///
/// Options are emitted in a fixed order, `INDENT`, `NEWLINE`, `SPACE`,
/// `NOESCAPE`, ahead of the path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOptions {
    /// Indentation string for nested levels.
    pub indent: Option<String>,
    /// String printed at the end of each line.
    pub newline: Option<String>,
    /// String put between a key and a value.
    pub space: Option<String>,
    /// Legacy flag kept for compatibility with older modules.
    pub noescape: bool,
}

impl GetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    pub fn newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = Some(newline.into());
        self
    }

    pub fn space(mut self, space: impl Into<String>) -> Self {
        self.space = Some(space.into());
        self
    }

    pub fn noescape(mut self) -> Self {
        self.noescape = true;
        self
    }

    fn push_args(&self, args: &mut Vec<Bytes>) {
        let pairs = [
            ("INDENT", &self.indent),
            ("NEWLINE", &self.newline),
            ("SPACE", &self.space),
        ];
        for (name, value) in pairs {
            if let Some(value) = value {
                args.push(Bytes::from_static(name.as_bytes()));
                args.push(Bytes::copy_from_slice(value.as_bytes()));
            }
        }
        if self.noescape {
            args.push(Bytes::from_static(b"NOESCAPE"));
        }
    }
}

/// Represents the `JSON.GET` command.
#[derive(Debug, Clone, Default)]
pub struct JsonGet {
    pub key: Bytes,
    /// Empty means "document root" and is left off the wire.
    pub path: String,
    pub options: GetOptions,
}

impl JsonGet {
    pub fn new(key: &str, path: &str, options: &GetOptions) -> Self {
        JsonGet {
            key: Bytes::copy_from_slice(key.as_bytes()),
            path: path.to_string(),
            options: options.clone(),
        }
    }
}

impl CommandSpec for JsonGet {
    fn name(&self) -> &'static str {
        "JSON.GET"
    }

    fn get_keys(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }

    fn to_resp_args(&self) -> Vec<Bytes> {
        let mut args = vec![self.key.clone()];
        self.options.push_args(&mut args);
        helpers::push_optional_path(&mut args, &self.path);
        args
    }
}

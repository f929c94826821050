// src/core/commands/mod.rs

//! Typed builders for every command the crate sends.

pub mod command_spec;
pub mod json;

pub use command_spec::CommandSpec;

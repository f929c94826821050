// src/core/handler/mod.rs

pub mod client_selector;
pub mod dispatcher;

pub use client_selector::ClientSelector;
pub use dispatcher::{ClientName, Handler};

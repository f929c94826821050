// src/core/handler/client_selector.rs

//! Attaching and detaching the backend of a `Handler`.

use super::dispatcher::{ClientName, Handler};
use crate::connection::Connection;
use crate::core::backend::{ReJson, RespClient};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

/// Selects the backend a `Handler` forwards to.
pub trait ClientSelector {
    /// Detaches any backend; subsequent calls fail with `NoClientSet`.
    fn set_client_inactive(&self);

    /// Attaches a `RespClient` over an already-configured connection.
    fn set_resp_client<S>(&self, conn: Connection<S>)
    where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static;

    /// Attaches an arbitrary backend under a custom name.
    fn set_client(&self, name: impl Into<String>, backend: Arc<dyn ReJson>);
}

impl ClientSelector for Handler {
    fn set_client_inactive(&self) {
        self.detach();
        debug!("ReJSON handler set inactive");
    }

    fn set_resp_client<S>(&self, conn: Connection<S>)
    where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        self.attach(ClientName::Resp, Arc::new(RespClient::new(conn)));
        debug!("ReJSON handler attached to a RESP client");
    }

    fn set_client(&self, name: impl Into<String>, backend: Arc<dyn ReJson>) {
        let name = ClientName::Custom(name.into());
        debug!(client = %name, "ReJSON handler attached to a custom client");
        self.attach(name, backend);
    }
}

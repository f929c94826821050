// src/connection/mod.rs

//! A single RESP connection to a Redis endpoint: one request frame out, one
//! reply frame back.

use crate::config::ClientConfig;
use crate::core::commands::CommandSpec;
use crate::core::protocol::{RespFrame, RespFrameCodec};
use crate::core::{ReJsonError, RespValue};
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_util::codec::Framed;
use tracing::{debug, trace, warn};

/// A framed connection carrying RESP requests and replies.
///
/// Any `AsyncRead + AsyncWrite` stream works, so a caller can hand over a TLS
/// stream or an in-memory pipe instead of plain TCP.
#[derive(Debug)]
pub struct Connection<S = TcpStream> {
    framed: Framed<S, RespFrameCodec>,
    response_timeout: Duration,
    // Set while an exchange is in progress; stays set if it never completes.
    desynced: bool,
}

impl Connection<TcpStream> {
    /// Opens a TCP connection described by `config`, then authenticates and
    /// selects the database when the config asks for it.
    pub async fn connect(config: &ClientConfig) -> Result<Self, ReJsonError> {
        let addr = config.addr();
        let stream = tokio::time::timeout(config.connect_timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| ReJsonError::Timeout(format!("connecting to {addr}")))??;
        stream.set_nodelay(true)?;

        let mut conn = Connection::new(stream, config.response_timeout);
        conn.prepare(config).await?;
        debug!("Connected to {}", addr);
        Ok(conn)
    }
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Wraps an already-established stream.
    pub fn new(stream: S, response_timeout: Duration) -> Self {
        Self {
            framed: Framed::new(stream, RespFrameCodec),
            response_timeout,
            desynced: false,
        }
    }

    /// Sends `AUTH` and `SELECT` as configured.
    pub async fn prepare(&mut self, config: &ClientConfig) -> Result<(), ReJsonError> {
        if let Some(password) = &config.password {
            let mut args = vec![Bytes::from_static(b"AUTH")];
            if let Some(username) = &config.username {
                args.push(Bytes::copy_from_slice(username.as_bytes()));
            }
            args.push(Bytes::copy_from_slice(password.as_bytes()));
            self.expect_ok("AUTH", RespFrame::command(args)).await?;
        }
        if config.database != 0 {
            let frame = RespFrame::command([
                Bytes::from_static(b"SELECT"),
                Bytes::from(config.database.to_string()),
            ]);
            self.expect_ok("SELECT", frame).await?;
        }
        Ok(())
    }

    /// Sends a typed command and returns its reply. An error reply becomes
    /// `ReJsonError::Server` carrying the server's message.
    pub async fn execute<C: CommandSpec>(&mut self, command: &C) -> Result<RespValue, ReJsonError> {
        trace!(command = command.name(), keys = ?command.get_keys(), "sending command");
        match self.send_and_receive(command.to_frame()).await? {
            RespFrame::Error(msg) => Err(ReJsonError::Server(msg)),
            reply => Ok(reply.into()),
        }
    }

    /// Sends one frame and waits for exactly one reply frame.
    ///
    /// The connection counts as desynced from the first byte written until
    /// the reply has been read in full. An exchange that fails, times out,
    /// or is dropped by its caller halfway leaves it that way.
    pub async fn send_and_receive(&mut self, frame: RespFrame) -> Result<RespFrame, ReJsonError> {
        if self.desynced {
            return Err(ReJsonError::ConnectionClosed);
        }
        self.desynced = true;

        match tokio::time::timeout(self.response_timeout, self.framed.send(frame)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                warn!("Failed to write request: {}", e);
                return Err(e);
            }
            Err(_) => {
                warn!(
                    "Request not written within {:?}; the connection is no longer usable",
                    self.response_timeout
                );
                return Err(ReJsonError::Timeout(
                    "Write timeout while sending request".to_string(),
                ));
            }
        }

        match tokio::time::timeout(self.response_timeout, self.framed.next()).await {
            Ok(Some(Ok(reply))) => {
                self.desynced = false;
                Ok(reply)
            }
            Ok(Some(Err(e))) => Err(e),
            Ok(None) => {
                warn!("Connection closed by peer while waiting for a reply");
                Err(ReJsonError::ConnectionClosed)
            }
            Err(_) => {
                warn!(
                    "No reply within {:?}; the connection is no longer usable",
                    self.response_timeout
                );
                Err(ReJsonError::Timeout(
                    "Read timeout while waiting for response".to_string(),
                ))
            }
        }
    }

    async fn expect_ok(&mut self, what: &str, frame: RespFrame) -> Result<(), ReJsonError> {
        match self.send_and_receive(frame).await? {
            RespFrame::SimpleString(s) if s.eq_ignore_ascii_case("OK") => Ok(()),
            RespFrame::Error(msg) => Err(ReJsonError::Server(msg)),
            other => Err(ReJsonError::UnexpectedReply(format!(
                "Unexpected response to {what}: {other:?}"
            ))),
        }
    }

    /// Gives back the underlying stream.
    pub fn into_inner(self) -> S {
        self.framed.into_inner()
    }
}

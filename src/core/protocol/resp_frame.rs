// src/core/protocol/resp_frame.rs

//! The RESP frame type and its `tokio_util` codec. Requests are always encoded
//! as arrays of bulk strings; replies may be any RESP2 frame.

use crate::core::ReJsonError;
use bytes::{Buf, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

const CRLF: &[u8] = b"\r\n";
const CRLF_LEN: usize = 2;

// Limits applied to replies read from the server.
const MAX_FRAME_ELEMENTS: usize = 1_024 * 1_024;
const MAX_BULK_STRING_SIZE: usize = 512 * 1024 * 1024;
const MAX_RECURSION_DEPTH: usize = 256;

/// A single frame in the RESP protocol.
#[derive(Debug, Clone, PartialEq)]
pub enum RespFrame {
    SimpleString(String),
    Error(String),
    Integer(i64),
    BulkString(Bytes),
    Null,
    NullArray,
    Array(Vec<RespFrame>),
}

impl RespFrame {
    /// Builds a request frame: an array holding one bulk string per argument.
    pub fn command<I>(args: I) -> Self
    where
        I: IntoIterator<Item = Bytes>,
    {
        RespFrame::Array(args.into_iter().map(RespFrame::BulkString).collect())
    }

    /// Encodes the frame into a freshly allocated `Vec<u8>`.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, ReJsonError> {
        let mut buf = BytesMut::new();
        RespFrameCodec.encode(self.clone(), &mut buf)?;
        Ok(buf.to_vec())
    }
}

/// A `tokio_util::codec` implementation for encoding and decoding `RespFrame`s.
#[derive(Debug, Default, Clone, Copy)]
pub struct RespFrameCodec;

impl Encoder<RespFrame> for RespFrameCodec {
    type Error = ReJsonError;

    fn encode(&mut self, item: RespFrame, dst: &mut BytesMut) -> Result<(), Self::Error> {
        match item {
            RespFrame::SimpleString(s) => {
                dst.extend_from_slice(b"+");
                dst.extend_from_slice(s.as_bytes());
                dst.extend_from_slice(CRLF);
            }
            RespFrame::Error(s) => {
                dst.extend_from_slice(b"-");
                dst.extend_from_slice(s.as_bytes());
                dst.extend_from_slice(CRLF);
            }
            RespFrame::Integer(i) => {
                dst.extend_from_slice(b":");
                dst.extend_from_slice(i.to_string().as_bytes());
                dst.extend_from_slice(CRLF);
            }
            RespFrame::BulkString(b) => {
                dst.extend_from_slice(b"$");
                dst.extend_from_slice(b.len().to_string().as_bytes());
                dst.extend_from_slice(CRLF);
                dst.extend_from_slice(&b);
                dst.extend_from_slice(CRLF);
            }
            RespFrame::Null => dst.extend_from_slice(b"$-1\r\n"),
            RespFrame::NullArray => dst.extend_from_slice(b"*-1\r\n"),
            RespFrame::Array(arr) => {
                dst.extend_from_slice(b"*");
                dst.extend_from_slice(arr.len().to_string().as_bytes());
                dst.extend_from_slice(CRLF);
                for frame in arr {
                    self.encode(frame, dst)?;
                }
            }
        }
        Ok(())
    }
}

impl Decoder for RespFrameCodec {
    type Item = RespFrame;
    type Error = ReJsonError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        let mut bytes = &src[..];
        match decode_frame(&mut bytes, 0) {
            Ok(frame) => {
                let consumed = src.len() - bytes.len();
                src.advance(consumed);
                Ok(Some(frame))
            }
            // A partial frame stays in the buffer until more bytes arrive.
            Err(ReJsonError::IncompleteData) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Decodes one frame from `bytes`, advancing the slice past it.
fn decode_frame(bytes: &mut &[u8], depth: usize) -> Result<RespFrame, ReJsonError> {
    if depth > MAX_RECURSION_DEPTH {
        return Err(ReJsonError::InvalidRequest(
            "RESP recursion depth limit exceeded".to_string(),
        ));
    }

    let Some((&prefix, rest)) = bytes.split_first() else {
        return Err(ReJsonError::IncompleteData);
    };
    *bytes = rest;

    match prefix {
        b'+' => Ok(RespFrame::SimpleString(read_text(bytes)?)),
        b'-' => Ok(RespFrame::Error(read_text(bytes)?)),
        b':' => Ok(RespFrame::Integer(read_length(bytes)?)),
        b'$' => decode_bulk_string(bytes),
        b'*' => decode_array(bytes, depth),
        _ => Err(ReJsonError::SyntaxError),
    }
}

fn decode_bulk_string(bytes: &mut &[u8]) -> Result<RespFrame, ReJsonError> {
    let len = read_length(bytes)?;
    if len == -1 {
        return Ok(RespFrame::Null);
    }
    let len = usize::try_from(len).map_err(|_| ReJsonError::SyntaxError)?;
    if len > MAX_BULK_STRING_SIZE {
        return Err(ReJsonError::SyntaxError);
    }
    if bytes.len() < len + CRLF_LEN {
        return Err(ReJsonError::IncompleteData);
    }
    if &bytes[len..len + CRLF_LEN] != CRLF {
        return Err(ReJsonError::SyntaxError);
    }

    let data = Bytes::copy_from_slice(&bytes[..len]);
    *bytes = &bytes[len + CRLF_LEN..];
    Ok(RespFrame::BulkString(data))
}

fn decode_array(bytes: &mut &[u8], depth: usize) -> Result<RespFrame, ReJsonError> {
    let len = read_length(bytes)?;
    if len == -1 {
        return Ok(RespFrame::NullArray);
    }
    let len = usize::try_from(len).map_err(|_| ReJsonError::SyntaxError)?;
    if len > MAX_FRAME_ELEMENTS {
        return Err(ReJsonError::SyntaxError);
    }

    let mut frames = Vec::with_capacity(len);
    for _ in 0..len {
        frames.push(decode_frame(bytes, depth + 1)?);
    }
    Ok(RespFrame::Array(frames))
}

/// Reads the line up to the next CRLF and advances past it.
fn read_line<'a>(bytes: &mut &'a [u8]) -> Result<&'a [u8], ReJsonError> {
    let pos = bytes
        .windows(CRLF_LEN)
        .position(|window| window == CRLF)
        .ok_or(ReJsonError::IncompleteData)?;
    let line = &bytes[..pos];
    *bytes = &bytes[pos + CRLF_LEN..];
    Ok(line)
}

fn read_text(bytes: &mut &[u8]) -> Result<String, ReJsonError> {
    Ok(String::from_utf8_lossy(read_line(bytes)?).into_owned())
}

fn read_length(bytes: &mut &[u8]) -> Result<i64, ReJsonError> {
    let line = read_line(bytes)?;
    std::str::from_utf8(line)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or(ReJsonError::SyntaxError)
}

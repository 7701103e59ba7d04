//! Error type for the posts API client.
//!
//! # Design
//! One error kind covers every way a call can fail: the transport broke, the
//! server answered outside 2xx, or the body would not decode. `Transport`
//! keeps the underlying `reqwest::Error` so callers (and `Error::source`)
//! can reach the root cause; `Http` keeps the raw status and body for
//! debugging. A missing post is deliberately not a separate variant — it
//! surfaces as `Http { status: 404, .. }` like any other non-success answer.

use std::fmt;

/// Failure of a single posts API call. Logged once at the point of
/// occurrence, then returned unchanged to the caller.
#[derive(Debug)]
pub enum RequestFailure {
    /// The request never produced an HTTP response (connection refused,
    /// timeout, DNS, client construction).
    Transport(reqwest::Error),

    /// The server answered with a non-2xx status.
    Http { status: u16, body: String },

    /// The response body could not be decoded into the expected shape.
    Decode(String),
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestFailure::Transport(err) => write!(f, "transport error: {err}"),
            RequestFailure::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            RequestFailure::Decode(msg) => write!(f, "decode failed: {msg}"),
        }
    }
}

impl std::error::Error for RequestFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestFailure::Transport(err) => Some(err),
            _ => None,
        }
    }
}

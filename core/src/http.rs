//! HTTP transport types for the request build / response parse split.
//!
//! # Design
//! These types describe HTTP exchanges as plain data. The deterministic
//! layer builds `HttpRequest` values and interprets `HttpResponse` values
//! without touching the network; `PostsApi` (or a test harness) executes the
//! round-trip in between. The posts surface is read-only, so every request
//! is a GET and no method field exists.

/// An outbound GET request described as plain data.
///
/// Built by `PostsClient::build_*` methods. Whoever executes it is
/// responsible for producing the corresponding `HttpResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the executor after the round-trip, then handed to
/// `PostsClient::parse_*` for status interpretation and decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// True when the status is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

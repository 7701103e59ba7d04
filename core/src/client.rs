//! Stateless request builder and response parser for the posts API.
//!
//! # Design
//! `PostsClient` holds only a `base_url` and carries no mutable state
//! between calls. Each read operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; the executor performs the round-trip in between, keeping
//! this layer deterministic and free of I/O dependencies.

use std::fmt::Display;

use crate::error::RequestFailure;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Post;

/// Stateless builder/parser for the read-only posts API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. `PostsApi` wraps this with an executing transport.
#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/posts", self.base_url),
            headers: Vec::new(),
        }
    }

    /// The identifier (integer or string) is appended verbatim as a path
    /// segment. Nothing is validated here; a malformed identifier is the
    /// server's to reject.
    pub fn build_get_post(&self, id: impl Display) -> HttpRequest {
        HttpRequest {
            url: format!("{}/posts/{id}", self.base_url),
            headers: Vec::new(),
        }
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, RequestFailure> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| RequestFailure::Decode(e.to_string()))
    }

    pub fn parse_get_post(&self, response: HttpResponse) -> Result<Post, RequestFailure> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| RequestFailure::Decode(e.to_string()))
    }
}

/// Any 2xx answer is a success; everything else becomes `Http`.
fn check_status(response: &HttpResponse) -> Result<(), RequestFailure> {
    if response.is_success() {
        return Ok(());
    }
    Err(RequestFailure::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

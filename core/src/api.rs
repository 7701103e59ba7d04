//! Executing posts client: build, send, parse, and report failures.
//!
//! # Design
//! `PostsApi` pairs the deterministic `PostsClient` with a shared
//! `reqwest::Client` configured once from `ApiConfig`. Each operation makes
//! exactly one outbound call. Every failure — transport, non-2xx, decode —
//! is written once to the `log` facade at the point of occurrence and then
//! returned unchanged; there is no retry, no fallback, and no caching.
//! Calls are independent, so a shared `PostsApi` may be used from any number
//! of tasks concurrently.

use crate::client::PostsClient;
use crate::config::ApiConfig;
use crate::error::RequestFailure;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Post;

/// Async client for the read-only posts API.
#[derive(Debug, Clone)]
pub struct PostsApi {
    client: PostsClient,
    http: reqwest::Client,
}

impl PostsApi {
    pub fn new(config: &ApiConfig) -> Result<Self, RequestFailure> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(RequestFailure::Transport)?;
        Ok(Self {
            client: PostsClient::new(&config.base_url),
            http,
        })
    }

    /// `GET {base}/posts`, decoded as an array of posts.
    pub async fn list_posts(&self) -> Result<Vec<Post>, RequestFailure> {
        let req = self.client.build_list_posts();
        let result = match self.execute(req).await {
            Ok(resp) => self.client.parse_list_posts(resp),
            Err(e) => Err(e),
        };
        log_on_err("list_posts", result)
    }

    /// `GET {base}/posts/{id}`, decoded as a single post. The identifier is
    /// sent as-is; the server decides what is malformed.
    pub async fn get_post(&self, id: impl std::fmt::Display) -> Result<Post, RequestFailure> {
        let req = self.client.build_get_post(id);
        let result = match self.execute(req).await {
            Ok(resp) => self.client.parse_get_post(resp),
            Err(e) => Err(e),
        };
        log_on_err("get_post", result)
    }

    /// One network round-trip. Suspends the calling task until the response
    /// resolves or the transport gives up; there is no cancellation surface.
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, RequestFailure> {
        let mut builder = self.http.get(&req.url);
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }
        let response = builder.send().await.map_err(RequestFailure::Transport)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await.map_err(RequestFailure::Transport)?;
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Emit exactly one diagnostic line per failed call, then pass the result
/// through untouched.
fn log_on_err<T>(op: &str, result: Result<T, RequestFailure>) -> Result<T, RequestFailure> {
    if let Err(err) = &result {
        log::error!("{op} failed: {err}");
    }
    result
}

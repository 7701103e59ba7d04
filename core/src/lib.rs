//! Client core for a read-only posts application.
//!
//! # Overview
//! Two independent pieces:
//! - a **posts API client**: `PostsClient` builds GET requests and parses
//!   responses deterministically; `PostsApi` executes them over a shared
//!   `reqwest` transport configured once via `ApiConfig`, logging each
//!   failure once and returning it unchanged as `RequestFailure`.
//! - a **route table and router**: static path → page-component records
//!   with per-route metadata, lazy component loading cached for the process
//!   lifetime, and a history-based `Router` that resolves locations and
//!   extracts path parameters.
//!
//! The two never talk to each other; page components (supplied by the host)
//! are expected to call the API client themselves.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod router;
pub mod routes;
pub mod types;

pub use api::PostsApi;
pub use client::PostsClient;
pub use config::ApiConfig;
pub use error::RequestFailure;
pub use http::{HttpRequest, HttpResponse};
pub use router::Router;
pub use routes::{
    app_routes, Component, ComponentLoader, Page, PathPattern, Route, RouteError, RouteMatch,
    RouteMeta, RouteParams, RouteTable,
};
pub use types::Post;

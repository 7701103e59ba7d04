//! Domain DTOs for the posts API.
//!
//! # Design
//! `Post` mirrors the upstream collection's schema but is defined
//! independently from the mock-server crate; integration tests catch schema
//! drift. The author reference travels as `userId` on the wire, so the field
//! carries a serde rename. Ids are server-assigned and non-negative, which
//! `u64` enforces by construction.

use serde::{Deserialize, Serialize};

/// A single post returned by the API. Read-only passthrough data: this
/// system never mutates or persists it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

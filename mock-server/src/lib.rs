use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

pub type Db = Arc<RwLock<HashMap<u64, Post>>>;

/// The read-only posts surface with no data. Only GETs are routed; any
/// write verb gets a 405 from axum.
pub fn app() -> Router {
    app_with(Vec::new())
}

/// Same surface, seeded with fixture posts.
pub fn app_with(posts: Vec<Post>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        posts.into_iter().map(|p| (p.id, p)).collect(),
    ));
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, posts: Vec<Post>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(posts)).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let posts = db.read().await;
    let mut all: Vec<Post> = posts.values().cloned().collect();
    // HashMap order is arbitrary; keep listings deterministic.
    all.sort_by_key(|p| p.id);
    Json(all)
}

async fn get_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Post>, StatusCode> {
    let posts = db.read().await;
    posts.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

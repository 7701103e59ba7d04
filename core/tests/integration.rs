//! Read path exercised against the live mock server.
//!
//! # Design
//! Binds the fixture server on a random port, then drives every `PostsApi`
//! operation over real HTTP: listing, fetching by id, the 404 and
//! bad-identifier paths, and a transport failure against a dead port.

use std::time::Duration;

use posts_core::{ApiConfig, PostsApi, RequestFailure};

fn fixtures() -> Vec<mock_server::Post> {
    vec![
        mock_server::Post {
            id: 1,
            title: "First".to_string(),
            body: "Hello".to_string(),
            user_id: 7,
        },
        mock_server::Post {
            id: 2,
            title: "Second".to_string(),
            body: "World".to_string(),
            user_id: 8,
        },
    ]
}

async fn spawn_server(posts: Vec<mock_server::Post>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run_with(listener, posts));
    format!("http://{addr}")
}

#[tokio::test]
async fn read_flow_against_live_server() {
    let base_url = spawn_server(fixtures()).await;
    let api = PostsApi::new(&ApiConfig::new(base_url)).unwrap();

    // List: one element per fixture, fields mapped 1:1.
    let posts = api.list_posts().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[0].title, "First");
    assert_eq!(posts[0].body, "Hello");
    assert_eq!(posts[0].user_id, 7);

    // Get by integer id returns the matching post.
    let post = api.get_post(2u64).await.unwrap();
    assert_eq!(post.id, 2);
    assert_eq!(post.title, "Second");

    // A string identifier is accepted and sent verbatim.
    let post = api.get_post("1").await.unwrap();
    assert_eq!(post.id, 1);
}

#[tokio::test]
async fn missing_post_surfaces_as_http_404() {
    let base_url = spawn_server(fixtures()).await;
    let api = PostsApi::new(&ApiConfig::new(base_url)).unwrap();

    let err = api.get_post(999u64).await.unwrap_err();
    assert!(matches!(err, RequestFailure::Http { status: 404, .. }));
}

#[tokio::test]
async fn malformed_identifier_is_rejected_by_the_server() {
    let base_url = spawn_server(fixtures()).await;
    let api = PostsApi::new(&ApiConfig::new(base_url)).unwrap();

    // No client-side validation: the server answers 400 and that is the
    // whole story.
    let err = api.get_post("not-a-number").await.unwrap_err();
    assert!(matches!(err, RequestFailure::Http { status: 400, .. }));
}

#[tokio::test]
async fn dead_upstream_surfaces_as_transport_failure() {
    // Bind then drop to obtain a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config =
        ApiConfig::new(format!("http://{addr}")).with_timeout(Duration::from_secs(2));
    let api = PostsApi::new(&config).unwrap();

    let err = api.list_posts().await.unwrap_err();
    match &err {
        RequestFailure::Transport(inner) => assert!(inner.is_connect() || inner.is_timeout()),
        other => panic!("expected Transport, got {other:?}"),
    }

    let err = api.get_post(1u64).await.unwrap_err();
    assert!(matches!(err, RequestFailure::Transport(_)));
}

#[tokio::test]
async fn concurrent_calls_share_one_api_value() {
    let base_url = spawn_server(fixtures()).await;
    let api = PostsApi::new(&ApiConfig::new(base_url)).unwrap();

    let (list, one, two) =
        tokio::join!(api.list_posts(), api.get_post(1u64), api.get_post(2u64));
    assert_eq!(list.unwrap().len(), 2);
    assert_eq!(one.unwrap().id, 1);
    assert_eq!(two.unwrap().id, 2);
}

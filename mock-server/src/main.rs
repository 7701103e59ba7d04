use mock_server::Post;
use tokio::net::TcpListener;

fn seed() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "First post".to_string(),
            body: "Hello from the fixture server.".to_string(),
            user_id: 1,
        },
        Post {
            id: 2,
            title: "Second post".to_string(),
            body: "More fixture content.".to_string(),
            user_id: 1,
        },
        Post {
            id: 3,
            title: "Third post".to_string(),
            body: "From another author.".to_string(),
            user_id: 2,
        },
    ]
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");
    mock_server::run_with(listener, seed()).await
}

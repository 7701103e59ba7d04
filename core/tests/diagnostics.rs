//! Diagnostic sink contract: exactly one log line per failed call.
//!
//! Installs a counting logger and drives failing and succeeding calls
//! through `PostsApi`. A single test function keeps the global counter
//! free of interference from parallel tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use log::{Level, LevelFilter, Metadata, Record};
use posts_core::{ApiConfig, PostsApi, RequestFailure};

static ERROR_LINES: AtomicUsize = AtomicUsize::new(0);

struct CountingLogger;

impl log::Log for CountingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Error
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Error {
            ERROR_LINES.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static LOGGER: CountingLogger = CountingLogger;

#[tokio::test]
async fn each_failure_logs_exactly_once() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Error);

    // Transport failures: a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead_addr = listener.local_addr().unwrap();
    drop(listener);

    let config =
        ApiConfig::new(format!("http://{dead_addr}")).with_timeout(Duration::from_secs(2));
    let api = PostsApi::new(&config).unwrap();

    let err = api.list_posts().await.unwrap_err();
    assert!(matches!(err, RequestFailure::Transport(_)));
    assert_eq!(ERROR_LINES.load(Ordering::SeqCst), 1);

    let err = api.get_post(1u64).await.unwrap_err();
    assert!(matches!(err, RequestFailure::Transport(_)));
    assert_eq!(ERROR_LINES.load(Ordering::SeqCst), 2);

    // Non-2xx failure against a live but empty server.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let live_addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));

    let api = PostsApi::new(&ApiConfig::new(format!("http://{live_addr}"))).unwrap();
    let err = api.get_post(1u64).await.unwrap_err();
    assert!(matches!(err, RequestFailure::Http { status: 404, .. }));
    assert_eq!(ERROR_LINES.load(Ordering::SeqCst), 3);

    // Success emits nothing.
    let posts = api.list_posts().await.unwrap();
    assert!(posts.is_empty());
    assert_eq!(ERROR_LINES.load(Ordering::SeqCst), 3);
}

//! Test server helpers
//!
//! Builds the full application over a temporary data directory and wraps
//! it in an `axum_test::TestServer`.

use axum_test::TestServer;
use rubricy::backend::server::create_app;
use rubricy::shared::AppConfig;
use std::path::PathBuf;
use tempfile::TempDir;

/// Index page written into the temporary static directory
pub const INDEX_HTML: &str = "<!doctype html><title>Rubricy</title>";

/// A running test server and the directory backing it
pub struct TestApp {
    pub server: TestServer,
    root: TempDir,
}

impl TestApp {
    /// Start a server with empty data and static directories
    pub async fn new() -> Self {
        let root = TempDir::new().expect("temp dir");
        Self::start(root).await
    }

    /// Start a server over an existing root, e.g. to simulate a restart
    pub async fn start(root: TempDir) -> Self {
        let static_dir = root.path().join("static");
        std::fs::create_dir_all(&static_dir).expect("static dir");
        std::fs::write(static_dir.join("index.html"), INDEX_HTML).expect("index.html");

        let config = AppConfig::builder()
            .data_dir(root.path().join("data"))
            .static_dir(static_dir)
            .build()
            .expect("test config");
        let app = create_app(config).await.expect("app starts");
        let server = TestServer::new(app).expect("test server");
        Self { server, root }
    }

    /// Stop the server, keeping its files
    pub fn shutdown(self) -> TempDir {
        self.root
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }
}

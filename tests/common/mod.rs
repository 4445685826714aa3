//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;
use tokio::net::TcpListener;
use vuln_fixture::{FixtureConfig, HttpServer, Shutdown};

/// A running fixture with its own scratch storage.
pub struct TestFixture {
    pub addr: SocketAddr,
    pub dir: TempDir,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestFixture {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Directory served by `/read`.
    #[allow(dead_code)]
    pub fn files_dir(&self) -> PathBuf {
        self.dir.path().join("files")
    }

    /// GET `path` with query pairs, returning status and body.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> (u16, String) {
        let res = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .expect("fixture unreachable");
        let status = res.status().as_u16();
        (status, res.text().await.unwrap())
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Seed scratch storage and serve the fixture on an ephemeral port.
pub async fn start_fixture(debug: bool) -> TestFixture {
    let dir = tempfile::tempdir().unwrap();

    let mut config = FixtureConfig::default();
    config.debug = debug;
    config.storage.database_path = dir.path().join("database.db").display().to_string();
    config.storage.files_dir = dir.path().join("files").display().to_string();
    vuln_fixture::store::seed(&config.storage).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap();

    TestFixture {
        addr,
        dir,
        client,
        shutdown,
    }
}

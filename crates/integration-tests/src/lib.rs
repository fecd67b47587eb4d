//! End-to-end tests for the Trufa API.
//!
//! Each test boots the real router on an ephemeral local port and talks to
//! it over HTTP with `reqwest`.
//!
//! ```bash
//! cargo test -p trufa-integration-tests
//! ```

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use reqwest::Client;
use tokio::net::TcpListener;
use trufa_api::{ApiConfig, AppState, build_router};

/// Origin the default configuration allows.
pub const FRONT_END_ORIGIN: &str = "http://localhost:4200";

/// A running API server bound to `127.0.0.1` on a random port.
pub struct TestServer {
    addr: SocketAddr,
    client: Client,
}

impl TestServer {
    /// Start a server with the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start() -> Self {
        Self::start_with(ApiConfig::default()).await
    }

    /// Start a server serving static files from `static_dir`.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start_with_static_dir(static_dir: PathBuf) -> Self {
        Self::start_with(ApiConfig {
            static_dir,
            ..ApiConfig::default()
        })
        .await
    }

    /// Start a server with an explicit configuration.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start_with(config: ApiConfig) -> Self {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        let app = build_router(AppState::new(config));

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        Self {
            addr,
            client: Client::new(),
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Shared HTTP client.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }
}

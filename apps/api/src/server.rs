//! HTTP listener with an explicit start/stop lifecycle.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

/// A bound, not yet serving, listener plus the app it will serve.
pub struct Server {
    listener: TcpListener,
    app: Router,
}

impl Server {
    pub async fn bind(addr: SocketAddr, app: Router) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        Ok(Self { listener, app })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Spawns the accept loop. Each connection runs on its own task, so a
    /// failing request never reaches the listener.
    pub fn start(self) -> Result<ServerHandle> {
        let addr = self.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            axum::serve(self.listener, self.app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        info!("Listening on {addr}");
        Ok(ServerHandle {
            addr,
            shutdown: shutdown_tx,
            task,
        })
    }
}

/// Owner of a running server. Dropping it without `stop` leaves the task running.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stops accepting, lets in-flight requests finish, then returns.
    pub async fn stop(self) -> Result<()> {
        let _ = self.shutdown.send(());
        self.task.await.context("Server task panicked")??;
        info!("Server on {} stopped", self.addr);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobPosting, SearchQuery};
    use crate::provider::{JobProvider, ProviderError};
    use crate::routes::build_router;
    use crate::state::AppState;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Arc;

    struct OneJob;

    #[async_trait]
    impl JobProvider for OneJob {
        async fn query(&self, query: &SearchQuery) -> Result<Vec<JobPosting>, ProviderError> {
            Ok(vec![JobPosting {
                position: format!("{} Engineer", query.keyword),
                company: "Ferrous Systems".into(),
                location: Some("Berlin".into()),
                ..Default::default()
            }])
        }
    }

    async fn start_server() -> ServerHandle {
        let dir = std::env::temp_dir();
        let app = build_router(AppState::new(Arc::new(OneJob), dir));
        Server::bind("127.0.0.1:0".parse().unwrap(), app)
            .await
            .unwrap()
            .start()
            .unwrap()
    }

    #[tokio::test]
    async fn test_serves_search_over_tcp() {
        let server = start_server().await;
        let url = format!("http://{}/api/search", server.local_addr());

        let client = reqwest::Client::new();
        let response = client
            .post(&url)
            .json(&json!({ "keyword": " Rust " }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["count"], 1);
        assert_eq!(body["jobs"][0]["position"], "Rust Engineer");
        assert_eq!(body["query"]["keyword"], "Rust");

        drop(client);
        server.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_stop_releases_port() {
        let server = start_server().await;
        let addr = server.local_addr();
        server.stop().await.unwrap();

        let result = reqwest::Client::new()
            .get(format!("http://{addr}/unknown-path"))
            .send()
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_bind_reports_address_in_use() {
        let server = start_server().await;
        let app = build_router(AppState::new(Arc::new(OneJob), std::env::temp_dir()));

        let err = Server::bind(server.local_addr(), app).await.err().unwrap();
        assert!(err.to_string().contains("Failed to bind"));

        server.stop().await.unwrap();
    }
}

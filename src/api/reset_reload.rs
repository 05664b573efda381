//
//  geoserver-rest
//  api/reset_reload.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Cache reset and catalog reload.

use std::sync::Arc;

use reqwest::Method;

use super::client::{Connection, Expectation};
use super::common::ApiError;

/// Client for the `reset` and `reload` endpoints.
#[derive(Debug, Clone)]
pub struct ResetReloadClient {
    connection: Arc<Connection>,
}

impl ResetReloadClient {
    /// Creates a new reset/reload client over a shared connection.
    pub fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Drops every store, raster and schema cache.
    ///
    /// Store connections are re-established on next use.
    pub async fn reset(&self) -> Result<(), ApiError> {
        self.connection
            .send_empty(Method::POST, "reset", &[], &Expectation::success())
            .await
    }

    /// Reloads catalog and configuration from the data directory.
    ///
    /// Implies a [`reset`](Self::reset).
    pub async fn reload(&self) -> Result<(), ApiError> {
        self.connection
            .send_empty(Method::POST, "reload", &[], &Expectation::success())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn client(url: &str) -> ResetReloadClient {
        ResetReloadClient::new(Arc::new(Connection::new(url, "admin", "geoserver")))
    }

    #[tokio::test]
    async fn test_reset_and_reload() {
        let mut server = Server::new_async().await;
        let client = client(&server.url());
        let reset = server.mock("POST", "/reset").with_status(200).create_async().await;
        let reload = server.mock("POST", "/reload").with_status(200).create_async().await;

        client.reset().await.unwrap();
        client.reload().await.unwrap();
        reset.assert_async().await;
        reload.assert_async().await;
    }

    #[tokio::test]
    async fn test_reload_failure_keeps_output() {
        let mut server = Server::new_async().await;
        let client = client(&server.url());
        server
            .mock("POST", "/reload")
            .with_status(500)
            .with_body("catalog locked")
            .create_async()
            .await;

        let err = client.reload().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "GeoServer Response Error (HTTP 500 Internal Server Error)"
        );
        assert_eq!(err.geoserver_output(), Some("catalog locked"));
    }
}

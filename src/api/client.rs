//
//  geoserver-rest
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Connection Context and Response Interpreter
//!
//! This module provides the HTTP plumbing every sub-client shares.
//!
//! ## Features
//!
//! - Base URL normalized once to exactly one trailing slash
//! - `Authorization: Basic` header computed once at construction
//! - Per-operation [`Expectation`] describing the accepted status and the
//!   documented meaning of specific failure statuses
//! - Best-effort capture of the GeoServer diagnostic body on failure
//! - `gsrc/<version>` User-Agent on every request

use std::borrow::Cow;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT};
use reqwest::{Body, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::io::ReaderStream;

use crate::api::common::{ApiError, DEFAULT_ERROR_MESSAGE};

/// `User-Agent` sent with every request.
pub const USER_AGENT_VALUE: &str = concat!("gsrc/", env!("CARGO_PKG_VERSION"));

/// Media type for SLD 1.0 style documents.
pub const SLD_MEDIA_TYPE: &str = "application/vnd.ogc.sld+xml";

/// Describes which response an operation accepts and how to explain failures.
///
/// # Example
///
/// ```rust
/// use geoserver_rest::api::client::Expectation;
/// use reqwest::StatusCode;
///
/// let expect = Expectation::status(StatusCode::CREATED)
///     .hint(StatusCode::CONFLICT, "Unable to add workspace as it already exists");
/// assert_eq!(expect.message_for(StatusCode::CONFLICT), Some("Unable to add workspace as it already exists"));
/// assert_eq!(expect.message_for(StatusCode::NOT_FOUND), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Expectation {
    /// The exact success status required, or any 2xx when `None`
    status: Option<StatusCode>,
    /// Status-specific failure explanations
    hints: Vec<(StatusCode, Cow<'static, str>)>,
    /// Log failures at `debug` rather than `warn`
    quiet: bool,
}

impl Expectation {
    /// Accepts any 2xx status.
    pub fn success() -> Self {
        Self::default()
    }

    /// Accepts exactly `status`.
    pub fn status(status: StatusCode) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Attaches a human readable explanation for a failure status.
    #[must_use]
    pub fn hint(mut self, status: StatusCode, message: impl Into<Cow<'static, str>>) -> Self {
        self.hints.push((status, message.into()));
        self
    }

    /// Logs failures at `debug` instead of `warn`.
    ///
    /// Used for reads whose failure may still turn out to mean absence; the
    /// caller reports the failure once it knows it is a real error.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// True when failures are logged at `debug`.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Returns the explanation registered for `status`, if any.
    pub fn message_for(&self, status: StatusCode) -> Option<&str> {
        self.hints
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, message)| message.as_ref())
    }

    /// Converts a failure status and its body into the matching error.
    pub fn failure(&self, status: StatusCode, geoserver_output: String) -> ApiError {
        match self.message_for(status) {
            Some(message) => ApiError::Rejected {
                status,
                message: message.to_string(),
                geoserver_output,
            },
            None => ApiError::Response {
                status,
                message: DEFAULT_ERROR_MESSAGE.to_string(),
                geoserver_output,
            },
        }
    }
}

/// Immutable connection context shared by every sub-client.
///
/// Holds the normalized endpoint, the precomputed credentials and the
/// underlying HTTP client. Construction performs no network activity and does
/// not validate the URL; it cannot fail.
///
/// # Example
///
/// ```rust
/// use geoserver_rest::api::client::Connection;
///
/// let connection = Connection::new("http://localhost:8080/geoserver/rest", "admin", "geoserver");
/// assert_eq!(connection.base_url(), "http://localhost:8080/geoserver/rest/");
/// assert_eq!(connection.auth_header(), "Basic YWRtaW46Z2Vvc2VydmVy");
/// ```
#[derive(Debug, Clone)]
pub struct Connection {
    /// The underlying HTTP client
    http: Client,
    /// The REST endpoint, always ending in exactly one "/"
    base_url: String,
    /// Precomputed `Authorization` header value
    auth_header: String,
}

impl Connection {
    /// Creates a connection context for the given endpoint and credentials.
    ///
    /// # Parameters
    ///
    /// * `url` - The GeoServer REST endpoint, e.g. `http://localhost:8080/geoserver/rest`
    /// * `username` - The GeoServer user
    /// * `password` - The GeoServer password
    pub fn new(url: &str, username: &str, password: &str) -> Self {
        // `Client::new` only panics when the TLS backend cannot initialise;
        // rustls with bundled roots has no such failure mode.
        Self::with_client(Client::new(), url, username, password)
    }

    /// Creates a connection context around an existing `reqwest` client.
    ///
    /// Use this to supply transport-level settings such as timeouts or
    /// proxies; the library itself configures none. Requests still carry the
    /// `gsrc` User-Agent.
    pub fn with_client(http: Client, url: &str, username: &str, password: &str) -> Self {
        let credentials = STANDARD.encode(format!("{username}:{password}"));
        Self {
            http,
            base_url: normalize_base_url(url),
            auth_header: format!("Basic {credentials}"),
        }
    }

    /// The normalized REST endpoint, ending in "/".
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The `Authorization` header value sent with every request.
    pub fn auth_header(&self) -> &str {
        &self.auth_header
    }

    /// Resolves an API path against the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Starts an authenticated request to `path`.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);
        self.http
            .request(method, url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(AUTHORIZATION, &self.auth_header)
    }

    /// Sends a request and interprets the response against `expect`.
    ///
    /// On failure the body is read as text for diagnostics; a body that
    /// cannot be read degrades to an empty string.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] when the request cannot be delivered
    /// - [`ApiError::Rejected`] for a failure status with a registered hint
    /// - [`ApiError::Response`] for any other failure status
    /// - [`ApiError::UnexpectedStatus`] for a 2xx other than the required one
    pub async fn execute(
        &self,
        request: RequestBuilder,
        expect: &Expectation,
    ) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = expect.failure(status, text);
            let output = err.geoserver_output().unwrap_or_default();
            if expect.quiet {
                tracing::debug!("GeoServer request failed: {} {}", err, output);
            } else {
                tracing::warn!("GeoServer request failed: {} {}", err, output);
            }
            return Err(err);
        }

        if let Some(required) = expect.status {
            if status != required {
                let text = response.text().await.unwrap_or_default();
                return Err(ApiError::UnexpectedStatus {
                    status,
                    geoserver_output: text,
                });
            }
        }

        Ok(response)
    }

    /// Makes a GET request and decodes the JSON response.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use geoserver_rest::api::client::Connection;
    ///
    /// # async fn example() -> Result<(), geoserver_rest::ApiError> {
    /// let connection = Connection::new("http://localhost:8080/geoserver/rest", "admin", "geoserver");
    /// let settings: serde_json::Value = connection.get_json("settings.json").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_json_with_query(path, &[]).await
    }

    /// Makes a GET request with query parameters and decodes the JSON response.
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut request = self.request(Method::GET, path);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.execute(request, &Expectation::success()).await?;
        read_json(response).await
    }

    /// Sends a JSON body and returns the response text.
    ///
    /// GeoServer answers most creations with the plain-text name of the new
    /// resource, which is what this returns.
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        expect: &Expectation,
    ) -> Result<String, ApiError> {
        let request = self.request(method, path).json(body);
        let response = self.execute(request, expect).await?;
        read_text(response).await
    }

    /// Sends a text body with an explicit content type and returns the
    /// response text.
    pub async fn send_text(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        content_type: &str,
        body: impl Into<String>,
        expect: &Expectation,
    ) -> Result<String, ApiError> {
        let mut request = self
            .request(method, path)
            .header(CONTENT_TYPE, content_type)
            .body(body.into());
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.execute(request, expect).await?;
        read_text(response).await
    }

    /// Streams a local file as the request body and returns the response text.
    ///
    /// The file is read lazily while the request is sent; only its size is
    /// inspected up front for the `Content-Length` header.
    pub async fn send_file(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        content_type: &str,
        file: &Path,
        expect: &Expectation,
    ) -> Result<String, ApiError> {
        let (body, content_length) = file_body(file).await?;
        let mut request = self
            .request(method, path)
            .header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, content_length)
            .body(body);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.execute(request, expect).await?;
        read_text(response).await
    }

    /// Sends a request without a body; used for DELETE and bare POST calls.
    pub async fn send_empty(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        expect: &Expectation,
    ) -> Result<(), ApiError> {
        let mut request = self.request(method, path);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute(request, expect).await?;
        Ok(())
    }
}

/// Decodes a JSON response body.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// Reads a response body as text.
pub async fn read_text(response: Response) -> Result<String, ApiError> {
    Ok(response.text().await?)
}

/// Opens a local file as a streaming request body.
///
/// # Returns
///
/// The body together with the file size, so callers can send an explicit
/// `Content-Length`.
///
/// # Errors
///
/// [`ApiError::Io`] when the file cannot be opened or inspected.
pub async fn file_body(path: &Path) -> Result<(Body, u64), ApiError> {
    let file = tokio::fs::File::open(path).await?;
    let length = file.metadata().await?.len();
    let body = Body::wrap_stream(ReaderStream::new(file));
    Ok((body, length))
}

fn normalize_base_url(url: &str) -> String {
    let mut normalized = url.trim_end_matches('/').to_string();
    normalized.push('/');
    normalized
}

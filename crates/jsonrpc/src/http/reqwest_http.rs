//! This module implements the [`crate::client::Transport`] trait using [`reqwest`]
//! as the underlying HTTP transport.
//!
//! [reqwest]: <https://github.com/seanmonstar/reqwest>

use std::time::Duration;
use std::{error, fmt};

use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::client::Transport;
use crate::{Request, Response};

use super::{DEFAULT_PORT, DEFAULT_TIMEOUT_SECONDS, DEFAULT_URL};

/// An HTTP transport that uses [`reqwest`] and is useful for running a node
/// RPC client.
///
/// The URL is kept as given and only parsed when a request is issued, so a
/// malformed endpoint surfaces as a transport error on the first call rather
/// than at construction.
#[derive(Clone, Debug)]
pub struct ReqwestHttpTransport {
    /// Reused HTTP client; connection pooling lives in here.
    client: reqwest::Client,
    /// URL of the RPC server.
    url: String,
    /// timeout only supports second granularity.
    timeout: Duration,
    /// The value of the `Authorization` HTTP header, i.e., a base64 encoding
    /// of 'user:password'.
    auth: Option<String>,
}

impl Default for ReqwestHttpTransport {
    fn default() -> Self {
        ReqwestHttpTransport {
            client: reqwest::Client::new(),
            url: format!("{}:{}", DEFAULT_URL, DEFAULT_PORT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            auth: None,
        }
    }
}

impl ReqwestHttpTransport {
    /// Constructs a new [`ReqwestHttpTransport`] with default parameters.
    pub fn new() -> Self {
        ReqwestHttpTransport::default()
    }

    async fn request<R>(&self, body: impl serde::Serialize) -> Result<R, Error>
    where
        R: serde::de::DeserializeOwned,
    {
        let mut request = self
            .client
            .post(self.url.as_str())
            .timeout(self.timeout)
            .body(serde_json::to_string(&body)?);
        if let Some(auth) = &self.auth {
            request = request.header(
                AUTHORIZATION,
                HeaderValue::from_str(auth).expect("Auth header should be valid"),
            );
        }

        let response = request.send().await?;
        Ok(serde_json::from_str(&response.text().await?)?)
    }
}

#[async_trait]
impl Transport for ReqwestHttpTransport {
    async fn send_request(&self, req: Request<'_>) -> Result<Response, crate::Error> {
        Ok(self.request(req).await?)
    }

    fn fmt_target(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Builder for a simple node [`ReqwestHttpTransport`].
#[derive(Clone, Debug)]
pub struct Builder {
    tp: ReqwestHttpTransport,
}

impl Builder {
    /// Constructs a new [`Builder`] with default configuration.
    pub fn new() -> Builder {
        Builder {
            tp: ReqwestHttpTransport::new(),
        }
    }

    /// Sets the timeout after which requests will abort if they aren't finished.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.tp.timeout = timeout;
        self
    }

    /// Sets the URL of the server to the transport.
    ///
    /// The URL is not validated here; a bad one fails the first request.
    pub fn url(mut self, url: &str) -> Self {
        self.tp.url = url.to_owned();
        self
    }

    /// Adds authentication information to the transport.
    ///
    /// Empty credentials are encoded and sent like any other, not omitted.
    pub fn auth(mut self, user: &str, pass: &str) -> Self {
        let s = format!("{}:{}", user, pass);
        self.tp.auth = Some(format!("Basic {}", &base64::encode(s.as_bytes())));
        self
    }

    /// Builds the final [`ReqwestHttpTransport`].
    pub fn build(self) -> ReqwestHttpTransport {
        self.tp
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

#[derive(Debug)]
pub enum Error {
    /// JSON parsing error.
    Json(serde_json::Error),
    /// Reqwest error.
    Reqwest(reqwest::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {
            Error::Json(ref e) => write!(f, "parsing JSON failed: {}", e),
            Error::Reqwest(ref e) => write!(f, "reqwest: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Json(ref e) => Some(e),
            Error::Reqwest(ref e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Reqwest(e)
    }
}

impl From<Error> for crate::Error {
    fn from(e: Error) -> crate::Error {
        match e {
            Error::Json(e) => crate::Error::Json(e),
            e => crate::Error::Transport(Box::new(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Client;

    #[test]
    fn construct() {
        let tp = Builder::new()
            .timeout(Duration::from_millis(100))
            .url("http://localhost:22")
            .auth("user", "")
            .build();
        let _ = Client::with_transport(tp);
    }

    #[test]
    fn construct_never_fails_on_a_malformed_url() {
        let tp = Builder::new().url("not a url at all").build();
        let _ = Client::with_transport(tp);
    }

    #[tokio::test]
    async fn malformed_url_fails_on_first_dispatch() {
        let tp = Builder::new()
            .timeout(Duration::from_millis(100))
            .url("not a url at all")
            .auth("", "")
            .build();
        let client = Client::with_transport(tp);
        let req = client.build_request("getblockcount", &[]);

        match client.send_request(req).await {
            Err(crate::Error::Transport(_)) => {}
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        // Port 9 is the discard service; nothing is listening there in CI.
        let tp = Builder::new()
            .timeout(Duration::from_millis(500))
            .url("http://127.0.0.1:9")
            .auth("user", "pass")
            .build();
        let client = Client::with_transport(tp);
        let req = client.build_request("uptime", &[]);

        match client.send_request(req).await {
            Err(crate::Error::Transport(_)) => {}
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}

//! The transport abstraction and the client that drives it.

use std::fmt;

use async_trait::async_trait;
use serde_json::value::RawValue;
use uuid::Uuid;

use crate::{Error, Request, Response, JSONRPC_VERSION};

/// Sends one serialized request envelope and reads back one response
/// envelope.
///
/// Implementations must be shareable across concurrently running calls; the
/// client keeps no per-call state of its own.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Performs one request/response round trip.
    async fn send_request(&self, req: Request<'_>) -> Result<Response, Error>;

    /// Formats the target of this transport for `Debug` output.
    fn fmt_target(&self, f: &mut fmt::Formatter) -> fmt::Result;
}

/// A JSON-RPC client over a pluggable [`Transport`].
pub struct Client {
    transport: Box<dyn Transport>,
}

impl Client {
    /// Creates a client with the given transport.
    pub fn with_transport<T: Transport>(transport: T) -> Client {
        Client {
            transport: Box::new(transport),
        }
    }

    /// Builds a request envelope for `method` with the given positional
    /// `params`, stamped with a freshly generated correlation id.
    pub fn build_request<'a>(
        &self,
        method: &'a str,
        params: &'a [Box<RawValue>],
    ) -> Request<'a> {
        Request {
            method,
            params,
            id: serde_json::Value::from(Uuid::new_v4().to_string()),
            jsonrpc: JSONRPC_VERSION,
        }
    }

    /// Sends a request over the transport and waits for its response.
    pub async fn send_request(&self, request: Request<'_>) -> Result<Response, Error> {
        self.transport.send_request(request).await
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "jsonrpc::Client(")?;
        self.transport.fmt_target(f)?;
        write!(f, ")")
    }
}

//! Async JSON-RPC 1.0 client, generic over the transport used to reach the
//! server.
//!
//! The crate root holds the request and response envelopes; [`client`] holds
//! the [`Transport`] trait and the [`Client`] that drives it; [`http`] holds
//! the production HTTP transport (behind the `reqwest_http` feature).
//!
//! One call is one request/response round trip. There is no batching, no
//! retrying and no multiplexing: the correlation id exists so that a response
//! on the wire can be told apart from unrelated traffic, nothing more.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

pub mod client;
pub mod error;
pub mod http;

pub use crate::client::{Client, Transport};
pub use crate::error::{Error, RpcError};

/// Protocol version tag sent with every request. The nodes this client
/// targets speak the original 1.0 dialect, not 2.0.
pub const JSONRPC_VERSION: &str = "1.0";

/// A JSON-RPC request envelope.
///
/// `params` is a pre-serialized positional list; it is emitted in the given
/// order and always present on the wire, even when empty.
#[derive(Debug, Clone, Serialize)]
pub struct Request<'a> {
    /// The name of the RPC method to call.
    pub method: &'a str,
    /// Positional parameters, serialized in call order.
    pub params: &'a [Box<RawValue>],
    /// Correlation token, echoed back by the server.
    pub id: serde_json::Value,
    /// Protocol version tag, always [`JSONRPC_VERSION`].
    pub jsonrpc: &'a str,
}

/// A JSON-RPC response envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Response {
    /// The raw, still-encoded result payload, if any.
    pub result: Option<Box<RawValue>>,
    /// The error object reported by the server, if any.
    pub error: Option<RpcError>,
    /// The correlation token of the originating request.
    pub id: serde_json::Value,
    /// Protocol version tag, echoed by servers that send one.
    #[serde(default)]
    pub jsonrpc: Option<String>,
}

impl Response {
    /// Decodes the result payload into `T`.
    ///
    /// A populated `error` field wins over whatever is in `result`; an absent
    /// result decodes as JSON `null`.
    pub fn result<T: for<'a> Deserialize<'a>>(&self) -> Result<T, Error> {
        self.check_error()?;
        let raw = self.result.as_deref().map(RawValue::get).unwrap_or("null");
        serde_json::from_str(raw).map_err(Error::Json)
    }

    /// The raw result payload, exactly as received, after consulting the
    /// error field.
    pub fn raw_result(&self) -> Result<Option<&RawValue>, Error> {
        self.check_error()?;
        Ok(self.result.as_deref())
    }

    /// Fails with [`Error::Rpc`] if the server reported an error.
    pub fn check_error(&self) -> Result<(), Error> {
        match self.error {
            Some(ref e) => Err(Error::Rpc(e.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> Box<RawValue> {
        RawValue::from_string(json.to_owned()).unwrap()
    }

    #[test]
    fn request_serializes_all_fields() {
        let params = [raw("\"A1\""), raw("2")];
        let req = Request {
            method: "getaddressbalance",
            params: &params,
            id: "test-id".into(),
            jsonrpc: JSONRPC_VERSION,
        };

        let encoded = serde_json::to_value(&req).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({
                "method": "getaddressbalance",
                "params": ["A1", 2],
                "id": "test-id",
                "jsonrpc": "1.0",
            })
        );
    }

    #[test]
    fn empty_params_stay_on_the_wire() {
        let req = Request {
            method: "uptime",
            params: &[],
            id: "x".into(),
            jsonrpc: JSONRPC_VERSION,
        };
        let encoded = serde_json::to_string(&req).unwrap();
        assert!(encoded.contains("\"params\":[]"), "got {}", encoded);
    }

    #[test]
    fn error_field_wins_over_result() {
        let resp: Response = serde_json::from_str(
            r#"{"result": "ignored", "error": {"code": -1, "message": "m"}, "id": "x"}"#,
        )
        .unwrap();

        match resp.result::<String>() {
            Err(Error::Rpc(e)) => {
                assert_eq!(e.code, -1);
                assert_eq!(e.message, "m");
            }
            other => panic!("expected rpc error, got {:?}", other),
        }
    }

    #[test]
    fn raw_result_is_untouched() {
        let resp: Response = serde_json::from_str(
            r#"{"result": {"balance":1.5,"received":2.0}, "error": null, "id": "x"}"#,
        )
        .unwrap();

        let raw = resp.raw_result().unwrap().unwrap();
        assert_eq!(raw.get(), r#"{"balance":1.5,"received":2.0}"#);
    }

    #[test]
    fn missing_result_decodes_as_null() {
        let resp: Response =
            serde_json::from_str(r#"{"error": null, "id": "x"}"#).unwrap();
        resp.result::<()>().unwrap();
        assert_eq!(resp.result::<Option<String>>().unwrap(), None);
    }
}

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::Level::{Debug, Trace, Warn};
use log::{debug, log_enabled, trace};
use serde::de;

use crate::{
    AddressIndexClient, BlockchainIndexClient, ControlClient, Error, GeneratingClient,
    GovernanceClient, MiningClient, NetworkClient, RawTransactionClient, Result, RpcApi,
};

/// URL of a local testnet node.
pub const LOCAL_NODE_URL: &str = "http://127.0.0.1:8370";

/// The transport-level client all namespace sub-clients dispatch through.
pub struct RpcClient {
    client: jsonrpc::Client,
}

impl fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "syscoin_client::RpcClient({:?})", self.client)
    }
}

impl RpcClient {
    /// Creates the transport for `url` with basic-auth credentials.
    ///
    /// Performs no I/O and cannot fail; a malformed or unreachable endpoint
    /// surfaces on the first call. Empty credentials are sent as empty
    /// basic-auth values, matching what the node expects when auth is
    /// disabled.
    pub fn new(url: &str, rpc_user: &str, rpc_password: &str) -> Self {
        let transport = jsonrpc::http::reqwest_http::Builder::new()
            .url(url)
            .auth(rpc_user, rpc_password)
            .build();

        Self {
            client: jsonrpc::Client::with_transport(transport),
        }
    }

    /// Same as [`RpcClient::new`] with a request timeout other than the
    /// transport default.
    pub fn with_timeout(
        url: &str,
        rpc_user: &str,
        rpc_password: &str,
        timeout: Duration,
    ) -> Self {
        let transport = jsonrpc::http::reqwest_http::Builder::new()
            .url(url)
            .auth(rpc_user, rpc_password)
            .timeout(timeout)
            .build();

        Self {
            client: jsonrpc::Client::with_transport(transport),
        }
    }

    /// Creates a client from a preconfigured JSON-RPC client.
    pub fn from_jsonrpc(client: jsonrpc::Client) -> Self {
        Self { client }
    }

    /// Get the underlying JSONRPC client.
    pub fn get_jsonrpc_client(&self) -> &jsonrpc::Client {
        &self.client
    }
}

#[async_trait]
impl RpcApi for RpcClient {
    /// Call a `cmd` rpc with given `args` list
    async fn call<T: for<'a> de::Deserialize<'a>>(
        &self,
        cmd: &str,
        args: &[serde_json::Value],
    ) -> Result<T> {
        let v_args: Vec<_> = args
            .iter()
            .map(serde_json::value::to_raw_value)
            .collect::<std::result::Result<_, serde_json::Error>>()?;
        let req = self.client.build_request(cmd, &v_args[..]);
        if log_enabled!(Debug) {
            debug!(target: "syscoin_rpc", "JSON-RPC request: {} {}", cmd, serde_json::Value::from(args));
        }

        let resp = self.client.send_request(req).await.map_err(Error::from);
        log_response(cmd, &resp);
        Ok(resp?.result()?)
    }
}

fn log_response(cmd: &str, resp: &Result<jsonrpc::Response>) {
    if log_enabled!(Warn) || log_enabled!(Debug) || log_enabled!(Trace) {
        match resp {
            Err(ref e) => {
                if log_enabled!(Debug) {
                    debug!(target: "syscoin_rpc", "JSON-RPC failed parsing reply of {}: {:?}", cmd, e);
                }
            }
            Ok(ref resp) => {
                if let Some(ref e) = resp.error {
                    if log_enabled!(Debug) {
                        debug!(target: "syscoin_rpc", "JSON-RPC error for {}: {:?}", cmd, e);
                    }
                } else if log_enabled!(Trace) {
                    let rawnull =
                        serde_json::value::to_raw_value(&serde_json::Value::Null).unwrap();
                    let result = resp.result.as_ref().unwrap_or(&rawnull);
                    trace!(target: "syscoin_rpc", "JSON-RPC response for {}: {}", cmd, result);
                }
            }
        }
    }
}

/// Client for a Syscoin Core node, one sub-client per RPC namespace.
///
/// All sub-clients share one transport; the handle is cheap to construct and
/// safe to call from concurrent tasks.
pub struct Client<R = RpcClient> {
    /// `addressindex` calls (require the node's addressindex to be enabled).
    pub address_index: AddressIndexClient<R>,
    /// `blockchain` index and mempool calls.
    pub blockchain: BlockchainIndexClient<R>,
    /// `control` calls.
    pub control: ControlClient<R>,
    /// `generating` calls.
    pub generating: GeneratingClient<R>,
    /// `mining` calls.
    pub mining: MiningClient<R>,
    /// `network` calls.
    pub network: NetworkClient<R>,
    /// `rawtransactions` calls.
    pub raw_transactions: RawTransactionClient<R>,
    /// `syscoin` governance calls.
    pub governance: GovernanceClient<R>,
}

impl Client<RpcClient> {
    /// Creates a new client object.
    ///
    /// Never fails and never contacts the node; the first real failure
    /// appears on the first call.
    pub fn new(url: &str, rpc_user: &str, rpc_password: &str) -> Self {
        Self::from_rpc(Arc::new(RpcClient::new(url, rpc_user, rpc_password)))
    }

    /// Same as [`Client::new`] with a request timeout other than the
    /// transport default.
    pub fn with_timeout(
        url: &str,
        rpc_user: &str,
        rpc_password: &str,
        timeout: Duration,
    ) -> Self {
        Self::from_rpc(Arc::new(RpcClient::with_timeout(
            url,
            rpc_user,
            rpc_password,
            timeout,
        )))
    }
}

impl<R: RpcApi + Send + Sync> Client<R> {
    /// Builds the namespace sub-clients around an existing dispatcher.
    ///
    /// This is the seam tests use to swap in a mock implementation of
    /// [`RpcApi`].
    pub fn from_rpc(rpc: Arc<R>) -> Self {
        Self {
            address_index: AddressIndexClient::new(rpc.clone()),
            blockchain: BlockchainIndexClient::new(rpc.clone()),
            control: ControlClient::new(rpc.clone()),
            generating: GeneratingClient::new(rpc.clone()),
            mining: MiningClient::new(rpc.clone()),
            network: NetworkClient::new(rpc.clone()),
            raw_transactions: RawTransactionClient::new(rpc.clone()),
            governance: GovernanceClient::new(rpc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVALID_URL: &str = "http://invalid.url";

    #[test]
    fn construction_never_fails_even_with_an_invalid_url() {
        let _ = Client::new(INVALID_URL, "", "");
        let _ = Client::new("not a url at all", "user", "pass");
        let _ = Client::with_timeout(INVALID_URL, "", "", Duration::from_millis(100));
    }

    #[tokio::test]
    async fn first_dispatch_surfaces_the_bad_endpoint() {
        // Port 9 is the discard service; nothing serves RPC there.
        let cl = Client::with_timeout("http://127.0.0.1:9", "", "", Duration::from_millis(500));

        let err = cl.blockchain.get_block_count().await.unwrap_err();
        match &err {
            Error::JsonRpc(jsonrpc::Error::Transport(_)) => {}
            other => panic!("expected transport error, got {:?}", other),
        }
        assert!(err.rpc_error().is_none());
    }

    #[tokio::test]
    async fn every_namespace_dispatches_through_the_shared_transport() {
        let cl = Client::with_timeout("http://127.0.0.1:9", "", "", Duration::from_millis(500));

        assert!(cl.address_index.get_address_utxos(&["x"]).await.is_err());
        assert!(cl.blockchain.get_best_block_hash().await.is_err());
        assert!(cl.control.uptime().await.is_err());
        assert!(cl.generating.generate(1, None).await.is_err());
        assert!(cl.mining.create_aux_block("x").await.is_err());
        assert!(cl.network.ping().await.is_err());
        assert!(cl.raw_transactions.get_raw_transaction("x", None).await.is_err());
        assert!(cl.governance.get_governance_info().await.is_err());
    }
}

//! The `addressindex` namespace. Every call here requires the node to run
//! with addressindex enabled.

use std::sync::Arc;

use crate::client::RpcClient;
use crate::json;
use crate::rpc_api::into_json;
use crate::{Result, RpcApi};

fn owned(addresses: &[&str]) -> Vec<String> {
    addresses.iter().map(|a| (*a).to_owned()).collect()
}

/// Sub-client for the `addressindex` calls.
pub struct AddressIndexClient<R = RpcClient> {
    rpc: Arc<R>,
}

impl<R: RpcApi + Send + Sync> AddressIndexClient<R> {
    pub(crate) fn new(rpc: Arc<R>) -> Self {
        Self { rpc }
    }

    /// Returns the balance for the given addresses.
    ///
    /// With `separated_output` the node reports per-address balances as an
    /// array instead of one sum; the flag is left off the wire when false.
    pub async fn get_address_balance(
        &self,
        addresses: &[&str],
        separated_output: bool,
    ) -> Result<json::GetAddressBalanceResult> {
        let payload = json::GetAddressBalanceRequest {
            addresses: owned(addresses),
            separated_output,
        };
        self.rpc.call("getaddressbalance", &[into_json(payload)?]).await
    }

    /// Returns all confirmed balance changes for the given addresses,
    /// optionally restricted to the `start..=end` block height range.
    pub async fn get_address_deltas(
        &self,
        addresses: &[&str],
        start: Option<u64>,
        end: Option<u64>,
    ) -> Result<Vec<json::AddressDelta>> {
        let payload = json::AddressRangeRequest {
            addresses: owned(addresses),
            start,
            end,
        };
        self.rpc.call("getaddressdeltas", &[into_json(payload)?]).await
    }

    /// Returns all mempool deltas for the given addresses.
    pub async fn get_address_mempool(
        &self,
        addresses: &[&str],
    ) -> Result<Vec<json::AddressMempoolDelta>> {
        let payload = json::AddressListRequest {
            addresses: owned(addresses),
        };
        self.rpc.call("getaddressmempool", &[into_json(payload)?]).await
    }

    /// Returns the txids touching the given addresses, optionally restricted
    /// to the `start..=end` block height range.
    pub async fn get_address_txids(
        &self,
        addresses: &[&str],
        start: Option<u64>,
        end: Option<u64>,
    ) -> Result<Vec<String>> {
        let payload = json::AddressRangeRequest {
            addresses: owned(addresses),
            start,
            end,
        };
        self.rpc.call("getaddresstxids", &[into_json(payload)?]).await
    }

    /// Returns all unspent outputs of the given addresses.
    pub async fn get_address_utxos(
        &self,
        addresses: &[&str],
    ) -> Result<Vec<json::AddressUtxo>> {
        let payload = json::AddressListRequest {
            addresses: owned(addresses),
        };
        self.rpc.call("getaddressutxos", &[into_json(payload)?]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc_api::MockRpcApi;
    use crate::Error;

    fn client_with(rpc: MockRpcApi) -> AddressIndexClient<MockRpcApi> {
        AddressIndexClient::new(Arc::new(rpc))
    }

    #[tokio::test]
    async fn get_address_balance_sends_one_object_param() {
        let mut rpc = MockRpcApi::new();
        rpc.expect_call::<json::GetAddressBalanceResult>()
            .withf(|cmd, args| {
                cmd == "getaddressbalance"
                    && args == [serde_json::json!({"addresses": ["A1", "A2"]})]
            })
            .returning(|_, _| {
                Ok(json::GetAddressBalanceResult {
                    balance: 1.5,
                    received: 2.0,
                })
            });

        let balance = client_with(rpc)
            .get_address_balance(&["A1", "A2"], false)
            .await
            .unwrap();
        assert_eq!(balance.balance, 1.5);
        assert_eq!(balance.received, 2.0);
    }

    #[tokio::test]
    async fn rpc_errors_keep_the_node_message() {
        let mut rpc = MockRpcApi::new();
        rpc.expect_call::<json::GetAddressBalanceResult>()
            .returning(|_, _| {
                Err(Error::JsonRpc(jsonrpc::Error::Rpc(jsonrpc::RpcError {
                    code: -5,
                    message: "Invalid address".to_owned(),
                })))
            });

        let err = client_with(rpc)
            .get_address_balance(&["not-an-address"], false)
            .await
            .unwrap_err();
        let rpc_err = err.rpc_error().expect("should be a server-side error");
        assert_eq!(rpc_err.code, -5);
        assert_eq!(rpc_err.message, "Invalid address");
    }

    #[tokio::test]
    async fn get_address_deltas_forwards_the_height_range() {
        let mut rpc = MockRpcApi::new();
        rpc.expect_call::<Vec<json::AddressDelta>>()
            .withf(|cmd, args| {
                cmd == "getaddressdeltas"
                    && args
                        == [serde_json::json!({
                            "addresses": ["A1"],
                            "start": 5,
                            "end": 10
                        })]
            })
            .returning(|_, _| Ok(vec![]));

        let deltas = client_with(rpc)
            .get_address_deltas(&["A1"], Some(5), Some(10))
            .await
            .unwrap();
        assert!(deltas.is_empty());
    }

    #[tokio::test]
    async fn get_address_utxos_decodes_entries() {
        let mut rpc = MockRpcApi::new();
        rpc.expect_call::<Vec<json::AddressUtxo>>()
            .withf(|cmd, args| {
                cmd == "getaddressutxos"
                    && args == [serde_json::json!({"addresses": ["A1"]})]
            })
            .returning(|_, _| {
                Ok(serde_json::from_str(
                    r#"[{
                        "address": "A1",
                        "txid": "deadbeef",
                        "outputindex": 1,
                        "script": "76a914",
                        "satoshis": 5000,
                        "height": 10
                    }]"#,
                )
                .unwrap())
            });

        let utxos = client_with(rpc).get_address_utxos(&["A1"]).await.unwrap();
        assert_eq!(utxos.len(), 1);
        assert_eq!(utxos[0].output_index, 1);
        assert_eq!(utxos[0].satoshis, 5000);
    }
}

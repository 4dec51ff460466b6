//! The `rawtransactions` namespace.

use std::collections::HashMap;
use std::sync::Arc;

use crate::client::RpcClient;
use crate::json;
use crate::rpc_api::{handle_defaults, into_json, null, opt_into_json, RawTx};
use crate::{Result, RpcApi};

/// Sub-client for the `rawtransactions` calls.
pub struct RawTransactionClient<R = RpcClient> {
    rpc: Arc<R>,
}

impl<R: RpcApi + Send + Sync> RawTransactionClient<R> {
    pub(crate) fn new(rpc: Arc<R>) -> Self {
        Self { rpc }
    }

    /// Returns the serialized, hex-encoded transaction with the given txid,
    /// optionally restricted to the block with the given hash.
    ///
    /// Without a transaction index only mempool transactions and ones with
    /// unspent outputs can be looked up.
    pub async fn get_raw_transaction(
        &self,
        txid: &str,
        block_hash: Option<&str>,
    ) -> Result<String> {
        let mut args = [
            into_json(txid)?,
            into_json(false)?,
            opt_into_json(block_hash)?,
        ];
        self.rpc
            .call("getrawtransaction", handle_defaults(&mut args, &[null()]))
            .await
    }

    /// Returns the decoded transaction with the given txid.
    pub async fn get_raw_transaction_verbose(
        &self,
        txid: &str,
        block_hash: Option<&str>,
    ) -> Result<json::RawTransactionInfo> {
        let mut args = [
            into_json(txid)?,
            into_json(true)?,
            opt_into_json(block_hash)?,
        ];
        self.rpc
            .call("getrawtransaction", handle_defaults(&mut args, &[null()]))
            .await
    }

    /// Decodes a serialized transaction without touching the chain state.
    pub async fn decode_raw_transaction<T: RawTx>(
        &self,
        tx: T,
    ) -> Result<json::RawTransactionInfo> {
        self.rpc
            .call("decoderawtransaction", &[tx.raw_hex().into()])
            .await
    }

    /// Creates an unsigned, serialized transaction spending `inputs` to
    /// `outputs` (address to SYS amount). Returns the hex-encoded
    /// transaction.
    pub async fn create_raw_transaction(
        &self,
        inputs: &[json::CreateRawTransactionInput],
        outputs: &HashMap<String, f64>,
        locktime: Option<i64>,
    ) -> Result<String> {
        let mut args = [
            into_json(inputs)?,
            into_json(outputs)?,
            opt_into_json(locktime)?,
        ];
        self.rpc
            .call("createrawtransaction", handle_defaults(&mut args, &[null()]))
            .await
    }

    /// Submits a signed, serialized transaction to the node's mempool and
    /// relays it. Returns the txid.
    pub async fn send_raw_transaction<T: RawTx>(
        &self,
        tx: T,
        allow_high_fees: Option<bool>,
    ) -> Result<String> {
        let mut args = [tx.raw_hex().into(), opt_into_json(allow_high_fees)?];
        self.rpc
            .call("sendrawtransaction", handle_defaults(&mut args, &[null()]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc_api::MockRpcApi;

    fn client_with(rpc: MockRpcApi) -> RawTransactionClient<MockRpcApi> {
        RawTransactionClient::new(Arc::new(rpc))
    }

    #[tokio::test]
    async fn trailing_none_block_hash_is_dropped() {
        let mut rpc = MockRpcApi::new();
        rpc.expect_call::<String>()
            .withf(|cmd, args| {
                cmd == "getrawtransaction"
                    && args == [serde_json::json!("txid"), serde_json::json!(false)]
            })
            .returning(|_, _| Ok("00ff".to_owned()));

        let hex = client_with(rpc)
            .get_raw_transaction("txid", None)
            .await
            .unwrap();
        assert_eq!(hex, "00ff");
    }

    #[tokio::test]
    async fn block_hash_is_sent_when_given() {
        let mut rpc = MockRpcApi::new();
        rpc.expect_call::<json::RawTransactionInfo>()
            .withf(|cmd, args| {
                cmd == "getrawtransaction"
                    && args
                        == [
                            serde_json::json!("txid"),
                            serde_json::json!(true),
                            serde_json::json!("blockhash"),
                        ]
            })
            .returning(|_, _| {
                Ok(serde_json::from_str(
                    r#"{
                        "txid": "txid", "size": 92, "version": 2,
                        "locktime": 0,
                        "vin": [{"coinbase": "2900", "sequence": 4294967295}],
                        "vout": [{
                            "value": 50.0, "n": 0,
                            "scriptPubKey": {
                                "asm": "OP_DUP", "hex": "76a914",
                                "reqSigs": 1, "type": "pubkeyhash",
                                "addresses": ["A1"]
                            }
                        }],
                        "blockhash": "blockhash",
                        "confirmations": 3, "time": 1, "blocktime": 1
                    }"#,
                )
                .unwrap())
            });

        let tx = client_with(rpc)
            .get_raw_transaction_verbose("txid", Some("blockhash"))
            .await
            .unwrap();
        assert_eq!(tx.vout[0].script_pub_key.type_, "pubkeyhash");
        assert!(tx.vin[0].coinbase.is_some());
    }

    #[tokio::test]
    async fn raw_tx_bytes_are_sent_hex_encoded() {
        let mut rpc = MockRpcApi::new();
        rpc.expect_call::<String>()
            .withf(|cmd, args| {
                cmd == "sendrawtransaction" && args == [serde_json::json!("deadbeef")]
            })
            .returning(|_, _| Ok("txid".to_owned()));

        let txid = client_with(rpc)
            .send_raw_transaction(&[0xde_u8, 0xad, 0xbe, 0xef][..], None)
            .await
            .unwrap();
        assert_eq!(txid, "txid");
    }
}

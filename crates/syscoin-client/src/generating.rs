//! The `generating` namespace.

use std::sync::Arc;

use crate::client::RpcClient;
use crate::rpc_api::into_json;
use crate::{Result, RpcApi};

/// Iterations the node tries per block when the caller gives no limit.
pub const DEFAULT_MAX_TRIES: u64 = 1_000_000;

/// Sub-client for the `generating` calls.
pub struct GeneratingClient<R = RpcClient> {
    rpc: Arc<R>,
}

impl<R: RpcApi + Send + Sync> GeneratingClient<R> {
    pub(crate) fn new(rpc: Arc<R>) -> Self {
        Self { rpc }
    }

    /// Mines `n_blocks` blocks instantly (before the call returns) to a
    /// wallet address in the node. Returns the hashes of the generated
    /// blocks.
    ///
    /// `max_tries` defaults to [`DEFAULT_MAX_TRIES`] and is always sent.
    pub async fn generate(&self, n_blocks: u64, max_tries: Option<u64>) -> Result<Vec<String>> {
        let max_tries = max_tries.unwrap_or(DEFAULT_MAX_TRIES);
        self.rpc
            .call("generate", &[into_json(n_blocks)?, into_json(max_tries)?])
            .await
    }

    /// Mines `n_blocks` blocks instantly to the given address. Returns the
    /// hashes of the generated blocks.
    pub async fn generate_to_address(
        &self,
        n_blocks: u64,
        address: &str,
        max_tries: Option<u64>,
    ) -> Result<Vec<String>> {
        let max_tries = max_tries.unwrap_or(DEFAULT_MAX_TRIES);
        self.rpc
            .call(
                "generatetoaddress",
                &[into_json(n_blocks)?, into_json(address)?, into_json(max_tries)?],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc_api::MockRpcApi;

    fn client_with(rpc: MockRpcApi) -> GeneratingClient<MockRpcApi> {
        GeneratingClient::new(Arc::new(rpc))
    }

    #[tokio::test]
    async fn generate_substitutes_the_default_max_tries() {
        let mut rpc = MockRpcApi::new();
        rpc.expect_call::<Vec<String>>()
            .withf(|cmd, args| {
                cmd == "generate"
                    && args == [serde_json::json!(2), serde_json::json!(1_000_000)]
            })
            .returning(|_, _| Ok(vec!["h1".to_owned(), "h2".to_owned()]));

        let hashes = client_with(rpc).generate(2, None).await.unwrap();
        assert_eq!(hashes.len(), 2);
    }

    #[tokio::test]
    async fn generate_to_address_keeps_the_argument_order() {
        let mut rpc = MockRpcApi::new();
        rpc.expect_call::<Vec<String>>()
            .withf(|cmd, args| {
                cmd == "generatetoaddress"
                    && args
                        == [
                            serde_json::json!(1),
                            serde_json::json!("addr"),
                            serde_json::json!(50),
                        ]
            })
            .returning(|_, _| Ok(vec!["h1".to_owned()]));

        client_with(rpc)
            .generate_to_address(1, "addr", Some(50))
            .await
            .unwrap();
    }
}

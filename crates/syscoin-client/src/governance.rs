//! The `syscoin` governance namespace.

use std::sync::Arc;

use crate::client::RpcClient;
use crate::json;
use crate::{Result, RpcApi};

/// Sub-client for the coin-specific governance calls.
pub struct GovernanceClient<R = RpcClient> {
    rpc: Arc<R>,
}

impl<R: RpcApi + Send + Sync> GovernanceClient<R> {
    pub(crate) fn new(rpc: Arc<R>) -> Self {
        Self { rpc }
    }

    /// Returns the governance parameters of the chain.
    pub async fn get_governance_info(&self) -> Result<json::GovernanceInfo> {
        self.rpc.call("getgovernanceinfo", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc_api::MockRpcApi;

    #[tokio::test]
    async fn governance_info_takes_no_params() {
        let mut rpc = MockRpcApi::new();
        rpc.expect_call::<json::GovernanceInfo>()
            .withf(|cmd, args| cmd == "getgovernanceinfo" && args.is_empty())
            .returning(|_, _| {
                Ok(serde_json::from_str(
                    r#"{
                        "governanceminquorum": 1,
                        "masternodewatchdogmaxseconds": 7200,
                        "sentinelpingmaxseconds": 7200,
                        "proposalfee": 5.0,
                        "superblockcycle": 24,
                        "lastsuperblock": 6216,
                        "nextsuperblock": 6240,
                        "maxgovobjdatasize": 16384
                    }"#,
                )
                .unwrap())
            });

        let client = GovernanceClient::new(Arc::new(rpc));
        let info = client.get_governance_info().await.unwrap();
        assert_eq!(info.governance_min_quorum, 1);
        assert_eq!(info.next_superblock, 6240);
    }
}

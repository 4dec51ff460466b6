//! The `network` namespace: peer management and networking state.

use std::sync::Arc;

use crate::client::RpcClient;
use crate::json;
use crate::rpc_api::into_json;
use crate::{Result, RpcApi};

/// Sub-client for the `network` calls.
pub struct NetworkClient<R = RpcClient> {
    rpc: Arc<R>,
}

impl<R: RpcApi + Send + Sync> NetworkClient<R> {
    pub(crate) fn new(rpc: Arc<R>) -> Self {
        Self { rpc }
    }

    /// Adds or removes a node from the addnode list, or tries a connection
    /// to it once.
    ///
    /// Nodes added this way are protected from DoS disconnection.
    pub async fn add_node(&self, node: &str, command: json::AddNodeCommand) -> Result<()> {
        self.rpc
            .call("addnode", &[into_json(node)?, into_json(command)?])
            .await
    }

    /// Clears the banned IP list.
    pub async fn clear_banned(&self) -> Result<()> {
        self.rpc.call("clearbanned", &[]).await
    }

    /// Immediately disconnects from the peer with the given IP address and
    /// port.
    pub async fn disconnect_node(&self, address: &str) -> Result<()> {
        self.rpc.call("disconnectnode", &[into_json(address)?]).await
    }

    /// Immediately disconnects from the peer with the given node id (see
    /// [`NetworkClient::get_peer_info`] for ids).
    pub async fn disconnect_node_by_id(&self, node_id: u64) -> Result<()> {
        self.rpc
            .call("disconnectnode", &[into_json("")?, into_json(node_id)?])
            .await
    }

    /// Returns information about the given added node, or all added nodes
    /// when `node` is `None`. Onetry nodes are not listed.
    pub async fn get_added_node_info(
        &self,
        node: Option<&str>,
    ) -> Result<Vec<json::AddedNodeInfo>> {
        match node {
            Some(node) => {
                self.rpc.call("getaddednodeinfo", &[into_json(node)?]).await
            }
            None => self.rpc.call("getaddednodeinfo", &[]).await,
        }
    }

    /// Returns the number of connections to other nodes.
    pub async fn get_connection_count(&self) -> Result<u64> {
        self.rpc.call("getconnectioncount", &[]).await
    }

    /// Returns network traffic statistics: bytes in, bytes out and current
    /// time.
    pub async fn get_net_totals(&self) -> Result<json::NetworkTotals> {
        self.rpc.call("getnettotals", &[]).await
    }

    /// Returns state info regarding P2P networking.
    pub async fn get_network_info(&self) -> Result<json::NetworkInfo> {
        self.rpc.call("getnetworkinfo", &[]).await
    }

    /// Returns data about each connected network node.
    pub async fn get_peer_info(&self) -> Result<Vec<json::PeerInfo>> {
        self.rpc.call("getpeerinfo", &[]).await
    }

    /// Lists all banned IPs/Subnets.
    pub async fn list_banned(&self) -> Result<Vec<json::BannedNode>> {
        self.rpc.call("listbanned", &[]).await
    }

    /// Requests that a ping be sent to all other nodes, to measure ping
    /// time.
    ///
    /// Results arrive in the `pingtime` and `pingwait` fields of
    /// `getpeerinfo`, as decimal seconds. The ping command is handled in
    /// queue with all other commands, so it measures processing backlog, not
    /// just network ping.
    pub async fn ping(&self) -> Result<()> {
        self.rpc.call("ping", &[]).await
    }

    /// Adds or removes an IP/Subnet from the banned list.
    ///
    /// A `ban_time` of 0 uses the node's default. When `absolute` is true,
    /// `ban_time` is interpreted as an absolute end time.
    pub async fn set_ban(
        &self,
        subnet: &str,
        command: json::SetBanCommand,
        ban_time: u64,
        absolute: bool,
    ) -> Result<()> {
        self.rpc
            .call(
                "setban",
                &[
                    into_json(subnet)?,
                    into_json(command)?,
                    into_json(ban_time)?,
                    into_json(absolute)?,
                ],
            )
            .await
    }

    /// Disables/enables all P2P network activity.
    pub async fn set_network_active(&self, active: bool) -> Result<()> {
        self.rpc.call("setnetworkactive", &[into_json(active)?]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc_api::MockRpcApi;

    fn client_with(rpc: MockRpcApi) -> NetworkClient<MockRpcApi> {
        NetworkClient::new(Arc::new(rpc))
    }

    #[tokio::test]
    async fn add_node_serializes_the_command() {
        let mut rpc = MockRpcApi::new();
        rpc.expect_call::<()>()
            .withf(|cmd, args| {
                cmd == "addnode"
                    && args == [serde_json::json!("1.2.3.4:8369"), serde_json::json!("onetry")]
            })
            .returning(|_, _| Ok(()));

        client_with(rpc)
            .add_node("1.2.3.4:8369", json::AddNodeCommand::OneTry)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn disconnect_by_id_blanks_the_address() {
        let mut rpc = MockRpcApi::new();
        rpc.expect_call::<()>()
            .withf(|cmd, args| {
                cmd == "disconnectnode"
                    && args == [serde_json::json!(""), serde_json::json!(7)]
            })
            .returning(|_, _| Ok(()));

        client_with(rpc).disconnect_node_by_id(7).await.unwrap();
    }

    #[tokio::test]
    async fn added_node_filter_is_omitted_when_unset() {
        let mut rpc = MockRpcApi::new();
        rpc.expect_call::<Vec<json::AddedNodeInfo>>()
            .withf(|cmd, args| cmd == "getaddednodeinfo" && args.is_empty())
            .returning(|_, _| {
                Ok(serde_json::from_str(
                    r#"[{
                        "addednode": "1.2.3.4:8369",
                        "connected": true,
                        "addresses": [
                            {"address": "1.2.3.4:8369", "connected": "outbound"}
                        ]
                    }]"#,
                )
                .unwrap())
            });

        let nodes = client_with(rpc).get_added_node_info(None).await.unwrap();
        assert_eq!(nodes[0].addresses[0].connected, "outbound");
    }

    #[tokio::test]
    async fn set_ban_keeps_the_argument_order() {
        let mut rpc = MockRpcApi::new();
        rpc.expect_call::<()>()
            .withf(|cmd, args| {
                cmd == "setban"
                    && args
                        == [
                            serde_json::json!("10.0.0.0/24"),
                            serde_json::json!("add"),
                            serde_json::json!(86400),
                            serde_json::json!(false),
                        ]
            })
            .returning(|_, _| Ok(()));

        client_with(rpc)
            .set_ban("10.0.0.0/24", json::SetBanCommand::Add, 86400, false)
            .await
            .unwrap();
    }
}

//! Async client for the Syscoin Core JSON-RPC API.
//!
//! The node groups its RPC surface into namespaces; so does this crate. A
//! [`SyscoinRpcClient`] owns one transport and hands a shared reference to it
//! to one sub-client per namespace:
//!
//! ```no_run
//! # async fn example() -> syscoin_client::Result<()> {
//! use syscoin_client::SyscoinRpcClient;
//!
//! let client = SyscoinRpcClient::new("http://127.0.0.1:8370", "user", "pass");
//! let count = client.blockchain.get_block_count().await?;
//! println!("{} blocks", count);
//! # Ok(())
//! # }
//! ```
//!
//! Construction never touches the network; a bad URL or unreachable node only
//! surfaces on the first call. Errors distinguish transport failures, decode
//! failures and errors reported by the node itself (see [`Error`]).

mod client;
pub use client::{Client as SyscoinRpcClient, RpcClient, LOCAL_NODE_URL};

mod error;
pub use error::{Error, Result};

mod rpc_api;
pub use rpc_api::{RawTx, RpcApi};

#[cfg(feature = "mocks")]
pub use rpc_api::MockRpcApi;

pub mod json;

mod address_index;
mod blockchain_index;
mod control;
mod generating;
mod governance;
mod mining;
mod network;
mod raw_transactions;

pub use address_index::AddressIndexClient;
pub use blockchain_index::{BlockchainIndexClient, MAX_BLOCK_HEADERS};
pub use control::ControlClient;
pub use generating::{GeneratingClient, DEFAULT_MAX_TRIES};
pub use governance::GovernanceClient;
pub use mining::MiningClient;
pub use network::NetworkClient;
pub use raw_transactions::RawTransactionClient;

pub use jsonrpc::Error as JsonRpcError;
pub use jsonrpc::RpcError;

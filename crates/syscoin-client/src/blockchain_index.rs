//! The `blockchain` namespace: chain index, mempool and UTXO set queries.

use std::collections::HashMap;
use std::sync::Arc;

use crate::client::RpcClient;
use crate::json;
use crate::rpc_api::into_json;
use crate::{Error, Result, RpcApi};

/// The node never returns more headers than this per `getblockheaders` call.
pub const MAX_BLOCK_HEADERS: u32 = 2000;

/// Sub-client for the `blockchain` calls.
pub struct BlockchainIndexClient<R = RpcClient> {
    rpc: Arc<R>,
}

impl<R: RpcApi + Send + Sync> BlockchainIndexClient<R> {
    pub(crate) fn new(rpc: Arc<R>) -> Self {
        Self { rpc }
    }

    /// Returns the hash of the best (tip) block of the longest chain.
    pub async fn get_best_block_hash(&self) -> Result<String> {
        self.rpc.call("getbestblockhash", &[]).await
    }

    /// Returns the serialized, hex-encoded data for the block with the given
    /// hash.
    pub async fn get_block(&self, block_hash: &str) -> Result<String> {
        self.rpc
            .call("getblock", &[into_json(block_hash)?, into_json(false)?])
            .await
    }

    /// Returns the decoded block with the given hash.
    pub async fn get_full_block(&self, block_hash: &str) -> Result<json::FullBlock> {
        self.rpc
            .call("getblock", &[into_json(block_hash)?, into_json(true)?])
            .await
    }

    /// Returns state info regarding blockchain processing.
    pub async fn get_blockchain_info(&self) -> Result<json::BlockchainInfo> {
        self.rpc.call("getblockchaininfo", &[]).await
    }

    /// Returns the number of blocks in the longest chain.
    pub async fn get_block_count(&self) -> Result<u64> {
        self.rpc.call("getblockcount", &[]).await
    }

    /// Returns the hash of the block at the given height.
    pub async fn get_block_hash(&self, height: u64) -> Result<String> {
        self.rpc.call("getblockhash", &[into_json(height)?]).await
    }

    /// Returns hashes of blocks within the `low..=high` timestamp range.
    ///
    /// The node currently rejects this query; the call is passed through
    /// untouched and the node's error is surfaced as-is.
    pub async fn get_block_hashes(&self, high: u64, low: u64) -> Result<Vec<String>> {
        self.rpc
            .call("getblockhashes", &[into_json(high)?, into_json(low)?])
            .await
    }

    /// Returns the serialized, hex-encoded data for the block header with the
    /// given hash.
    pub async fn get_block_header(&self, hash: &str) -> Result<String> {
        self.rpc
            .call("getblockheader", &[into_json(hash)?, into_json(false)?])
            .await
    }

    /// Returns the decoded block header with the given hash.
    pub async fn get_full_block_header(&self, hash: &str) -> Result<json::FullBlockHeader> {
        self.rpc
            .call("getblockheader", &[into_json(hash)?, into_json(true)?])
            .await
    }

    /// Returns up to `count` serialized block headers, starting from `hash`.
    ///
    /// `count` defaults to [`MAX_BLOCK_HEADERS`], which is also the node-side
    /// ceiling; asking for more fails locally without a call.
    pub async fn get_block_headers(
        &self,
        hash: &str,
        count: Option<u32>,
    ) -> Result<Vec<String>> {
        let count = Self::header_count(count)?;
        self.rpc
            .call(
                "getblockheaders",
                &[into_json(hash)?, into_json(count)?, into_json(false)?],
            )
            .await
    }

    /// Returns up to `count` decoded block headers, starting from `hash`.
    pub async fn get_full_block_headers(
        &self,
        hash: &str,
        count: Option<u32>,
    ) -> Result<Vec<json::FullBlockHeader>> {
        let count = Self::header_count(count)?;
        self.rpc
            .call(
                "getblockheaders",
                &[into_json(hash)?, into_json(count)?, into_json(true)?],
            )
            .await
    }

    fn header_count(count: Option<u32>) -> Result<u32> {
        match count {
            None => Ok(MAX_BLOCK_HEADERS),
            Some(c) if c <= MAX_BLOCK_HEADERS => Ok(c),
            Some(_) => Err(Error::TooManyHeaders(MAX_BLOCK_HEADERS)),
        }
    }

    /// Returns information about all known tips in the block tree, including
    /// the main chain and orphaned branches.
    ///
    /// `count` limits the number of tips reported (default 1); `branch_len`
    /// hides tips with a shorter branch.
    pub async fn get_chain_tips(
        &self,
        count: Option<u64>,
        branch_len: u64,
    ) -> Result<Vec<json::ChainTip>> {
        let count = count.unwrap_or(1);
        self.rpc
            .call("getchaintips", &[into_json(count)?, into_json(branch_len)?])
            .await
    }

    /// Returns the current difficulty.
    pub async fn get_difficulty(&self) -> Result<f64> {
        self.rpc.call("getdifficulty", &[]).await
    }

    /// Returns the txids of all in-mempool ancestors of `txid`, which must
    /// itself be in the mempool.
    pub async fn get_mempool_ancestors(&self, txid: &str) -> Result<Vec<String>> {
        self.rpc
            .call("getmempoolancestors", &[into_json(txid)?, into_json(false)?])
            .await
    }

    /// Returns full entries for all in-mempool ancestors of `txid`.
    pub async fn get_mempool_ancestors_verbose(
        &self,
        txid: &str,
    ) -> Result<HashMap<String, json::MempoolEntry>> {
        self.rpc
            .call("getmempoolancestors", &[into_json(txid)?, into_json(true)?])
            .await
    }

    /// Returns the txids of all in-mempool descendants of `txid`, which must
    /// itself be in the mempool.
    pub async fn get_mempool_descendants(&self, txid: &str) -> Result<Vec<String>> {
        self.rpc
            .call("getmempooldescendants", &[into_json(txid)?, into_json(false)?])
            .await
    }

    /// Returns full entries for all in-mempool descendants of `txid`.
    pub async fn get_mempool_descendants_verbose(
        &self,
        txid: &str,
    ) -> Result<HashMap<String, json::MempoolEntry>> {
        self.rpc
            .call("getmempooldescendants", &[into_json(txid)?, into_json(true)?])
            .await
    }

    /// Returns the mempool entry of `txid`, which must be in the mempool.
    pub async fn get_mempool_entry(&self, txid: &str) -> Result<json::MempoolEntry> {
        self.rpc.call("getmempoolentry", &[into_json(txid)?]).await
    }

    /// Returns the active state of the transaction memory pool.
    pub async fn get_mempool_info(&self) -> Result<json::MempoolInfo> {
        self.rpc.call("getmempoolinfo", &[]).await
    }

    /// Returns all transaction ids in the memory pool.
    ///
    /// Use [`BlockchainIndexClient::get_mempool_entry`] to fetch a specific
    /// transaction from the mempool.
    pub async fn get_raw_mempool(&self) -> Result<Vec<String>> {
        self.rpc.call("getrawmempool", &[into_json(false)?]).await
    }

    /// Returns the full mempool as a txid-to-entry map.
    pub async fn get_raw_mempool_verbose(
        &self,
    ) -> Result<HashMap<String, json::MempoolEntry>> {
        self.rpc.call("getrawmempool", &[into_json(true)?]).await
    }

    /// Returns the txid and index where the given output was spent.
    pub async fn get_spent_info(&self, txid: &str, index: u64) -> Result<json::SpentInfo> {
        let payload = json::SpentInfo {
            txid: txid.to_owned(),
            index,
        };
        self.rpc.call("getspentinfo", &[into_json(payload)?]).await
    }

    /// Returns details about the unspent output `txid:n`, or `None` when the
    /// output does not exist or was spent.
    pub async fn get_tx_out(
        &self,
        txid: &str,
        n: u32,
        include_mempool: bool,
    ) -> Result<Option<json::TxOut>> {
        self.rpc
            .call(
                "gettxout",
                &[into_json(txid)?, into_json(n)?, into_json(include_mempool)?],
            )
            .await
    }

    /// Returns a hex-encoded proof that the given txids were included in a
    /// block.
    ///
    /// Without a transaction index this only works while an output of the
    /// transaction is still unspent; see
    /// [`BlockchainIndexClient::get_tx_out_proof_in_block`] for the variant
    /// that names the block explicitly.
    pub async fn get_tx_out_proof(&self, txids: &[&str]) -> Result<String> {
        self.rpc.call("gettxoutproof", &[into_json(txids)?]).await
    }

    /// Returns a hex-encoded proof that the given txids were included in the
    /// block with the given hash.
    pub async fn get_tx_out_proof_in_block(
        &self,
        txids: &[&str],
        block_hash: &str,
    ) -> Result<String> {
        self.rpc
            .call("gettxoutproof", &[into_json(txids)?, into_json(block_hash)?])
            .await
    }

    /// Returns statistics about the unspent transaction output set.
    ///
    /// This call may take some time.
    pub async fn get_tx_out_set_info(&self) -> Result<json::TxOutSetInfo> {
        self.rpc.call("gettxoutsetinfo", &[]).await
    }

    /// Treats a block as if it were received before others with the same
    /// work.
    ///
    /// A later call overrides the effect of an earlier one; the effects are
    /// not retained across restarts.
    pub async fn precious_block(&self, block_hash: &str) -> Result<()> {
        self.rpc.call("preciousblock", &[into_json(block_hash)?]).await
    }

    /// Prunes the blockchain up to the given block height, or up to the
    /// block whose time is at least 2 hours older than the given UNIX
    /// timestamp. Returns the height of the last block pruned.
    pub async fn prune_blockchain(&self, height_or_timestamp: u64) -> Result<u64> {
        self.rpc
            .call("pruneblockchain", &[into_json(height_or_timestamp)?])
            .await
    }

    /// Verifies the blockchain database.
    ///
    /// `check_level` (0-4) controls how thorough the block verification is;
    /// `n_blocks` the number of blocks checked, 0 for all.
    pub async fn verify_chain(&self, check_level: u32, n_blocks: u32) -> Result<bool> {
        self.rpc
            .call("verifychain", &[into_json(check_level)?, into_json(n_blocks)?])
            .await
    }

    /// Verifies that a proof produced by
    /// [`BlockchainIndexClient::get_tx_out_proof`] points to transactions in
    /// a block, returning the txids it commits to.
    pub async fn verify_tx_out_proof(&self, proof: &str) -> Result<Vec<String>> {
        self.rpc.call("verifytxoutproof", &[into_json(proof)?]).await
    }
}

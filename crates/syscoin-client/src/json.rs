//! Typed request and response shapes for the RPC surface.
//!
//! Field names follow Rust conventions with explicit renames for the node's
//! wire names. Fields the node only emits situationally are `Option`; closed
//! string sets are enums so serialization stays exhaustive.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------- addressindex ----------------

/// Argument object of `getaddressbalance`.
#[derive(Clone, Debug, Serialize)]
pub struct GetAddressBalanceRequest {
    /// Base58check encoded addresses to sum over.
    pub addresses: Vec<String>,
    /// When true the node reports per-address balances instead of one sum.
    /// Omitted from the wire when false, the upstream default.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub separated_output: bool,
}

/// Argument object of the addressindex calls that take an optional block
/// height range (`getaddressdeltas`, `getaddresstxids`).
#[derive(Clone, Debug, Serialize)]
pub struct AddressRangeRequest {
    pub addresses: Vec<String>,
    /// Start block height; omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    /// End block height; omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
}

/// Argument object of the addressindex calls that take only the address list
/// (`getaddressmempool`, `getaddressutxos`).
#[derive(Clone, Debug, Serialize)]
pub struct AddressListRequest {
    pub addresses: Vec<String>,
}

/// Result of `getaddressbalance`.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct GetAddressBalanceResult {
    pub balance: f64,
    pub received: f64,
}

/// One entry of a `getaddressdeltas` result.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct AddressDelta {
    /// The difference in satoshis.
    pub satoshis: i64,
    pub txid: String,
    /// The related input or output index.
    pub index: u32,
    #[serde(rename = "blockindex")]
    pub block_index: u32,
    pub height: u64,
    pub address: String,
}

/// One entry of a `getaddressmempool` result.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct AddressMempoolDelta {
    pub address: String,
    pub txid: String,
    pub index: u32,
    pub satoshis: i64,
    /// UNIX timestamp the transaction entered the mempool.
    pub timestamp: u64,
    /// The previous txid, present when spending.
    #[serde(rename = "prevtxin")]
    pub prev_txin: Option<String>,
    /// The previous transaction output index, present when spending.
    #[serde(rename = "prevtxout")]
    pub prev_txout: Option<String>,
}

/// One entry of a `getaddressutxos` result.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct AddressUtxo {
    pub address: String,
    pub txid: String,
    #[serde(rename = "outputindex")]
    pub output_index: u32,
    /// Script of the output, hex encoded.
    pub script: String,
    pub satoshis: u64,
    pub height: u64,
}

// ---------------- blockchain ----------------

/// A full block header, the verbose `getblockheader`/`getblockheaders`
/// result.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct FullBlockHeader {
    pub hash: String,
    /// Number of confirmations, -1 when the block is not on the main chain.
    pub confirmations: i64,
    pub height: u64,
    pub version: u64,
    #[serde(rename = "versionHex")]
    pub version_hex: String,
    #[serde(rename = "merkleroot")]
    pub merkle_root: String,
    /// Block time in seconds since epoch.
    pub time: u64,
    #[serde(rename = "mediantime")]
    pub median_time: u64,
    pub nonce: u64,
    pub bits: String,
    pub difficulty: f64,
    /// Expected number of hashes to produce the chain up to this block, hex.
    #[serde(rename = "chainwork")]
    pub chain_work: String,
    /// Absent for the genesis block.
    #[serde(rename = "previousblockhash")]
    pub previous_block_hash: Option<String>,
    /// Absent for the chain tip.
    #[serde(rename = "nextblockhash")]
    pub next_block_hash: Option<String>,
}

/// The verbose `getblock` result.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct FullBlock {
    #[serde(flatten)]
    pub header: FullBlockHeader,
    pub size: u64,
    /// Transaction ids in the block.
    pub tx: Vec<String>,
    /// Auxiliary proof of work, present on merge-mined blocks.
    #[serde(rename = "auxpow")]
    pub aux_pow: Option<AuxPow>,
}

/// Auxiliary proof of work attached to a merge-mined block.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct AuxPow {
    /// The parent-chain coinbase transaction carrying the commitment.
    pub tx: AuxPowTransaction,
    #[serde(default)]
    pub index: u64,
    #[serde(rename = "chainindex", default)]
    pub chain_index: u64,
    #[serde(rename = "merklebranch")]
    pub merkle_branch: Vec<String>,
    #[serde(rename = "chainmerklebranch")]
    pub chain_merkle_branch: Vec<String>,
    #[serde(rename = "parentblock")]
    pub parent_block: String,
}

/// The coinbase transaction inside an [`AuxPow`].
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct AuxPowTransaction {
    pub hex: String,
    pub txid: String,
    pub size: u64,
    pub version: u64,
    #[serde(rename = "locktime")]
    pub lock_time: u64,
    pub vin: Vec<CoinbaseVin>,
    pub vout: Vec<RawTransactionVout>,
    #[serde(rename = "blockhash")]
    pub block_hash: String,
}

/// A coinbase input.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct CoinbaseVin {
    pub coinbase: String,
    pub sequence: u64,
}

/// Result of `getblockchaininfo`.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct BlockchainInfo {
    /// The chain name.
    pub chain: String,
    pub blocks: u64,
    pub headers: u64,
    #[serde(rename = "bestblockhash")]
    pub best_block_hash: String,
    pub difficulty: f64,
    #[serde(rename = "mediantime")]
    pub median_time: u64,
    /// Estimate of verification progress, 0..1.
    #[serde(rename = "verificationprogress")]
    pub verification_progress: f64,
    #[serde(rename = "chainwork")]
    pub chain_work: String,
    pub pruned: bool,
    /// Lowest-height complete block stored, present when pruning.
    #[serde(rename = "pruneheight")]
    pub prune_height: Option<u64>,
    pub softforks: Vec<Softfork>,
    pub bip9_softforks: HashMap<String, Bip9Softfork>,
}

/// A completed soft fork.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct Softfork {
    /// Name of the soft fork.
    pub id: String,
    /// The new block version.
    pub version: u64,
    /// Progress toward rejecting pre-softfork blocks.
    pub reject: SoftforkReject,
}

#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct SoftforkReject {
    /// True if the threshold was reached.
    pub status: bool,
}

/// Status of a BIP9 softfork in progress.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct Bip9Softfork {
    pub status: Bip9SoftforkStatus,
    /// The bit (0-28) signalling this softfork, only for `started`.
    pub bit: Option<u8>,
    /// Minimum median time past at which the bit gains its meaning.
    #[serde(rename = "startTime")]
    pub start_time: u64,
    /// Median time past at which the deployment is considered failed if not
    /// locked in.
    pub timeout: u64,
    /// Height of the first block the status applies to.
    pub since: u64,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bip9SoftforkStatus {
    Defined,
    Started,
    LockedIn,
    Active,
    Failed,
}

/// One entry of a `getchaintips` result.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct ChainTip {
    pub height: u64,
    pub hash: String,
    pub difficulty: f64,
    #[serde(rename = "chainwork")]
    pub chain_work: String,
    /// Length of the branch, 0 for the main chain.
    #[serde(rename = "branchlen")]
    pub branch_len: u64,
    /// Fork point of the tip, same as `hash` for the main chain.
    #[serde(rename = "forkpoint")]
    pub fork_point: String,
    pub status: ChainTipStatus,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
pub enum ChainTipStatus {
    /// The branch contains at least one invalid block.
    #[serde(rename = "invalid")]
    Invalid,
    /// Not all blocks of the branch are available, but the headers are valid.
    #[serde(rename = "headers-only")]
    HeadersOnly,
    /// All blocks are available but were never fully validated.
    #[serde(rename = "valid-headers")]
    ValidHeaders,
    /// Fully validated branch that is not part of the active chain.
    #[serde(rename = "valid-fork")]
    ValidFork,
    /// The tip of the active main chain.
    #[serde(rename = "active")]
    Active,
}

/// An entry of the node's mempool.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct MempoolEntry {
    /// Transaction size in bytes.
    pub size: u64,
    /// Transaction fee in SYS.
    pub fee: f64,
    /// Fee with deltas used for mining priority.
    #[serde(rename = "modifiedfee")]
    pub modified_fee: f64,
    /// Local time the transaction entered the pool.
    pub time: u64,
    /// Block height when the transaction entered the pool.
    pub height: u64,
    /// DEPRECATED, absent on newer nodes.
    #[serde(rename = "startingpriority")]
    pub starting_priority: Option<f64>,
    /// DEPRECATED, absent on newer nodes.
    #[serde(rename = "currentpriority")]
    pub current_priority: Option<f64>,
    #[serde(rename = "descendantcount")]
    pub descendant_count: u64,
    #[serde(rename = "descendantsize")]
    pub descendant_size: u64,
    #[serde(rename = "descendantfees")]
    pub descendant_fees: f64,
    #[serde(rename = "ancestorcount")]
    pub ancestor_count: u64,
    #[serde(rename = "ancestorsize")]
    pub ancestor_size: u64,
    #[serde(rename = "ancestorfees")]
    pub ancestor_fees: f64,
    /// Unconfirmed transactions used as inputs for this one.
    pub depends: Vec<String>,
    /// True if sent via InstantSend.
    #[serde(rename = "instantsend", default)]
    pub instant_send: bool,
    /// True if locked via InstantSend.
    #[serde(rename = "instantlock", default)]
    pub instant_lock: bool,
}

/// Result of `getmempoolinfo`.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct MempoolInfo {
    /// Current transaction count.
    pub size: u64,
    /// Sum of all transaction sizes.
    pub bytes: u64,
    /// Total memory usage of the pool.
    pub usage: u64,
    #[serde(rename = "maxmempool")]
    pub max_mempool: u64,
    /// Minimum fee for a transaction to be accepted.
    #[serde(rename = "mempoolminfee")]
    pub mempool_min_fee: f64,
}

/// Where an output was spent; both the argument and result shape of
/// `getspentinfo`.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct SpentInfo {
    pub txid: String,
    pub index: u64,
}

/// Result of `gettxout`.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct TxOut {
    #[serde(rename = "bestblock")]
    pub best_block: String,
    pub confirmations: u64,
    /// Value of the output in SYS.
    pub value: f64,
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: ScriptPubKey,
    #[serde(default)]
    pub version: u64,
    pub coinbase: bool,
}

/// A pub key script.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct ScriptPubKey {
    pub asm: String,
    pub hex: String,
    #[serde(rename = "reqSigs")]
    pub req_sigs: Option<u64>,
    /// Script type, e.g. `pubkeyhash`.
    #[serde(rename = "type")]
    pub type_: String,
    /// Addresses involved in the script, absent for non-standard scripts.
    pub addresses: Option<Vec<String>>,
}

/// Result of `gettxoutsetinfo`.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct TxOutSetInfo {
    pub height: u64,
    #[serde(rename = "bestblock")]
    pub best_block_hash: String,
    /// Number of unspent transactions.
    pub transactions: u64,
    /// Number of unspent transaction outputs.
    #[serde(rename = "txouts")]
    pub tx_outs: u64,
    pub hash_serialized: String,
    /// Estimated chainstate size on disk.
    pub disk_size: u64,
    /// Total unspent amount in SYS.
    pub total_amount: f64,
}

// ---------------- control ----------------

/// Result of `getmemoryinfo`.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct MemoryInfo {
    pub locked: LockedMemoryInfo,
}

/// Locked memory statistics.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct LockedMemoryInfo {
    /// Bytes used.
    pub used: u64,
    /// Bytes available in the current arenas.
    pub free: u64,
    /// Total managed bytes.
    pub total: u64,
    /// Bytes that succeeded locking. If smaller than `total`, locking pages
    /// failed at some point and key data could be swapped to disk.
    pub locked: u64,
    pub chunks_used: u64,
    pub chunks_free: u64,
}

// ---------------- mining ----------------

/// Information required to merge-mine a block, the `createauxblock` and
/// `getauxblock` result.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct MergeMineInfo {
    /// Hash of the created block.
    #[serde(rename = "hash")]
    pub block_hash: String,
    #[serde(rename = "chainid")]
    pub chain_id: u64,
    #[serde(rename = "previousblockhash")]
    pub previous_block_hash: String,
    /// Value of the block's coinbase.
    #[serde(rename = "coinbasevalue")]
    pub coinbase_value: u64,
    /// Compressed target of the block.
    pub bits: String,
    pub height: u64,
    /// Target in reversed byte order, deprecated.
    #[serde(rename = "_target")]
    pub target: Option<String>,
}

/// Argument object of `getblocktemplate`. All fields are optional and left
/// off the wire when unset.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GetBlockTemplateRequest {
    /// `template`, `proposal` (BIP 23), or omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Client side supported features, e.g. `longpoll`, `workid`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,
    /// Client side supported softfork deployments.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
}

/// A transaction of a block template.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct TransactionTemplate {
    /// Transaction data, hex encoded.
    pub data: String,
    pub txid: String,
    /// Hash including witness data.
    pub hash: String,
    /// 1-based indexes into the template's transaction list that must be
    /// present in the final block if this one is.
    pub depends: Vec<u64>,
    /// Fee in satoshis; negative for coinbase transactions, absent when
    /// unknown.
    pub fee: Option<i64>,
    /// Total sigops cost, absent when unknown.
    pub sigops: Option<u64>,
    pub weight: Option<u64>,
}

/// A required payee of a block template.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct MasternodeTemplate {
    /// The payee address.
    pub payee: String,
    /// The payee scriptPubKey.
    pub script: String,
    /// Required amount to pay, in satoshis.
    pub amount: u64,
}

/// Result of `getblocktemplate`.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct BlockTemplate {
    /// Preferred block version.
    pub version: u64,
    /// Block rules that are to be enforced.
    pub rules: Vec<String>,
    /// Pending, supported versionbit (BIP 9) softfork deployments; each value
    /// is the bit indicating acceptance.
    #[serde(rename = "vbavailable")]
    pub vb_available: HashMap<String, u32>,
    /// Bit mask of versionbits the server requires set in submissions.
    #[serde(rename = "vbrequired")]
    pub vb_required: u32,
    #[serde(rename = "previousblockhash")]
    pub previous_block_hash: String,
    /// Non-coinbase transactions to include in the next block.
    pub transactions: Vec<TransactionTemplate>,
    /// Data to include in the coinbase's scriptSig; keys are to be ignored.
    #[serde(rename = "coinbaseaux")]
    pub coinbase_aux: HashMap<String, String>,
    /// Maximum allowable input to the coinbase transaction, in satoshis.
    #[serde(rename = "coinbasevalue")]
    pub coinbase_value: u64,
    /// Information for the coinbase transaction, shape left to the caller.
    #[serde(rename = "coinbasetxn")]
    pub coinbase_txn: Option<serde_json::Value>,
    /// The hash target.
    pub target: String,
    /// Minimum timestamp appropriate for the next block.
    #[serde(rename = "mintime")]
    pub min_time: u64,
    /// Ways the template may be changed, e.g. `time`, `transactions`.
    pub mutable: Vec<String>,
    #[serde(rename = "noncerange")]
    pub nonce_range: String,
    #[serde(rename = "sigoplimit")]
    pub sig_op_limit: u64,
    #[serde(rename = "sizelimit")]
    pub size_limit: u64,
    #[serde(rename = "weightlimit")]
    pub weight_limit: u64,
    #[serde(rename = "curtime")]
    pub current_time: u64,
    /// Compressed target of the next block.
    pub bits: String,
    /// Height of the next block.
    pub height: u64,
    /// Required masternode payee of the next block.
    pub masternode: Option<MasternodeTemplate>,
    #[serde(default)]
    pub masternode_payments_enforced: bool,
    /// Required superblock payees of the next block.
    #[serde(default)]
    pub superblock: Vec<MasternodeTemplate>,
    #[serde(default)]
    pub superblocks_started: bool,
    #[serde(default)]
    pub superblocks_enabled: bool,
}

// ---------------- network ----------------

/// The `addnode` sub-commands.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddNodeCommand {
    /// Add a node to the list.
    Add,
    /// Remove a node from the list.
    Remove,
    /// Try a connection to the node once.
    OneTry,
}

/// The `setban` sub-commands.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SetBanCommand {
    Add,
    Remove,
}

/// Connection details of an added node.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct AddedNodeAddress {
    /// The server IP and port we're connected to.
    pub address: String,
    /// `inbound` or `outbound`.
    pub connected: String,
}

/// One entry of a `getaddednodeinfo` result.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct AddedNodeInfo {
    /// The node IP address or name, as provided to `addnode`.
    #[serde(rename = "addednode")]
    pub added_node: String,
    pub connected: bool,
    /// Connection details, populated only when connected.
    #[serde(default)]
    pub addresses: Vec<AddedNodeAddress>,
}

/// The upload target of the node.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct UploadTarget {
    /// Length of the measuring timeframe in seconds.
    pub timeframe: u64,
    /// Target in bytes.
    pub target: u64,
    pub target_reached: bool,
    pub serve_historical_blocks: bool,
    pub bytes_left_in_cycle: u64,
    pub time_left_in_cycle: u64,
}

/// Result of `getnettotals`.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct NetworkTotals {
    #[serde(rename = "totalbytesrecv")]
    pub total_bytes_recv: u64,
    #[serde(rename = "totalbytessent")]
    pub total_bytes_sent: u64,
    /// Current UNIX time in milliseconds.
    #[serde(rename = "timemillis")]
    pub time_millis: u64,
    #[serde(rename = "uploadtarget")]
    pub upload_target: UploadTarget,
}

/// A single reachable network.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct Network {
    /// Network name: `ipv4`, `ipv6` or `onion`.
    pub name: String,
    /// True when limited, e.g. via `-onlynet`.
    pub limited: bool,
    pub reachable: bool,
    /// Proxy used for this network, empty if none.
    pub proxy: String,
    pub proxy_randomize_credentials: bool,
}

/// A local address the node listens on.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct LocalAddress {
    pub address: String,
    pub port: u16,
    /// Relative score of the address.
    pub score: u64,
}

/// Result of `getnetworkinfo`.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct NetworkInfo {
    /// The server version.
    pub version: u64,
    pub subversion: String,
    #[serde(rename = "protocolversion")]
    pub protocol_version: u64,
    /// Services the node offers to the network.
    #[serde(rename = "localservices")]
    pub local_services: String,
    /// True if transaction relay is requested from peers.
    #[serde(rename = "localrelay")]
    pub local_relay: bool,
    #[serde(rename = "timeoffset")]
    pub time_offset: i64,
    pub connections: u64,
    #[serde(rename = "networkactive")]
    pub network_active: bool,
    pub networks: Vec<Network>,
    /// Minimum relay fee in SYS/kB.
    #[serde(rename = "relayfee")]
    pub relay_fee: f64,
    /// Minimum fee increment for mempool limiting or replacement, SYS/kB.
    #[serde(rename = "incrementalfee")]
    pub incremental_fee: f64,
    #[serde(rename = "localaddresses")]
    pub local_addresses: Vec<LocalAddress>,
    /// Any network and blockchain warnings.
    pub warnings: String,
}

/// One entry of a `getpeerinfo` result.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct PeerInfo {
    /// Peer index.
    pub id: u64,
    /// IP address and port of the peer.
    pub addr: String,
    /// Bind address of the connection to the peer.
    #[serde(rename = "addrbind")]
    pub addr_bind: Option<String>,
    /// Local address as reported by the peer.
    #[serde(rename = "addrlocal")]
    pub addr_local: Option<String>,
    /// Services offered by the peer.
    pub services: String,
    /// True if the peer asked us to relay transactions.
    #[serde(rename = "relaytxes")]
    pub relay_txes: bool,
    #[serde(rename = "lastsend")]
    pub last_send: u64,
    #[serde(rename = "lastrecv")]
    pub last_recv: u64,
    #[serde(rename = "bytessent")]
    pub bytes_sent: u64,
    #[serde(rename = "bytesrecv")]
    pub bytes_recv: u64,
    #[serde(rename = "conntime")]
    pub conn_time: u64,
    #[serde(rename = "timeoffset")]
    pub time_offset: i64,
    /// Ping time in decimal seconds, if available.
    #[serde(rename = "pingtime")]
    pub ping_time: Option<f64>,
    /// Minimum observed ping time, if any.
    #[serde(rename = "minping")]
    pub min_ping: Option<f64>,
    /// Ping wait time, if non-zero.
    #[serde(rename = "pingwait")]
    pub ping_wait: Option<f64>,
    /// Peer version, such as 70001.
    pub version: u64,
    /// Peer sub-version, such as "Satoshi:0.8.5".
    pub subver: String,
    pub inbound: bool,
    /// True if the connection was due to `addnode`/`-connect`.
    #[serde(rename = "addnode")]
    pub add_node: bool,
    #[serde(rename = "startingheight")]
    pub starting_height: i64,
    #[serde(rename = "banscore")]
    pub ban_score: i64,
    /// Last header we have in common with this peer.
    pub synced_headers: i64,
    /// Last block we have in common with this peer.
    pub synced_blocks: i64,
    /// Heights of blocks we're currently asking from this peer.
    pub inflight: Vec<u64>,
    pub whitelisted: bool,
    /// Total bytes sent aggregated by message type.
    #[serde(rename = "bytessent_per_msg", default)]
    pub bytes_sent_per_msg: HashMap<String, u64>,
    /// Total bytes received aggregated by message type.
    #[serde(rename = "bytesrecv_per_msg", default)]
    pub bytes_recv_per_msg: HashMap<String, u64>,
}

/// One entry of a `listbanned` result.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct BannedNode {
    /// The banned IP/Subnet.
    pub address: String,
    pub banned_until: Option<u64>,
    pub ban_created: Option<u64>,
    pub ban_reason: Option<String>,
}

// ---------------- rawtransactions ----------------

/// A transaction input as passed to `createrawtransaction`.
#[derive(Clone, Debug, Serialize)]
pub struct CreateRawTransactionInput {
    pub txid: String,
    pub vout: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,
}

/// A script signature.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct ScriptSig {
    pub asm: String,
    pub hex: String,
}

/// A transaction input of a decoded transaction.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct RawTransactionVin {
    /// Absent for coinbase inputs.
    pub txid: Option<String>,
    pub vout: Option<u32>,
    #[serde(rename = "scriptSig")]
    pub script_sig: Option<ScriptSig>,
    /// Present only for coinbase inputs.
    pub coinbase: Option<String>,
    #[serde(rename = "txinwitness")]
    pub txin_witness: Option<Vec<String>>,
    pub sequence: u64,
}

/// A transaction output of a decoded transaction.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct RawTransactionVout {
    /// Value in SYS.
    pub value: f64,
    /// Output index.
    pub n: u32,
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: ScriptPubKey,
}

/// The verbose `getrawtransaction`/`decoderawtransaction` result.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct RawTransactionInfo {
    /// Serialized transaction, absent on `decoderawtransaction`.
    pub hex: Option<String>,
    pub txid: String,
    /// Hash including witness data.
    pub hash: Option<String>,
    pub size: u64,
    pub vsize: Option<u64>,
    pub version: u32,
    #[serde(rename = "locktime")]
    pub lock_time: u32,
    pub vin: Vec<RawTransactionVin>,
    pub vout: Vec<RawTransactionVout>,
    /// Fields below are present only for confirmed transactions.
    #[serde(rename = "blockhash")]
    pub block_hash: Option<String>,
    pub confirmations: Option<u64>,
    pub time: Option<u64>,
    #[serde(rename = "blocktime")]
    pub block_time: Option<u64>,
}

// ---------------- governance ----------------

/// Result of `getgovernanceinfo`.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct GovernanceInfo {
    /// Absolute minimum number of votes to trigger a governance action.
    #[serde(rename = "governanceminquorum")]
    pub governance_min_quorum: i64,
    /// Sentinel watchdog expiration time in seconds, DEPRECATED.
    #[serde(rename = "masternodewatchdogmaxseconds")]
    pub masternode_watchdog_max_seconds: i64,
    /// Sentinel ping expiration time in seconds.
    #[serde(rename = "sentinelpingmaxseconds")]
    pub sentinel_ping_max_seconds: i64,
    /// Collateral fee to create a proposal, in SYS.
    #[serde(rename = "proposalfee")]
    pub proposal_fee: f64,
    /// Number of blocks between superblocks.
    #[serde(rename = "superblockcycle")]
    pub superblock_cycle: i64,
    #[serde(rename = "lastsuperblock")]
    pub last_superblock: i64,
    #[serde(rename = "nextsuperblock")]
    pub next_superblock: i64,
    /// Maximum governance object data size in bytes.
    #[serde(rename = "maxgovobjdatasize")]
    pub max_gov_object_data_size: i64,
}

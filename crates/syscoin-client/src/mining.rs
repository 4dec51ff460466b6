//! The `mining` namespace.

use std::sync::Arc;

use crate::client::RpcClient;
use crate::json;
use crate::rpc_api::into_json;
use crate::{Error, Result, RpcApi};

/// Sub-client for the `mining` calls.
pub struct MiningClient<R = RpcClient> {
    rpc: Arc<R>,
}

impl<R: RpcApi + Send + Sync> MiningClient<R> {
    pub(crate) fn new(rpc: Arc<R>) -> Self {
        Self { rpc }
    }

    /// Creates a new block paying the coinbase to `coinbase` and returns the
    /// information required to merge-mine it.
    pub async fn create_aux_block(&self, coinbase: &str) -> Result<json::MergeMineInfo> {
        self.rpc.call("createauxblock", &[into_json(coinbase)?]).await
    }

    /// Creates or submits a merge-mined block.
    ///
    /// Without arguments, creates a new block and returns the information
    /// required to merge-mine it. With arguments, submits a solved auxpow
    /// for a previously returned block. Passing only one of the two is
    /// rejected locally, before any call.
    pub async fn get_aux_block(
        &self,
        hash: Option<&str>,
        aux_pow: Option<&str>,
    ) -> Result<json::MergeMineInfo> {
        let params = match (hash, aux_pow) {
            (Some(hash), Some(aux_pow)) => vec![into_json(hash)?, into_json(aux_pow)?],
            (None, None) => vec![],
            _ => return Err(Error::AuxBlockArguments),
        };

        self.rpc.call("getauxblock", &params).await
    }

    /// Returns the data needed to construct a block to work on, as one
    /// object parameter per BIP 22. All arguments are optional and left off
    /// the wire when empty; a `mode` of `proposal` selects proposal mode
    /// (BIP 23).
    pub async fn get_block_template(
        &self,
        mode: Option<&str>,
        capabilities: &[&str],
        rules: &[&str],
    ) -> Result<json::BlockTemplate> {
        let payload = json::GetBlockTemplateRequest {
            mode: mode.map(str::to_owned),
            capabilities: capabilities.iter().map(|c| (*c).to_owned()).collect(),
            rules: rules.iter().map(|r| (*r).to_owned()).collect(),
        };
        self.rpc.call("getblocktemplate", &[into_json(payload)?]).await
    }
}

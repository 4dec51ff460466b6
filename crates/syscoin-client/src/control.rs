//! The `control` namespace.

use std::collections::HashMap;
use std::sync::Arc;

use crate::client::RpcClient;
use crate::json;
use crate::rpc_api::into_json;
use crate::{Error, Result, RpcApi};

/// Sub-client for the `control` calls.
pub struct ControlClient<R = RpcClient> {
    rpc: Arc<R>,
}

impl<R: RpcApi + Send + Sync> ControlClient<R> {
    pub(crate) fn new(rpc: Arc<R>) -> Self {
        Self { rpc }
    }

    /// Returns the help text for the given command.
    pub async fn help(&self, command: &str) -> Result<String> {
        self.rpc.call("help", &[into_json(command)?]).await
    }

    /// Returns general information about memory usage.
    pub async fn get_memory_info(&self) -> Result<json::MemoryInfo> {
        self.rpc.call("getmemoryinfo", &[]).await
    }

    /// Gets and sets the logging configuration.
    ///
    /// Without arguments, returns the categories currently being debug
    /// logged. With arguments, adds or removes categories; filters are
    /// evaluated include first, so a category in both lists ends up
    /// excluded. An exclude filter without an include filter is rejected
    /// locally, before any call.
    ///
    /// `all`/`1` stand for every category, `none`/`0` for no category.
    pub async fn logging(
        &self,
        include: Option<&[&str]>,
        exclude: Option<&[&str]>,
    ) -> Result<HashMap<String, bool>> {
        let mut params = Vec::with_capacity(2);
        match (include, exclude) {
            (Some(include), Some(exclude)) => {
                params.push(into_json(include)?);
                params.push(into_json(exclude)?);
            }
            (Some(include), None) => params.push(into_json(include)?),
            (None, Some(_)) => return Err(Error::LoggingFilters),
            (None, None) => {}
        }

        self.rpc.call("logging", &params).await
    }

    /// Stops the running node.
    pub async fn stop(&self) -> Result<String> {
        self.rpc.call("stop", &[]).await
    }

    /// Returns the total uptime of the server in seconds.
    pub async fn uptime(&self) -> Result<u64> {
        self.rpc.call("uptime", &[]).await
    }
}

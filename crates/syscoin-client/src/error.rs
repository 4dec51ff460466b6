pub type Result<T> = std::result::Result<T, Error>;

/// The error type for errors produced in this library.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Transport failures, envelope decode failures and errors reported by
    /// the node, as classified by the underlying JSON-RPC client.
    #[error("JSON-RPC error: {0}")]
    JsonRpc(#[from] jsonrpc::Error),

    /// Argument or result (de)serialization failed locally.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::error::Error),

    /// `logging` was given an exclude filter without an include filter.
    #[error("must define include and exclude filters, or include only, or neither")]
    LoggingFilters,

    /// `getblockheaders` was asked for more headers than the node returns.
    #[error("cannot request more than {0} headers")]
    TooManyHeaders(u32),

    /// `getauxblock` takes a block hash and an auxpow together or not at all.
    #[error("block hash and auxpow must be passed together or not at all")]
    AuxBlockArguments,
}

impl Error {
    /// The error object reported by the node, if that is what this error is.
    ///
    /// Lets callers tell a remote business error apart from transport and
    /// decode failures without matching the nested enum themselves.
    pub fn rpc_error(&self) -> Option<&jsonrpc::RpcError> {
        match self {
            Error::JsonRpc(jsonrpc::Error::Rpc(e)) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_error_accessor_only_matches_server_errors() {
        let rpc = Error::JsonRpc(jsonrpc::Error::Rpc(jsonrpc::RpcError {
            code: -5,
            message: "Invalid address".to_owned(),
        }));
        assert_eq!(rpc.rpc_error().unwrap().message, "Invalid address");

        let local = Error::LoggingFilters;
        assert!(local.rpc_error().is_none());
    }
}

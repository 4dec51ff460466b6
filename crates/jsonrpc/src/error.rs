//! Error types shared by all transports.

use std::{error, fmt};

use serde::{Deserialize, Serialize};

/// A library error.
#[derive(Debug)]
pub enum Error {
    /// The transport failed before a response envelope was obtained.
    Transport(Box<dyn error::Error + Send + Sync>),
    /// An envelope or payload could not be (de)serialized.
    Json(serde_json::Error),
    /// The server reported an error in the response envelope.
    Rpc(RpcError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {
            Error::Transport(ref e) => write!(f, "transport error: {}", e),
            Error::Json(ref e) => write!(f, "parsing JSON failed: {}", e),
            Error::Rpc(ref e) => write!(f, "RPC error response: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Transport(ref e) => Some(&**e),
            Error::Json(ref e) => Some(e),
            Error::Rpc(ref e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<RpcError> for Error {
    fn from(e: RpcError) -> Self {
        Error::Rpc(e)
    }
}

/// The error object a server places in a response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RpcError {
    /// The numeric error code.
    pub code: i32,
    /// A human readable description of the failure.
    pub message: String,
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl error::Error for RpcError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_error_display_keeps_the_server_message() {
        let e = RpcError {
            code: -5,
            message: "Invalid address".to_owned(),
        };
        assert_eq!(e.to_string(), "Invalid address (-5)");
    }

    #[test]
    fn rpc_error_round_trips() {
        let e: RpcError =
            serde_json::from_str(r#"{"code": -1, "message": "m"}"#).unwrap();
        assert_eq!(
            e,
            RpcError {
                code: -1,
                message: "m".to_owned()
            }
        );
    }
}

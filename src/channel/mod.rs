// Method-call channels between a host shell and embedded plugins
//
// A channel is a named endpoint on a binary messenger. Method calls are
// encoded with a codec, delivered to whichever handler the host has bound
// to the name, and answered with a success value, an error, or the
// not-implemented sentinel.

pub mod codec;
pub mod messenger;
pub mod method_channel;
pub mod registrar;

pub use codec::{JsonMethodCodec, MethodCodec};
pub use messenger::{BinaryMessageHandler, BinaryMessenger, HostMessenger};
pub use method_channel::{MethodCallHandler, MethodChannel};
pub use registrar::{HostRegistrar, Plugin, Registrar};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Channel and codec errors
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Codec error: {0}")]
    Codec(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Method returned error {code}: {}", .message.as_deref().unwrap_or("<no message>"))]
    MethodError {
        code: String,
        message: Option<String>,
        details: Value,
    },

    #[error("Method not implemented: {0}")]
    NotImplemented(String),

    #[error("Messenger error: {0}")]
    Messenger(String),
}

pub type ChannelResult<T> = Result<T, ChannelError>;

/// A named method invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(rename = "args", default)]
    pub arguments: Value,
}

impl MethodCall {
    /// Create a call with no arguments
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Value::Null,
        }
    }

    /// Create a call carrying arguments
    pub fn with_arguments(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// Outcome of a method call
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    Success(Value),
    Error {
        code: String,
        message: Option<String>,
        details: Value,
    },
    /// No handler exists for the requested method
    NotImplemented,
}

impl MethodResponse {
    pub fn success(value: impl Into<Value>) -> Self {
        MethodResponse::Success(value.into())
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        MethodResponse::Error {
            code: code.into(),
            message: Some(message.into()),
            details: Value::Null,
        }
    }

    pub fn not_implemented() -> Self {
        MethodResponse::NotImplemented
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, MethodResponse::NotImplemented)
    }

    /// Convert into a `Result`, naming `method` if it was not implemented
    pub fn into_result(self, method: &str) -> ChannelResult<Value> {
        match self {
            MethodResponse::Success(value) => Ok(value),
            MethodResponse::Error {
                code,
                message,
                details,
            } => Err(ChannelError::MethodError {
                code,
                message,
                details,
            }),
            MethodResponse::NotImplemented => Err(ChannelError::NotImplemented(method.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_call_constructors() {
        let call = MethodCall::new("getPlatformVersion");
        assert_eq!(call.arguments, Value::Null);

        let call = MethodCall::with_arguments("save", json!({"id": 3}));
        assert_eq!(call.arguments["id"], 3);
    }

    #[test]
    fn test_sentinel_is_distinct_from_values() {
        assert!(MethodResponse::not_implemented().is_not_implemented());
        assert!(!MethodResponse::success("").is_not_implemented());
        assert!(!MethodResponse::Success(Value::Null).is_not_implemented());
    }

    #[test]
    fn test_into_result() {
        let value = MethodResponse::success("iOS 17.0").into_result("getPlatformVersion").unwrap();
        assert_eq!(value, json!("iOS 17.0"));

        let err = MethodResponse::not_implemented().into_result("nope").unwrap_err();
        assert!(matches!(err, ChannelError::NotImplemented(ref m) if m == "nope"));

        let err = MethodResponse::error("UNAVAILABLE", "no version")
            .into_result("getPlatformVersion")
            .unwrap_err();
        assert!(matches!(err, ChannelError::MethodError { ref code, .. } if code == "UNAVAILABLE"));
    }
}

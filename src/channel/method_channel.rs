// Typed method channels on top of a binary messenger

use crate::channel::{
    BinaryMessageHandler, BinaryMessenger, ChannelResult, JsonMethodCodec, MethodCall, MethodCodec,
    MethodResponse,
};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Receives decoded method calls for a channel
pub trait MethodCallHandler: Send + Sync {
    fn on_method_call(&self, call: &MethodCall) -> MethodResponse;
}

/// A named channel that speaks method calls over a binary messenger
#[derive(Clone)]
pub struct MethodChannel {
    name: String,
    messenger: Arc<dyn BinaryMessenger>,
    codec: Arc<dyn MethodCodec>,
}

impl MethodChannel {
    /// Create a channel using the JSON method codec
    pub fn new(name: impl Into<String>, messenger: Arc<dyn BinaryMessenger>) -> Self {
        Self::with_codec(name, messenger, Arc::new(JsonMethodCodec))
    }

    pub fn with_codec(
        name: impl Into<String>,
        messenger: Arc<dyn BinaryMessenger>,
        codec: Arc<dyn MethodCodec>,
    ) -> Self {
        Self {
            name: name.into(),
            messenger,
            codec,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Install `handler` as the sole receiver for this channel, or clear it with `None`
    pub fn set_method_call_handler(&self, handler: Option<Arc<dyn MethodCallHandler>>) -> ChannelResult<()> {
        let Some(handler) = handler else {
            return self.messenger.set_message_handler(&self.name, None);
        };

        let codec = Arc::clone(&self.codec);
        let channel = self.name.clone();
        let binary: BinaryMessageHandler = Arc::new(move |message: &[u8]| {
            let call = match codec.decode_method_call(message) {
                Ok(call) => call,
                Err(e) => {
                    log::warn!("Dropping undecodable message on {}: {}", channel, e);
                    return Vec::new();
                }
            };

            let response = handler.on_method_call(&call);
            codec.encode_response(&response).unwrap_or_else(|e| {
                log::warn!("Failed to encode response for {} on {}: {}", call.method, channel, e);
                Vec::new()
            })
        });

        self.messenger.set_message_handler(&self.name, Some(binary))
    }

    /// Invoke `method` on whatever is bound to this channel.
    ///
    /// A channel with no handler answers `NotImplemented`.
    pub fn invoke_method(&self, method: &str, arguments: Value) -> ChannelResult<MethodResponse> {
        let call = MethodCall::with_arguments(method, arguments);
        let message = self.codec.encode_method_call(&call)?;

        match self.messenger.send(&self.name, &message)? {
            Some(reply) => self.codec.decode_response(&reply),
            None => Ok(MethodResponse::NotImplemented),
        }
    }
}

impl fmt::Debug for MethodChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodChannel").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::HostMessenger;
    use serde_json::json;

    struct Greeter;

    impl MethodCallHandler for Greeter {
        fn on_method_call(&self, call: &MethodCall) -> MethodResponse {
            match call.method.as_str() {
                "greet" => MethodResponse::success(format!("hello {}", call.arguments["name"].as_str().unwrap_or("?"))),
                "fail" => MethodResponse::error("BAD", "asked to fail"),
                _ => MethodResponse::not_implemented(),
            }
        }
    }

    fn channel() -> (Arc<HostMessenger>, MethodChannel) {
        let messenger = Arc::new(HostMessenger::new());
        let channel = MethodChannel::new("greeter", messenger.clone());
        channel.set_method_call_handler(Some(Arc::new(Greeter))).unwrap();
        (messenger, channel)
    }

    #[test]
    fn test_invoke_success() {
        let (_, channel) = channel();
        let response = channel.invoke_method("greet", json!({"name": "ada"})).unwrap();
        assert_eq!(response, MethodResponse::success("hello ada"));
    }

    #[test]
    fn test_invoke_error_and_unknown() {
        let (_, channel) = channel();
        assert!(matches!(
            channel.invoke_method("fail", Value::Null).unwrap(),
            MethodResponse::Error { ref code, .. } if code == "BAD"
        ));
        assert!(channel.invoke_method("other", Value::Null).unwrap().is_not_implemented());
    }

    #[test]
    fn test_unbound_channel_is_not_implemented() {
        let (messenger, channel) = channel();
        channel.set_method_call_handler(None).unwrap();
        assert!(!messenger.has_handler("greeter").unwrap());
        assert!(channel.invoke_method("greet", Value::Null).unwrap().is_not_implemented());
    }

    #[test]
    fn test_garbage_message_gets_empty_reply() {
        let (messenger, _channel) = channel();
        let reply = messenger.send("greeter", b"\xff\xfe").unwrap();
        assert_eq!(reply, Some(Vec::new()));
    }
}

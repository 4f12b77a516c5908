// Method codecs
//
// The JSON codec frames calls as `{"method": .., "args": ..}` and
// responses as envelopes: `[value]` for success, `[code, message, details]`
// for errors, and an empty reply for the not-implemented sentinel.

use crate::channel::{ChannelError, ChannelResult, MethodCall, MethodResponse};
use serde_json::Value;

/// Encodes method calls and their responses to bytes and back
pub trait MethodCodec: Send + Sync {
    fn encode_method_call(&self, call: &MethodCall) -> ChannelResult<Vec<u8>>;

    fn decode_method_call(&self, message: &[u8]) -> ChannelResult<MethodCall>;

    fn encode_response(&self, response: &MethodResponse) -> ChannelResult<Vec<u8>>;

    fn decode_response(&self, reply: &[u8]) -> ChannelResult<MethodResponse>;
}

/// UTF-8 JSON method codec
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMethodCodec;

impl MethodCodec for JsonMethodCodec {
    fn encode_method_call(&self, call: &MethodCall) -> ChannelResult<Vec<u8>> {
        Ok(serde_json::to_vec(call)?)
    }

    fn decode_method_call(&self, message: &[u8]) -> ChannelResult<MethodCall> {
        let value: Value = serde_json::from_slice(message)?;
        let has_method = value
            .as_object()
            .ok_or_else(|| ChannelError::Codec("method call must be a JSON object".to_string()))?
            .get("method")
            .is_some_and(Value::is_string);
        if !has_method {
            return Err(ChannelError::Codec("method call is missing a string `method`".to_string()));
        }

        Ok(serde_json::from_value(value)?)
    }

    fn encode_response(&self, response: &MethodResponse) -> ChannelResult<Vec<u8>> {
        let envelope = match response {
            MethodResponse::Success(value) => Value::Array(vec![value.clone()]),
            MethodResponse::Error {
                code,
                message,
                details,
            } => Value::Array(vec![
                Value::String(code.clone()),
                message.clone().map(Value::String).unwrap_or(Value::Null),
                details.clone(),
            ]),
            MethodResponse::NotImplemented => return Ok(Vec::new()),
        };

        Ok(serde_json::to_vec(&envelope)?)
    }

    fn decode_response(&self, reply: &[u8]) -> ChannelResult<MethodResponse> {
        if reply.is_empty() {
            return Ok(MethodResponse::NotImplemented);
        }

        let envelope: Value = serde_json::from_slice(reply)?;
        let Value::Array(mut items) = envelope else {
            return Err(ChannelError::Codec("response envelope must be a JSON array".to_string()));
        };

        match items.len() {
            1 => Ok(MethodResponse::Success(items.remove(0))),
            3 => {
                let details = items.pop().unwrap_or(Value::Null);
                let message = match items.pop() {
                    Some(Value::String(message)) => Some(message),
                    Some(Value::Null) | None => None,
                    Some(other) => {
                        return Err(ChannelError::Codec(format!(
                            "error message must be a string, got {}",
                            other
                        )));
                    }
                };
                let code = match items.pop() {
                    Some(Value::String(code)) => code,
                    _ => return Err(ChannelError::Codec("error code must be a string".to_string())),
                };

                Ok(MethodResponse::Error {
                    code,
                    message,
                    details,
                })
            }
            n => Err(ChannelError::Codec(format!("invalid envelope length {}", n))),
        }
    }
}

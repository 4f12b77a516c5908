// Plugin registration

use crate::channel::{BinaryMessenger, ChannelResult, HostMessenger, MethodCallHandler, MethodChannel};
use std::sync::Arc;

/// Capability handed to plugins by the host when they register
pub trait Registrar: Send + Sync {
    /// The messenger channels should be created on
    fn messenger(&self) -> Arc<dyn BinaryMessenger>;

    /// Make `delegate` the handler for `channel`
    fn add_method_call_delegate(
        &self,
        delegate: Arc<dyn MethodCallHandler>,
        channel: &MethodChannel,
    ) -> ChannelResult<()> {
        channel.set_method_call_handler(Some(delegate))
    }
}

/// A plugin that answers method calls on one fixed channel
pub trait Plugin: MethodCallHandler + Sized + 'static {
    /// Wire-level channel name
    const CHANNEL_NAME: &'static str;

    /// Create the plugin's channel on the registrar's messenger and install
    /// the plugin as its handler.
    fn register_with(self, registrar: &dyn Registrar) -> ChannelResult<MethodChannel> {
        let channel = MethodChannel::new(Self::CHANNEL_NAME, registrar.messenger());
        registrar.add_method_call_delegate(Arc::new(self), &channel)?;
        log::debug!("Registered plugin on channel {}", Self::CHANNEL_NAME);
        Ok(channel)
    }
}

/// Registrar over an in-process host messenger
#[derive(Clone, Default)]
pub struct HostRegistrar {
    messenger: Arc<HostMessenger>,
}

impl HostRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share an existing messenger, e.g. one several registrars publish to
    pub fn with_messenger(messenger: Arc<HostMessenger>) -> Self {
        Self { messenger }
    }

    pub fn host_messenger(&self) -> &Arc<HostMessenger> {
        &self.messenger
    }
}

impl Registrar for HostRegistrar {
    fn messenger(&self) -> Arc<dyn BinaryMessenger> {
        self.messenger.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{MethodCall, MethodResponse};
    use serde_json::Value;

    struct Ping;

    impl MethodCallHandler for Ping {
        fn on_method_call(&self, call: &MethodCall) -> MethodResponse {
            if call.method == "ping" {
                MethodResponse::success("pong")
            } else {
                MethodResponse::not_implemented()
            }
        }
    }

    impl Plugin for Ping {
        const CHANNEL_NAME: &'static str = "ping_plugin";
    }

    #[test]
    fn test_register_binds_channel() {
        let registrar = HostRegistrar::new();
        let channel = Ping.register_with(&registrar).unwrap();

        assert_eq!(channel.name(), "ping_plugin");
        assert!(registrar.host_messenger().has_handler("ping_plugin").unwrap());
        assert_eq!(
            channel.invoke_method("ping", Value::Null).unwrap(),
            MethodResponse::success("pong")
        );
    }

    #[test]
    fn test_shared_messenger() {
        let messenger = Arc::new(HostMessenger::new());
        let first = HostRegistrar::with_messenger(messenger.clone());
        let second = HostRegistrar::with_messenger(messenger.clone());

        Ping.register_with(&first).unwrap();
        Ping.register_with(&second).unwrap();

        assert_eq!(messenger.channel_names().unwrap(), vec!["ping_plugin".to_string()]);
    }
}

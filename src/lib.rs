pub mod channel;
pub mod config;
pub mod platform;
pub mod plugin;

pub use channel::{
    ChannelError, ChannelResult, HostMessenger, HostRegistrar, MethodCall, MethodCallHandler, MethodChannel,
    MethodResponse, Plugin, Registrar,
};
pub use config::{BridgeConfig, ConfigError};
pub use plugin::{PlatformVersionBridge, PluginMethod, CHANNEL_NAME};

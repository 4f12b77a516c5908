// Platform version plugin
//
// Answers `getPlatformVersion` on the `bits_goals_module` channel with
// "<PlatformName> <osVersion>". Every other method gets the
// not-implemented sentinel.

use crate::channel::{MethodCall, MethodCallHandler, MethodResponse, Plugin};
#[cfg(feature = "platform-native")]
use crate::channel::{ChannelResult, MethodChannel, Registrar};
use crate::config::{BridgeConfig, ConfigResult};
use crate::platform::{PlatformVersion, VersionSource};
use std::sync::Arc;

/// Channel the bridge is bound to on the host
pub const CHANNEL_NAME: &str = "bits_goals_module";

/// Error code sent when the OS version cannot be read
pub const VERSION_UNAVAILABLE: &str = "UNAVAILABLE";

/// Methods the bridge understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginMethod {
    GetPlatformVersion,
}

impl PluginMethod {
    /// Look up a method by its wire name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "getPlatformVersion" => Some(PluginMethod::GetPlatformVersion),
            _ => None,
        }
    }
}

/// Exposes the host OS version over a method channel
pub struct PlatformVersionBridge {
    source: Arc<dyn VersionSource>,
    config: BridgeConfig,
}

impl PlatformVersionBridge {
    /// Create a bridge reading versions from `source`
    pub fn new(source: Arc<dyn VersionSource>) -> Self {
        Self {
            source,
            config: BridgeConfig::default(),
        }
    }

    /// Create a bridge with explicit configuration
    pub fn with_config(source: Arc<dyn VersionSource>, config: BridgeConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { source, config })
    }

    /// Create a bridge backed by the running system
    #[cfg(feature = "platform-native")]
    pub fn system() -> Self {
        Self::new(Arc::new(crate::platform::SystemVersionSource::new()))
    }

    /// Register a system-backed bridge with the host
    #[cfg(feature = "platform-native")]
    pub fn register(registrar: &dyn Registrar) -> ChannelResult<MethodChannel> {
        Self::system().register_with(registrar)
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Name prefixed to the version string
    pub fn platform_name(&self) -> &str {
        self.config
            .platform_name
            .as_deref()
            .unwrap_or_else(|| self.source.platform().display_name())
    }

    /// Answer a method call
    pub fn handle(&self, call: &MethodCall) -> MethodResponse {
        match PluginMethod::parse(&call.method) {
            Some(PluginMethod::GetPlatformVersion) => self.get_platform_version(),
            None => {
                if self.config.log_unhandled_calls {
                    log::warn!("Method not implemented on {}: {:?}", CHANNEL_NAME, call.method);
                } else {
                    log::debug!("Method not implemented on {}: {:?}", CHANNEL_NAME, call.method);
                }
                MethodResponse::not_implemented()
            }
        }
    }

    fn get_platform_version(&self) -> MethodResponse {
        match self.source.os_version() {
            Ok(version) => {
                let version = version.trim();
                if version.is_empty() {
                    log::warn!("OS version source for {} returned an empty version", self.source.platform());
                    return MethodResponse::error(VERSION_UNAVAILABLE, "OS version is empty");
                }

                let reported = PlatformVersion::new(self.platform_name(), version);
                log::debug!("Reporting platform version {}", reported);
                MethodResponse::success(reported.to_string())
            }
            Err(e) => {
                log::warn!("Could not read OS version: {}", e);
                MethodResponse::error(VERSION_UNAVAILABLE, e.to_string())
            }
        }
    }
}

impl MethodCallHandler for PlatformVersionBridge {
    fn on_method_call(&self, call: &MethodCall) -> MethodResponse {
        self.handle(call)
    }
}

impl Plugin for PlatformVersionBridge {
    const CHANNEL_NAME: &'static str = CHANNEL_NAME;
}

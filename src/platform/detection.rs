// Platform detection implementation

use crate::platform::OperatingSystem;

#[cfg(feature = "platform-native")]
use crate::platform::{PlatformError, PlatformResult, VersionSource};

/// Detect the operating system this build targets
pub fn detect_os() -> OperatingSystem {
    #[cfg(target_os = "linux")]
    {
        OperatingSystem::Linux
    }

    #[cfg(target_os = "macos")]
    {
        OperatingSystem::MacOS
    }

    #[cfg(target_os = "windows")]
    {
        OperatingSystem::Windows
    }

    #[cfg(target_os = "android")]
    {
        OperatingSystem::Android
    }

    #[cfg(target_os = "ios")]
    {
        OperatingSystem::iOS
    }

    #[cfg(target_arch = "wasm32")]
    {
        OperatingSystem::WebBrowser
    }

    #[cfg(not(any(
        target_os = "linux",
        target_os = "macos",
        target_os = "windows",
        target_os = "android",
        target_os = "ios",
        target_arch = "wasm32"
    )))]
    {
        OperatingSystem::Unknown
    }
}

/// Version source backed by the running system.
///
/// Every call goes back to the OS; nothing is cached.
#[cfg(feature = "platform-native")]
#[derive(Debug, Clone)]
pub struct SystemVersionSource {
    platform: OperatingSystem,
}

#[cfg(feature = "platform-native")]
impl SystemVersionSource {
    pub fn new() -> Self {
        Self {
            platform: detect_os(),
        }
    }
}

#[cfg(feature = "platform-native")]
impl Default for SystemVersionSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "platform-native")]
impl VersionSource for SystemVersionSource {
    fn platform(&self) -> OperatingSystem {
        self.platform
    }

    fn os_version(&self) -> PlatformResult<String> {
        let version = sysinfo::System::os_version()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .or_else(fallback_version);

        version.ok_or_else(|| {
            PlatformError::VersionUnavailable(format!(
                "{} did not report an OS version",
                self.platform
            ))
        })
    }
}

#[cfg(all(feature = "platform-native", target_os = "linux"))]
fn fallback_version() -> Option<String> {
    parse_os_release_version(&std::fs::read_to_string("/etc/os-release").ok()?)
}

#[cfg(all(feature = "platform-native", not(target_os = "linux")))]
fn fallback_version() -> Option<String> {
    None
}

/// Pull `VERSION_ID` (or `BUILD_ID` on rolling distributions) out of an os-release file
pub fn parse_os_release_version(content: &str) -> Option<String> {
    let field = |key: &str| {
        content.lines().find_map(|line| {
            line.strip_prefix(key)
                .map(|value| value.trim().trim_matches('"').to_string())
                .filter(|value| !value.is_empty())
        })
    };

    field("VERSION_ID=").or_else(|| field("BUILD_ID="))
}

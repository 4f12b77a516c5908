// Platform type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating system identification
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatingSystem {
    Linux,
    MacOS,
    Windows,
    Android,
    iOS,
    WebBrowser,
    Unknown,
}

impl OperatingSystem {
    /// Human-facing platform name, as prefixed to version strings
    pub fn display_name(&self) -> &'static str {
        match self {
            OperatingSystem::Linux => "Linux",
            OperatingSystem::MacOS => "macOS",
            OperatingSystem::Windows => "Windows",
            OperatingSystem::Android => "Android",
            OperatingSystem::iOS => "iOS",
            OperatingSystem::WebBrowser => "Web",
            OperatingSystem::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A platform name paired with the version it reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformVersion {
    pub platform_name: String,
    pub version: String,
}

impl PlatformVersion {
    pub fn new(platform_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            platform_name: platform_name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.platform_name, self.version)
    }
}

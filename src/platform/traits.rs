// Version source abstraction

use crate::platform::{OperatingSystem, PlatformError, PlatformResult};

/// Something that can report which platform we are on and its OS version.
///
/// Implementations are read on every request; they must not cache a
/// version string across calls.
pub trait VersionSource: Send + Sync {
    /// The platform this source reports for
    fn platform(&self) -> OperatingSystem;

    /// Read the current OS version string
    fn os_version(&self) -> PlatformResult<String>;
}

/// Version source with a fixed answer.
///
/// Useful for hosts that already know the OS version (an embedder that
/// got it from its own toolkit) and for tests.
#[derive(Debug, Clone)]
pub struct StaticVersionSource {
    platform: OperatingSystem,
    version: Option<String>,
}

impl StaticVersionSource {
    pub fn new(platform: OperatingSystem, version: impl Into<String>) -> Self {
        Self {
            platform,
            version: Some(version.into()),
        }
    }

    /// A source whose version read always fails
    pub fn unavailable(platform: OperatingSystem) -> Self {
        Self {
            platform,
            version: None,
        }
    }
}

impl VersionSource for StaticVersionSource {
    fn platform(&self) -> OperatingSystem {
        self.platform
    }

    fn os_version(&self) -> PlatformResult<String> {
        self.version.clone().ok_or_else(|| {
            PlatformError::VersionUnavailable(format!(
                "no version reported for {}",
                self.platform
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source() {
        let source = StaticVersionSource::new(OperatingSystem::iOS, "17.0");
        assert_eq!(source.platform(), OperatingSystem::iOS);
        assert_eq!(source.os_version().unwrap(), "17.0");
    }

    #[test]
    fn test_unavailable_source() {
        let source = StaticVersionSource::unavailable(OperatingSystem::Android);
        let err = source.os_version().unwrap_err();
        assert!(matches!(err, PlatformError::VersionUnavailable(_)));
    }
}

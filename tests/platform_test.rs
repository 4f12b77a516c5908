// Integration tests for platform module

use bits_goals_module::platform::{detect_os, OperatingSystem, StaticVersionSource, VersionSource};

#[test]
fn test_platform_detection() {
    let os = detect_os();
    assert_ne!(os, OperatingSystem::Unknown);
    assert!(!os.display_name().is_empty());
    assert!(!os.display_name().contains(' '));

    println!("Detected platform: {}", os);
}

#[test]
fn test_static_source_as_trait_object() {
    let source: Box<dyn VersionSource> = Box::new(StaticVersionSource::new(OperatingSystem::MacOS, "14.4"));
    assert_eq!(source.platform().display_name(), "macOS");
    assert_eq!(source.os_version().unwrap(), "14.4");
}

#[cfg(feature = "platform-native")]
#[test]
fn test_system_source_matches_detection() {
    let source = bits_goals_module::platform::SystemVersionSource::new();
    assert_eq!(source.platform(), detect_os());

    if let Ok(version) = source.os_version() {
        assert_eq!(version, version.trim());
        println!("OS version: {}", version);
    }
}

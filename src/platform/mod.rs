// Platform identification and OS version probing
//
// This module identifies the operating system the crate was built for
// and provides the version sources the bridge reads from at call time.

pub mod types;
pub mod traits;
pub mod detection;

// Re-exports
pub use types::*;
pub use traits::*;
pub use detection::*;

use thiserror::Error;

/// Platform-specific errors
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("OS version unavailable: {0}")]
    VersionUnavailable(String),
}

pub type PlatformResult<T> = Result<T, PlatformError>;

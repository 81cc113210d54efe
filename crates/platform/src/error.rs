//! Error types for fhel-platform

use thiserror::Error;

use crate::arch::Arch;
use crate::os::Os;

/// Errors that can occur in platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
  #[error("Unknown operating system: {0}")]
  UnknownOs(String),

  #[error("Unknown CPU architecture: {0}")]
  UnknownArch(String),

  #[error("Unknown compiler: {0}")]
  UnknownCompiler(String),

  #[error("Unknown build type: {0}")]
  UnknownBuildType(String),

  #[error("No release label for {arch} on {os}")]
  UnsupportedTarget { os: Os, arch: Arch },
}

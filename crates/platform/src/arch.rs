use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PlatformError;

/// CPU architectures libfhel binaries are released for
///
/// Names follow the build environment's conventions: `armv8` is the
/// 64-bit ARM profile (aarch64), `armv7` the 32-bit one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
  X86_64,
  Armv8,
  Armv7,
}

impl Arch {
  /// Detect the current CPU architecture at runtime
  pub fn current() -> Option<Self> {
    match std::env::consts::ARCH {
      "x86_64" => Some(Self::X86_64),
      "aarch64" => Some(Self::Armv8),
      "arm" => Some(Self::Armv7),
      _ => None,
    }
  }

  /// Returns the lowercase string identifier for this architecture
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::X86_64 => "x86_64",
      Self::Armv8 => "armv8",
      Self::Armv7 => "armv7",
    }
  }
}

impl FromStr for Arch {
  type Err = PlatformError;

  /// Parse a build-environment architecture name; `aarch64` and `arm64`
  /// are accepted as aliases for `armv8`
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "x86_64" | "amd64" => Ok(Self::X86_64),
      "armv8" | "aarch64" | "arm64" => Ok(Self::Armv8),
      "armv7" | "arm" => Ok(Self::Armv7),
      _ => Err(PlatformError::UnknownArch(s.to_string())),
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_accepts_aliases() {
    assert_eq!("aarch64".parse::<Arch>().unwrap(), Arch::Armv8);
    assert_eq!("arm64".parse::<Arch>().unwrap(), Arch::Armv8);
    assert_eq!("amd64".parse::<Arch>().unwrap(), Arch::X86_64);
  }

  #[test]
  fn parse_rejects_unknown_arch() {
    let err = "riscv64".parse::<Arch>().unwrap_err();
    assert!(matches!(err, PlatformError::UnknownArch(ref s) if s == "riscv64"));
  }

  #[test]
  fn display_round_trips() {
    for arch in [Arch::X86_64, Arch::Armv8, Arch::Armv7] {
      assert_eq!(arch.to_string().parse::<Arch>().unwrap(), arch);
    }
  }
}

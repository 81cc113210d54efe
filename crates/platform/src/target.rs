use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::arch::Arch;
use crate::error::PlatformError;
use crate::os::Os;
use crate::release;

/// Compilers recognized by the build environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compiler {
  Gcc,
  Clang,
  AppleClang,
  Msvc,
}

impl Compiler {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Gcc => "gcc",
      Self::Clang => "clang",
      Self::AppleClang => "apple-clang",
      Self::Msvc => "msvc",
    }
  }
}

impl FromStr for Compiler {
  type Err = PlatformError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "gcc" => Ok(Self::Gcc),
      "clang" => Ok(Self::Clang),
      "apple-clang" | "appleclang" => Ok(Self::AppleClang),
      "msvc" => Ok(Self::Msvc),
      _ => Err(PlatformError::UnknownCompiler(s.to_string())),
    }
  }
}

impl fmt::Display for Compiler {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Build variant requested for the compilation
///
/// `as_str` uses cmake casing since the value flows into the generated
/// toolchain file unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BuildType {
  Debug,
  Release,
  RelWithDebInfo,
  MinSizeRel,
}

impl BuildType {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Debug => "Debug",
      Self::Release => "Release",
      Self::RelWithDebInfo => "RelWithDebInfo",
      Self::MinSizeRel => "MinSizeRel",
    }
  }
}

impl FromStr for BuildType {
  type Err = PlatformError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "debug" => Ok(Self::Debug),
      "release" => Ok(Self::Release),
      "relwithdebinfo" => Ok(Self::RelWithDebInfo),
      "minsizerel" => Ok(Self::MinSizeRel),
      _ => Err(PlatformError::UnknownBuildType(s.to_string())),
    }
  }
}

impl fmt::Display for BuildType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Target descriptor for one libfhel build: OS, architecture, compiler,
/// and build variant, as supplied by the invoking build environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Target {
  pub os: Os,
  pub arch: Arch,
  pub compiler: Compiler,
  pub build_type: BuildType,
}

impl Target {
  /// Create a new target descriptor
  pub fn new(os: Os, arch: Arch, compiler: Compiler, build_type: BuildType) -> Self {
    Self { os, arch, compiler, build_type }
  }

  /// Detect a descriptor for the host: current OS and architecture, the
  /// OS-default compiler, and a Release build
  ///
  /// Returns `None` if the host OS or architecture is not supported
  pub fn host() -> Option<Self> {
    let os = Os::current()?;
    let arch = Arch::current()?;
    let compiler = match os {
      Os::Macos => Compiler::AppleClang,
      Os::Linux => Compiler::Gcc,
      Os::Android => Compiler::Clang,
    };
    Some(Self::new(os, arch, compiler, BuildType::Release))
  }

  /// Returns the canonical label used to name released artifacts for
  /// this target (e.g. `arm64-v8a` for 64-bit ARM on Android)
  ///
  /// Targets absent from the release map are an explicit error, never a
  /// silent default.
  pub fn release_label(&self) -> Result<&'static str, PlatformError> {
    release::release_label(self.os, self.arch).ok_or(PlatformError::UnsupportedTarget {
      os: self.os,
      arch: self.arch,
    })
  }

  /// Returns the target triple string (e.g. "android-armv8-Release")
  pub fn triple(&self) -> String {
    format!("{}-{}-{}", self.os, self.arch, self.build_type)
  }
}

impl fmt::Display for Target {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.triple())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn triple_format() {
    let target = Target::new(Os::Android, Arch::Armv8, Compiler::Clang, BuildType::Release);
    assert_eq!(target.triple(), "android-armv8-Release");

    let target = Target::new(Os::Linux, Arch::X86_64, Compiler::Gcc, BuildType::Debug);
    assert_eq!(target.triple(), "linux-x86_64-Debug");
  }

  #[test]
  fn host_is_supported_on_dev_machines() {
    // Development hosts (linux/macos on x86_64/aarch64) must detect
    if matches!(std::env::consts::OS, "linux" | "macos") {
      assert!(Target::host().is_some());
    }
  }

  #[test]
  fn release_label_for_unsupported_pair_errors() {
    let target = Target::new(Os::Linux, Arch::Armv7, Compiler::Gcc, BuildType::Release);
    let err = target.release_label().unwrap_err();
    assert!(matches!(
      err,
      PlatformError::UnsupportedTarget { os: Os::Linux, arch: Arch::Armv7 }
    ));
  }

  #[test]
  fn build_type_parses_case_insensitively() {
    assert_eq!("release".parse::<BuildType>().unwrap(), BuildType::Release);
    assert_eq!("RelWithDebInfo".parse::<BuildType>().unwrap(), BuildType::RelWithDebInfo);
    assert!("profile".parse::<BuildType>().is_err());
  }

  #[test]
  fn compiler_parses_apple_clang() {
    assert_eq!("apple-clang".parse::<Compiler>().unwrap(), Compiler::AppleClang);
  }
}

//! Generation of the cmake toolchain file.
//!
//! The external build consumes a toolchain file written into the build
//! folder. Its content is a pure function of the target descriptor, so
//! re-running generation overwrites the previous file byte for byte.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use fhel_platform::{Arch, Os, Target};
use tracing::debug;

use crate::Result;

/// Name of the generated toolchain file
pub const TOOLCHAIN_FILE: &str = "conan_toolchain.cmake";

/// Render the toolchain file content for `target`
pub fn render_toolchain(target: &Target) -> String {
  let mut out = String::new();

  out.push_str("# Toolchain generated by fhelpack; do not edit\n");
  let _ = writeln!(
    out,
    "set(CMAKE_BUILD_TYPE \"{}\" CACHE STRING \"Build type\")",
    target.build_type
  );
  out.push_str("set(CMAKE_POSITION_INDEPENDENT_CODE ON)\n");

  match target.os {
    Os::Android => {
      out.push_str("set(CMAKE_SYSTEM_NAME Android)\n");
      let _ = writeln!(out, "set(CMAKE_ANDROID_ARCH_ABI {})", android_abi(target.arch));
    }
    Os::Macos => {
      let _ = writeln!(out, "set(CMAKE_OSX_ARCHITECTURES {})", macos_arch(target.arch));
    }
    Os::Linux => {}
  }

  out
}

/// Write the toolchain file for `target` into `dir`, overwriting any
/// previous one, and return its path
pub fn generate_toolchain(target: &Target, dir: &Path) -> Result<PathBuf> {
  let path = dir.join(TOOLCHAIN_FILE);
  std::fs::write(&path, render_toolchain(target))?;
  debug!(path = %path.display(), "wrote toolchain file");
  Ok(path)
}

fn android_abi(arch: Arch) -> &'static str {
  match arch {
    Arch::X86_64 => "x86_64",
    Arch::Armv8 => "arm64-v8a",
    Arch::Armv7 => "armeabi-v7a",
  }
}

fn macos_arch(arch: Arch) -> &'static str {
  match arch {
    Arch::X86_64 => "x86_64",
    // armv7 never ships on macOS; arm64 is the only ARM profile there
    Arch::Armv8 | Arch::Armv7 => "arm64",
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use fhel_platform::{BuildType, Compiler};
  use tempfile::TempDir;

  fn android_target() -> Target {
    Target::new(Os::Android, Arch::Armv8, Compiler::Clang, BuildType::Release)
  }

  #[test]
  fn render_includes_build_type() {
    let target = Target::new(Os::Linux, Arch::X86_64, Compiler::Gcc, BuildType::Debug);
    let content = render_toolchain(&target);
    assert!(content.contains("set(CMAKE_BUILD_TYPE \"Debug\""));
    assert!(!content.contains("CMAKE_SYSTEM_NAME"));
  }

  #[test]
  fn render_android_sets_system_and_abi() {
    let content = render_toolchain(&android_target());
    assert!(content.contains("set(CMAKE_SYSTEM_NAME Android)"));
    assert!(content.contains("set(CMAKE_ANDROID_ARCH_ABI arm64-v8a)"));
  }

  #[test]
  fn render_macos_sets_osx_architectures() {
    let target = Target::new(Os::Macos, Arch::Armv8, Compiler::AppleClang, BuildType::Release);
    let content = render_toolchain(&target);
    assert!(content.contains("set(CMAKE_OSX_ARCHITECTURES arm64)"));
  }

  #[test]
  fn generate_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let target = android_target();

    let first = generate_toolchain(&target, temp.path()).unwrap();
    let content_first = std::fs::read(&first).unwrap();

    let second = generate_toolchain(&target, temp.path()).unwrap();
    let content_second = std::fs::read(&second).unwrap();

    assert_eq!(first, second);
    assert_eq!(content_first, content_second);
  }
}

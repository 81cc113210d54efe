//! The release architecture map.
//!
//! Released libfhel artifacts are named with a short canonical label per
//! (OS, architecture) pair rather than the raw architecture name. The map
//! is fixed at compile time.

use crate::arch::Arch;
use crate::os::Os;

/// Look up the canonical artifact label for an (OS, architecture) pair
///
/// Returns `None` for pairs that have no released binaries; callers must
/// treat that as "unsupported" rather than defaulting.
pub fn release_label(os: Os, arch: Arch) -> Option<&'static str> {
  match (os, arch) {
    (Os::Linux, Arch::X86_64) => Some("x64"),
    (Os::Android, Arch::X86_64) => Some("x86_64"),
    (Os::Android, Arch::Armv8) => Some("arm64-v8a"),
    (Os::Android, Arch::Armv7) => Some("armeabi-v7a"),
    (Os::Macos, Arch::X86_64) => Some("x64"),
    (Os::Macos, Arch::Armv8) => Some("arm64"),
    _ => None,
  }
}

/// Every supported (OS, architecture) pair, in map order
pub const SUPPORTED: &[(Os, Arch)] = &[
  (Os::Linux, Arch::X86_64),
  (Os::Android, Arch::X86_64),
  (Os::Android, Arch::Armv8),
  (Os::Android, Arch::Armv7),
  (Os::Macos, Arch::X86_64),
  (Os::Macos, Arch::Armv8),
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn supported_pairs_have_non_empty_labels() {
    for &(os, arch) in SUPPORTED {
      let label = release_label(os, arch);
      assert!(label.is_some(), "{}/{} should have a label", os, arch);
      assert!(!label.unwrap().is_empty());
    }
  }

  #[test]
  fn android_labels_use_abi_names() {
    assert_eq!(release_label(Os::Android, Arch::Armv8), Some("arm64-v8a"));
    assert_eq!(release_label(Os::Android, Arch::Armv7), Some("armeabi-v7a"));
    assert_eq!(release_label(Os::Android, Arch::X86_64), Some("x86_64"));
  }

  #[test]
  fn desktop_x86_64_maps_to_x64() {
    assert_eq!(release_label(Os::Linux, Arch::X86_64), Some("x64"));
    assert_eq!(release_label(Os::Macos, Arch::X86_64), Some("x64"));
  }

  #[test]
  fn unsupported_pairs_return_none() {
    assert_eq!(release_label(Os::Linux, Arch::Armv8), None);
    assert_eq!(release_label(Os::Linux, Arch::Armv7), None);
    assert_eq!(release_label(Os::Macos, Arch::Armv7), None);
  }
}

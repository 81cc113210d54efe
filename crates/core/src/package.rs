//! Artifact collection into the package folder.
//!
//! After the external build completes, every file matching the artifact
//! pattern is copied from the build output into the package folder,
//! preserving filenames. Zero matches is a valid (if useless) package.

use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::ConfigError;
use crate::Result;

/// Glob pattern matching the shared library artifacts produced by the build
pub const ARTIFACT_PATTERN: &str = "libfhel*";

/// Returns true if `name` matches a simple `prefix*suffix` glob pattern
/// (at most one `*`)
fn matches_pattern(name: &str, pattern: &str) -> bool {
  match pattern.split_once('*') {
    Some((prefix, suffix)) => {
      name.len() >= prefix.len() + suffix.len()
        && name.starts_with(prefix)
        && name.ends_with(suffix)
    }
    None => name == pattern,
  }
}

/// Copy every file under `source_folder` whose name matches `pattern`
/// into `package_folder`, returning the number of files copied
///
/// Fails with `ConfigError::MissingSourceRoot` or
/// `ConfigError::MissingPackageRoot` when a root was not supplied. An
/// empty source tree copies nothing and is not an error.
pub fn copy_artifacts(
  source_folder: Option<&Path>,
  package_folder: Option<&Path>,
  pattern: &str,
) -> Result<usize> {
  let source = source_folder.ok_or(ConfigError::MissingSourceRoot)?;
  let package = package_folder.ok_or(ConfigError::MissingPackageRoot)?;

  std::fs::create_dir_all(package)?;

  let mut copied = 0;
  for entry in WalkDir::new(source) {
    let entry = entry.map_err(std::io::Error::from)?;
    if !entry.file_type().is_file() {
      continue;
    }

    let name = entry.file_name().to_string_lossy();
    if !matches_pattern(&name, pattern) {
      continue;
    }

    let dest = package.join(entry.file_name());
    std::fs::copy(entry.path(), &dest)?;
    debug!(from = %entry.path().display(), to = %dest.display(), "copied artifact");
    copied += 1;
  }

  info!(copied, pattern = %pattern, "collected artifacts");
  Ok(copied)
}

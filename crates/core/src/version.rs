//! Version resolution from the recipe's marker file.
//!
//! The packaged library version lives in a single-line text file at a
//! fixed path under the recipe folder; it is read once per build and
//! whitespace-trimmed.

use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;
use crate::Result;

/// Relative path of the version marker under the recipe folder
pub const VERSION_FILE: &str = "dart/binary.version";

/// Read the packaged library version from the marker file under
/// `recipe_folder`
///
/// Fails with `ConfigError::MissingRoot` when the recipe folder was not
/// supplied and `ConfigError::MissingVersionFile` when the marker is
/// absent.
pub fn resolve_version(recipe_folder: Option<&Path>) -> Result<String> {
  let root = recipe_folder.ok_or(ConfigError::MissingRoot)?;

  let marker = root.join(VERSION_FILE);
  if !marker.exists() {
    return Err(ConfigError::MissingVersionFile(marker).into());
  }

  let version = std::fs::read_to_string(&marker)?.trim().to_string();
  debug!(version = %version, marker = %marker.display(), "resolved version");

  Ok(version)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::RecipeError;
  use tempfile::TempDir;

  fn recipe_with_version(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("dart")).unwrap();
    std::fs::write(temp.path().join(VERSION_FILE), content).unwrap();
    temp
  }

  #[test]
  fn resolve_trims_whitespace() {
    let temp = recipe_with_version("1.2.3\n");
    let version = resolve_version(Some(temp.path())).unwrap();
    assert_eq!(version, "1.2.3");
  }

  #[test]
  fn resolve_without_root_fails() {
    let err = resolve_version(None).unwrap_err();
    assert!(matches!(err, RecipeError::Config(ConfigError::MissingRoot)));
  }

  #[test]
  fn resolve_without_marker_fails() {
    let temp = TempDir::new().unwrap();
    let err = resolve_version(Some(temp.path())).unwrap_err();
    assert!(matches!(
      err,
      RecipeError::Config(ConfigError::MissingVersionFile(_))
    ));
  }
}

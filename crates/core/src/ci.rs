//! CI step-output export.
//!
//! When the recipe runs with the `ci` option, the package path is handed
//! to the surrounding automation by appending a `key=value` line to the
//! step-output file the CI system provides via `$GITHUB_OUTPUT`. The
//! export is advisory: it never fails an otherwise successful build.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};

/// Environment variable naming the CI step-output file
pub const CI_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Key under which the package path is exported
pub const PACKAGE_PATH_KEY: &str = "conan_package_path";

/// Append a single `conan_package_path=<package_folder>` line to
/// `output_file`, creating it if needed
pub fn append_package_path(output_file: &Path, package_folder: &Path) -> std::io::Result<()> {
  let mut file = OpenOptions::new().create(true).append(true).open(output_file)?;
  writeln!(file, "{}={}", PACKAGE_PATH_KEY, package_folder.display())?;
  Ok(())
}

/// Export the package path to the CI output file when `enabled`
///
/// A missing `$GITHUB_OUTPUT` or an unwritable file is logged and
/// ignored; the pipeline outcome does not depend on CI export.
pub fn export_ci_metadata(package_folder: &Path, enabled: bool) {
  if !enabled {
    return;
  }

  match std::env::var_os(CI_OUTPUT_ENV) {
    Some(path) => {
      let path = Path::new(&path);
      match append_package_path(path, package_folder) {
        Ok(()) => debug!(path = %path.display(), "exported package path"),
        Err(e) => warn!(error = %e, "failed to write CI output file"),
      }
    }
    None => debug!("{} not set; skipping CI export", CI_OUTPUT_ENV),
  }
}

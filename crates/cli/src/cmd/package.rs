//! Implementation of the `fhelpack package` command.
//!
//! The packaging stage standalone: collects already-built artifacts into
//! the package folder and optionally exports the path for CI.

use std::path::Path;

use anyhow::Result;
use fhel_core::ci::export_ci_metadata;
use fhel_core::package::{copy_artifacts, ARTIFACT_PATTERN};

use crate::output::{print_stat, print_success, print_warning};

/// Execute the package command
pub fn cmd_package(source_folder: &Path, package_folder: &Path, ci: bool) -> Result<()> {
  let copied = copy_artifacts(Some(source_folder), Some(package_folder), ARTIFACT_PATTERN)?;

  export_ci_metadata(package_folder, ci);

  if copied == 0 {
    print_warning("No artifacts matched the pattern; the package is empty");
  } else {
    print_success(&format!("Packaged {} artifact(s)", copied));
  }
  print_stat("Package folder", &package_folder.display().to_string());

  Ok(())
}

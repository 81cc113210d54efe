//! Implementation of the `fhelpack create` command.
//!
//! Runs the whole pipeline for the resolved target: version resolution,
//! toolchain generation, the external cmake build, artifact collection,
//! and the optional CI export.

use anyhow::Result;
use fhel_core::Recipe;
use tracing::debug;

use crate::output::{print_json, print_stat, print_success, print_warning};

/// Execute the create command and print a run summary
pub fn cmd_create(recipe: &Recipe, json: bool) -> Result<()> {
  debug!(target = %recipe.target, "running create pipeline");
  let summary = recipe.run()?;

  if json {
    print_json(&summary)?;
    return Ok(());
  }

  print_success(&format!("Packaged libfhel {}", summary.version));
  print_stat("Target label", &summary.label);
  print_stat("Artifacts", &summary.artifacts.to_string());
  print_stat("Package folder", &summary.package_folder.display().to_string());

  if summary.artifacts == 0 {
    print_warning("No artifacts matched the pattern; the package is empty");
  }

  Ok(())
}
